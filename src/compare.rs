//! Comparison pipeline
//!
//! Ties the stages together for one record: classify the two revisions,
//! decode whichever are present, extract the record's context, run the
//! tree diff, shape the output, and assemble the summary. Every stage is
//! pure and synchronous; comparisons for different source paths are
//! independent and may run in parallel with no coordination.

use tracing::debug;

use crate::checksum::Checksum;
use crate::classify::classify;
use crate::config::DiffConfig;
use crate::context::{extract_context, RecordContext};
use crate::decode::TreeDecoder;
use crate::diff::{diff_trees, ChangeRecord};
use crate::error::{DiffError, Result};
use crate::postprocess::post_process;
use crate::summary::DiffSummary;
use crate::tree::TreeNode;

/// One comparison: two optional raw revisions of a record, its source
/// path, and the caller-chosen revision labels
#[derive(Debug, Clone)]
pub struct CompareRequest<'a> {
    pub source_path: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub baseline: Option<&'a str>,
    pub target: Option<&'a str>,
}

/// Runs the comparison pipeline against a caller-supplied decoder
pub struct Comparator<'a> {
    decoder: &'a dyn TreeDecoder,
    config: DiffConfig,
}

impl<'a> Comparator<'a> {
    /// Create a comparator with default configuration
    pub fn new(decoder: &'a dyn TreeDecoder) -> Self {
        Self::with_config(decoder, DiffConfig::default())
    }

    /// Create a comparator with explicit configuration
    pub fn with_config(decoder: &'a dyn TreeDecoder, config: DiffConfig) -> Self {
        Self { decoder, config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare two revisions of one record and return its diff summary.
    ///
    /// Errors are fatal for this comparison only; a caller iterating a
    /// batch should catch them per item and continue.
    pub fn compare(&self, request: CompareRequest<'_>) -> Result<DiffSummary> {
        let state = classify(request.baseline, request.target, request.source_path)?;
        debug!(source_path = request.source_path, ?state, "classified revisions");

        let (context, changes) = match (state.whole_record_marker(), request.baseline, request.target)
        {
            // Whole-record creation or deletion: whichever revision is
            // present carries the context.
            (Some(marker), None, Some(raw)) | (Some(marker), Some(raw), None) => {
                let tree = self.decoder.decode(raw)?;
                let context = self.context(request.source_path, &tree)?;
                (context, vec![marker])
            }
            (_, Some(baseline_raw), Some(target_raw)) => {
                // Byte-identical revisions need no decode or diff.
                if Checksum::of(baseline_raw) == Checksum::of(target_raw) {
                    debug!(source_path = request.source_path, "revisions are identical");
                    let tree = self.decoder.decode(baseline_raw)?;
                    let context = self.context(request.source_path, &tree)?;
                    (context, Vec::new())
                } else {
                    let baseline = self.decoder.decode(baseline_raw)?;
                    let target = self.decoder.decode(target_raw)?;
                    // Context reads from the baseline when both exist.
                    let context = self.context(request.source_path, &baseline)?;

                    let records = self.diff_modified(&baseline, &target, &context.record_type);
                    (context, records)
                }
            }
            // classify already rejected the neither-present case.
            _ => {
                return Err(DiffError::MissingRevisions {
                    source_path: request.source_path.to_string(),
                })
            }
        };

        debug!(
            source_path = request.source_path,
            changes = changes.len(),
            "comparison complete"
        );
        Ok(DiffSummary::assemble(
            context,
            request.from,
            request.to,
            request.source_path,
            changes,
        ))
    }

    fn context(&self, source_path: &str, tree: &TreeNode) -> Result<RecordContext> {
        extract_context(source_path, tree, &self.config.context.identity_field)
    }

    fn diff_modified(
        &self,
        baseline: &TreeNode,
        target: &TreeNode,
        record_type: &str,
    ) -> Vec<ChangeRecord> {
        let raw = diff_trees(baseline, target);
        post_process(raw, record_type, &self.config.suppression.markers)
    }
}

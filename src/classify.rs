//! Revision classification
//!
//! Decides whether a comparison is a whole-record creation, a whole-record
//! deletion, or a genuine structural diff between two existing revisions.

use serde::{Deserialize, Serialize};

use crate::diff::{ChangeOp, ChangeRecord};
use crate::error::{DiffError, Result};

/// Outcome of comparing the presence of two revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionState {
    /// Baseline absent, target present
    Created,
    /// Baseline present, target absent
    Deleted,
    /// Both present; the tree diff engine decides what actually changed
    Modified,
}

impl RevisionState {
    /// The single synthetic change record for a whole-record creation or
    /// deletion. `Modified` carries field-level records instead.
    pub fn whole_record_marker(&self) -> Option<ChangeRecord> {
        match self {
            RevisionState::Created => Some(ChangeRecord::whole_record(ChangeOp::Add)),
            RevisionState::Deleted => Some(ChangeRecord::whole_record(ChangeOp::Remove)),
            RevisionState::Modified => None,
        }
    }
}

/// Classify a pair of optional revisions.
///
/// Neither revision being present is invalid input, not an empty diff.
/// Only presence matters, so unsized revision types (raw `str` documents
/// included) are accepted.
pub fn classify<T: ?Sized>(
    baseline: Option<&T>,
    target: Option<&T>,
    source_path: &str,
) -> Result<RevisionState> {
    match (baseline, target) {
        (None, Some(_)) => Ok(RevisionState::Created),
        (Some(_), None) => Ok(RevisionState::Deleted),
        (Some(_), Some(_)) => Ok(RevisionState::Modified),
        (None, None) => Err(DiffError::MissingRevisions {
            source_path: source_path.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_when_only_target_present() {
        let state = classify(None, Some(&"<xml/>"), "objects/Account/fields/X.xml").unwrap();
        assert_eq!(state, RevisionState::Created);

        let marker = state.whole_record_marker().unwrap();
        assert_eq!(marker.operation, ChangeOp::Add);
        assert_eq!(marker.path, "");
        assert!(marker.before.is_none());
        assert!(marker.after.is_none());
    }

    #[test]
    fn test_deleted_when_only_baseline_present() {
        let state = classify(Some(&"<xml/>"), None, "objects/Account/fields/X.xml").unwrap();
        assert_eq!(state, RevisionState::Deleted);

        let marker = state.whole_record_marker().unwrap();
        assert_eq!(marker.operation, ChangeOp::Remove);
        assert_eq!(marker.path, "");
    }

    #[test]
    fn test_modified_when_both_present() {
        let state = classify(Some(&"a"), Some(&"b"), "p").unwrap();
        assert_eq!(state, RevisionState::Modified);
        assert!(state.whole_record_marker().is_none());
    }

    #[test]
    fn test_accepts_unsized_revision_documents() {
        // Raw documents arrive as &str, so T is the unsized str.
        let baseline: Option<&str> = Some(r#"{"CustomField":{}}"#);
        let target: Option<&str> = Some(r#"{"CustomField":{"label":"X"}}"#);
        let state = classify(baseline, target, "objects/Account/fields/X.xml").unwrap();
        assert_eq!(state, RevisionState::Modified);
    }

    #[test]
    fn test_neither_present_is_invalid_input() {
        let err = classify::<&str>(None, None, "objects/Account/fields/X.xml").unwrap_err();
        assert!(matches!(err, DiffError::MissingRevisions { .. }));
    }
}

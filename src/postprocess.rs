//! Diff post-processing
//!
//! Two shaping steps run over the raw engine output before a summary is
//! assembled: path normalization (the record's root type name is stripped
//! from every path) and noise suppression (known-noisy substructures are
//! collapsed into a single stand-in entry per marker).

use serde::{Deserialize, Serialize};

use crate::diff::ChangeRecord;

/// A known-noisy substructure: any change whose path contains `pattern`
/// is suppressed and represented by one collapsed entry named `label`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseMarker {
    /// Substring matched against normalized change paths
    pub pattern: String,
    /// Path of the single collapsed entry emitted when the marker trips
    pub label: String,
}

impl NoiseMarker {
    pub fn new(pattern: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: label.into(),
        }
    }
}

/// The built-in markers: value-set definitions and picklist value lists
/// churn on every ordering tweak and drown out real changes
pub fn default_markers() -> Vec<NoiseMarker> {
    vec![
        NoiseMarker::new("valueSet", "valueSet"),
        NoiseMarker::new("picklistValues", "picklistValues"),
    ]
}

/// Normalize paths relative to the record root type and collapse noisy
/// substructures.
///
/// However many individual records a marker suppresses, at most one
/// collapsed entry per marker appears in the output, appended after the
/// kept records.
pub fn post_process(
    records: Vec<ChangeRecord>,
    root_type: &str,
    markers: &[NoiseMarker],
) -> Vec<ChangeRecord> {
    let prefix = format!("{}.", root_type);
    let mut kept = Vec::with_capacity(records.len());
    let mut tripped = vec![false; markers.len()];

    for mut record in records {
        if let Some(stripped) = record.path.strip_prefix(&prefix) {
            record.path = stripped.to_string();
        }

        match markers.iter().position(|m| record.path.contains(&m.pattern)) {
            Some(index) => tripped[index] = true,
            None => kept.push(record),
        }
    }

    for (marker, hit) in markers.iter().zip(tripped) {
        if hit {
            kept.push(ChangeRecord::collapsed(&marker.label));
        }
    }

    kept
}

//! Diff summary assembly
//!
//! Pure field composition: the classifier, extractor, and post-processor
//! have already done the work by the time a summary is built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::RecordContext;
use crate::diff::ChangeRecord;

/// The result of comparing two revisions of one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    /// Container the record belongs to, derived from the source path
    pub container_name: String,
    /// Record identity (the conventional full-name field), may be empty
    pub identity: String,
    /// Declared type of the record
    pub record_type: String,
    /// Caller-supplied label for the baseline revision
    pub from: String,
    /// Caller-supplied label for the target revision
    pub to: String,
    /// Originating location of the record
    pub source_path: String,
    /// When this comparison ran
    pub compared_at: DateTime<Utc>,
    /// Ordered, path-addressed changes
    pub changes: Vec<ChangeRecord>,
}

impl DiffSummary {
    /// Assemble a summary from the upstream stages' outputs
    pub fn assemble(
        context: RecordContext,
        from: impl Into<String>,
        to: impl Into<String>,
        source_path: impl Into<String>,
        changes: Vec<ChangeRecord>,
    ) -> Self {
        Self {
            container_name: context.container_name,
            identity: context.identity,
            record_type: context.record_type,
            from: from.into(),
            to: to.into(),
            source_path: source_path.into(),
            compared_at: Utc::now(),
            changes,
        }
    }

    /// Whether the comparison found no differences
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{ChangeOp, ChangeRecord};

    fn context() -> RecordContext {
        RecordContext {
            container_name: "Account".to_string(),
            record_type: "CustomField".to_string(),
            identity: "Status__c".to_string(),
        }
    }

    #[test]
    fn test_assembly_is_field_composition() {
        let changes = vec![ChangeRecord::whole_record(ChangeOp::Add)];
        let summary = DiffSummary::assemble(
            context(),
            "main",
            "feature",
            "objects/Account/fields/Status__c.xml",
            changes.clone(),
        );

        assert_eq!(summary.container_name, "Account");
        assert_eq!(summary.identity, "Status__c");
        assert_eq!(summary.record_type, "CustomField");
        assert_eq!(summary.from, "main");
        assert_eq!(summary.to, "feature");
        assert_eq!(summary.source_path, "objects/Account/fields/Status__c.xml");
        assert_eq!(summary.changes, changes);
        assert!(!summary.is_unchanged());
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let summary = DiffSummary::assemble(context(), "a", "b", "x/y/z", vec![]);
        let value = serde_json::to_value(&summary).unwrap();

        assert!(value.get("containerName").is_some());
        assert!(value.get("recordType").is_some());
        assert!(value.get("sourcePath").is_some());
        assert!(value.get("comparedAt").is_some());
        assert!(value.get("changes").unwrap().is_array());
    }
}

//! Record context extraction
//!
//! Derives the annotations a diff summary carries alongside its change
//! list: the container the record belongs to (from the originating source
//! path), the record's declared type (the single top-level field of the
//! decoded tree), and its identity.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, Result};
use crate::tree::TreeNode;

/// Default name of the identity field beneath the record root
pub const DEFAULT_IDENTITY_FIELD: &str = "fullName";

/// Domain context for one compared record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContext {
    /// Directory two levels above the source file, e.g. the object a
    /// field definition belongs to
    pub container_name: String,
    /// The single top-level field name of the decoded tree
    pub record_type: String,
    /// Value of the identity field under the root; empty when absent
    pub identity: String,
}

/// Extract the context for a record from its source path and decoded tree.
///
/// The container name is positional: the third-from-last `/`-separated
/// segment of the source path, per the fixed storage layout convention
/// `.../<container>/<kind>/<file>`. A shallower path is an error. A
/// missing identity field is tolerated and yields an empty string.
pub fn extract_context(
    source_path: &str,
    parsed: &TreeNode,
    identity_field: &str,
) -> Result<RecordContext> {
    let container_name = container_from_path(source_path)?;
    let (record_type, root_value) = root_field(parsed)?;

    let identity = root_value
        .get(identity_field)
        .and_then(TreeNode::as_scalar)
        .unwrap_or_default()
        .to_string();

    Ok(RecordContext {
        container_name,
        record_type: record_type.to_string(),
        identity,
    })
}

/// The third-from-last path segment names the container
fn container_from_path(source_path: &str) -> Result<String> {
    let segments: Vec<&str> = source_path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 3 {
        return Err(DiffError::PathTooShallow {
            path: source_path.to_string(),
        });
    }
    Ok(segments[segments.len() - 3].to_string())
}

/// The decoded tree root must be a mapping with exactly one field
pub(crate) fn root_field(parsed: &TreeNode) -> Result<(&str, &TreeNode)> {
    let entries = parsed
        .as_mapping()
        .ok_or(DiffError::RootShape { field_count: 0 })?;
    match entries.iter().next() {
        Some((name, value)) if entries.len() == 1 => Ok((name.as_str(), value)),
        _ => Err(DiffError::RootShape {
            field_count: entries.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_tree(identity: Option<&str>) -> TreeNode {
        let mut fields = vec![("label".to_string(), TreeNode::scalar("Status"))];
        if let Some(name) = identity {
            fields.insert(0, ("fullName".to_string(), TreeNode::scalar(name)));
        }
        TreeNode::mapping([("CustomField", TreeNode::mapping(fields))])
    }

    #[test]
    fn test_container_is_third_from_last_segment() {
        let ctx = extract_context(
            "objects/Account/fields/Status__c.field-meta.xml",
            &field_tree(Some("Status__c")),
            DEFAULT_IDENTITY_FIELD,
        )
        .unwrap();

        assert_eq!(ctx.container_name, "Account");
        assert_eq!(ctx.record_type, "CustomField");
        assert_eq!(ctx.identity, "Status__c");
    }

    #[test]
    fn test_shallow_path_is_an_error() {
        let err = extract_context(
            "fields/Status__c.xml",
            &field_tree(None),
            DEFAULT_IDENTITY_FIELD,
        )
        .unwrap_err();
        assert!(matches!(err, DiffError::PathTooShallow { .. }));
    }

    #[test]
    fn test_missing_identity_yields_empty_string() {
        let ctx = extract_context(
            "objects/Account/fields/X.xml",
            &field_tree(None),
            DEFAULT_IDENTITY_FIELD,
        )
        .unwrap();
        assert_eq!(ctx.identity, "");
    }

    #[test]
    fn test_multi_root_tree_is_a_decode_mismatch() {
        let tree = TreeNode::mapping([
            ("CustomField", TreeNode::mapping(Vec::<(String, TreeNode)>::new())),
            ("Extra", TreeNode::scalar("x")),
        ]);
        let err = extract_context("a/b/c", &tree, DEFAULT_IDENTITY_FIELD).unwrap_err();
        assert!(matches!(err, DiffError::RootShape { field_count: 2 }));
    }

    #[test]
    fn test_scalar_root_is_a_decode_mismatch() {
        let err =
            extract_context("a/b/c", &TreeNode::scalar("flat"), DEFAULT_IDENTITY_FIELD).unwrap_err();
        assert!(matches!(err, DiffError::RootShape { field_count: 0 }));
    }

    #[test]
    fn test_custom_identity_field() {
        let tree = TreeNode::mapping([(
            "Layout",
            TreeNode::mapping([("name", TreeNode::scalar("Account Layout"))]),
        )]);
        let ctx = extract_context("layouts/Account/detail/L.xml", &tree, "name").unwrap();
        assert_eq!(ctx.identity, "Account Layout");
    }
}

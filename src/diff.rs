//! Recursive structural diff between two record trees
//!
//! Produces a flat, path-qualified list of changes. Traversal order is
//! deterministic: baseline field/element order first, then target-only
//! entries in target order, so unchanged inputs always yield identical
//! output across runs.

use serde::{Deserialize, Serialize};

use crate::tree::TreeNode;

/// Kind of change at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Add,
    Edit,
    Remove,
}

/// One difference between the two revisions, addressed by a dot-separated
/// path relative to the tree root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub operation: ChangeOp,
    pub path: String,
    /// Value at this path in the baseline revision; absent for `Add`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<TreeNode>,
    /// Value at this path in the target revision; absent for `Remove`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<TreeNode>,
}

impl ChangeRecord {
    /// A field or element added in the target revision
    pub fn added(path: impl Into<String>, after: TreeNode) -> Self {
        Self {
            operation: ChangeOp::Add,
            path: path.into(),
            before: None,
            after: Some(after),
        }
    }

    /// A field or element removed from the baseline revision
    pub fn removed(path: impl Into<String>, before: TreeNode) -> Self {
        Self {
            operation: ChangeOp::Remove,
            path: path.into(),
            before: Some(before),
            after: None,
        }
    }

    /// A value edited in place
    pub fn edited(path: impl Into<String>, before: TreeNode, after: TreeNode) -> Self {
        Self {
            operation: ChangeOp::Edit,
            path: path.into(),
            before: Some(before),
            after: Some(after),
        }
    }

    /// A whole-record marker: creation or deletion of the entire record,
    /// with no field-level detail
    pub fn whole_record(operation: ChangeOp) -> Self {
        Self {
            operation,
            path: String::new(),
            before: None,
            after: None,
        }
    }

    /// A collapsed stand-in for a suppressed noisy substructure
    pub fn collapsed(label: impl Into<String>) -> Self {
        Self {
            operation: ChangeOp::Edit,
            path: label.into(),
            before: None,
            after: None,
        }
    }
}

/// Compare two record trees and return every difference as a flat,
/// independently addressable list.
pub fn diff_trees(baseline: &TreeNode, target: &TreeNode) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    walk("", baseline, target, &mut changes);
    changes
}

fn extend(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", path, segment)
    }
}

fn walk(path: &str, baseline: &TreeNode, target: &TreeNode, out: &mut Vec<ChangeRecord>) {
    match (baseline, target) {
        (TreeNode::Scalar(a), TreeNode::Scalar(b)) => {
            if a != b {
                out.push(ChangeRecord::edited(path, baseline.clone(), target.clone()));
            }
        }
        (TreeNode::Mapping(a), TreeNode::Mapping(b)) => {
            // Baseline field order first, then genuinely new target fields.
            for (field, base_child) in a {
                let child_path = extend(path, field);
                match b.get(field) {
                    Some(target_child) => walk(&child_path, base_child, target_child, out),
                    None => out.push(ChangeRecord::removed(child_path, base_child.clone())),
                }
            }
            for (field, target_child) in b {
                if !a.contains_key(field) {
                    out.push(ChangeRecord::added(extend(path, field), target_child.clone()));
                }
            }
        }
        (TreeNode::Sequence(a), TreeNode::Sequence(b)) => {
            // Positional alignment only; reordering shows up as pairs of
            // edits/adds/removes rather than moves.
            let shared = a.len().min(b.len());
            for index in 0..shared {
                walk(&extend(path, &index.to_string()), &a[index], &b[index], out);
            }
            for (index, item) in b.iter().enumerate().skip(shared) {
                out.push(ChangeRecord::added(
                    extend(path, &index.to_string()),
                    item.clone(),
                ));
            }
            for (index, item) in a.iter().enumerate().skip(shared) {
                out.push(ChangeRecord::removed(
                    extend(path, &index.to_string()),
                    item.clone(),
                ));
            }
        }
        // Shape mismatch: stop here and report the full sub-trees.
        (before, after) => {
            out.push(ChangeRecord::edited(path, before.clone(), after.clone()));
        }
    }
}

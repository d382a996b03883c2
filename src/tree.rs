//! Tree model for decoded metadata records
//!
//! Every record revision is decoded into a `TreeNode` before comparison.
//! A node has exactly one of three shapes: a scalar leaf, an ordered
//! mapping of named fields, or a positionally ordered sequence. The type
//! is structural, not declared, and nodes are immutable once built.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a decoded record tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// A leaf value
    Scalar(String),
    /// Positionally ordered children
    Sequence(Vec<TreeNode>),
    /// Named fields with unique keys; insertion order is preserved so
    /// traversal is deterministic across runs
    Mapping(IndexMap<String, TreeNode>),
}

impl TreeNode {
    /// Create a scalar leaf
    pub fn scalar(value: impl Into<String>) -> Self {
        TreeNode::Scalar(value.into())
    }

    /// Create a mapping from (name, node) pairs, preserving order
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, TreeNode)>,
        K: Into<String>,
    {
        TreeNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create a sequence from nodes
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = TreeNode>,
    {
        TreeNode::Sequence(items.into_iter().collect())
    }

    /// Get the scalar value, if this node is a leaf
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            TreeNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Get the mapping entries, if this node is a mapping
    pub fn as_mapping(&self) -> Option<&IndexMap<String, TreeNode>> {
        match self {
            TreeNode::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Get the sequence items, if this node is a sequence
    pub fn as_sequence(&self) -> Option<&[TreeNode]> {
        match self {
            TreeNode::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a direct child field of a mapping node
    pub fn get(&self, field: &str) -> Option<&TreeNode> {
        self.as_mapping().and_then(|m| m.get(field))
    }

    /// Whether this node is a scalar leaf
    pub fn is_scalar(&self) -> bool {
        matches!(self, TreeNode::Scalar(_))
    }
}

impl fmt::Display for TreeNode {
    /// Render scalars bare and composite nodes as compact JSON
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Scalar(s) => write!(f, "{}", s),
            other => {
                let rendered = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                write!(f, "{}", rendered)
            }
        }
    }
}

impl From<&str> for TreeNode {
    fn from(s: &str) -> Self {
        TreeNode::Scalar(s.to_string())
    }
}

impl From<String> for TreeNode {
    fn from(s: String) -> Self {
        TreeNode::Scalar(s)
    }
}

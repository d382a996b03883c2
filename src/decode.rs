//! Decoder collaborator seam
//!
//! Format-specific decoding stays outside the comparison core: callers
//! supply anything implementing [`TreeDecoder`]. The JSON-backed decoder
//! here is the reference implementation and doubles as the test harness
//! decoder.

use std::collections::HashSet;

use serde_json::Value;

use crate::config::DecodeConfig;
use crate::error::Result;
use crate::tree::TreeNode;

/// Turns one raw serialized document into a record tree
pub trait TreeDecoder {
    fn decode(&self, raw: &str) -> Result<TreeNode>;
}

/// Reference decoder over JSON documents.
///
/// Collection-typed fields have a cardinality problem: a serializer that
/// writes a single repeated element as a bare object makes one-vs-many
/// element counts look like shape changes to the diff engine. Fields
/// registered as always-sequence are normalized to a one-element
/// `Sequence` when they arrive as a single value, so only genuine type
/// edits surface as shape mismatches.
#[derive(Debug, Clone, Default)]
pub struct JsonTreeDecoder {
    sequence_fields: HashSet<String>,
}

impl JsonTreeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register field names that decode to a sequence regardless of
    /// instance count
    pub fn with_sequence_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sequence_fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a decoder from the `[decode]` configuration section
    pub fn from_config(config: &DecodeConfig) -> Self {
        Self::with_sequence_fields(config.sequence_fields.iter().cloned())
    }

    fn convert(&self, value: &Value) -> TreeNode {
        match value {
            Value::Null => TreeNode::Scalar(String::new()),
            Value::Bool(b) => TreeNode::Scalar(b.to_string()),
            Value::Number(n) => TreeNode::Scalar(n.to_string()),
            Value::String(s) => TreeNode::Scalar(s.clone()),
            Value::Array(items) => {
                TreeNode::Sequence(items.iter().map(|v| self.convert(v)).collect())
            }
            Value::Object(entries) => TreeNode::Mapping(
                entries
                    .iter()
                    .map(|(field, child)| (field.clone(), self.convert_field(field, child)))
                    .collect(),
            ),
        }
    }

    fn convert_field(&self, field: &str, value: &Value) -> TreeNode {
        let node = self.convert(value);
        if self.sequence_fields.contains(field) && !matches!(node, TreeNode::Sequence(_)) {
            TreeNode::Sequence(vec![node])
        } else {
            node
        }
    }
}

impl TreeDecoder for JsonTreeDecoder {
    fn decode(&self, raw: &str) -> Result<TreeNode> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(self.convert(&value))
    }
}

//! Metadata Record Diff Core
//!
//! Compares two revisions of a hierarchical metadata record and produces a
//! classified, path-addressed list of differences annotated with domain
//! context (record type, identity, source/target labels).
//!
//! ## Features
//!
//! - **Structural Diffing**: Recursive comparison over scalar/mapping/
//!   sequence trees with deterministic, path-qualified output
//! - **Revision Classification**: Whole-record creation and deletion are
//!   reported as single synthetic markers, not field-level noise
//! - **Noise Suppression**: Known-noisy substructures collapse into one
//!   summary entry per marker, configurable per deployment
//! - **Decoder Seam**: Format-specific decoding (XML, JSON, ...) stays
//!   outside the core behind the [`decode::TreeDecoder`] trait
//! - **Checksum Fast Path**: Byte-identical revisions skip decoding and
//!   diffing entirely
//!
//! ## Architecture
//!
//! ```text
//! raw revisions ──> classify ──┬──> whole-record marker
//!                              └──> decode ──> diff ──> post-process
//!                                      │                     │
//!                                   context ────────────> summary
//! ```
//!
//! Every stage is a pure, synchronous function over immutable inputs;
//! comparisons for different source paths are independent and may run
//! fully in parallel. Fetching revisions, rendering reports, and applying
//! changes belong to callers.

pub mod checksum;
pub mod classify;
pub mod compare;
pub mod config;
pub mod context;
pub mod decode;
pub mod diff;
pub mod error;
pub mod postprocess;
pub mod summary;
pub mod tree;

pub use checksum::Checksum;
pub use classify::{classify, RevisionState};
pub use compare::{Comparator, CompareRequest};
pub use config::DiffConfig;
pub use context::{extract_context, RecordContext};
pub use decode::{JsonTreeDecoder, TreeDecoder};
pub use diff::{diff_trees, ChangeOp, ChangeRecord};
pub use error::{DiffError, Result};
pub use postprocess::{default_markers, post_process, NoiseMarker};
pub use summary::DiffSummary;
pub use tree::TreeNode;

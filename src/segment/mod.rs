//! Clause segmentation for contract documents.
//!
//! Recovers an ordered (header, content) clause structure from unstructured
//! legal text using a union of heuristic marker matchers. The transform is
//! pure and infallible: when no structure is detected it degrades to a
//! single whole-document clause.

mod config;
mod engine;
mod marker;
mod types;

pub use config::create_contract_markers;
pub use engine::Segmenter;
pub use marker::{MarkerKind, MarkerSet, MarkerSpec};
pub use types::{Clause, SegmentConfig, Token};

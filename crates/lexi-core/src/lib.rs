//! # lexi-core
//!
//! Core types and word normalization for Lexi.
//!
//! This crate provides the foundational types shared across all Lexi crates:
//! - The `Word` domain entity with learning-period derivation
//! - Wire-format records and bulk-operation statistics
//! - The normalization function that gates every stored word
//! - Cross-cutting error types
//! - The aggregation model for cached dictionary payloads

pub mod dictionary;
pub mod errors;
pub mod normalize;
pub mod records;
pub mod word;

pub use dictionary::{Definition, Dictionary, Meaning};
pub use errors::CoreError;
pub use normalize::{MAX_WORD_CHARS, normalize};
pub use records::{Bucket, DeleteStatistics, SaveStatistics, Skipped, WordRecord};
pub use word::Word;

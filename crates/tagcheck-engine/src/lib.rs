//! tagcheck engine - comparison logic
//!
//! This crate implements the checks applied to every tagged struct field:
//! - Identifier normalization (WalterWhite -> walter_white)
//! - Anagram detection for transposition typos
//! - Pairwise consistency classification
//! - Per-field auditing across all tag schemes

pub mod normalize;
pub mod anagram;
pub mod consistency;
pub mod field_audit;

pub use normalize::normalize;
pub use anagram::is_anagram;
pub use consistency::{Comparison, ConsistencyTester};
pub use field_audit::FieldAuditor;

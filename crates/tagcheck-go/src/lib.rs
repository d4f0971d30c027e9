//! Go source parsing and struct tag extraction
//!
//! This crate handles:
//! - Parsing Go source with the tree-sitter Go grammar
//! - Extracting top-level struct declarations and their field tags
//! - Splitting struct tags into scheme/value entries

mod literal;
pub mod parser;
pub mod tag;

pub use parser::{GoParser, ParsedFile, ParseError, StructDecl, StructField};
pub use tag::parse_tag;

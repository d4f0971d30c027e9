//! Field declarations as handed over by the source parser

use crate::diagnostic::{Location, TagRef};

/// One `scheme:"value"` segment of a struct tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagEntry {
    /// Text before the colon (`json`, `bson`, ...)
    pub scheme: String,

    /// Quoted text with any `,modifier` suffix removed
    pub value: String,

    /// Position within the field's tag
    pub index: usize,
}

impl TagEntry {
    pub fn new(scheme: impl Into<String>, value: impl Into<String>, index: usize) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
            index,
        }
    }

    /// Reference used when reporting this entry
    pub fn to_ref(&self) -> TagRef {
        TagRef::new(self.scheme.clone(), self.value.clone())
    }
}

/// A struct field together with its parsed tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Identifiers bound by the declaration (`A, B string` binds two)
    pub identifiers: Vec<String>,

    /// Position of the first identifier
    pub location: Location,

    /// Tag entries in declaration order
    pub tags: Vec<TagEntry>,
}

impl FieldDeclaration {
    /// Create a declaration binding a single identifier
    pub fn new(identifier: impl Into<String>, location: Location, tags: Vec<TagEntry>) -> Self {
        Self {
            identifiers: vec![identifier.into()],
            location,
            tags,
        }
    }

    /// Create a grouped declaration binding several identifiers
    pub fn grouped(identifiers: Vec<String>, location: Location, tags: Vec<TagEntry>) -> Self {
        Self {
            identifiers,
            location,
            tags,
        }
    }

    /// The identifier, if the declaration binds exactly one
    pub fn identifier(&self) -> Option<&str> {
        match self.identifiers.as_slice() {
            [single] => Some(single.as_str()),
            _ => None,
        }
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

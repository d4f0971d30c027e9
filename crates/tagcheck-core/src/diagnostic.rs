//! Diagnostic kinds and finding records

use std::fmt;

/// What kind of inconsistency a finding reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// Declared tag value differs from the (normalized) field identifier
    Mismatch,

    /// Same letters in a different order, most likely a transposition typo
    Anagram,

    /// Tag value differs from the name declared by the field's first scheme
    UnexpectedName,
}

impl DiagnosticKind {
    /// Upper-case code for the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mismatch => "MISMATCH",
            Self::Anagram => "ANAGRAM",
            Self::UnexpectedName => "UNEXPECTED_NAME",
        }
    }

    /// Short verb used in the tabular output
    fn verb(&self) -> &'static str {
        match self {
            Self::Mismatch | Self::UnexpectedName => "mismatch",
            Self::Anagram => "anagram",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source location of a field declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// File path as given on the command line
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,
}

impl Location {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A `scheme:"value"` pair implicated in a finding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagRef {
    pub scheme: String,
    pub value: String,
}

impl TagRef {
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for TagRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.scheme, self.value)
    }
}

/// A single finding for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable diagnostic kind
    pub kind: DiagnosticKind,

    /// Where the field is declared
    pub location: Location,

    /// Field identifier as written in the source
    pub field: String,

    /// The tag pair being checked
    pub tag: TagRef,

    /// The first-declared tag pair, for cross-scheme findings only
    pub reference: Option<TagRef>,

    /// Left-hand side as compared (after normalization)
    pub expected: Option<String>,

    /// Right-hand side as compared (after normalization)
    pub actual: Option<String>,
}

impl Diagnostic {
    /// Finding from comparing a field identifier with one of its tag values
    pub fn field_name(
        kind: DiagnosticKind,
        location: Location,
        field: impl Into<String>,
        tag: TagRef,
    ) -> Self {
        Self {
            kind,
            location,
            field: field.into(),
            tag,
            reference: None,
            expected: None,
            actual: None,
        }
    }

    /// Finding from comparing a later tag value with the first one on the field
    pub fn tag_name(
        kind: DiagnosticKind,
        location: Location,
        field: impl Into<String>,
        reference: TagRef,
        tag: TagRef,
    ) -> Self {
        Self {
            kind,
            location,
            field: field.into(),
            tag,
            reference: Some(reference),
            expected: None,
            actual: None,
        }
    }

    /// Set expected/actual values
    pub fn with_comparison(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }

    /// True for findings produced by the cross-scheme pass
    pub fn is_cross_scheme(&self) -> bool {
        self.reference.is_some()
    }

    /// Human-readable label, e.g. "Field name anagram"
    pub fn label(&self) -> String {
        let subject = if self.is_cross_scheme() { "Tag name" } else { "Field name" };
        format!("{} {}", subject, self.kind.verb())
    }
}

/// Tab-separated output line: location, label, subject, tag
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t", self.location, self.label())?;
        match &self.reference {
            Some(reference) => write!(f, "{}\t{}", reference, self.tag),
            None => write!(f, "{:?}\t{}", self.field, self.tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_kind_stability() {
        // Ensure codes are stable strings
        assert_eq!(DiagnosticKind::Mismatch.as_str(), "MISMATCH");
        assert_eq!(DiagnosticKind::Anagram.as_str(), "ANAGRAM");
        assert_eq!(DiagnosticKind::UnexpectedName.as_str(), "UNEXPECTED_NAME");
    }

    #[test]
    fn tag_ref_quotes_value() {
        assert_eq!(TagRef::new("json", "name").to_string(), r#"json:"name""#);
        assert_eq!(TagRef::new("xml", r#"a"b"#).to_string(), r#"xml:"a\"b""#);
    }

    #[test]
    fn field_name_line() {
        let diag = Diagnostic::field_name(
            DiagnosticKind::Anagram,
            Location::new("dog.go", 19),
            "Height",
            TagRef::new("json", "hieght"),
        );

        assert!(!diag.is_cross_scheme());
        assert_eq!(diag.to_string(), "dog.go:19\tField name anagram\t\"Height\"\tjson:\"hieght\"");
    }

    #[test]
    fn tag_name_line() {
        let diag = Diagnostic::tag_name(
            DiagnosticKind::UnexpectedName,
            Location::new("dog.go", 18),
            "Name",
            TagRef::new("json", "name"),
            TagRef::new("bson", "title"),
        )
        .with_comparison("name", "title");

        assert!(diag.is_cross_scheme());
        assert_eq!(diag.label(), "Tag name mismatch");
        assert_eq!(diag.to_string(), "dog.go:18\tTag name mismatch\tjson:\"name\"\tbson:\"title\"");
        assert_eq!(diag.expected.as_deref(), Some("name"));
    }
}

//! Struct declaration extraction from Go source
//!
//! Source is parsed with the tree-sitter Go grammar. A tree containing any
//! error or missing node is rejected as a whole, then only top-level `type`
//! declarations are walked for struct fields.

use crate::literal::unquote;
use crate::tag::parse_tag;
use std::path::Path;
use tagcheck_core::{FieldDeclaration, Location};
use tree_sitter::{Node, Parser};

/// Top-level node kinds allowed in a Go source file
const TOP_LEVEL_DECLARATIONS: &[&str] = &[
    "package_clause",
    "import_declaration",
    "const_declaration",
    "var_declaration",
    "type_declaration",
    "function_declaration",
    "method_declaration",
    "comment",
];

/// Go source parser
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParser;

impl GoParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse Go source text.
    ///
    /// `file` is only used for locations and error messages.
    pub fn parse(&self, src: &str, file: &str) -> Result<ParsedFile, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| ParseError::Grammar(e.to_string()))?;

        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseError::Grammar("parser produced no tree".to_string()))?;

        let walker = Walker { file, src };
        let root = tree.root_node();
        walker.check_syntax(root)?;

        let package = walker.package(root)?;
        let structs = walker.structs(root)?;

        tracing::debug!(file, package = %package, structs = structs.len(), "parsed source file");

        Ok(ParsedFile {
            file: file.to_string(),
            package,
            structs,
        })
    }

    /// Parse Go source from a file
    pub fn parse_file(&self, path: &Path) -> Result<ParsedFile, ParseError> {
        let file = path.display().to_string();
        let src = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
            file: file.clone(),
            message: e.to_string(),
        })?;

        self.parse(&src, &file)
    }
}

/// Result of parsing one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    /// Path the source was read from
    pub file: String,

    /// Package clause name
    pub package: String,

    /// Top-level struct types in declaration order
    pub structs: Vec<StructDecl>,
}

impl ParsedFile {
    /// Fields with at least one readable tag entry, in declaration order
    pub fn field_declarations(&self) -> Vec<FieldDeclaration> {
        self.structs
            .iter()
            .flat_map(|s| s.fields.iter())
            .filter_map(|field| {
                let tag = field.tag.as_deref()?;
                Some(FieldDeclaration::grouped(
                    field.names.clone(),
                    Location::new(self.file.clone(), field.line),
                    parse_tag(tag),
                ))
            })
            .filter(FieldDeclaration::has_tags)
            .collect()
    }
}

/// A top-level `type Name struct { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    pub line: usize,
    pub fields: Vec<StructField>,
}

/// One field declaration inside a struct body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// Declared names; empty for an embedded field
    pub names: Vec<String>,

    /// Line the declaration starts on
    pub line: usize,

    /// Decoded tag literal
    pub tag: Option<String>,
}

/// Go source parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The file could not be read
    #[error("{file}: failed to read file: {message}")]
    Io { file: String, message: String },

    /// Source that is not valid Go
    #[error("{file}:{line}:{column}: {message}")]
    Syntax {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Go grammar unavailable: {0}")]
    Grammar(String),
}

impl ParseError {
    /// `(line, column)` of a syntax error
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

struct Walker<'a> {
    file: &'a str,
    src: &'a str,
}

impl<'a> Walker<'a> {
    fn text(&self, node: Node<'_>) -> &'a str {
        &self.src[node.byte_range()]
    }

    fn error_at(&self, node: Node<'_>, message: impl Into<String>) -> ParseError {
        let start = node.start_position();
        ParseError::Syntax {
            file: self.file.to_string(),
            line: start.row + 1,
            column: start.column + 1,
            message: message.into(),
        }
    }

    /// Reject the file on the first error node, then on anything the
    /// grammar accepts at top level that Go does not
    fn check_syntax(&self, root: Node<'_>) -> Result<(), ParseError> {
        if let Some(node) = first_error(root) {
            let message = if node.is_missing() {
                format!("syntax error: missing {}", node.kind())
            } else {
                let snippet = self.text(node).lines().next().unwrap_or_default().trim();
                if snippet.is_empty() {
                    "syntax error: unexpected end of input".to_string()
                } else {
                    format!("syntax error: unexpected {}", truncate(snippet, 24))
                }
            };
            return Err(self.error_at(node, message));
        }

        let mut cursor = root.walk();
        let stray = root
            .named_children(&mut cursor)
            .find(|node| !TOP_LEVEL_DECLARATIONS.contains(&node.kind()));
        match stray {
            Some(node) => Err(self.error_at(node, "non-declaration statement outside function body")),
            None => Ok(()),
        }
    }

    fn package(&self, root: Node<'_>) -> Result<String, ParseError> {
        let mut cursor = root.walk();
        let first = root.named_children(&mut cursor).find(|node| node.kind() != "comment");

        let clause = match first {
            Some(node) if node.kind() == "package_clause" => node,
            Some(node) => return Err(self.error_at(node, "expected 'package' clause")),
            None => return Err(self.error_at(root, "expected 'package' clause")),
        };

        let mut cursor = clause.walk();
        let name = clause
            .named_children(&mut cursor)
            .find(|node| node.kind() == "package_identifier")
            .map(|node| self.text(node).to_string());
        name.ok_or_else(|| self.error_at(clause, "expected package name"))
    }

    fn structs(&self, root: Node<'_>) -> Result<Vec<StructDecl>, ParseError> {
        let mut structs = Vec::new();

        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            if decl.kind() != "type_declaration" {
                continue;
            }

            let mut specs = decl.walk();
            for spec in decl.named_children(&mut specs) {
                if !matches!(spec.kind(), "type_spec" | "type_alias") {
                    continue;
                }
                let (Some(name), Some(ty)) = (
                    spec.child_by_field_name("name"),
                    spec.child_by_field_name("type"),
                ) else {
                    continue;
                };
                if ty.kind() != "struct_type" {
                    continue;
                }

                structs.push(StructDecl {
                    name: self.text(name).to_string(),
                    line: name.start_position().row + 1,
                    fields: self.fields(ty)?,
                });
            }
        }

        Ok(structs)
    }

    fn fields(&self, struct_type: Node<'_>) -> Result<Vec<StructField>, ParseError> {
        let mut cursor = struct_type.walk();
        let Some(list) = struct_type
            .named_children(&mut cursor)
            .find(|node| node.kind() == "field_declaration_list")
        else {
            return Ok(Vec::new());
        };

        let mut fields = Vec::new();
        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            if decl.kind() != "field_declaration" {
                continue;
            }

            let mut names_cursor = decl.walk();
            let names = decl
                .children_by_field_name("name", &mut names_cursor)
                .map(|node| self.text(node).to_string())
                .collect();

            let tag = match decl.child_by_field_name("tag") {
                Some(node) => Some(unquote(self.text(node)).map_err(|e| self.error_at(node, e))?),
                None => None,
            };

            fields.push(StructField {
                names,
                line: decl.start_position().row + 1,
                tag,
            });
        }

        Ok(fields)
    }
}

/// First error or missing node in document order
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

//! Per-field audit
//!
//! Runs the identifier-vs-value pass over every tag entry of a field and,
//! when enabled, the cross-scheme pass comparing later entries with the first.

use crate::consistency::{Comparison, ConsistencyTester};
use tagcheck_core::{CheckConfig, Diagnostic, DiagnosticKind, FieldDeclaration, TagEntry};

/// Audits tagged struct fields
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldAuditor {
    tester: ConsistencyTester,
    cross_check: bool,
}

impl FieldAuditor {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            tester: ConsistencyTester::from_config(config),
            cross_check: config.all_tags_match,
        }
    }

    /// Audit one field declaration.
    ///
    /// Declarations binding more than one identifier are skipped: a single tag
    /// cannot belong to several names. Findings come out identifier pass first,
    /// then cross-scheme pass, each in tag order.
    pub fn audit(&self, field: &FieldDeclaration) -> Vec<Diagnostic> {
        let Some(identifier) = field.identifier() else {
            tracing::debug!(
                location = %field.location,
                identifiers = ?field.identifiers,
                "skipping grouped field declaration"
            );
            return Vec::new();
        };

        let mut diagnostics = Vec::new();

        for entry in &field.tags {
            let comparison = self.tester.compare(identifier, &entry.value);
            if let Some(diag) = field_name_finding(field, identifier, entry, comparison) {
                diagnostics.push(diag);
            }
        }

        if self.cross_check {
            if let Some((first, rest)) = field.tags.split_first() {
                for entry in rest {
                    let comparison = self.tester.compare(&first.value, &entry.value);
                    if let Some(diag) = tag_name_finding(field, identifier, first, entry, comparison) {
                        diagnostics.push(diag);
                    }
                }
            }
        }

        diagnostics
    }
}

fn field_name_finding(
    field: &FieldDeclaration,
    identifier: &str,
    entry: &TagEntry,
    comparison: Comparison,
) -> Option<Diagnostic> {
    let (kind, left, right) = match comparison {
        Comparison::Match => return None,
        Comparison::Mismatch { left, right } => (DiagnosticKind::Mismatch, left, right),
        Comparison::Anagram { left, right } => (DiagnosticKind::Anagram, left, right),
    };

    Some(
        Diagnostic::field_name(kind, field.location.clone(), identifier, entry.to_ref())
            .with_comparison(left, right),
    )
}

fn tag_name_finding(
    field: &FieldDeclaration,
    identifier: &str,
    first: &TagEntry,
    entry: &TagEntry,
    comparison: Comparison,
) -> Option<Diagnostic> {
    let (kind, left, right) = match comparison {
        Comparison::Match => return None,
        Comparison::Mismatch { left, right } => (DiagnosticKind::UnexpectedName, left, right),
        Comparison::Anagram { left, right } => (DiagnosticKind::Anagram, left, right),
    };

    Some(
        Diagnostic::tag_name(
            kind,
            field.location.clone(),
            identifier,
            first.to_ref(),
            entry.to_ref(),
        )
        .with_comparison(left, right),
    )
}

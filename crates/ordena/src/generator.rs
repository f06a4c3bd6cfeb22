//! Statement regeneration
//!
//! Renders one import record back into a single-line statement, re-sorting
//! named bindings through the shared comparator and re-attaching
//! per-identifier type markers. The quote character mirrors each
//! statement's original text; nothing here normalizes style across a file.

use anyhow::{Result, bail};

use crate::binding_order;
use crate::types::{Binding, ImportKind, ImportRecord};

/// Quote character preference detected from a statement's original text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    fn ch(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Render `record` as one syntactically valid import statement
///
/// Namespace and default records with no bound name are a bug in whatever
/// produced the record, never valid user input, and fail loudly.
pub fn generate(record: &ImportRecord, quote: QuoteStyle) -> Result<String> {
    let q = quote.ch();
    let ty = if record.type_only { "type " } else { "" };
    let source = &record.source;

    let statement = match record.kind {
        ImportKind::SideEffect => format!("import {ty}{q}{source}{q};"),
        ImportKind::Namespace => {
            let Some(binding) = record.bindings.first() else {
                bail!("namespace import of {source:?} has no bound name");
            };
            format!("import {ty}* as {} from {q}{source}{q};", binding.imported)
        }
        ImportKind::Default => {
            let Some(default) = record.bindings.first() else {
                bail!("default import of {source:?} has no bound name");
            };
            let named = &record.bindings[1..];
            if named.is_empty() {
                format!("import {ty}{} from {q}{source}{q};", default.imported)
            } else {
                format!(
                    "import {ty}{}, {} from {q}{source}{q};",
                    default.imported,
                    render_named(named, record.type_only),
                )
            }
        }
        ImportKind::Named => format!(
            "import {ty}{} from {q}{source}{q};",
            render_named(&record.bindings, record.type_only),
        ),
    };

    Ok(statement)
}

/// Render a sorted, brace-wrapped named-binding list
fn render_named(bindings: &[Binding], statement_type_only: bool) -> String {
    if bindings.is_empty() {
        return "{}".to_string();
    }
    let sorted = binding_order::sort_bindings(bindings);
    let rendered: Vec<String> = sorted
        .iter()
        .map(|binding| render_binding(binding, statement_type_only))
        .collect();
    format!("{{ {} }}", rendered.join(", "))
}

/// Render one named binding
///
/// The per-binding `type` marker is suppressed when the statement-level
/// marker already covers it: `import type { type X }` is not valid syntax,
/// so the statement prefix wins.
fn render_binding(binding: &Binding, statement_type_only: bool) -> String {
    let mut out = String::new();
    if binding.type_only && !statement_type_only {
        out.push_str("type ");
    }
    out.push_str(&binding.imported);
    if let Some(local) = &binding.local {
        out.push_str(" as ");
        out.push_str(local);
    }
    out
}

#[cfg(test)]
mod tests;

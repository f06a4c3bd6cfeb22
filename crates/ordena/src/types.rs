//! Shared type definitions for the ordena crate
//!
//! This module contains the record types that flow through the pipeline,
//! ensuring consistency across the extractor, comparator, generator, and
//! reconciler without circular dependencies.

use rustc_hash::FxBuildHasher;

/// An `IndexMap` using the fast `FxHasher`
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Byte range of one statement within a source unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Syntactic form of an import statement
///
/// The variants are mutually exclusive; a `Default` record with more than
/// one binding is the hybrid default-plus-named form, where the first
/// binding is the default one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `import 'x';`
    SideEffect,
    /// `import * as ns from 'x';`
    Namespace,
    /// `import def from 'x';`, possibly with a trailing named list
    Default,
    /// `import { a, b } from 'x';`
    Named,
}

impl ImportKind {
    /// Ordering priority within one group and depth tier
    pub fn priority(self) -> u8 {
        match self {
            Self::SideEffect => 0,
            Self::Namespace => 1,
            Self::Default => 2,
            Self::Named => 3,
        }
    }
}

/// One name bound by an import statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The exported name being imported
    pub imported: String,
    /// Local alias, present only when it differs from the imported name
    pub local: Option<String>,
    /// Per-binding type marker, independent of the statement-level one
    pub type_only: bool,
}

impl Binding {
    /// A plain binding with no alias and no type marker
    pub fn plain(imported: impl Into<String>) -> Self {
        Self {
            imported: imported.into(),
            local: None,
            type_only: false,
        }
    }

    /// A binding renamed locally, `imported as local`
    pub fn aliased(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            imported: imported.into(),
            local: Some(local.into()),
            type_only: false,
        }
    }

    /// A binding carrying its own `type` marker
    pub fn type_marked(imported: impl Into<String>) -> Self {
        Self {
            imported: imported.into(),
            local: None,
            type_only: true,
        }
    }
}

/// One parsed import statement
///
/// Records are constructed once per declaration per reconciliation pass and
/// never mutated afterwards; sorting produces new orderings of references,
/// not in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// Raw module specifier, never resolved or normalized
    pub source: String,
    pub kind: ImportKind,
    /// Bound names in statement order; empty for side-effect imports
    pub bindings: Vec<Binding>,
    /// Whole-statement type marker; suppresses per-binding markers on
    /// regeneration
    pub type_only: bool,
    /// Exact original statement text, used for format-preference detection
    pub original_text: String,
    /// Position of the statement within the source unit
    pub span: Span,
}

impl ImportRecord {
    /// The bindings subject to name ordering: the full list for named
    /// imports, the named tail for the hybrid default form
    pub fn sortable_bindings(&self) -> &[Binding] {
        match self.kind {
            ImportKind::Named => &self.bindings,
            ImportKind::Default if self.bindings.len() > 1 => &self.bindings[1..],
            _ => &[],
        }
    }

    /// Canonical signature of source, kind, and bindings
    ///
    /// Every formatting lookup keys on this one function so the key used to
    /// store a statement's preferences always matches the key used to
    /// retrieve them after the sort moves it.
    pub fn signature(&self) -> String {
        let mut sig = format!("{:?}|{}|{}", self.kind, self.type_only, self.source);
        for binding in &self.bindings {
            sig.push('|');
            sig.push_str(&binding.imported);
            if binding.type_only {
                sig.push_str("#t");
            }
            if let Some(local) = &binding.local {
                sig.push('>');
                sig.push_str(local);
            }
        }
        sig
    }
}

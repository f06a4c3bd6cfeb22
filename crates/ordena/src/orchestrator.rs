//! Per-unit and per-file driving
//!
//! Ties the scanner, extractor, and reconciler together: one pass over a
//! source unit yields zero or more block replacements, applied farthest
//! first so earlier offsets stay valid. The file-level entry points wrap
//! the same pass in filesystem I/O for the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::extractor;
use crate::reconciler::{self, Replacement};
use crate::scanner;

/// Outcome of organizing one in-memory source unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    /// Whether any block needed reordering
    pub changed: bool,
    /// The unit with all replacements applied; equals the input when
    /// nothing changed
    pub output: String,
    /// The raw replacement directives, for hosts that splice themselves
    pub replacements: Vec<Replacement>,
}

/// Run the full pipeline over one source unit
pub fn organize_source(source: &str) -> Result<SourceOutcome> {
    let blocks = scanner::scan_blocks(source)?;
    debug!("found {} import block(s)", blocks.len());

    let mut replacements = Vec::new();
    for block in &blocks {
        let records = block
            .statements
            .iter()
            .map(|span| extractor::extract(source, *span))
            .collect::<Result<Vec<_>>>()?;
        if let Some(replacement) = reconciler::reconcile(&records, source)? {
            replacements.push(replacement);
        }
    }

    let changed = !replacements.is_empty();
    let output = if changed {
        reconciler::apply_replacements(source, &replacements)
    } else {
        source.to_string()
    };
    Ok(SourceOutcome {
        changed,
        output,
        replacements,
    })
}

/// Check one file without touching it; true when it needs reordering
pub fn check_file(path: &Path) -> Result<bool> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let outcome = organize_source(&source)
        .with_context(|| format!("failed to organize {}", path.display()))?;
    Ok(outcome.changed)
}

/// Rewrite one file in place when its imports need reordering; true when a
/// rewrite happened
pub fn fix_file(path: &Path) -> Result<bool> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let outcome = organize_source(&source)
        .with_context(|| format!("failed to organize {}", path.display()))?;
    if outcome.changed {
        fs::write(path, &outcome.output)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("reordered imports in {}", path.display());
    }
    Ok(outcome.changed)
}

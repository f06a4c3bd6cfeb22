//! Import block scanning
//!
//! Host-side lexical pass that locates contiguous runs of import statements
//! in a source unit. Only statement boundaries are decided here; statement
//! internals belong to the extractor. Blank lines keep a block open; any
//! other content, comment lines included, closes it so a rewrite can never
//! swallow text the pipeline does not understand.

use anyhow::{Result, bail};

use crate::types::Span;

/// One contiguous run of import statements, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBlock {
    pub statements: Vec<Span>,
}

/// Scan a source unit for import blocks
pub fn scan_blocks(source: &str) -> Result<Vec<ImportBlock>> {
    let mut blocks = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let line_end = source[pos..]
            .find('\n')
            .map_or(source.len(), |idx| pos + idx);
        let rest = &source[pos..line_end];
        let trimmed = rest.trim_start();

        if trimmed.is_empty() {
            pos = line_end + 1;
            continue;
        }

        if is_import_start(trimmed) {
            let statement_start = pos + (rest.len() - trimmed.len());
            let statement_end = statement_end(source, statement_start)?;
            current.push(Span::new(statement_start, statement_end));
            // Re-enter the loop on whatever follows the statement, which
            // may be the remainder of its final line.
            pos = statement_end;
            continue;
        }

        if !current.is_empty() {
            blocks.push(ImportBlock {
                statements: std::mem::take(&mut current),
            });
        }
        pos = line_end + 1;
    }

    if !current.is_empty() {
        blocks.push(ImportBlock {
            statements: current,
        });
    }
    Ok(blocks)
}

/// Whether a trimmed line begins an import statement
///
/// Rules out `import(...)` dynamic imports, `import.meta`, and identifiers
/// that merely start with the word.
fn is_import_start(trimmed: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix("import") else {
        return false;
    };
    match rest.chars().next() {
        // A clause can continue on the next line.
        None => true,
        Some(c) => !(c == '(' || c == '.' || c == '_' || c == '$' || c.is_alphanumeric()),
    }
}

/// Find the exclusive end offset of the import statement starting at
/// `start`
///
/// The statement ends at the first `;` outside a string literal. Without a
/// semicolon it ends right after the module-specifier string (the first
/// string literal closed outside braces) once anything other than
/// whitespace or `;` follows.
fn statement_end(source: &str, start: usize) -> Result<usize> {
    let mut string_delim: Option<char> = None;
    let mut escaped = false;
    let mut brace_depth = 0usize;
    let mut after_specifier: Option<usize> = None;

    for (offset, ch) in source[start..].char_indices() {
        let idx = start + offset;

        if let Some(delim) = string_delim {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == delim {
                string_delim = None;
                if brace_depth == 0 {
                    after_specifier = Some(idx + ch.len_utf8());
                }
            }
            continue;
        }

        match ch {
            ';' => return Ok(idx + 1),
            '\n' => {
                if let Some(end) = after_specifier {
                    return Ok(end);
                }
            }
            '\'' | '"' => string_delim = Some(ch),
            '{' => brace_depth += 1,
            '}' => brace_depth = brace_depth.saturating_sub(1),
            other => {
                if !other.is_whitespace()
                    && let Some(end) = after_specifier
                {
                    return Ok(end);
                }
            }
        }
    }

    if string_delim.is_some() {
        bail!("unterminated string literal in import statement at byte {start}");
    }
    match after_specifier {
        Some(end) => Ok(end),
        None => bail!("unterminated import statement at byte {start}"),
    }
}

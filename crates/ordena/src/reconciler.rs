//! Block reconciliation
//!
//! Decides whether a contiguous import block already matches the computed
//! order and spacing, and when it does not, regenerates the whole block as
//! a single range replacement. This is the only component that looks at
//! positions and surrounding whitespace; everything it delegates to is a
//! pure function of the records.

use anyhow::{Result, ensure};
use log::debug;

use crate::binding_order;
use crate::classifier;
use crate::extractor::{self, StatementFormat};
use crate::generator;
use crate::ordering;
use crate::types::{FxIndexMap, ImportRecord};

/// One range-replacement directive for the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Reconcile one contiguous block of records against the computed order
///
/// `records` must be in source order. Returns `None` when the block already
/// matches, so the transformer can never rewrite its own output, and
/// otherwise a single replacement covering the block from the first
/// statement's line to the last statement's end.
pub fn reconcile(records: &[ImportRecord], source: &str) -> Result<Option<Replacement>> {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Ok(None);
    };
    for record in records {
        ensure!(
            record.span.start <= record.span.end && record.span.end <= source.len(),
            "record for {:?} carries a span outside the source unit",
            record.source,
        );
    }

    let mut expected: Vec<&ImportRecord> = records.iter().collect();
    expected.sort_by(|a, b| ordering::compare_records(a, b));

    if !needs_fix(records, &expected, source) {
        debug!(
            "import block of {} statement(s) already in canonical order",
            records.len()
        );
        return Ok(None);
    }

    let formats: FxIndexMap<String, StatementFormat> = records
        .iter()
        .map(|record| {
            (
                record.signature(),
                extractor::detect_format(source, record.span),
            )
        })
        .collect();

    let text = render_block(&expected, &formats)?;
    Ok(Some(Replacement {
        start: line_start(source, first.span.start),
        end: line_end(source, last.span.end),
        text,
    }))
}

/// Apply replacements to a source unit, farthest first so earlier offsets
/// stay valid
pub fn apply_replacements(source: &str, replacements: &[Replacement]) -> String {
    let mut ordered: Vec<&Replacement> = replacements.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    let mut output = source.to_string();
    for replacement in ordered {
        output.replace_range(replacement.start..replacement.end, &replacement.text);
    }
    output
}

fn needs_fix(records: &[ImportRecord], expected: &[&ImportRecord], source: &str) -> bool {
    if let Some(record) = records
        .iter()
        .find(|record| !binding_order::bindings_sorted(record.sortable_bindings()))
    {
        debug!("bindings of {:?} are not in canonical order", record.source);
        return true;
    }

    for pair in records.windows(2) {
        let rank_a = classifier::classify(&pair[0].source).rank();
        let rank_b = classifier::classify(&pair[1].source).rank();
        if rank_a != rank_b && !has_blank_line(&source[pair[0].span.end..pair[1].span.start]) {
            debug!(
                "missing blank line between {:?} and {:?}",
                pair[0].source, pair[1].source
            );
            return true;
        }
    }

    records.len() != expected.len()
        || records
            .iter()
            .zip(expected)
            .any(|(actual, want)| !same_position(actual, want))
}

/// Positional equality for the idempotence walk: source, kind, and each
/// binding's name and type marker. Aliases do not participate, matching
/// the ordering itself.
fn same_position(a: &ImportRecord, b: &ImportRecord) -> bool {
    a.source == b.source
        && a.kind == b.kind
        && a.bindings.len() == b.bindings.len()
        && a
            .bindings
            .iter()
            .zip(&b.bindings)
            .all(|(x, y)| x.imported == y.imported && x.type_only == y.type_only)
}

/// A blank line means at least two newlines in the inter-statement gap;
/// the scanner guarantees the gap holds nothing but whitespace
fn has_blank_line(gap: &str) -> bool {
    gap.bytes().filter(|byte| *byte == b'\n').count() >= 2
}

fn render_block(
    expected: &[&ImportRecord],
    formats: &FxIndexMap<String, StatementFormat>,
) -> Result<String> {
    let mut out = String::new();
    let mut previous_rank: Option<u8> = None;

    for record in expected {
        let rank = classifier::classify(&record.source).rank();
        if let Some(previous) = previous_rank {
            out.push_str(if previous == rank { "\n" } else { "\n\n" });
        }
        let format = formats
            .get(&record.signature())
            .cloned()
            .unwrap_or_default();
        out.push_str(&format.indent);
        out.push_str(&generator::generate(record, format.quote)?);
        previous_rank = Some(rank);
    }

    Ok(out)
}

fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map_or(0, |idx| idx + 1)
}

/// End of the statement's line, clamped to the statement itself when the
/// line carries trailing content (a comment, say) that must survive the
/// rewrite
fn line_end(source: &str, offset: usize) -> usize {
    let eol = source[offset..]
        .find('\n')
        .map_or(source.len(), |idx| offset + idx);
    if source[offset..eol].trim().is_empty() {
        eol
    } else {
        offset
    }
}

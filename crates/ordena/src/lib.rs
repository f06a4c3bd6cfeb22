//! Deterministic import statement organizer for JavaScript and TypeScript
//!
//! ordena scans a source unit for contiguous import blocks, classifies
//! every specifier into an ordered group, sorts records and their bound
//! names through one shared comparator, and regenerates a block only when
//! its current text does not already match, so running the organizer on
//! its own output is always a no-op.

pub mod binding_order;
pub mod classifier;
pub mod config;
pub mod extractor;
pub mod generator;
pub mod orchestrator;
pub mod ordering;
pub mod reconciler;
pub mod scanner;
pub mod types;

pub use classifier::{SourceGroup, classify};
pub use config::Config;
pub use generator::QuoteStyle;
pub use orchestrator::{SourceOutcome, organize_source};
pub use reconciler::Replacement;
pub use types::{Binding, ImportKind, ImportRecord, Span};

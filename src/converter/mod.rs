//! Kana-to-kanji conversion via lattice construction and best-path
//! search.
//!
//! Builds a span lattice from prefix lookups against the lexicon, runs a
//! forward search whose edge costs come from the scoring oracle, and
//! reconstructs the winning word sequence. One conversion is synchronous
//! and self-contained; the only shared state is the read-only lexicon
//! and the oracle handle.

mod lattice;
mod path;
mod reconstruct;

#[cfg(test)]
pub(crate) mod testutil;
#[cfg(test)]
mod tests;

use crate::dict::{Lexicon, WordId};
use crate::oracle::{AnalysisContext, OracleError, ScoringOracle};

pub use lattice::{build_lattice, Lattice, SpanCandidate};
pub use reconstruct::Segment;

/// Per-request conversion failure. None of these corrupt the lexicon or
/// affect later conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// No dictionary path covers the whole input; `offset` is the first
    /// char position the search could not bridge.
    #[error("no dictionary coverage at char offset {offset}")]
    Coverage { offset: usize },

    /// A finalized word id is missing from the word table — the lattice
    /// and the lexicon have desynchronized.
    #[error("word id {0} missing from the lexicon")]
    DictionaryMiss(WordId),

    /// The oracle returned a negative or non-finite cost.
    #[error("oracle returned invalid cost {cost}")]
    InvalidCost { cost: f64 },

    /// The oracle backend failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Convert a phonetic string to its best surface form.
///
/// Inputs of one char or less are returned unchanged: single-character
/// conversion is a separate mode this engine does not implement.
pub fn convert(
    lexicon: &dyn Lexicon,
    oracle: &dyn ScoringOracle,
    input: &str,
) -> Result<String, ConvertError> {
    convert_with_context(lexicon, oracle, input, None)
}

/// [`convert`] with external-analyzer annotations threaded through to
/// the oracle.
pub fn convert_with_context(
    lexicon: &dyn Lexicon,
    oracle: &dyn ScoringOracle,
    input: &str,
    ctx: Option<&AnalysisContext>,
) -> Result<String, ConvertError> {
    if input.chars().count() <= 1 {
        return Ok(input.to_string());
    }
    let segments = run_search(lexicon, oracle, input, ctx)?;
    Ok(segments.iter().map(|s| s.surface.as_str()).collect())
}

/// Convert and keep per-word readings alongside surfaces.
pub fn convert_segments(
    lexicon: &dyn Lexicon,
    oracle: &dyn ScoringOracle,
    input: &str,
    ctx: Option<&AnalysisContext>,
) -> Result<Vec<Segment>, ConvertError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.chars().count() == 1 {
        return Ok(vec![Segment {
            reading: input.to_string(),
            surface: input.to_string(),
        }]);
    }
    run_search(lexicon, oracle, input, ctx)
}

fn run_search(
    lexicon: &dyn Lexicon,
    oracle: &dyn ScoringOracle,
    input: &str,
    ctx: Option<&AnalysisContext>,
) -> Result<Vec<Segment>, ConvertError> {
    let lattice = lattice::build_lattice(lexicon, input);
    let best = path::find_best_path(&lattice, oracle, ctx)?;
    reconstruct::reconstruct(lexicon, &best)
}

//! Scoring oracle boundary.
//!
//! The converter never computes costs itself: it asks a [`ScoringOracle`]
//! for the cost of opening a sequence with a word (unary) and of a
//! word-to-word transition (binary). Backends range from the bundled
//! fixed class table ([`ClassMatrixOracle`]) to learned models living
//! outside this crate; the path search only depends on this trait.

mod class_matrix;
pub mod features;

pub use class_matrix::ClassMatrixOracle;

use crate::dict::WordId;

/// Backend-originated oracle failure.
///
/// The converter does not retry: a deterministic backend fails
/// identically on retry, and retry policy for flaky transports belongs
/// to the caller.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle backend failure: {0}")]
    Backend(String),

    #[error("oracle call timed out")]
    Timeout,
}

/// Annotations from an external linguistic analyzer, threaded through to
/// context-aware oracle backends.
///
/// The bundled backends ignore it. The hook exists so a dependency-aware
/// scorer can be substituted without touching the path search; default
/// conversions pass `None`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    /// Token surface strings, in input order.
    pub tokens: Vec<String>,
    /// Head link per token (`None` for the root).
    pub heads: Vec<Option<usize>>,
}

/// Cost source for the path search.
///
/// A well-formed oracle returns finite, non-negative costs; the
/// converter validates every returned value and fails the request on a
/// violation. Implementations must be safe to share across concurrent
/// conversions, and may be expensive per call — the search memoizes
/// repeated transitions within one conversion.
pub trait ScoringOracle: Send + Sync {
    /// Cost of `word` opening the output sequence.
    fn unary_cost(&self, word: WordId, ctx: Option<&AnalysisContext>)
        -> Result<f64, OracleError>;

    /// Cost of the transition `prev` → `word`. The dominant edge cost of
    /// the search.
    fn binary_cost(
        &self,
        prev: WordId,
        word: WordId,
        ctx: Option<&AnalysisContext>,
    ) -> Result<f64, OracleError>;
}

//! kanagi: a kana-to-kanji conversion core.
//!
//! The engine searches, over all ways of segmenting a phonetic input
//! into dictionary words, for the lowest-cost path through a word
//! lattice. Candidate words come from a prefix-trie lexicon
//! ([`TrieLexicon`]); edge costs come from a pluggable
//! [`ScoringOracle`]. The bundled [`ClassMatrixOracle`] scores
//! word-class bigrams from a fixed table; learned backends plug in
//! behind the same trait.
//!
//! ```
//! use kanagi::{convert, TrieLexicon, WordEntry, WordId};
//! use kanagi::oracle::{AnalysisContext, OracleError, ScoringOracle};
//!
//! struct Flat;
//!
//! impl ScoringOracle for Flat {
//!     fn unary_cost(&self, _: WordId, _: Option<&AnalysisContext>) -> Result<f64, OracleError> {
//!         Ok(1.0)
//!     }
//!     fn binary_cost(
//!         &self,
//!         _: WordId,
//!         _: WordId,
//!         _: Option<&AnalysisContext>,
//!     ) -> Result<f64, OracleError> {
//!         Ok(1.0)
//!     }
//! }
//!
//! let lexicon = TrieLexicon::from_entries([
//!     WordEntry {
//!         surface: "今日".into(),
//!         reading: "きょう".into(),
//!         vec_id: 0,
//!         class1: 8,
//!         class2: 10,
//!     },
//!     WordEntry {
//!         surface: "は".into(),
//!         reading: "は".into(),
//!         vec_id: 1,
//!         class1: 10,
//!         class2: 21,
//!     },
//! ]);
//! assert_eq!(convert(&lexicon, &Flat, "きょうは").unwrap(), "今日は");
//! ```

pub mod converter;
pub mod dict;
pub mod oracle;

pub use converter::{
    convert, convert_segments, convert_with_context, ConvertError, Segment,
};
pub use dict::{Lexicon, LexiconError, PrefixMatch, TrieLexicon, WordEntry, WordId};
pub use oracle::{AnalysisContext, ClassMatrixOracle, OracleError, ScoringOracle};

use std::collections::HashMap;

use crate::dict::{TrieLexicon, WordEntry, WordId};
use crate::oracle::{AnalysisContext, OracleError, ScoringOracle};

pub(crate) fn entry(surface: &str, reading: &str, class1: u16) -> WordEntry {
    WordEntry {
        surface: surface.to_string(),
        reading: reading.to_string(),
        vec_id: 0,
        class1,
        class2: 0,
    }
}

/// わたしのなまえはなかのです vocabulary. Ids follow listing order.
pub(crate) fn sample_lexicon() -> TrieLexicon {
    TrieLexicon::from_entries([
        entry("私", "わたし", 8),   // 0
        entry("の", "の", 10),      // 1
        entry("名前", "なまえ", 8), // 2
        entry("は", "は", 10),      // 3
        entry("中野", "なかの", 8), // 4
        entry("です", "です", 4),   // 5
    ])
}

/// この + homophones of はし. Ids follow listing order.
pub(crate) fn homophone_lexicon() -> TrieLexicon {
    TrieLexicon::from_entries([
        entry("この", "この", 6), // 0
        entry("橋", "はし", 8),   // 1
        entry("箸", "はし", 8),   // 2
    ])
}

/// Flat-cost oracle: every unary and binary cost is the same value.
pub(crate) struct UniformOracle(pub f64);

impl ScoringOracle for UniformOracle {
    fn unary_cost(
        &self,
        _word: WordId,
        _ctx: Option<&AnalysisContext>,
    ) -> Result<f64, OracleError> {
        Ok(self.0)
    }

    fn binary_cost(
        &self,
        _prev: WordId,
        _word: WordId,
        _ctx: Option<&AnalysisContext>,
    ) -> Result<f64, OracleError> {
        Ok(self.0)
    }
}

/// Oracle with per-word and per-pair overrides over a flat default.
pub(crate) struct TableOracle {
    pub default: f64,
    pub unary: HashMap<WordId, f64>,
    pub pairs: HashMap<(WordId, WordId), f64>,
}

impl ScoringOracle for TableOracle {
    fn unary_cost(
        &self,
        word: WordId,
        _ctx: Option<&AnalysisContext>,
    ) -> Result<f64, OracleError> {
        Ok(self.unary.get(&word).copied().unwrap_or(self.default))
    }

    fn binary_cost(
        &self,
        prev: WordId,
        word: WordId,
        _ctx: Option<&AnalysisContext>,
    ) -> Result<f64, OracleError> {
        Ok(self.pairs.get(&(prev, word)).copied().unwrap_or(self.default))
    }
}

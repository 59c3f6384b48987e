use crate::dict::{Lexicon, LexiconError, WordId};

use super::{AnalysisContext, OracleError, ScoringOracle};

/// Reference oracle backend: a square cost table over coarse word-class
/// codes.
///
/// Row and column 0 double as the begin-of-sequence class, so unary
/// costs read row 0. Any backend with the same call shape can replace
/// this one; it exists to make the engine usable without a learned
/// model.
pub struct ClassMatrixOracle<'a> {
    lexicon: &'a dyn Lexicon,
    num_classes: u16,
    costs: Vec<f64>,
}

impl std::fmt::Debug for ClassMatrixOracle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassMatrixOracle")
            .field("num_classes", &self.num_classes)
            .field("costs", &self.costs)
            .finish_non_exhaustive()
    }
}

impl<'a> ClassMatrixOracle<'a> {
    /// Parse a text cost table: a header of one class count (or two
    /// equal counts), then count×count cost lines in row-major order.
    /// Blank lines are skipped. Costs must be finite and non-negative.
    pub fn from_text(lexicon: &'a dyn Lexicon, text: &str) -> Result<Self, LexiconError> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| LexiconError::Parse("empty cost table".to_string()))?;
        let parts: Vec<&str> = header.split_whitespace().collect();
        let num_classes: u16 = match parts.len() {
            1 => parts[0]
                .parse()
                .map_err(|e| LexiconError::Parse(format!("invalid class count: {e}")))?,
            2 => {
                let rows: u16 = parts[0]
                    .parse()
                    .map_err(|e| LexiconError::Parse(format!("invalid row count: {e}")))?;
                let cols: u16 = parts[1]
                    .parse()
                    .map_err(|e| LexiconError::Parse(format!("invalid column count: {e}")))?;
                if rows != cols {
                    return Err(LexiconError::Parse(format!(
                        "row count ({rows}) != column count ({cols})"
                    )));
                }
                rows
            }
            _ => {
                return Err(LexiconError::Parse(format!(
                    "expected 1 or 2 values in header, got {}",
                    parts.len()
                )));
            }
        };

        let expected = num_classes as usize * num_classes as usize;
        let mut costs = Vec::with_capacity(expected);
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let cost: f64 = line
                .parse()
                .map_err(|e| LexiconError::Parse(format!("invalid cost {line:?}: {e}")))?;
            if !cost.is_finite() || cost < 0.0 {
                return Err(LexiconError::Parse(format!("cost out of range: {cost}")));
            }
            costs.push(cost);
        }
        if costs.len() != expected {
            return Err(LexiconError::Parse(format!(
                "expected {expected} costs, got {}",
                costs.len()
            )));
        }

        Ok(Self {
            lexicon,
            num_classes,
            costs,
        })
    }

    fn class_of(&self, word: WordId) -> Result<u16, OracleError> {
        self.lexicon
            .entry(word)
            .map(|e| e.class1)
            .ok_or_else(|| OracleError::Backend(format!("unknown word id {word}")))
    }

    /// Table read. Classes beyond the table cost 0.
    fn cost(&self, left: u16, right: u16) -> f64 {
        if left >= self.num_classes || right >= self.num_classes {
            return 0.0;
        }
        self.costs[left as usize * self.num_classes as usize + right as usize]
    }
}

impl ScoringOracle for ClassMatrixOracle<'_> {
    fn unary_cost(
        &self,
        word: WordId,
        _ctx: Option<&AnalysisContext>,
    ) -> Result<f64, OracleError> {
        Ok(self.cost(0, self.class_of(word)?))
    }

    fn binary_cost(
        &self,
        prev: WordId,
        word: WordId,
        _ctx: Option<&AnalysisContext>,
    ) -> Result<f64, OracleError> {
        Ok(self.cost(self.class_of(prev)?, self.class_of(word)?))
    }
}

use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::dict::WordId;
use crate::oracle::{AnalysisContext, ScoringOracle};

use super::lattice::Lattice;
use super::ConvertError;

/// Finalized best state at one end offset.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathNode {
    /// Minimum cumulative cost of any word sequence reaching this offset.
    pub cost: f64,
    /// Winning word ending here.
    pub word: WordId,
    /// End offset of the preceding node; `None` marks begin-of-input.
    pub prev_end: Option<usize>,
}

/// Forward search over end offsets.
///
/// Offsets are processed in strictly increasing order and finalized
/// exactly once, so each step only reads settled predecessors — no
/// cycles, no revisiting. `None` is the explicit "no path yet" sentinel;
/// a genuinely zero-cost first candidate finalizes a node and is never
/// mistaken for an empty slot.
///
/// Returns one `Option<PathNode>` per offset. A `None` at the final
/// offset is a coverage failure and is reported as an error here.
pub(crate) fn find_best_path(
    lattice: &Lattice,
    oracle: &dyn ScoringOracle,
    ctx: Option<&AnalysisContext>,
) -> Result<Vec<Option<PathNode>>, ConvertError> {
    let _span = debug_span!("find_best_path", char_count = lattice.char_count).entered();
    let mut best: Vec<Option<PathNode>> = vec![None; lattice.char_count];
    // The oracle may be an expensive inference call; repeated
    // (prev, word) transitions within this conversion are memoized.
    // Nothing here outlives the call.
    let mut memo: HashMap<(WordId, WordId), f64> = HashMap::new();

    for i in 0..lattice.char_count {
        for cand in &lattice.ends[i] {
            let node = if cand.start == 0 {
                let cost = checked(oracle.unary_cost(cand.word, ctx)?)?;
                PathNode {
                    cost,
                    word: cand.word,
                    prev_end: None,
                }
            } else {
                // The predecessor must already be finalized; a missing
                // one means this candidate's start is unreachable.
                let Some(prev) = best[cand.start - 1] else {
                    continue;
                };
                let edge = match memo.get(&(prev.word, cand.word)) {
                    Some(&cost) => cost,
                    None => {
                        let cost = checked(oracle.binary_cost(prev.word, cand.word, ctx)?)?;
                        memo.insert((prev.word, cand.word), cost);
                        cost
                    }
                };
                PathNode {
                    cost: prev.cost + edge,
                    word: cand.word,
                    prev_end: Some(cand.start - 1),
                }
            };

            // Strict `<`: the first minimal-cost candidate keeps the
            // slot, so the lattice's enumeration order decides ties.
            match best[i] {
                Some(cur) if node.cost >= cur.cost => {}
                _ => best[i] = Some(node),
            }
        }
    }

    match best.last().copied().flatten() {
        Some(node) => {
            debug!(best_cost = node.cost);
            Ok(best)
        }
        None => {
            // First char offset the search could not bridge past.
            let covered = best.iter().rposition(|n| n.is_some());
            let offset = covered.map_or(0, |i| i + 1);
            Err(ConvertError::Coverage { offset })
        }
    }
}

/// Reject non-finite or negative oracle output.
fn checked(cost: f64) -> Result<f64, ConvertError> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(cost)
    } else {
        Err(ConvertError::InvalidCost { cost })
    }
}

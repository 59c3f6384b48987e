use tracing::{debug, debug_span};

use crate::dict::{Lexicon, WordId};

/// One candidate word span. The end offset is implicit: candidates are
/// bucketed by the offset of the last char they consume.
#[derive(Debug, Clone, Copy)]
pub struct SpanCandidate {
    /// Char offset of the first input char this word consumes.
    pub start: usize,
    pub word: WordId,
}

/// All candidate spans over one input, bucketed by inclusive end offset.
/// Built fresh per conversion; nothing survives the call.
pub struct Lattice {
    /// `ends[i]` = candidates whose last consumed char sits at offset
    /// `i`, in discovery order (start offset, then match length, then
    /// homophone order). The search relies on this order for
    /// deterministic tie-breaks.
    pub ends: Vec<Vec<SpanCandidate>>,
    /// Number of chars in the input.
    pub char_count: usize,
}

/// Enumerate every dictionary word matching at every start offset.
///
/// One prefix enumeration per start offset finds all match lengths at
/// once. A start offset with no match contributes nothing: there is no
/// unknown-word fallback, so an unbridgeable gap surfaces later as a
/// coverage failure instead of a silently patched path.
pub fn build_lattice(lexicon: &dyn Lexicon, input: &str) -> Lattice {
    let char_count = input.chars().count();
    let _span = debug_span!("build_lattice", char_count).entered();
    // Byte offset per char position, so suffixes are slices of the input
    // rather than a fresh String per position.
    let byte_offsets: Vec<usize> = input.char_indices().map(|(i, _)| i).collect();
    let mut ends: Vec<Vec<SpanCandidate>> = vec![Vec::new(); char_count];

    let mut candidate_count = 0usize;
    for start in 0..char_count {
        let suffix = &input[byte_offsets[start]..];
        for m in lexicon.prefixes_of(suffix) {
            let end = start + m.reading.chars().count() - 1;
            for word in m.word_ids {
                ends[end].push(SpanCandidate { start, word });
                candidate_count += 1;
            }
        }
    }

    debug!(candidate_count);
    Lattice { ends, char_count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::testutil::sample_lexicon;

    #[test]
    fn test_buckets_by_inclusive_end() {
        let lexicon = sample_lexicon();
        let lattice = build_lattice(&lexicon, "わたしの");

        assert_eq!(lattice.char_count, 4);
        // わたし spans chars 0..=2
        assert_eq!(lattice.ends[2].len(), 1);
        assert_eq!(lattice.ends[2][0].start, 0);
        // の spans char 3..=3
        assert_eq!(lattice.ends[3].len(), 1);
        assert_eq!(lattice.ends[3][0].start, 3);
        // nothing ends at 0 or 1 (no わ/わた entries)
        assert!(lattice.ends[0].is_empty());
        assert!(lattice.ends[1].is_empty());
    }

    #[test]
    fn test_homophones_share_bucket_in_id_order() {
        let lexicon = crate::converter::testutil::homophone_lexicon();
        let lattice = build_lattice(&lexicon, "このはし");

        // はし (chars 2..=3) has two candidates: 橋 (id 1) then 箸 (id 2)
        let bucket = &lattice.ends[3];
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].word, 1);
        assert_eq!(bucket[1].word, 2);
    }

    #[test]
    fn test_uncovered_offset_has_empty_bucket() {
        let lexicon = sample_lexicon();
        let lattice = build_lattice(&lexicon, "わたしぬ");
        assert!(lattice.ends[3].is_empty());
    }

    #[test]
    fn test_overlapping_matches_all_registered() {
        let lexicon = sample_lexicon();
        // なかの contains の as a sub-reading starting at char 2
        let lattice = build_lattice(&lexicon, "なかの");
        assert_eq!(lattice.ends[2].len(), 2); // なかの (start 0) and の (start 2)
        assert_eq!(lattice.ends[2][0].start, 0);
        assert_eq!(lattice.ends[2][1].start, 2);
    }
}

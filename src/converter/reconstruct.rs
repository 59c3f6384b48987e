use crate::dict::Lexicon;

use super::path::PathNode;
use super::ConvertError;

/// One converted word: its phonetic reading and displayed surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub reading: String,
    pub surface: String,
}

/// Walk back-pointers from the final offset to the begin sentinel and
/// emit the winning words in input order.
///
/// A finalized word id missing from the word table means the lattice and
/// the lexicon have desynchronized; that aborts this request with
/// [`ConvertError::DictionaryMiss`], never a partial string.
pub(crate) fn reconstruct(
    lexicon: &dyn Lexicon,
    best: &[Option<PathNode>],
) -> Result<Vec<Segment>, ConvertError> {
    let Some(mut cursor) = best.last().copied().flatten() else {
        return Ok(Vec::new());
    };

    let mut segments = Vec::new();
    loop {
        let entry = lexicon
            .entry(cursor.word)
            .ok_or(ConvertError::DictionaryMiss(cursor.word))?;
        segments.push(Segment {
            reading: entry.reading.clone(),
            surface: entry.surface.clone(),
        });
        match cursor.prev_end {
            Some(prev) => {
                cursor = best[prev].ok_or(ConvertError::Coverage { offset: prev })?;
            }
            None => break,
        }
    }
    segments.reverse();
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::testutil::sample_lexicon;

    #[test]
    fn test_walks_backpointers_in_order() {
        let lexicon = sample_lexicon();
        // わたし(id 0) at 0..=2, の(id 1) at 3..=3
        let best = vec![
            None,
            None,
            Some(PathNode {
                cost: 1.0,
                word: 0,
                prev_end: None,
            }),
            Some(PathNode {
                cost: 2.0,
                word: 1,
                prev_end: Some(2),
            }),
        ];
        let segments = reconstruct(&lexicon, &best).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].surface, "私");
        assert_eq!(segments[0].reading, "わたし");
        assert_eq!(segments[1].surface, "の");
    }

    #[test]
    fn test_unknown_word_id_is_dictionary_miss() {
        let lexicon = sample_lexicon();
        let best = vec![Some(PathNode {
            cost: 1.0,
            word: 999,
            prev_end: None,
        })];
        assert!(matches!(
            reconstruct(&lexicon, &best),
            Err(ConvertError::DictionaryMiss(999))
        ));
    }
}

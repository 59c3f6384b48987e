use std::io::{BufRead, BufReader, Read};

use super::entry::{COARSE_CLASS_COUNT, FINE_CLASS_COUNT};
use super::{LexiconError, WordEntry};

/// Parse word records from a CSV stream.
///
/// One record per line: `surface,reading,vec_id,class1,class2`. Fields
/// may be double-quoted, with `""` escaping a literal quote (so surfaces
/// containing commas survive). Blank lines are skipped. Any malformed
/// record fails the whole load with a line-numbered diagnostic: a
/// lexicon built from bad input must never come up partially.
pub fn parse_word_records(reader: impl Read) -> Result<Vec<WordEntry>, LexiconError> {
    let mut words = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let lineno = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(&line)
            .map_err(|e| LexiconError::Parse(format!("line {lineno}: {e}")))?;
        if fields.len() != 5 {
            return Err(LexiconError::Parse(format!(
                "line {lineno}: expected 5 fields, got {}",
                fields.len()
            )));
        }

        let surface = fields[0].clone();
        let reading = fields[1].clone();
        if surface.is_empty() || reading.is_empty() {
            return Err(LexiconError::Parse(format!(
                "line {lineno}: empty surface or reading"
            )));
        }
        let vec_id: u32 = fields[2]
            .parse()
            .map_err(|e| LexiconError::Parse(format!("line {lineno}: invalid vec_id: {e}")))?;
        let class1: u16 = fields[3]
            .parse()
            .map_err(|e| LexiconError::Parse(format!("line {lineno}: invalid class1: {e}")))?;
        let class2: u16 = fields[4]
            .parse()
            .map_err(|e| LexiconError::Parse(format!("line {lineno}: invalid class2: {e}")))?;
        if class1 >= COARSE_CLASS_COUNT {
            return Err(LexiconError::Parse(format!(
                "line {lineno}: class1 {class1} out of range (max {})",
                COARSE_CLASS_COUNT - 1
            )));
        }
        if class2 >= FINE_CLASS_COUNT {
            return Err(LexiconError::Parse(format!(
                "line {lineno}: class2 {class2} out of range (max {})",
                FINE_CLASS_COUNT - 1
            )));
        }

        words.push(WordEntry {
            surface,
            reading,
            vec_id,
            class1,
            class2,
        });
    }
    Ok(words)
}

/// Split one CSV line into fields, honoring double-quote quoting.
fn split_csv_line(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}

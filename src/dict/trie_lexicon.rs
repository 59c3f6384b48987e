use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use trie_rs::map::{Trie, TrieBuilder};

use super::{Lexicon, LexiconError, PrefixMatch, WordEntry, WordId};

const MAGIC: &[u8; 4] = b"KNGX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5; // 4 bytes magic + 1 byte version

/// Trie-backed lexicon: a byte trie over readings plus the id-indexed
/// word table.
pub struct TrieLexicon {
    trie: Trie<u8, Vec<WordId>>,
    words: Vec<WordEntry>,
}

impl TrieLexicon {
    /// Build from word records. Ids are assigned in iteration order;
    /// homophones share one reading key and keep that order, which is
    /// what makes downstream tie-breaks reproducible.
    pub fn from_entries(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let words: Vec<WordEntry> = entries.into_iter().collect();
        Self {
            trie: build_trie(&words),
            words,
        }
    }

    /// Build from CSV word records (`surface,reading,vec_id,class1,class2`
    /// per line). Any malformed record fails the whole load.
    pub fn from_csv(reader: impl std::io::Read) -> Result<Self, LexiconError> {
        Ok(Self::from_entries(super::parse_word_records(reader)?))
    }

    /// Serialize to a versioned binary image. Only the word table is
    /// stored; the trie is rebuilt on load, keeping load O(dictionary
    /// size) and the image format trivial.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        let encoded = bincode::serialize(&self.words).map_err(LexiconError::Serialize)?;
        buf.extend_from_slice(&encoded);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        if data.len() < HEADER_SIZE {
            return Err(LexiconError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(LexiconError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(LexiconError::UnsupportedVersion(data[4]));
        }
        let words: Vec<WordEntry> =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(LexiconError::Deserialize)?;
        Ok(Self::from_entries(words))
    }

    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        fs::write(path, self.to_bytes()?).map_err(LexiconError::Io)
    }

    /// Returns (reading_count, entry_count) for startup diagnostics.
    pub fn stats(&self) -> (usize, usize) {
        let iter: Box<dyn Iterator<Item = (String, &Vec<WordId>)>> = Box::new(self.trie.iter());
        (iter.count(), self.words.len())
    }
}

fn build_trie(words: &[WordEntry]) -> Trie<u8, Vec<WordId>> {
    // Group ids by reading, preserving id order under each key.
    let mut by_reading: BTreeMap<&str, Vec<WordId>> = BTreeMap::new();
    for (id, word) in words.iter().enumerate() {
        by_reading
            .entry(word.reading.as_str())
            .or_default()
            .push(id as WordId);
    }
    let mut builder = TrieBuilder::new();
    for (reading, ids) in by_reading {
        builder.push(reading.as_bytes(), ids);
    }
    builder.build()
}

impl Lexicon for TrieLexicon {
    fn lookup(&self, reading: &str) -> Option<&[WordId]> {
        self.trie
            .exact_match(reading.as_bytes())
            .map(|ids| ids.as_slice())
    }

    fn prefixes_of(&self, suffix: &str) -> Vec<PrefixMatch> {
        // A single trie walk yields every stored reading that prefixes
        // the suffix, shortest first.
        let iter: Box<dyn Iterator<Item = (String, &Vec<WordId>)>> =
            Box::new(self.trie.common_prefix_search(suffix.as_bytes()));
        iter.map(|(reading, ids)| PrefixMatch {
            reading,
            word_ids: ids.clone(),
        })
        .collect()
    }

    fn entry(&self, id: WordId) -> Option<&WordEntry> {
        self.words.get(id as usize)
    }
}

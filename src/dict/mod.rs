//! Lexicon storage and lookup.
//!
//! `TrieLexicon` maps reading strings to word ids over a byte trie and
//! owns the id-indexed word table consulted by reconstruction and by
//! oracle backends. The index is built once and read-only afterwards.

mod entry;
mod source;
mod trie_lexicon;

pub use entry::{WordEntry, COARSE_CLASS_COUNT, FINE_CLASS_COUNT, VEC_ID_BITS};
pub use source::parse_word_records;
pub use trie_lexicon::TrieLexicon;

use std::io;

/// Identifier of a word: its index in the lexicon's word table, assigned
/// at build time and stable for the lifetime of the lexicon.
pub type WordId = u32;

/// Unified error type for lexicon construction and binary I/O.
///
/// All of these are fatal at load time: the engine cannot serve
/// conversions without a valid lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected KNGX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// One reading matched during prefix enumeration, with every word id
/// stored under it. Homophones keep word-table insertion order.
pub struct PrefixMatch {
    pub reading: String,
    pub word_ids: Vec<WordId>,
}

/// Read-only dictionary index, shared across concurrent conversions
/// without locking.
pub trait Lexicon: Send + Sync {
    /// Exact lookup. `None` when the reading is unknown.
    fn lookup(&self, reading: &str) -> Option<&[WordId]>;

    /// Every stored reading that is a prefix of `suffix`, ordered by
    /// increasing length. The search needs all match lengths, not a
    /// greedy longest match: the cheapest overall path may go through a
    /// shorter word.
    fn prefixes_of(&self, suffix: &str) -> Vec<PrefixMatch>;

    /// Word-table access by id.
    fn entry(&self, id: WordId) -> Option<&WordEntry>;
}

use serde::{Deserialize, Serialize};

/// Number of coarse word-class codes (valid `class1` range).
pub const COARSE_CLASS_COUNT: u16 = 15;
/// Number of fine word-class codes (valid `class2` range).
pub const FINE_CLASS_COUNT: u16 = 45;
/// Significant bits of `vec_id` in the feature encoding.
pub const VEC_ID_BITS: u32 = 16;

/// A single dictionary word.
///
/// `reading` is the phonetic key used for lookup; `surface` is the text
/// emitted on conversion. `vec_id` and the class codes are opaque scoring
/// features carried for oracle backends (see [`crate::oracle::features`]).
/// Entries are immutable once the lexicon is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub surface: String,
    pub reading: String,
    /// Auxiliary vector id assigned at dictionary build time.
    pub vec_id: u32,
    /// Coarse word-class code (`0..COARSE_CLASS_COUNT`).
    pub class1: u16,
    /// Fine word-class code (`0..FINE_CLASS_COUNT`).
    pub class2: u16,
}

//! Feature-vector encoding for learned oracle backends.
//!
//! A word is encoded as its vector id in binary (low bit first) followed
//! by one-hot coarse and fine class codes. Backends that embed words
//! consume this fixed-width representation; the converter itself never
//! reads it.

use crate::dict::{WordEntry, COARSE_CLASS_COUNT, FINE_CLASS_COUNT, VEC_ID_BITS};

/// Total encoded width: 16 id bits + 15-way + 45-way one-hots.
pub const FEATURE_DIM: usize =
    VEC_ID_BITS as usize + COARSE_CLASS_COUNT as usize + FINE_CLASS_COUNT as usize;

/// Encode a word entry for a scoring backend.
///
/// Class codes beyond the table sizes leave their one-hot block all
/// zero; codes are validated at load time, so that only happens for
/// hand-built entries.
pub fn feature_vector(entry: &WordEntry) -> Vec<f32> {
    let mut v = Vec::with_capacity(FEATURE_DIM);
    for bit in 0..VEC_ID_BITS {
        v.push(if entry.vec_id >> bit & 1 == 1 { 1.0 } else { 0.0 });
    }
    for code in 0..COARSE_CLASS_COUNT {
        v.push(if code == entry.class1 { 1.0 } else { 0.0 });
    }
    for code in 0..FINE_CLASS_COUNT {
        v.push(if code == entry.class2 { 1.0 } else { 0.0 });
    }
    v
}

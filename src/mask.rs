//! Named masks used to compare partial cube states.
//!
//! A mask is a [`PackedCube`] whose sticker nibbles are either `0xF`
//! (significant) or `0x0` (don't-care). `PackedCube::masked`/`compare_masked`
//! apply it; `masked(cube, mask)` zeroes every don't-care sticker so two
//! states compare equal iff their significant stickers agree.

use crate::cubie::{Corner, Edge};
use crate::facelet::{CORNER_FACELET, EDGE_FACELET};
use crate::packed::PackedCube;

const STICKERS_PER_FACE: usize = 9;
const BITS_PER_STICKER: u32 = 4;

fn mask_from_indices(indices: &[usize]) -> PackedCube {
    let mut faces = [0u64; 6];
    for &idx in indices {
        let word = idx / STICKERS_PER_FACE;
        let nibble = (idx % STICKERS_PER_FACE) as u32;
        faces[word] |= 0xFu64 << (nibble * BITS_PER_STICKER);
    }
    PackedCube { faces }
}

fn corner_indices(c: Corner) -> [usize; 3] {
    CORNER_FACELET[c as usize]
}

fn edge_indices(e: Edge) -> [usize; 2] {
    EDGE_FACELET[e as usize]
}

/// Every sticker significant; equivalent to plain `PackedCube` equality.
pub fn mask_full() -> PackedCube {
    let mut all = Vec::with_capacity(54);
    for face in 0..6 {
        for slot in 0..STICKERS_PER_FACE {
            all.push(face * STICKERS_PER_FACE + slot);
        }
    }
    mask_from_indices(&all)
}

/// The four bottom-layer edges: `DR, DF, DL, DB`.
pub fn mask_cross() -> PackedCube {
    let mut indices = Vec::with_capacity(8);
    for e in [Edge::DR, Edge::DF, Edge::DL, Edge::DB] {
        indices.extend_from_slice(&edge_indices(e));
    }
    mask_from_indices(&indices)
}

/// The four corner+edge F2L slot pairs, `0 = FR (DFR/FR)`, `1 = FL
/// (DLF/FL)`, `2 = BL (DBL/BL)`, `3 = BR (DRB/BR)`.
pub const F2L_SLOTS: [(Corner, Edge); 4] = [
    (Corner::DFR, Edge::FR),
    (Corner::DLF, Edge::FL),
    (Corner::DBL, Edge::BL),
    (Corner::DRB, Edge::BR),
];

/// Cross mask plus the single named slot's corner and edge stickers.
pub fn mask_f2l_slot(slot: usize) -> PackedCube {
    let (corner, edge) = F2L_SLOTS[slot];
    let mut indices = Vec::with_capacity(8 + 5);
    for e in [Edge::DR, Edge::DF, Edge::DL, Edge::DB] {
        indices.extend_from_slice(&edge_indices(e));
    }
    indices.extend_from_slice(&corner_indices(corner));
    indices.extend_from_slice(&edge_indices(edge));
    mask_from_indices(&indices)
}

/// Cross plus all four F2L slots: every bottom-layer and middle-layer
/// sticker, i.e. the whole cube except the last layer.
pub fn mask_f2l() -> PackedCube {
    let mut indices = Vec::with_capacity(8 + 20);
    for e in [Edge::DR, Edge::DF, Edge::DL, Edge::DB] {
        indices.extend_from_slice(&edge_indices(e));
    }
    for &(corner, edge) in &F2L_SLOTS {
        indices.extend_from_slice(&corner_indices(corner));
        indices.extend_from_slice(&edge_indices(edge));
    }
    mask_from_indices(&indices)
}

/// The last layer: the four `U`-corners and four `U`-edges.
pub fn mask_last_layer() -> PackedCube {
    let mut indices = Vec::with_capacity(20);
    for c in [Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR] {
        indices.extend_from_slice(&corner_indices(c));
    }
    for e in [Edge::UR, Edge::UF, Edge::UL, Edge::UB] {
        indices.extend_from_slice(&edge_indices(e));
    }
    mask_from_indices(&indices)
}

/// The 1-Look-Last-Layer key: last layer stickers plus every F2L sticker,
/// so that masked equality also pins down "F2L is still solved".
pub fn mask_1lll() -> PackedCube {
    let ll = mask_last_layer();
    let f2l = mask_f2l();
    let mut faces = [0u64; 6];
    for i in 0..6 {
        faces[i] = ll.faces[i] | f2l.faces[i];
    }
    PackedCube { faces }
}

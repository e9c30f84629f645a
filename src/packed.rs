//! The face-packed cube: six 64-bit words, nine 4-bit stickers each.
//!
//! Each move's effect on the 54 sticker slots is precomputed once as a
//! position permutation — which original slot's sticker ends up at slot
//! `p` — derived from the already-verified cubie move basis and the same
//! corner/edge facelet-placement formula `facelet.rs` uses for color
//! conversion, with facelet indices standing in for colors. That gives an
//! O(1), table-driven `apply_move` for all 18 moves without hand-deriving
//! raw bit-shift constants.

use lazy_static::lazy_static;

use crate::cubie::{CubieCube, SOLVED_CUBIE_CUBE};
use crate::face::{Face, ALL_FACES};
use crate::facelet::{FaceletCube, CENTER_FACELET, CORNER_FACELET, EDGE_FACELET, SOLVED_FACELET_CUBE};
use crate::moves::{Move, ALL_MOVES};

const STICKERS_PER_FACE: usize = 9;
const BITS_PER_STICKER: u32 = 4;
const STICKER_MASK: u64 = 0xF;

/// A cube as 6 x 64-bit face words, one per face in `U, R, F, D, L, B`
/// order; each word holds nine 4-bit stickers (bits `0..36`), one per
/// facelet of that face in `facelet.rs`'s reading order, with the
/// remaining 28 bits always zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct PackedCube {
    pub faces: [u64; 6],
}

fn pack(face: &FaceletCube) -> PackedCube {
    let mut faces = [0u64; 6];
    for (slot, &sticker) in face.f.iter().enumerate() {
        let word = slot / STICKERS_PER_FACE;
        let nibble = (slot % STICKERS_PER_FACE) as u32;
        faces[word] |= (sticker as u64) << (nibble * BITS_PER_STICKER);
    }
    PackedCube { faces }
}

fn unpack(cube: &PackedCube) -> [Face; 54] {
    let mut f = [Face::U; 54];
    for slot in 0..54 {
        let word = slot / STICKERS_PER_FACE;
        let nibble = (slot % STICKERS_PER_FACE) as u32;
        let value = (cube.faces[word] >> (nibble * BITS_PER_STICKER)) & STICKER_MASK;
        f[slot] = ALL_FACES[value as usize];
    }
    f
}

/// `permutation[p]` is the slot whose sticker moves to slot `p` when the
/// move is applied to any cube. Built once from the move's cubie basis:
/// the same corner/edge placement formula that converts a `CubieCube` to a
/// `FaceletCube`, but with each slot's own index as its "color" so the
/// result is a permutation instead of a coloring.
fn move_permutation(m: Move) -> [usize; 54] {
    let basis: CubieCube = SOLVED_CUBIE_CUBE.apply_move(m);
    let mut perm = [0usize; 54];

    for (i, &idx) in CENTER_FACELET.iter().enumerate() {
        perm[idx] = CENTER_FACELET[i];
    }
    for (i, corner_faces) in CORNER_FACELET.iter().enumerate() {
        let corner = basis.cp[i] as usize;
        for (j, &idx) in corner_faces.iter().enumerate() {
            perm[idx] = CORNER_FACELET[corner][(j + (3 - basis.co[i] as usize)) % 3];
        }
    }
    for (i, edge_faces) in EDGE_FACELET.iter().enumerate() {
        let edge = basis.ep[i] as usize;
        for (j, &idx) in edge_faces.iter().enumerate() {
            perm[idx] = EDGE_FACELET[edge][(j + basis.eo[i] as usize) % 2];
        }
    }
    perm
}

lazy_static! {
    static ref SOLVED: PackedCube = pack(&SOLVED_FACELET_CUBE);
    static ref MOVE_PERMS: [[usize; 54]; 18] = {
        let mut table = [[0usize; 54]; 18];
        for (i, &m) in ALL_MOVES.iter().enumerate() {
            table[i] = move_permutation(m);
        }
        table
    };
}

pub fn solved() -> PackedCube {
    *SOLVED
}

impl PackedCube {
    pub fn apply_move(self, m: Move) -> PackedCube {
        let perm = &MOVE_PERMS[m as usize];
        let before = unpack(&self);
        let mut after = [Face::U; 54];
        for p in 0..54 {
            after[p] = before[perm[p]];
        }
        pack(&FaceletCube { f: after })
    }

    pub fn apply_alg(mut self, alg: &[Move]) -> PackedCube {
        for &m in alg {
            self = self.apply_move(m);
        }
        self
    }

    /// Masked equality: `(a & mask) == (b & mask)`.
    pub fn compare_masked(a: &PackedCube, b: &PackedCube, mask: &PackedCube) -> bool {
        a.masked(mask) == b.masked(mask)
    }

    /// Returns a cube whose significant stickers (per `mask`) carry this
    /// cube's values and whose don't-care stickers carry zero.
    pub fn masked(&self, mask: &PackedCube) -> PackedCube {
        let mut faces = [0u64; 6];
        for i in 0..6 {
            faces[i] = self.faces[i] & mask.faces[i];
        }
        PackedCube { faces }
    }
}

impl From<&CubieCube> for PackedCube {
    fn from(cc: &CubieCube) -> Self {
        let face = FaceletCube::try_from(cc).expect("cubie cube satisfies its own invariants");
        pack(&face)
    }
}

impl From<&PackedCube> for CubieCube {
    fn from(packed: &PackedCube) -> Self {
        let face = FaceletCube { f: unpack(packed) };
        CubieCube::try_from(&face).expect("packed cube round-trips through a valid facelet cube")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;

    #[test]
    fn solved_packed_cube_has_nine_of_each_label_and_zero_padding() {
        let s = solved();
        for (i, word) in s.faces.iter().enumerate() {
            let mut count = 0;
            for nibble in 0..9 {
                if (word >> (nibble * 4)) & 0xF == i as u64 {
                    count += 1;
                }
            }
            assert_eq!(count, 9);
            assert_eq!(word >> 36, 0, "padding bits must be zero");
        }
    }

    #[test]
    fn four_quarter_turns_return_to_solved() {
        for m in [Move::U, Move::R, Move::F, Move::D, Move::L, Move::B] {
            let mut c = solved();
            for _ in 0..4 {
                c = c.apply_move(m);
            }
            assert_eq!(c, solved());
        }
    }

    #[test]
    fn cross_representation_invariant_holds_after_a_scramble() {
        let scramble = [Move::R, Move::U, Move::R3, Move::F2, Move::D3, Move::B, Move::L2];
        let cubie_state = SOLVED_CUBIE_CUBE.apply_moves(&scramble);
        let packed_state = solved().apply_alg(&scramble);

        let to_cubie: CubieCube = (&packed_state).into();
        assert_eq!(to_cubie, cubie_state);

        let to_packed: PackedCube = (&cubie_state).into();
        assert_eq!(to_packed, packed_state);
    }

    #[test]
    fn masked_equality_ignores_dont_care_stickers() {
        let mask_all_zero = PackedCube { faces: [0; 6] };
        let a = solved().apply_move(Move::U);
        let b = solved().apply_move(Move::R);
        assert!(PackedCube::compare_masked(&a, &b, &mask_all_zero));
        assert_ne!(a, b);
    }
}

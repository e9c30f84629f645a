use std::fmt;

use crate::cubie::CubieCube;
use crate::error::Error;
use crate::face::Face;

/// Cube on the facelet level: 54 stickers, ordered `U-R-F-D-L-B`, nine per
/// face in reading order (top-left to bottom-right of that face).
///
/// ```text
///             |************|
///             |*U1**U2**U3*|
///             |*U4**U5**U6*|
///             |*U7**U8**U9*|
/// ************|************|************|************|
/// *L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
/// *L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
/// *L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
/// ************|************|************|************|
///             |*D1**D2**D3*|
///             |*D4**D5**D6*|
///             |*D7**D8**D9*|
///             |************|
/// ```
/// Position `X5` of every face is its center and is never written by a
/// move; `CENTER_FACELET[f]` is fixed at `Face::from(f)`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FaceletCube {
    pub f: [Face; 54],
}

#[rustfmt::skip]
pub const SOLVED_FACELET_CUBE: FaceletCube = FaceletCube {
    f: [
        Face::U, Face::U, Face::U, Face::U, Face::U, Face::U, Face::U, Face::U, Face::U,
        Face::R, Face::R, Face::R, Face::R, Face::R, Face::R, Face::R, Face::R, Face::R,
        Face::F, Face::F, Face::F, Face::F, Face::F, Face::F, Face::F, Face::F, Face::F,
        Face::D, Face::D, Face::D, Face::D, Face::D, Face::D, Face::D, Face::D, Face::D,
        Face::L, Face::L, Face::L, Face::L, Face::L, Face::L, Face::L, Face::L, Face::L,
        Face::B, Face::B, Face::B, Face::B, Face::B, Face::B, Face::B, Face::B, Face::B,
    ],
};

impl Default for FaceletCube {
    fn default() -> Self {
        SOLVED_FACELET_CUBE
    }
}

/// Index of each face's center sticker, `face as usize * 9 + 4`.
pub const CENTER_FACELET: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// Facelet indices touched by each corner cubie, in `CORNER_COLOR` order.
#[rustfmt::skip]
pub const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],    // URF
    [6, 18, 38],   // UFL
    [0, 36, 47],   // ULB
    [2, 45, 11],   // UBR
    [29, 26, 15],  // DFR
    [27, 44, 24],  // DLF
    [33, 53, 42],  // DBL
    [35, 17, 51],  // DRB
];

/// Facelet indices touched by each edge cubie, in `EDGE_COLOR` order.
#[rustfmt::skip]
pub const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10],   // UR
    [7, 19],   // UF
    [3, 37],   // UL
    [1, 46],   // UB
    [32, 16],  // DR
    [28, 25],  // DF
    [30, 43],  // DL
    [34, 52],  // DB
    [23, 12],  // FR
    [21, 41],  // FL
    [50, 39],  // BL
    [48, 14],  // BR
];

/// Colors a corner cubie carries, U/D-facing sticker first.
#[rustfmt::skip]
pub const CORNER_COLOR: [[Face; 3]; 8] = [
    [Face::U, Face::R, Face::F],
    [Face::U, Face::F, Face::L],
    [Face::U, Face::L, Face::B],
    [Face::U, Face::B, Face::R],
    [Face::D, Face::F, Face::R],
    [Face::D, Face::L, Face::F],
    [Face::D, Face::B, Face::L],
    [Face::D, Face::R, Face::B],
];

/// Colors an edge cubie carries, U/D-or-F/B-facing sticker first.
#[rustfmt::skip]
pub const EDGE_COLOR: [[Face; 2]; 12] = [
    [Face::U, Face::R],
    [Face::U, Face::F],
    [Face::U, Face::L],
    [Face::U, Face::B],
    [Face::D, Face::R],
    [Face::D, Face::F],
    [Face::D, Face::L],
    [Face::D, Face::B],
    [Face::F, Face::R],
    [Face::F, Face::L],
    [Face::B, Face::L],
    [Face::B, Face::R],
];

impl TryFrom<&CubieCube> for FaceletCube {
    type Error = Error;

    fn try_from(cc: &CubieCube) -> Result<Self, Self::Error> {
        if !cc.is_solvable() {
            return Err(Error::InvalidCubieValue("parity/orientation sum violated"));
        }

        let mut face = FaceletCube::default();

        for (i, corner_faces) in CORNER_FACELET.iter().enumerate() {
            let corner = cc.cp[i] as usize;
            for (j, &idx) in corner_faces.iter().enumerate() {
                face.f[idx] = CORNER_COLOR[corner][(j + (3 - cc.co[i] as usize)) % 3];
            }
        }

        for (i, edge_faces) in EDGE_FACELET.iter().enumerate() {
            let edge = cc.ep[i] as usize;
            for (j, &idx) in edge_faces.iter().enumerate() {
                face.f[idx] = EDGE_COLOR[edge][(j + cc.eo[i] as usize) % 2];
            }
        }

        Ok(face)
    }
}

impl TryFrom<&str> for FaceletCube {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.chars().count() != 54 {
            return Err(Error::InvalidFaceletString);
        }
        let mut face = FaceletCube::default();
        for (i, c) in s.chars().enumerate() {
            face.f[i] = Face::try_from(c).map_err(|_| Error::InvalidFaceletString)?;
        }
        Ok(face)
    }
}

impl fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sticker in self.f {
            write!(f, "{}", sticker)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::{CubieCube, SOLVED_CUBIE_CUBE};
    use crate::moves::Move;

    #[test]
    fn solved_cubie_yields_solved_facelet() {
        let face = FaceletCube::try_from(&SOLVED_CUBIE_CUBE).unwrap();
        assert_eq!(face, SOLVED_FACELET_CUBE);
    }

    #[test]
    fn cubie_facelet_round_trip_after_a_scramble() {
        let scrambled = SOLVED_CUBIE_CUBE.apply_moves(&[
            Move::R, Move::U, Move::R3, Move::F2, Move::D, Move::L3, Move::B,
        ]);
        let face = FaceletCube::try_from(&scrambled).unwrap();
        let back = CubieCube::try_from(&face).unwrap();
        assert_eq!(back, scrambled);
    }

    #[test]
    fn centers_never_move() {
        for (face_index, &idx) in CENTER_FACELET.iter().enumerate() {
            assert_eq!(SOLVED_FACELET_CUBE.f[idx] as usize, face_index);
        }
    }

    #[test]
    fn string_round_trip() {
        let s = SOLVED_FACELET_CUBE.to_string();
        assert_eq!(s.len(), 54);
        assert_eq!(FaceletCube::try_from(s.as_str()).unwrap(), SOLVED_FACELET_CUBE);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(FaceletCube::try_from("UUU").is_err());
    }
}

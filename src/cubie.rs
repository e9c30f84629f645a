use std::ops::Mul;

use crate::error::Error;
use crate::face::Face;
use crate::facelet::{FaceletCube, CORNER_FACELET, EDGE_FACELET};
use crate::moves::Move;

/// The 8 corner cubies, named by the three faces they sit between.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

pub const ALL_CORNERS: [Corner; 8] = [
    Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR,
    Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB,
];

impl TryFrom<u8> for Corner {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_CORNERS.get(value as usize).copied().ok_or(Error::InvalidCorner)
    }
}

/// The 12 edge cubies, named by the two faces they sit between.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

pub const ALL_EDGES: [Edge; 12] = [
    Edge::UR, Edge::UF, Edge::UL, Edge::UB,
    Edge::DR, Edge::DF, Edge::DL, Edge::DB,
    Edge::FR, Edge::FL, Edge::BL, Edge::BR,
];

impl TryFrom<u8> for Edge {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_EDGES.get(value as usize).copied().ok_or(Error::InvalidEdge)
    }
}

/// Cube on the cubie level: a permutation of 8 corners with orientation mod
/// 3, and a permutation of 12 edges with orientation mod 2. `cp[i]`/`ep[i]`
/// name which cubie currently sits in position `i`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [
        Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR,
        Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB,
    ],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [
        Edge::UR, Edge::UF, Edge::UL, Edge::UB,
        Edge::DR, Edge::DF, Edge::DL, Edge::DB,
        Edge::FR, Edge::FL, Edge::BL, Edge::BR,
    ],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

/// `(a * b)` composes `b` first then `a`: applying `a * b` to a solved cube
/// is the same as applying `b`'s moves then `a`'s moves.
impl Mul for CubieCube {
    type Output = Self;

    fn mul(self, rhs: CubieCube) -> Self::Output {
        let mut res = SOLVED_CUBIE_CUBE;
        for i in 0..8 {
            res.cp[i] = self.cp[rhs.cp[i] as usize];
            res.co[i] = (self.co[rhs.cp[i] as usize] + rhs.co[i]) % 3;
        }
        for i in 0..12 {
            res.ep[i] = self.ep[rhs.ep[i] as usize];
            res.eo[i] = (self.eo[rhs.ep[i] as usize] + rhs.eo[i]) % 2;
        }
        res
    }
}

#[rustfmt::skip]
pub const U_MOVE: CubieCube = CubieCube {
    cp: [Corner::UBR, Corner::URF, Corner::UFL, Corner::ULB, Corner::DFR, Corner::DLF, Corner::DBL, Corner::DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [Edge::UB, Edge::UR, Edge::UF, Edge::UL, Edge::DR, Edge::DF, Edge::DL, Edge::DB, Edge::FR, Edge::FL, Edge::BL, Edge::BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const R_MOVE: CubieCube = CubieCube {
    cp: [Corner::DFR, Corner::UFL, Corner::ULB, Corner::URF, Corner::DRB, Corner::DLF, Corner::DBL, Corner::UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [Edge::FR, Edge::UF, Edge::UL, Edge::UB, Edge::BR, Edge::DF, Edge::DL, Edge::DB, Edge::DR, Edge::FL, Edge::BL, Edge::UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const F_MOVE: CubieCube = CubieCube {
    cp: [Corner::UFL, Corner::DLF, Corner::ULB, Corner::UBR, Corner::URF, Corner::DFR, Corner::DBL, Corner::DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [Edge::UR, Edge::FL, Edge::UL, Edge::UB, Edge::DR, Edge::FR, Edge::DL, Edge::DB, Edge::UF, Edge::DF, Edge::BL, Edge::BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

#[rustfmt::skip]
pub const D_MOVE: CubieCube = CubieCube {
    cp: [Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR, Corner::DLF, Corner::DBL, Corner::DRB, Corner::DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [Edge::UR, Edge::UF, Edge::UL, Edge::UB, Edge::DF, Edge::DL, Edge::DB, Edge::DR, Edge::FR, Edge::FL, Edge::BL, Edge::BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const L_MOVE: CubieCube = CubieCube {
    cp: [Corner::URF, Corner::ULB, Corner::DBL, Corner::UBR, Corner::DFR, Corner::UFL, Corner::DLF, Corner::DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [Edge::UR, Edge::UF, Edge::BL, Edge::UB, Edge::DR, Edge::DF, Edge::FL, Edge::DB, Edge::FR, Edge::UL, Edge::DL, Edge::BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
pub const B_MOVE: CubieCube = CubieCube {
    cp: [Corner::URF, Corner::UFL, Corner::UBR, Corner::DRB, Corner::DFR, Corner::DLF, Corner::ULB, Corner::DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [Edge::UR, Edge::UF, Edge::UL, Edge::BR, Edge::DR, Edge::DF, Edge::DL, Edge::BL, Edge::FR, Edge::FL, Edge::UB, Edge::DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

impl CubieCube {
    /// Applies a single move, composing this cube with the move's quarter-,
    /// half- or counter-turn basis cube.
    pub fn apply_move(self, m: Move) -> Self {
        use Move::*;
        let basis = match m {
            U => U_MOVE, U2 => U_MOVE * U_MOVE, U3 => U_MOVE * U_MOVE * U_MOVE,
            R => R_MOVE, R2 => R_MOVE * R_MOVE, R3 => R_MOVE * R_MOVE * R_MOVE,
            F => F_MOVE, F2 => F_MOVE * F_MOVE, F3 => F_MOVE * F_MOVE * F_MOVE,
            D => D_MOVE, D2 => D_MOVE * D_MOVE, D3 => D_MOVE * D_MOVE * D_MOVE,
            L => L_MOVE, L2 => L_MOVE * L_MOVE, L3 => L_MOVE * L_MOVE * L_MOVE,
            B => B_MOVE, B2 => B_MOVE * B_MOVE, B3 => B_MOVE * B_MOVE * B_MOVE,
        };
        self * basis
    }

    /// Applies a sequence of moves in order.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |acc, &m| acc.apply_move(m))
    }

    fn corner_parity(&self) -> u8 {
        let mut inversions = 0u32;
        for i in 0..8 {
            for j in (i + 1)..8 {
                if self.cp[i] as u8 > self.cp[j] as u8 {
                    inversions += 1;
                }
            }
        }
        (inversions % 2) as u8
    }

    fn edge_parity(&self) -> u8 {
        let mut inversions = 0u32;
        for i in 0..12 {
            for j in (i + 1)..12 {
                if self.ep[i] as u8 > self.ep[j] as u8 {
                    inversions += 1;
                }
            }
        }
        (inversions % 2) as u8
    }

    /// True when the permutation parities and orientation sums satisfy the
    /// invariants a reachable cube state must satisfy.
    pub fn is_solvable(&self) -> bool {
        let co_sum: u16 = self.co.iter().map(|&x| x as u16).sum();
        let eo_sum: u16 = self.eo.iter().map(|&x| x as u16).sum();
        co_sum % 3 == 0 && eo_sum % 2 == 0 && self.corner_parity() == self.edge_parity()
    }
}

impl TryFrom<&FaceletCube> for CubieCube {
    type Error = Error;

    fn try_from(face: &FaceletCube) -> Result<Self, Self::Error> {
        let mut state = SOLVED_CUBIE_CUBE;

        for i in 0..8 {
            let mut ori = 0usize;
            for index in 0..3 {
                ori = index;
                if face.f[CORNER_FACELET[i][ori]] == Face::U || face.f[CORNER_FACELET[i][ori]] == Face::D {
                    break;
                }
            }
            let col1 = face.f[CORNER_FACELET[i][(ori + 1) % 3]];
            let col2 = face.f[CORNER_FACELET[i][(ori + 2) % 3]];

            let mut found = false;
            for j in 0..8 {
                let corner_colors = crate::facelet::CORNER_COLOR[j];
                if col1 == corner_colors[1] && col2 == corner_colors[2] {
                    state.cp[i] = Corner::try_from(j as u8)?;
                    state.co[i] = ori as u8;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InvalidFaceletString);
            }
        }

        for i in 0..12 {
            let mut found = false;
            for j in 0..12 {
                let edge_colors = crate::facelet::EDGE_COLOR[j];
                if face.f[EDGE_FACELET[i][0]] == edge_colors[0] && face.f[EDGE_FACELET[i][1]] == edge_colors[1] {
                    state.ep[i] = Edge::try_from(j as u8)?;
                    state.eo[i] = 0;
                    found = true;
                    break;
                }
                if face.f[EDGE_FACELET[i][0]] == edge_colors[1] && face.f[EDGE_FACELET[i][1]] == edge_colors[0] {
                    state.ep[i] = Edge::try_from(j as u8)?;
                    state.eo[i] = 1;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InvalidFaceletString);
            }
        }

        if !state.is_solvable() {
            return Err(Error::InvalidCubieValue("parity/orientation sum violated"));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_is_solvable() {
        assert!(SOLVED_CUBIE_CUBE.is_solvable());
    }

    #[test]
    fn any_single_move_from_solved_is_solvable() {
        for m in crate::moves::ALL_MOVES {
            assert!(SOLVED_CUBIE_CUBE.apply_move(m).is_solvable(), "{m} broke an invariant");
        }
    }

    #[test]
    fn four_quarter_turns_return_to_solved() {
        for m in [Move::U, Move::R, Move::F, Move::D, Move::L, Move::B] {
            let mut c = SOLVED_CUBIE_CUBE;
            for _ in 0..4 {
                c = c.apply_move(m);
            }
            assert_eq!(c, SOLVED_CUBIE_CUBE);
        }
    }

    #[test]
    fn move_then_its_inverse_is_identity() {
        for m in crate::moves::ALL_MOVES {
            let inv = crate::moves::inverted_move(m);
            let c = SOLVED_CUBIE_CUBE.apply_move(m).apply_move(inv);
            assert_eq!(c, SOLVED_CUBIE_CUBE);
        }
    }
}

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::Error;
use crate::face::{Face, ALL_FACES};

/// One of the 18 quarter- or half-turn moves, three per face.
///
/// Variants are declared in `face * 3 + k` order (`k = 0` clockwise quarter,
/// `k = 1` half turn, `k = 2` counter-clockwise quarter), matching
/// `Move as usize` to the canonical index used by every table in this
/// module. There is no `MOVE_NULL` variant; the identity move is `None` of
/// `Option<Move>` wherever a move-or-nothing value is needed (composing two
/// moves that cancel, a null rotation, an empty lookup result).
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

/// Canonical enumeration order, `move as usize` indexes into this and into
/// every table below.
pub const ALL_MOVES: [Move; 18] = [
    Move::U, Move::U2, Move::U3,
    Move::R, Move::R2, Move::R3,
    Move::F, Move::F2, Move::F3,
    Move::D, Move::D2, Move::D3,
    Move::L, Move::L2, Move::L3,
    Move::B, Move::B2, Move::B3,
];

impl Move {
    /// The face this move turns.
    pub fn face(self) -> Face {
        ALL_FACES[self as usize / 3]
    }

    /// Index within the face's three moves: `0` clockwise, `1` half turn,
    /// `2` counter-clockwise.
    fn turn_index(self) -> usize {
        self as usize % 3
    }

    /// Number of quarter turns clockwise this move represents, `1..=3`.
    fn quarter_turns(self) -> usize {
        self.turn_index() + 1
    }

    fn from_face_and_turn(face: Face, turn_index: usize) -> Move {
        ALL_MOVES[face as usize * 3 + turn_index]
    }

    /// Move obtained by composing `quarter_turns` clockwise quarter turns of
    /// `face`, or `None` if they cancel out (a multiple of 4).
    fn from_face_and_quarter_turns(face: Face, quarter_turns: usize) -> Option<Move> {
        let q = quarter_turns % 4;
        if q == 0 {
            None
        } else {
            Some(Move::from_face_and_turn(face, q - 1))
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.turn_index() {
            0 => "",
            1 => "2",
            _ => "'",
        };
        write!(f, "{}{}", self.face(), suffix)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face_char = chars.next().ok_or_else(|| Error::MalformedInput(s.to_string()))?;
        let face = Face::try_from(face_char).map_err(|_| Error::MalformedInput(s.to_string()))?;
        let turn_index = match chars.next() {
            None => 0,
            Some('2') => 1,
            Some('\'') | Some('3') => 2,
            Some(_) => return Err(Error::MalformedInput(s.to_string())),
        };
        if chars.next().is_some() {
            return Err(Error::MalformedInput(s.to_string()));
        }
        Ok(Move::from_face_and_turn(face, turn_index))
    }
}

/// `inverted_move[m as usize]` undoes `m`: `F <-> F'`, `F2` fixed.
pub fn inverted_move(m: Move) -> Move {
    INVERTED_MOVE[m as usize]
}

/// `face_of_move[m as usize]` is the face `m` turns.
pub fn face_of_move(m: Move) -> Face {
    m.face()
}

/// `opposite_face[f as usize]` is the face parallel to `f`.
pub fn opposite_face(f: Face) -> Face {
    f.opposite()
}

/// Move obtained by composing `m1` then `m2` when both act on the same
/// face, summing quarter-turn counts mod 4. Returns `None` (the identity)
/// when the sum is a multiple of 4. Panics if `m1` and `m2` act on
/// different faces — callers are expected to have checked `face_of_move`
/// equality first, as the simplifier does.
pub fn compose_same_face(m1: Move, m2: Move) -> Option<Move> {
    assert_eq!(m1.face(), m2.face(), "compose_same_face requires a shared face");
    Move::from_face_and_quarter_turns(m1.face(), m1.quarter_turns() + m2.quarter_turns())
}

/// Move obtained by conjugating `m` by `k` clockwise whole-cube rotations
/// around the U/D axis. Conjugation by a cube rotation preserves chirality,
/// so the turn index (quarter/half/counter) is unchanged; only the face the
/// move acts on rotates.
pub fn rotate_y(k: u8, m: Move) -> Move {
    Move::from_face_and_turn(m.face().rotate_y(k), m.turn_index())
}

lazy_static! {
    static ref INVERTED_MOVE: [Move; 18] = {
        let mut table = ALL_MOVES;
        for (i, m) in ALL_MOVES.iter().enumerate() {
            let inverse_quarters = 4 - m.quarter_turns();
            table[i] = Move::from_face_and_quarter_turns(m.face(), inverse_quarters)
                .expect("inverse of a nonzero quarter-turn count is never the identity");
        }
        table
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_parse() {
        for m in ALL_MOVES {
            let text = m.to_string();
            assert_eq!(Move::from_str(&text).unwrap(), m);
        }
    }

    #[test]
    fn inverted_move_is_an_involution_and_same_face() {
        for m in ALL_MOVES {
            let inv = inverted_move(m);
            assert_eq!(inv.face(), m.face());
            assert_eq!(inverted_move(inv), m);
        }
        assert_eq!(inverted_move(Move::F), Move::F3);
        assert_eq!(inverted_move(Move::F2), Move::F2);
        assert_eq!(inverted_move(Move::F3), Move::F);
    }

    #[test]
    fn compose_same_face_sums_quarter_turns_mod_four() {
        assert_eq!(compose_same_face(Move::U, Move::U), Some(Move::U2));
        assert_eq!(compose_same_face(Move::U, Move::U3), None);
        assert_eq!(compose_same_face(Move::U2, Move::U2), None);
        assert_eq!(compose_same_face(Move::U, Move::U2), Some(Move::U3));
    }

    #[test]
    #[should_panic]
    fn compose_same_face_panics_on_mismatched_faces() {
        let _ = compose_same_face(Move::U, Move::R);
    }

    #[test]
    fn rotate_y_preserves_turn_kind() {
        assert_eq!(rotate_y(1, Move::F), Move::R);
        assert_eq!(rotate_y(1, Move::F2), Move::R2);
        assert_eq!(rotate_y(1, Move::F3), Move::R3);
        assert_eq!(rotate_y(0, Move::U), Move::U);
        assert_eq!(rotate_y(4, Move::F), Move::F);
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert!(Move::from_str("X").is_err());
        assert!(Move::from_str("U4").is_err());
        assert!(Move::from_str("").is_err());
    }

    #[test]
    fn parse_accepts_digit_three_as_prime() {
        assert_eq!(Move::from_str("U3").unwrap(), Move::U3);
        assert_eq!(Move::from_str("U'").unwrap(), Move::U3);
    }
}

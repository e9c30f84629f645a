use std::fmt;

use crate::error::Error;

/// One of the six faces of the cube. Also used as the sticker label, since a
/// solved sticker on face `X` always carries color `X`.
///
/// `ALL_FACES` fixes the conventional enumeration order `U, R, F, D, L, B`
/// used throughout the crate as the array-index order for move and face
/// tables (`face as usize`).
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Face {
    U, R, F, D, L, B,
}

/// Conventional enumeration order, `face as usize` indexes into this.
pub const ALL_FACES: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Face {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Face::U),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'B' => Ok(Face::B),
            _ => Err(Error::InvalidColor),
        }
    }
}

impl Face {
    /// The face parallel to this one: `U<->D`, `R<->L`, `F<->B`.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::R => Face::L,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// Face label after the whole cube is rotated `k` clockwise quarter
    /// turns around the U/D axis (a "y" rotation). `U` and `D` are fixed;
    /// `F -> R -> B -> L -> F`.
    pub fn rotate_y(self, k: u8) -> Face {
        let k = k % 4;
        let mut f = self;
        for _ in 0..k {
            f = match f {
                Face::U => Face::U,
                Face::D => Face::D,
                Face::F => Face::R,
                Face::R => Face::B,
                Face::B => Face::L,
                Face::L => Face::F,
            };
        }
        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for f in ALL_FACES {
            assert_eq!(f.opposite().opposite(), f);
            assert_ne!(f.opposite(), f);
        }
    }

    #[test]
    fn rotate_y_is_a_four_cycle_on_sides() {
        assert_eq!(Face::F.rotate_y(1), Face::R);
        assert_eq!(Face::R.rotate_y(1), Face::B);
        assert_eq!(Face::B.rotate_y(1), Face::L);
        assert_eq!(Face::L.rotate_y(1), Face::F);
        assert_eq!(Face::U.rotate_y(1), Face::U);
        assert_eq!(Face::D.rotate_y(1), Face::D);
        for f in ALL_FACES {
            assert_eq!(f.rotate_y(4), f);
            assert_eq!(f.rotate_y(0), f);
        }
    }

    #[test]
    fn try_from_char_rejects_unknown() {
        assert!(Face::try_from('X').is_err());
        assert_eq!(Face::try_from('U').unwrap(), Face::U);
    }
}

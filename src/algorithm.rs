use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::face::Face;
use crate::moves::{inverted_move, rotate_y, compose_same_face, Move};

/// Floor below which capacity never shrinks, and the capacity a fresh
/// `create(0)` grows to on its first insert.
const MIN_RESIZE: usize = 8;

/// An owned, mutable, growable sequence of moves.
///
/// Capacity management is explicit rather than left to `Vec`'s own growth
/// heuristic: capacity doubles when an insert would overflow it, and halves
/// once the logical length drops to a quarter of capacity, never below
/// `MIN_RESIZE`, rather than relying on `Vec::push`'s amortized-growth
/// behavior, whose exact factor isn't part of its API contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    /// Empty sequence with at least `cap` reserved capacity.
    pub fn create(cap: usize) -> Algorithm {
        Algorithm { moves: Vec::with_capacity(cap) }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn get(&self, i: usize) -> Option<Move> {
        self.moves.get(i).copied()
    }

    /// Distinct-storage deep copy.
    pub fn copy(&self) -> Algorithm {
        self.clone()
    }

    fn grow_if_full(&mut self) -> Result<(), Error> {
        if self.moves.len() == self.moves.capacity() {
            let cap = self.moves.capacity();
            let new_cap = (cap * 2).max(MIN_RESIZE);
            self.moves.try_reserve_exact(new_cap - cap).map_err(|_| Error::OutOfMemory)?;
        }
        Ok(())
    }

    fn shrink_if_sparse(&mut self) {
        let cap = self.moves.capacity();
        let len = self.moves.len();
        if cap > MIN_RESIZE && len <= cap / 4 {
            let new_cap = (cap / 2).max(MIN_RESIZE);
            self.moves.shrink_to(new_cap);
        }
    }

    /// Fails when `i > length`; otherwise shifts `[i, length)` up by one and
    /// writes `m` at `i`, growing capacity by doubling if full.
    pub fn insert(&mut self, m: Move, i: usize) -> Result<(), Error> {
        if i > self.moves.len() {
            return Err(Error::OutOfBounds { index: i, length: self.moves.len() });
        }
        self.grow_if_full()?;
        self.moves.insert(i, m);
        Ok(())
    }

    /// Appends `m` to the end; equivalent to `insert(m, len())`.
    pub fn push(&mut self, m: Move) -> Result<(), Error> {
        let len = self.moves.len();
        self.insert(m, len)
    }

    /// Fails when `i >= length`; otherwise shifts `[i+1, length)` down by
    /// one, shrinking capacity by halving once `length <= capacity/4` and
    /// `capacity > MIN_RESIZE`.
    pub fn delete(&mut self, i: usize) -> Result<Move, Error> {
        if i >= self.moves.len() {
            return Err(Error::OutOfBounds { index: i, length: self.moves.len() });
        }
        let m = self.moves.remove(i);
        self.shrink_if_sparse();
        Ok(m)
    }

    /// In place: reverses the sequence and replaces each move with its
    /// inverse.
    pub fn invert(&mut self) {
        self.moves.reverse();
        for m in self.moves.iter_mut() {
            *m = inverted_move(*m);
        }
    }

    /// Appends `src` element-wise, growing once if needed.
    pub fn concat(&mut self, src: &Algorithm) -> Result<(), Error> {
        let needed = self.moves.len() + src.moves.len();
        if needed > self.moves.capacity() {
            let extra = needed - self.moves.capacity();
            self.moves.try_reserve_exact(extra).map_err(|_| Error::OutOfMemory)?;
        }
        self.moves.extend_from_slice(&src.moves);
        Ok(())
    }

    /// Replaces each element `m` with `rotate_y(k mod 4, m)`.
    pub fn rotate_on_y(&mut self, k: u8) {
        for m in self.moves.iter_mut() {
            *m = rotate_y(k % 4, *m);
        }
    }

    /// Parses whitespace-separated move tokens. Fails on the first
    /// unrecognized token.
    pub fn parse(text: &str) -> Result<Algorithm, Error> {
        let moves = text
            .split_whitespace()
            .map(Move::from_str)
            .collect::<Result<Vec<Move>, Error>>()?;
        Ok(Algorithm { moves })
    }

    /// Reduces adjacent moves to canonical form: same-face moves compose by
    /// summing quarter turns mod 4; opposite-face moves commute and may be
    /// reordered to expose further same-face runs. See module docs for the
    /// write-cursor/scan-cursor algorithm this implements.
    pub fn simplify(&mut self) {
        simplify_moves(&mut self.moves);
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for m in &self.moves {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{m}")?;
            first = false;
        }
        Ok(())
    }
}

fn face_of(m: Move) -> Face {
    m.face()
}

/// The write-cursor/scan-cursor simplifier, operating directly on the
/// backing vector. A naive `while (--i > 0)` back-up loop underflows at
/// `i == 0`; here `i == 0` is checked as an explicit stopping condition
/// instead of being reached by decrementing past it.
fn simplify_moves(moves: &mut Vec<Move>) {
    if moves.len() < 2 {
        return;
    }
    let mut i = 0usize;
    let mut j = i + 1;

    while j < moves.len() {
        while j < moves.len() - 1 && j > 0 && face_of(moves[j]) == face_of(moves[i]).opposite() {
            j += 1;
        }
        if j >= moves.len() {
            break;
        }

        if face_of(moves[i]) == face_of(moves[j]) {
            let mut went_null = false;
            loop {
                match compose_same_face(moves[i], moves[j]) {
                    Some(composed) => {
                        moves[i] = composed;
                        moves.remove(j);
                    }
                    None => {
                        moves.remove(j);
                        moves.remove(i);
                        went_null = true;
                        break;
                    }
                }
                if j >= moves.len() || face_of(moves[i]) != face_of(moves[j]) {
                    break;
                }
            }

            if went_null {
                if i == 0 {
                    j = i + 1;
                } else {
                    i -= 1;
                    while i > 0 {
                        let prev = moves[i - 1];
                        let cur = moves[i];
                        if face_of(prev) == face_of(cur) || face_of(prev) == face_of(cur).opposite() {
                            i -= 1;
                        } else {
                            break;
                        }
                    }
                    j = i + 1;
                }
                continue;
            }
        }

        i += 1;
        j = i + 1;
    }
}

/// An ordered collection of owned algorithms, used when a dictionary key
/// maps to more than one equivalent solving sequence. Same growth policy as
/// [`Algorithm`].
#[derive(Debug, Clone, Default)]
pub struct AlgorithmList {
    algs: Vec<Algorithm>,
}

impl AlgorithmList {
    pub fn create(cap: usize) -> AlgorithmList {
        AlgorithmList { algs: Vec::with_capacity(cap) }
    }

    pub fn len(&self) -> usize {
        self.algs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algs.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Algorithm> {
        self.algs.get(i)
    }

    pub fn last(&self) -> Option<&Algorithm> {
        self.algs.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Algorithm> {
        self.algs.iter()
    }

    /// Appends a deep copy of `alg`, growing capacity by doubling if full.
    pub fn push(&mut self, alg: Algorithm) -> Result<(), Error> {
        if self.algs.len() == self.algs.capacity() {
            let cap = self.algs.capacity();
            let new_cap = (cap * 2).max(MIN_RESIZE);
            self.algs.try_reserve_exact(new_cap - cap).map_err(|_| Error::OutOfMemory)?;
        }
        self.algs.push(alg);
        Ok(())
    }
}

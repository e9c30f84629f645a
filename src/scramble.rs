//! Scramble string conversion and random scramble generation, built on top
//! of [`Algorithm`]'s parse/display.

use rand::Rng;

use crate::algorithm::Algorithm;
use crate::error::Error;
use crate::face::ALL_FACES;
use crate::moves::ALL_MOVES;

/// Parses a whitespace-separated scramble string into an [`Algorithm`].
pub fn scramble_from_str(text: &str) -> Result<Algorithm, Error> {
    Algorithm::parse(text)
}

/// Renders an algorithm back to its scramble-string form.
pub fn scramble_to_str(alg: &Algorithm) -> String {
    alg.to_string()
}

/// A uniformly random scramble of `len` moves, never repeating the same
/// face on consecutive moves (an immediate repeat either composes into a
/// single different-magnitude turn or cancels outright, so it would never
/// appear in an irreducible scramble).
pub fn random_scramble<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Algorithm {
    let mut alg = Algorithm::create(len);
    let mut last_face = None;

    for _ in 0..len {
        let face = loop {
            let candidate = ALL_FACES[rng.gen_range(0..6)];
            if Some(candidate) != last_face {
                break candidate;
            }
        };
        let turn_index = rng.gen_range(0..3usize);
        let m = ALL_MOVES[face as usize * 3 + turn_index];
        alg.push(m).expect("scramble length never exceeds reserved capacity");
        last_face = Some(face);
    }
    alg
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_string_round_trips_through_parse_and_display() {
        let text = "R U2 F' L3 D B2";
        let alg = scramble_from_str(text).unwrap();
        assert_eq!(scramble_to_str(&alg), "R U2 F' L' D B2");
    }

    #[test]
    fn scramble_from_str_rejects_malformed_token() {
        assert!(scramble_from_str("R X").is_err());
    }

    #[test]
    fn random_scramble_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let alg = random_scramble(&mut rng, 25);
        assert_eq!(alg.len(), 25);
    }

    #[test]
    fn random_scramble_never_repeats_a_face_consecutively() {
        let mut rng = StdRng::seed_from_u64(7);
        let alg = random_scramble(&mut rng, 200);
        let moves = alg.as_slice();
        for pair in moves.windows(2) {
            assert_ne!(pair[0].face(), pair[1].face());
        }
    }
}

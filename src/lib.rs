//! A 3x3 Rubik's cube engine and F2L + 1-look-last-layer lookup solver.
//!
//! Two cube representations are kept in lockstep: [`cubie`] (corner/edge
//! permutation and orientation, the representation moves and solvability
//! checks are defined over) and [`packed`] (six 64-bit sticker words, the
//! representation masked comparisons and dictionary keys use). [`facelet`]
//! bridges them and parses/prints the plain-string cube format. [`moves`]
//! and [`algorithm`] are the move algebra; [`mask`] names the partial-state
//! comparisons the solver stages key on; [`dict`] is the fixed-capacity
//! hash table those stages look entries up in; [`tables`] builds the F2L
//! and 1LLL dictionaries by BFS; [`solver`] runs the pipeline; [`scramble`]
//! converts between scramble strings and random scrambles.

pub mod algorithm;
pub mod cubie;
pub mod dict;
pub mod error;
pub mod face;
pub mod facelet;
pub mod mask;
pub mod moves;
pub mod packed;
pub mod scramble;
pub mod solver;
pub mod tables;

pub use algorithm::{Algorithm, AlgorithmList};
pub use cubie::CubieCube;
pub use dict::CubeDictionary;
pub use error::Error;
pub use face::Face;
pub use facelet::FaceletCube;
pub use moves::Move;
pub use packed::PackedCube;
pub use solver::{Solver, SolverConfig};

use thiserror::Error;

/// Errors surfaced by the cube engine, move algebra, dictionaries and solver.
///
/// All operations report failure through a `Result`; nothing in this crate
/// terminates the process on a user-reachable error. The one exception is
/// `InvariantViolation`, which a table generator raises via `panic!` after
/// printing a diagnostic — it signals a bug in the generator itself, not a
/// runtime condition a caller can recover from.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// A scramble or algorithm string contained a token outside the move
    /// grammar.
    #[error("malformed move token {0:?}")]
    MalformedInput(String),

    /// `insert`/`delete` was asked for an index past the end of the sequence.
    #[error("index {index} out of bounds for algorithm of length {length}")]
    OutOfBounds { index: usize, length: usize },

    /// Capacity growth could not be satisfied. Vec's allocator normally
    /// aborts rather than returning this, so in practice this only surfaces
    /// from the explicit `try_reserve` call in the algorithm buffer.
    #[error("allocation failed while growing algorithm storage")]
    OutOfMemory,

    /// A dictionary insert probed every slot without finding a free or
    /// matching one.
    #[error("dictionary is full, cannot insert key")]
    TableFull,

    /// A facelet string was not 54 characters of `{U,R,F,D,L,B}`.
    #[error("invalid facelet string")]
    InvalidFaceletString,

    /// A cubie-level corner index outside `0..8`.
    #[error("invalid corner")]
    InvalidCorner,

    /// A cubie-level edge index outside `0..12`.
    #[error("invalid edge")]
    InvalidEdge,

    /// A facelet color outside `{U,R,F,D,L,B}`.
    #[error("invalid color")]
    InvalidColor,

    /// A cubie cube failed the solvability invariant (parity/orientation).
    #[error("invalid cubie cube: {0}")]
    InvalidCubieValue(&'static str),

    /// A solver stage queried a dictionary and found nothing for the key.
    #[error("no solution found in stage {0}")]
    LookupMiss(&'static str),
}

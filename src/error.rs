use thiserror::Error;

/// An error type for permutation construction and use.
///
/// Values are widened to `i128` so the same type serves every integer domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermuteError {
    /// The range has fewer than four values.
    #[error("invalid range: the difference between minimum and maximum values should be at least 3 (got {min}..={max})")]
    InvalidRange { min: i128, max: i128 },

    /// Fewer than three Feistel rounds were requested.
    #[error("invalid rounds: must be an odd integer greater or equal to 3 (got {0})")]
    InvalidRounds(u32),

    /// The digit length bounds of a dynamic range are unusable.
    #[error("invalid length: minimum length must be 1 or greater and not above the maximum length (got {min_length}, max {max_length:?})")]
    InvalidLength {
        min_length: u32,
        max_length: Option<u32>,
    },

    /// The value is not within the range of the permutation.
    #[error("value out of range: {value} is not within {min}..={max}")]
    ValueOutOfRange { value: i128, min: i128, max: i128 },

    /// The decimal window a dynamic range needs for this value is not allowed or not representable.
    #[error("length out of range: a {0}-digit window is not supported")]
    LengthOutOfRange(u32),

    /// No input maps to this value under the dynamic range.
    #[error("{0} is not an encoded value")]
    NotAnEncoding(i128),

    /// Cycle walking never landed inside the range, which would imply a bug somewhere.
    #[error("infinite cycle walking detected after {0} walks")]
    CycleWalkExhausted(u32),
}

//! Range strategies: policies that choose the range a value is permuted in.
//!
//! A strategy only computes bounds and shifts values in and out of them. The
//! permutation itself is always done by [`Permuteseq`].

use crate::error::PermuteError;
use crate::integer::Integer;
use crate::key::ScrambledKey;
use crate::permuteseq::{check_rounds, Direction, Permuteseq};

/// Chooses the range a value is permuted in.
pub trait RangeStrategy {
    /// The integer domain of the values.
    type Value: Integer;

    /// Computes the `(min, max)` range used to encode or decode `value`.
    fn bounds(
        &self,
        value: Self::Value,
        direction: Direction,
    ) -> Result<(Self::Value, Self::Value), PermuteError>;

    /// Maps a plain value into the range before encoding.
    fn adjust(&self, value: Self::Value, _bounds: (Self::Value, Self::Value)) -> Self::Value {
        value
    }

    /// Maps a decoded value back out of the range.
    ///
    /// Returns `None` if no plain value adjusts to `value`.
    fn unadjust(
        &self,
        value: Self::Value,
        _bounds: (Self::Value, Self::Value),
    ) -> Option<Self::Value> {
        Some(value)
    }
}

/// A range fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRange<T: Integer> {
    min: T,
    max: T,
}

impl<T: Integer> FixedRange<T> {
    /// Creates a new fixed range. It must hold at least 4 values.
    pub fn new(min: T, max: T) -> Result<Self, PermuteError> {
        if max.widen() - min.widen() + 1 < Permuteseq::<T>::MIN_INTERVAL as i128 {
            return Err(PermuteError::InvalidRange {
                min: min.widen(),
                max: max.widen(),
            });
        }
        Ok(Self { min, max })
    }
}

impl<T: Integer> RangeStrategy for FixedRange<T> {
    type Value = T;

    fn bounds(&self, _value: T, _direction: Direction) -> Result<(T, T), PermuteError> {
        Ok((self.min, self.max))
    }
}

/// A range that grows with the number of decimal digits of the input.
///
/// A value with `n` digits, or fewer than the minimum length `m`, is shifted
/// into `10^l..=10^(l+1)-1` with `l = max(n, m)` before being encoded. Encoded
/// values therefore have exactly one more digit than the length they were
/// encoded with, and can be decoded without knowing the original length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynamicLength {
    min_length: u32,
    max_length: Option<u32>,
}

impl DynamicLength {
    /// Longest length whose window still fits in a `u64`.
    pub const MAX_LENGTH: u32 = 18;

    /// Creates a new dynamic range with the given minimum length and no maximum length.
    pub fn new(min_length: u32) -> Result<Self, PermuteError> {
        Self::with_max_length(min_length, None)
    }

    /// Creates a new dynamic range whose length is bounded on both sides.
    ///
    /// Values longer than `max_length` digits are rejected instead of expanding the range.
    pub fn with_max_length(min_length: u32, max_length: Option<u32>) -> Result<Self, PermuteError> {
        let upper = max_length.unwrap_or(Self::MAX_LENGTH);
        if min_length < 1 || upper > Self::MAX_LENGTH || min_length > upper {
            return Err(PermuteError::InvalidLength {
                min_length,
                max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> u32 {
        self.min_length
    }

    pub fn max_length(&self) -> Option<u32> {
        self.max_length
    }

    fn window(&self, length: u32) -> Result<(u64, u64), PermuteError> {
        if length > self.max_length.unwrap_or(Self::MAX_LENGTH) {
            return Err(PermuteError::LengthOutOfRange(length));
        }
        let min = 10u64
            .checked_pow(length)
            .ok_or(PermuteError::LengthOutOfRange(length))?;
        let max = 10u64
            .checked_pow(length + 1)
            .ok_or(PermuteError::LengthOutOfRange(length))?;
        Ok((min, max - 1))
    }
}

/// Number of decimal digits of `value`.
fn digits(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

impl RangeStrategy for DynamicLength {
    type Value = u64;

    fn bounds(&self, value: u64, direction: Direction) -> Result<(u64, u64), PermuteError> {
        let length = match direction {
            Direction::Encode => digits(value).max(self.min_length),
            Direction::Decode => {
                let length = digits(value) - 1;
                if length < self.min_length {
                    return Err(PermuteError::NotAnEncoding(value as i128));
                }
                length
            }
        };
        self.window(length)
    }

    fn adjust(&self, value: u64, (min, _): (u64, u64)) -> u64 {
        value + min
    }

    fn unadjust(&self, value: u64, (min, _): (u64, u64)) -> Option<u64> {
        let plain = value - min;
        if plain >= min {
            return None;
        }
        // Shorter values are only ever encoded with the minimum length.
        let length = min.ilog10();
        if length > self.min_length && digits(plain) < length {
            return None;
        }
        Some(plain)
    }
}

/// A permutation whose range is chosen per value by a [`RangeStrategy`].
#[derive(Clone, Debug)]
pub struct RangedPermutation<S> {
    key: ScrambledKey,
    rounds: u32,
    strategy: S,
}

/// A permutation over a fixed range.
pub type FixedPermutation<T = i64> = RangedPermutation<FixedRange<T>>;

/// A permutation over a range derived from the decimal length of each value.
pub type DynamicPermutation = RangedPermutation<DynamicLength>;

impl<S: RangeStrategy> RangedPermutation<S> {
    /// Creates a new permutation using `strategy` to choose ranges.
    pub fn new(key: i64, strategy: S, rounds: u32) -> Result<Self, PermuteError> {
        check_rounds(rounds)?;
        Ok(Self {
            key: ScrambledKey::scramble(key),
            rounds,
            strategy,
        })
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    fn engine(&self, bounds: (S::Value, S::Value)) -> Result<Permuteseq<S::Value>, PermuteError> {
        Permuteseq::from_parts(self.key, bounds.0, bounds.1, self.rounds)
    }

    /// Encodes a value.
    pub fn encode(&self, value: S::Value) -> Result<S::Value, PermuteError> {
        let bounds = self.strategy.bounds(value, Direction::Encode)?;
        let adjusted = self.strategy.adjust(value, bounds);
        self.engine(bounds)?.encode(adjusted)
    }

    /// Decodes a value previously returned by [`Self::encode`].
    pub fn decode(&self, value: S::Value) -> Result<S::Value, PermuteError> {
        let bounds = self.strategy.bounds(value, Direction::Decode)?;
        let decoded = self.engine(bounds)?.decode(value)?;
        self.strategy
            .unadjust(decoded, bounds)
            .ok_or(PermuteError::NotAnEncoding(value.widen()))
    }
}

impl<T: Integer> RangedPermutation<FixedRange<T>> {
    /// Creates a new permutation of `min..=max`.
    pub fn fixed(key: i64, min: T, max: T, rounds: u32) -> Result<Self, PermuteError> {
        Self::new(key, FixedRange::new(min, max)?, rounds)
    }
}

impl RangedPermutation<DynamicLength> {
    /// Creates a new permutation of values with at least `min_length` decimal digits.
    pub fn dynamic(key: i64, min_length: u32, rounds: u32) -> Result<Self, PermuteError> {
        Self::new(key, DynamicLength::new(min_length)?, rounds)
    }
}

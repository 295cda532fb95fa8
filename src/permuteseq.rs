use crate::error::PermuteError;
use crate::feistel;
use crate::integer::Integer;
use crate::key::ScrambledKey;
use crate::tracing_helpers::{debug_log, warn_log};

/// Which way a permutation is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Maps a plain value to its obfuscated counterpart.
    Encode,
    /// Maps an obfuscated value back to the plain value.
    Decode,
}

impl Direction {
    /// Whether the sub-keys are applied in reverse order.
    pub fn is_reverse(self) -> bool {
        self == Direction::Decode
    }
}

/// A keyed permutation of the integers in `min..=max`.
///
/// The output is constrained to the boundaries of the range by using a
/// cycle-walking cipher on top of a Feistel network. For a given key, range and
/// number of rounds, results are identical to those of the `permuteseq`
/// PostgreSQL extension.
///
/// The structure is immutable; a single instance can be shared between threads.
#[derive(Clone, Debug)]
pub struct Permuteseq<T: Integer = i64> {
    key: ScrambledKey,
    min: T,
    max: T,
    rounds: u32,
}

impl<T: Integer> Permuteseq<T> {
    /// Number of Feistel rounds used by the convenience constructors.
    pub const DEFAULT_ROUNDS: u32 = 7;
    /// Minimum number of Feistel rounds.
    pub const MIN_ROUNDS: u32 = 3;
    /// Minimum number of values in a range.
    pub const MIN_INTERVAL: u128 = 4;

    /// Generates a new random key.
    #[cfg(feature = "random")]
    pub fn generate_key() -> i64 {
        rand::random()
    }

    /// Creates a new permutation of `min..=max`.
    ///
    /// # Arguments
    ///
    /// * `key` - The secret key.
    /// * `min` - Smallest value of the range.
    /// * `max` - Largest value of the range. The range must hold at least 4 values.
    /// * `rounds` - Number of rounds of the Feistel network, at least 3. Odd numbers are recommended.
    pub fn new(key: i64, min: T, max: T, rounds: u32) -> Result<Self, PermuteError> {
        check_rounds(rounds)?;
        Self::from_parts(ScrambledKey::scramble(key), min, max, rounds)
    }

    /// Creates a new permutation of the whole domain of `T` with the default number of rounds.
    pub fn with_key(key: i64) -> Self {
        Self {
            key: ScrambledKey::scramble(key),
            min: T::MIN,
            max: T::MAX,
            rounds: Self::DEFAULT_ROUNDS,
        }
    }

    /// Creates a new permutation of `0..=T::MAX` with the default number of rounds.
    pub fn create(key: i64) -> Self {
        Self {
            key: ScrambledKey::scramble(key),
            min: T::ZERO,
            max: T::MAX,
            rounds: Self::DEFAULT_ROUNDS,
        }
    }

    /// Creates a new permutation of `min..=max` with a random key and the default number of rounds.
    #[cfg(feature = "random")]
    pub fn new_random(min: T, max: T) -> Result<Self, PermuteError> {
        Self::new(Self::generate_key(), min, max, Self::DEFAULT_ROUNDS)
    }

    /// Builds a permutation from an already scrambled key. The round count must have been checked.
    pub(crate) fn from_parts(
        key: ScrambledKey,
        min: T,
        max: T,
        rounds: u32,
    ) -> Result<Self, PermuteError> {
        let interval = max.widen() - min.widen() + 1;
        if interval < Self::MIN_INTERVAL as i128 {
            return Err(PermuteError::InvalidRange {
                min: min.widen(),
                max: max.widen(),
            });
        }
        debug_log!(
            min = %min,
            max = %max,
            rounds = rounds,
            hsz = feistel::half_block_size(interval as u128),
            "permutation ready"
        );
        Ok(Self {
            key,
            min,
            max,
            rounds,
        })
    }

    /// Smallest value of the range.
    pub fn min(&self) -> T {
        self.min
    }

    /// Largest value of the range.
    pub fn max(&self) -> T {
        self.max
    }

    /// Number of Feistel rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Number of values in the range.
    pub fn len(&self) -> u128 {
        (self.max.widen() - self.min.widen() + 1) as u128
    }

    /// Always `false`: a range holds at least [`Self::MIN_INTERVAL`] values.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `value` is within the range.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Applies the permutation, or its inverse, to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`PermuteError::ValueOutOfRange`] if `value` is outside `min..=max`.
    pub fn permute(&self, value: T, direction: Direction) -> Result<T, PermuteError> {
        let min = self.min.widen();
        let max = self.max.widen();
        if !self.contains(value) {
            return Err(PermuteError::ValueOutOfRange {
                value: value.widen(),
                min,
                max,
            });
        }

        // Work with the offset into the interval rather than the actual value.
        let span = (max - min) as u64;
        let offset = (value.widen() - min) as u64;
        let result = feistel::permute_offset(
            &self.key,
            span,
            offset,
            self.rounds,
            direction.is_reverse(),
        )?;

        // Convert the offset back to an absolute value, possibly negative.
        Ok(T::narrow(min + result as i128).expect("offset is within the range"))
    }

    /// Encodes a value.
    pub fn encode(&self, value: T) -> Result<T, PermuteError> {
        self.permute(value, Direction::Encode)
    }

    /// Decodes a value previously returned by [`Self::encode`].
    pub fn decode(&self, value: T) -> Result<T, PermuteError> {
        self.permute(value, Direction::Decode)
    }
}

/// Checks the number of Feistel rounds.
///
/// Only the lower bound is enforced. An even number of rounds still yields a bijection.
pub(crate) fn check_rounds(rounds: u32) -> Result<(), PermuteError> {
    if rounds < Permuteseq::<i64>::MIN_ROUNDS {
        return Err(PermuteError::InvalidRounds(rounds));
    }
    if rounds % 2 == 0 {
        warn_log!(rounds = rounds, "even number of Feistel rounds");
    }
    Ok(())
}

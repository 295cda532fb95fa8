//! The permutation core: a Feistel network over two equal half-blocks, with
//! cycle walking to constrain the output to the interval.
//!
//! Everything here works on zero-based offsets into the interval, so the same
//! code serves every integer domain.

use crate::error::PermuteError;
use crate::hash::mix32;
use crate::key::ScrambledKey;
use crate::tracing_helpers::trace_log;

/// Maximum number of walks along the results while searching for a value inside the interval.
///
/// The chain of results always returns to the interval, so hitting this limit
/// means the chain has a cycle, which would imply a bug somewhere.
pub const MAX_CYCLE_WALKS: u32 = 1_000_000;

/// Computes the half-block size for an interval of `interval` values.
///
/// This is the smallest `hsz` in `1..=32` such that two half-blocks of `hsz`
/// bits can index the whole interval. Keeping the blocks just large enough
/// bounds the expected number of walks.
pub fn half_block_size(interval: u128) -> u32 {
    let mut hsz = 1;
    while hsz < 32 && (1u128 << (2 * hsz)) < interval {
        hsz += 1;
    }
    hsz
}

/// Permutes an offset within `0..=span`.
///
/// `span` is `max - min` of the range. `offset` must not exceed it. With
/// `reverse` set, the sub-keys are applied in the opposite order, which
/// inverts the permutation.
pub(crate) fn permute_offset(
    key: &ScrambledKey,
    span: u64,
    offset: u64,
    rounds: u32,
    reverse: bool,
) -> Result<u64, PermuteError> {
    debug_assert!(offset <= span);

    let hsz = half_block_size(span as u128 + 1);
    let mask = u32::MAX >> (32 - hsz);

    let mut l1 = (offset >> hsz) as u32;
    let mut r1 = offset as u32 & mask;
    let mut l2 = 0u32;
    let mut r2 = 0u32;

    for walks in 0..=MAX_CYCLE_WALKS {
        for i in 0..rounds {
            l2 = r1;
            let ki = key.subkey(i, rounds, hsz, reverse);
            r2 = (l1 ^ mix32(r1) ^ mix32(ki)) & mask;
            l1 = l2;
            r1 = r2;
        }

        let candidate = ((r1 as u64) << hsz) | l1 as u64;

        // Swap one more time to prepare for the next walk
        l1 = r2;
        r1 = l2;

        if candidate <= span {
            if walks > 0 {
                trace_log!(walks = walks, hsz = hsz, span = span, "cycle walking landed in range");
            }
            return Ok(candidate);
        }
    }

    Err(PermuteError::CycleWalkExhausted(MAX_CYCLE_WALKS))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: i64 = 123_456_789_012_345;

    #[test]
    fn test_half_block_size() {
        let cases = [
            (4u128, 1u32),
            (5, 2),
            (16, 2),
            (17, 3),
            (1001, 5),
            (1 << 20, 10),
            ((1 << 20) + 1, 11),
            (1 << 64, 32),
        ];
        for (interval, expected) in cases {
            assert_eq!(half_block_size(interval), expected, "interval {}", interval);
        }
    }

    #[test]
    fn test_permute_offset_vectors() {
        let key = ScrambledKey::scramble(KEY);
        let test_vectors = [(0u64, 344u64), (1, 738), (2, 780), (500, 568), (999, 6), (1000, 332)];
        for (offset, expected) in test_vectors {
            let encoded = permute_offset(&key, 1000, offset, 7, false).unwrap();
            assert_eq!(encoded, expected);
            let decoded = permute_offset(&key, 1000, encoded, 7, true).unwrap();
            assert_eq!(decoded, offset);
        }
    }

    #[test]
    fn test_full_width_offsets() {
        let key = ScrambledKey::scramble(KEY);
        for offset in [0u64, 1, u64::MAX / 2, u64::MAX - 1, u64::MAX] {
            let encoded = permute_offset(&key, u64::MAX, offset, 7, false).unwrap();
            let decoded = permute_offset(&key, u64::MAX, encoded, 7, true).unwrap();
            assert_eq!(decoded, offset);
        }
    }

    #[test]
    fn test_smallest_interval_is_a_permutation() {
        let key = ScrambledKey::scramble(KEY);
        let mut seen = [false; 4];
        for offset in 0..4u64 {
            let encoded = permute_offset(&key, 3, offset, 3, false).unwrap();
            assert!(!seen[encoded as usize]);
            seen[encoded as usize] = true;
            assert_eq!(permute_offset(&key, 3, encoded, 3, true).unwrap(), offset);
        }
    }
}

use crate::hash::mix32;

/// The working key of a permutation, derived once from the caller's raw key.
///
/// Scrambling is not strictly necessary, but it helps when the supplied key is
/// weak, for instance when only a few low bits are set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrambledKey(u64);

impl ScrambledKey {
    /// Hashes the low and high 32-bit halves of the key independently and joins them back together.
    ///
    /// The halves are taken from the two's complement representation, so negative keys are fine.
    pub fn scramble(key: i64) -> Self {
        let bits = key as u64;
        let low = mix32(bits as u32) as u64;
        let high = mix32((bits >> 32) as u32) as u64;
        Self(low | (high << 32))
    }

    /// Derives the sub-key for round `round` out of `rounds`.
    ///
    /// The sub-key is a sliding window of `hsz` bits over the working key, moving
    /// one window per round and cycling over the 64 key bits, offset by the
    /// round index. When `reverse` is set, round `i` uses the sub-key of round
    /// `rounds - 1 - i`, which is what makes decoding the inverse of encoding.
    #[inline]
    pub fn subkey(&self, round: u32, rounds: u32, hsz: u32, reverse: bool) -> u32 {
        let j = if reverse { rounds - 1 - round } else { round };
        let shift = hsz.wrapping_mul(j) & 0x3f;
        let ki = (self.0 >> shift) as u32;
        ki.wrapping_add(j)
    }
}

// The working key is secret material.
impl std::fmt::Debug for ScrambledKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ScrambledKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_vectors() {
        let test_vectors = [
            (0i64, 0xefbe_c0af_efbe_c0afu64),
            (1, 0xefbe_c0af_8e73_1746),
            (-1, 0x16fe_094a_16fe_094a),
            (i64::MAX, 0xfa3b_9613_16fe_094a),
            (123_456_789_012_345, 0xde57_af45_caf6_f803),
        ];
        for (key, expected) in test_vectors {
            assert_eq!(ScrambledKey::scramble(key).0, expected, "key {}", key);
        }
    }

    #[test]
    fn test_subkey_window() {
        let key = ScrambledKey::scramble(123_456_789_012_345);
        let k = key.0;

        assert_eq!(key.subkey(0, 7, 5, false), k as u32);
        assert_eq!(key.subkey(3, 7, 5, false), ((k >> 15) as u32).wrapping_add(3));

        // 32 * 2 = 64 wraps back to a zero shift.
        assert_eq!(key.subkey(2, 7, 32, false), (k as u32).wrapping_add(2));
    }

    #[test]
    fn test_subkey_reverse_mirrors_rounds() {
        let key = ScrambledKey::scramble(42);
        for rounds in [3u32, 7, 8, 13] {
            for hsz in [1u32, 5, 17, 32] {
                for i in 0..rounds {
                    assert_eq!(
                        key.subkey(i, rounds, hsz, true),
                        key.subkey(rounds - 1 - i, rounds, hsz, false)
                    );
                }
            }
        }
    }

    #[test]
    fn test_debug_hides_key() {
        let key = ScrambledKey::scramble(123_456_789_012_345);
        assert_eq!(format!("{:?}", key), "ScrambledKey(..)");
    }
}

//! The 32-bit mixing hash used by the round function and the key scheduler.
//!
//! This is PostgreSQL's `hash_uint32()`: Bob Jenkins' lookup3 final mix applied
//! to a single 32-bit word. It has to stay bit-for-bit identical to the server
//! side implementation, otherwise values encoded here cannot be decoded by the
//! database extension and vice versa.

/// The golden ratio constant lookup3 seeds its accumulators with.
pub const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Initial value of the three accumulators: golden ratio + input length (4 bytes) + 3923095.
pub const HASH_SEED: u32 = GOLDEN_RATIO.wrapping_add(4).wrapping_add(3_923_095);

/// Circular left rotation of a 32-bit word.
#[inline(always)]
pub fn rotl32(x: u32, k: u32) -> u32 {
    x.rotate_left(k)
}

/// Hashes a 32-bit word.
///
/// Every output bit depends on most of the input bits. All arithmetic wraps
/// modulo 2^32.
#[inline]
pub fn mix32(k: u32) -> u32 {
    let mut a = HASH_SEED;
    let mut b = HASH_SEED;
    let mut c = HASH_SEED;

    a = a.wrapping_add(k);

    c ^= b;
    c = c.wrapping_sub(rotl32(b, 14));
    a ^= c;
    a = a.wrapping_sub(rotl32(c, 11));
    b ^= a;
    b = b.wrapping_sub(rotl32(a, 25));
    c ^= b;
    c = c.wrapping_sub(rotl32(b, 16));
    a ^= c;
    a = a.wrapping_sub(rotl32(c, 4));
    b ^= a;
    b = b.wrapping_sub(rotl32(a, 14));
    c ^= b;
    c = c.wrapping_sub(rotl32(b, 24));

    c
}

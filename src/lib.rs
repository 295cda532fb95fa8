#![doc = include_str!("../README.md")]

pub(crate) mod error;
pub(crate) mod feistel;
pub(crate) mod hash;
pub(crate) mod integer;
pub(crate) mod key;
pub(crate) mod permuteseq;
pub(crate) mod range;
mod tracing_helpers;

pub use error::PermuteError;
pub use feistel::{half_block_size, MAX_CYCLE_WALKS};
pub use hash::{mix32, rotl32};
pub use integer::Integer;
pub use permuteseq::{Direction, Permuteseq};
pub use range::{
    DynamicLength, DynamicPermutation, FixedPermutation, FixedRange, RangeStrategy,
    RangedPermutation,
};

pub mod reexports {
    #[cfg(feature = "random")]
    pub use rand;
}

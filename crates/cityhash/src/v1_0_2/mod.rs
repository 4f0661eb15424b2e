//! CityHash v1.0.2 (**NOT CRYPTO**).
//!
//! Portable scalar implementation. All multi-byte reads are little-endian
//! regardless of host byte order.
//!
//! # Families
//!
//! | Entry point | Output | Notes |
//! |-------------|--------|-------|
//! | [`hash64`] | `u64` | Unseeded |
//! | [`hash64_with_seed`] | `u64` | `hash64_with_seeds(s, K2, seed)` |
//! | [`hash64_with_seeds`] | `u64` | `hash_len_16(hash64(s) - seed0, seed1)` |
//! | [`hash128`] | [`Hash128`] | Seed derived from the input's first bytes |
//! | [`hash128_with_seed`] | [`Hash128`] | Caller seed as `(low, high)` |
//! | [`hash128_to_64`] | `u64` | Order-sensitive fold of a 128-bit digest |
//!
//! For inputs over roughly 2000 bytes the 128-bit family amortizes its setup
//! better than repeated 64-bit calls; for short inputs the 64-bit family is
//! cheaper.

use traits::FastHash;

use crate::Hash128;

pub(crate) mod dispatch;
pub(crate) mod long;
pub(crate) mod mix;
pub(crate) mod short;

pub use dispatch::{SizeClass, size_class_for_len};
pub use mix::hash128_to_64;
use mix::{K0, K1, K2, K3, fetch64, hash_len_16};

/// Revision identifier carried by every type in this module.
pub const REVISION: &str = "cityhash-1.0.2";

/// The fixed first seed word used by [`hash64_with_seed`].
pub const SEED64_CONSTANT: u64 = K2;

/// Unseeded 64-bit hash.
///
/// ```
/// assert_eq!(cityhash::hash64(b""), 0x9ae1_6a3b_2f90_404f);
/// ```
#[inline]
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  dispatch::hash64(data)
}

/// 64-bit hash with one seed; equal to
/// `hash64_with_seeds(data, SEED64_CONSTANT, seed)`.
#[inline]
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
  hash64_with_seeds(data, SEED64_CONSTANT, seed)
}

/// 64-bit hash with two seeds.
#[inline]
#[must_use]
pub fn hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash_len_16(hash64(data).wrapping_sub(seed0), seed1)
}

/// Unseeded 128-bit hash.
///
/// The seed is derived from the input: inputs of 16 bytes or more use their
/// first two words and hash the remainder; 8 to 15 bytes fold both end words
/// into the seed and hash nothing; shorter inputs use `(K0, K1)`.
#[inline]
#[must_use]
pub fn hash128(data: &[u8]) -> Hash128 {
  let len = data.len();
  if len >= 16 {
    let seed = Hash128::new(fetch64(data, 0) ^ K3, fetch64(data, 8));
    dispatch::hash128_with_seed(&data[16..], seed)
  } else if len >= 8 {
    let seed = Hash128::new(
      fetch64(data, 0) ^ (len as u64).wrapping_mul(K0),
      fetch64(data, len - 8) ^ K1,
    );
    dispatch::hash128_with_seed(&[], seed)
  } else {
    dispatch::hash128_with_seed(data, Hash128::new(K0, K1))
  }
}

/// 128-bit hash with a caller-supplied 128-bit seed.
#[inline]
#[must_use]
pub fn hash128_with_seed(data: &[u8], seed: Hash128) -> Hash128 {
  dispatch::hash128_with_seed(data, seed)
}

/// CityHash v1.0.2, 64-bit output.
///
/// [`FastHash::hash`] is the unseeded variant; [`FastHash::hash_with_seed`]
/// is [`hash64_with_seed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash64;

/// CityHash v1.0.2, 128-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash128;

impl FastHash for CityHash64 {
  const OUTPUT_SIZE: usize = 8;
  const REVISION: &'static str = "cityhash-1.0.2/64";
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    hash64(data)
  }

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash64_with_seed(data, seed)
  }
}

impl FastHash for CityHash128 {
  const OUTPUT_SIZE: usize = 16;
  const REVISION: &'static str = "cityhash-1.0.2/128";
  type Output = Hash128;
  type Seed = Hash128;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    hash128(data)
  }

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash128_with_seed(data, seed)
  }
}

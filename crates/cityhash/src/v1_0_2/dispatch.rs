//! Length dispatch for the frozen size classes.
//!
//! The boundaries are part of the algorithm, not a tuning table: moving any of
//! them produces a different hash function.

use super::{long, short};
use crate::Hash128;

/// Inclusive upper bounds of the three short 64-bit classes.
pub(crate) const BOUNDARIES_64: [usize; 3] = [16, 32, 64];

/// Inputs shorter than this take the murmur path in the seeded 128-bit hash.
pub(crate) const MURMUR_MAX_128: usize = 128;

/// The branch a 64-bit hash takes for a given input length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SizeClass {
  /// `len <= 16`.
  Len0To16,
  /// `17 <= len <= 32`.
  Len17To32,
  /// `33 <= len <= 64`.
  Len33To64,
  /// `len > 64`: 64-byte chunk loop.
  Long,
}

impl SizeClass {
  #[inline]
  #[must_use]
  pub const fn for_len(len: usize) -> Self {
    let [xs_max, s_max, m_max] = BOUNDARIES_64;
    if len <= xs_max {
      Self::Len0To16
    } else if len <= s_max {
      Self::Len17To32
    } else if len <= m_max {
      Self::Len33To64
    } else {
      Self::Long
    }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Len0To16 => "len0to16",
      Self::Len17To32 => "len17to32",
      Self::Len33To64 => "len33to64",
      Self::Long => "long",
    }
  }
}

/// Returns the 64-bit size class selected for `len`.
#[inline]
#[must_use]
pub fn size_class_for_len(len: usize) -> SizeClass {
  SizeClass::for_len(len)
}

#[inline]
pub(crate) fn hash64(s: &[u8]) -> u64 {
  match SizeClass::for_len(s.len()) {
    SizeClass::Len0To16 => short::hash_len_0_to_16(s),
    SizeClass::Len17To32 => short::hash_len_17_to_32(s),
    SizeClass::Len33To64 => short::hash_len_33_to_64(s),
    SizeClass::Long => long::hash64_long(s),
  }
}

#[inline]
pub(crate) fn hash128_with_seed(s: &[u8], seed: Hash128) -> Hash128 {
  if s.len() < MURMUR_MAX_128 {
    short::city_murmur(s, seed)
  } else {
    long::hash128_long(s, seed)
  }
}

#[cfg(test)]
mod tests {
  use super::SizeClass;

  #[test]
  fn boundaries_are_inclusive() {
    let expected = [
      (0usize, SizeClass::Len0To16),
      (16, SizeClass::Len0To16),
      (17, SizeClass::Len17To32),
      (32, SizeClass::Len17To32),
      (33, SizeClass::Len33To64),
      (64, SizeClass::Len33To64),
      (65, SizeClass::Long),
      (usize::MAX, SizeClass::Long),
    ];
    for (len, class) in expected {
      assert_eq!(SizeClass::for_len(len), class, "len={len}");
    }
  }

  #[test]
  fn names_are_stable() {
    assert_eq!(SizeClass::Len0To16.as_str(), "len0to16");
    assert_eq!(SizeClass::Long.as_str(), "long");
  }
}

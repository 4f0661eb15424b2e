//! The 128-bit digest value type.

use core::fmt;

/// A 128-bit CityHash digest as two 64-bit halves.
///
/// `low` is the first word the algorithm produces and `high` the second.
/// Swapping them changes every externally observed bit pattern, so the
/// halves are never exposed positionally.
///
/// Ordering is lexicographic on `(low, high)`. It exists for tests and
/// debugging; nothing in the algorithm depends on it.
///
/// # Layouts
///
/// - `u128`: `(high << 64) | low`.
/// - Checksum bytes (ClickHouse block frames): `low` little-endian, then
///   `high` little-endian.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash128 {
  /// First half.
  pub low: u64,
  /// Second half.
  pub high: u64,
}

impl Hash128 {
  /// Size of the checksum byte layout.
  pub const BYTES: usize = 16;

  #[inline]
  #[must_use]
  pub const fn new(low: u64, high: u64) -> Self {
    Self { low, high }
  }

  /// Fold into one 64-bit word with [`crate::hash128_to_64`].
  #[inline]
  #[must_use]
  pub const fn to_u64(self) -> u64 {
    crate::v1_0_2::hash128_to_64(self.low, self.high)
  }

  #[inline]
  #[must_use]
  pub const fn to_u128(self) -> u128 {
    ((self.high as u128) << 64) | self.low as u128
  }

  #[inline]
  #[must_use]
  pub const fn from_u128(value: u128) -> Self {
    Self {
      low: value as u64,
      high: (value >> 64) as u64,
    }
  }

  /// Checksum byte layout: `low` then `high`, both little-endian.
  #[inline]
  #[must_use]
  pub const fn to_le_bytes(self) -> [u8; 16] {
    self.to_u128().to_le_bytes()
  }

  #[inline]
  #[must_use]
  pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
    Self::from_u128(u128::from_le_bytes(bytes))
  }
}

impl From<u128> for Hash128 {
  #[inline]
  fn from(value: u128) -> Self {
    Self::from_u128(value)
  }
}

impl From<Hash128> for u128 {
  #[inline]
  fn from(value: Hash128) -> Self {
    value.to_u128()
  }
}

impl From<(u64, u64)> for Hash128 {
  /// `(low, high)`.
  #[inline]
  fn from((low, high): (u64, u64)) -> Self {
    Self { low, high }
  }
}

impl From<Hash128> for (u64, u64) {
  #[inline]
  fn from(value: Hash128) -> Self {
    (value.low, value.high)
  }
}

impl fmt::Debug for Hash128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Hash128")
      .field("low", &format_args!("{:#018x}", self.low))
      .field("high", &format_args!("{:#018x}", self.high))
      .finish()
  }
}

impl fmt::Display for Hash128 {
  /// Big-endian hex of the `u128` form.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}{:016x}", self.high, self.low)
  }
}

impl fmt::LowerHex for Hash128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.to_u128(), f)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::Hash128;

  #[test]
  fn u128_halves() {
    let h = Hash128::from(0xAAAA_AAAA_AAAA_AAAA_BBBB_BBBB_BBBB_BBBBu128);
    assert_eq!(h.low, 0xBBBB_BBBB_BBBB_BBBB);
    assert_eq!(h.high, 0xAAAA_AAAA_AAAA_AAAA);
    assert_eq!(u128::from(h), 0xAAAA_AAAA_AAAA_AAAA_BBBB_BBBB_BBBB_BBBB);
  }

  #[test]
  fn checksum_bytes_put_low_first() {
    let h = Hash128::new(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);
    let bytes = h.to_le_bytes();
    assert_eq!(bytes, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
    assert_eq!(Hash128::from_le_bytes(bytes), h);
  }

  #[test]
  fn ordering_is_low_then_high() {
    assert!(Hash128::new(1, 0) > Hash128::new(0, u64::MAX));
    assert!(Hash128::new(1, 2) < Hash128::new(1, 3));
  }

  #[test]
  fn display_matches_u128_hex() {
    let h = Hash128::new(0x1, 0x2);
    assert_eq!(format!("{h}"), "00000000000000020000000000000001");
    assert_eq!(format!("{h:x}"), "20000000000000001");
  }
}

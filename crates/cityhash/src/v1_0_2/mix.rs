//! Word mixer: little-endian fetches, rotation, and the Murmur-style steps.
//!
//! Every constant and operation order here is part of the v1.0.2 identity.

#![allow(clippy::indexing_slicing)] // Bounds-checked fetches are the fail-fast contract

pub(crate) const K0: u64 = 0xc3a5_c85c_97cb_3127;
pub(crate) const K1: u64 = 0xb492_b66f_be98_f273;
pub(crate) const K2: u64 = 0x9ae1_6a3b_2f90_404f;
pub(crate) const K3: u64 = 0xc949_d7c7_509e_6557;
pub(crate) const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

/// Read 8 bytes at `offset` as a little-endian `u64`.
///
/// Panics if `offset + 8 > s.len()`.
#[inline(always)]
pub(crate) fn fetch64(s: &[u8], offset: usize) -> u64 {
  let w = &s[offset..offset + 8];
  u64::from_le_bytes([w[0], w[1], w[2], w[3], w[4], w[5], w[6], w[7]])
}

/// Read 4 bytes at `offset` as a little-endian `u32`.
///
/// Panics if `offset + 4 > s.len()`.
#[inline(always)]
pub(crate) fn fetch32(s: &[u8], offset: usize) -> u32 {
  let w = &s[offset..offset + 4];
  u32::from_le_bytes([w[0], w[1], w[2], w[3]])
}

/// Circular right rotation by `shift mod 64`.
#[inline(always)]
pub(crate) const fn rotate(val: u64, shift: u32) -> u64 {
  val.rotate_right(shift)
}

#[inline(always)]
pub(crate) const fn shift_mix(val: u64) -> u64 {
  val ^ (val >> 47)
}

/// Hash 128 input bits down to 64 bits of output.
///
/// Murmur-inspired and "reasonably good", nothing more. Order-sensitive:
/// `hash128_to_64(a, b) != hash128_to_64(b, a)` in general.
#[inline]
#[must_use]
pub const fn hash128_to_64(low: u64, high: u64) -> u64 {
  let mut a = (low ^ high).wrapping_mul(K_MUL);
  a ^= a >> 47;
  let mut b = (high ^ a).wrapping_mul(K_MUL);
  b ^= b >> 47;
  b.wrapping_mul(K_MUL)
}

#[inline(always)]
pub(crate) const fn hash_len_16(u: u64, v: u64) -> u64 {
  hash128_to_64(u, v)
}

/// Mix four input words into the seed pair `(a, b)`, yielding 16 bytes of state.
#[inline(always)]
const fn weak_hash_len_32_with_seeds_words(w: u64, x: u64, y: u64, z: u64, mut a: u64, mut b: u64) -> (u64, u64) {
  a = a.wrapping_add(w);
  b = rotate(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x);
  a = a.wrapping_add(y);
  b = b.wrapping_add(rotate(a, 44));
  (a.wrapping_add(z), b.wrapping_add(c))
}

/// [`weak_hash_len_32_with_seeds_words`] over `s[offset..offset + 32]`.
#[inline(always)]
pub(crate) fn weak_hash_len_32_with_seeds(s: &[u8], offset: usize, a: u64, b: u64) -> (u64, u64) {
  weak_hash_len_32_with_seeds_words(
    fetch64(s, offset),
    fetch64(s, offset + 8),
    fetch64(s, offset + 16),
    fetch64(s, offset + 24),
    a,
    b,
  )
}

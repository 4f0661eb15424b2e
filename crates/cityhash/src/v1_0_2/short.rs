//! Short-input branches: `0..=16`, `17..=32`, `33..=64` bytes, and the
//! 128-bit "murmur" path for inputs under 128 bytes.

#![allow(clippy::indexing_slicing)] // Tail-byte reads at length-derived offsets

use super::mix::{K0, K1, K2, K3, fetch32, fetch64, hash_len_16, rotate, shift_mix};
use crate::Hash128;

/// Inputs of 0 to 16 bytes.
///
/// Reads never cross `s.len()`: the 4..=8 and 9..=16 cases take one word from
/// each end (overlapping when short), and 1..=3 assembles bytes directly.
#[inline(always)]
pub(crate) fn hash_len_0_to_16(s: &[u8]) -> u64 {
  let len = s.len();
  if len > 8 {
    let a = fetch64(s, 0);
    let b = fetch64(s, len - 8);
    hash_len_16(a, rotate(b.wrapping_add(len as u64), len as u32)) ^ b
  } else if len >= 4 {
    let a = u64::from(fetch32(s, 0));
    hash_len_16((len as u64).wrapping_add(a << 3), u64::from(fetch32(s, len - 4)))
  } else if len > 0 {
    let a = u32::from(s[0]);
    let b = u32::from(s[len >> 1]);
    let c = u32::from(s[len - 1]);
    let y = a.wrapping_add(b << 8);
    let z = (len as u32).wrapping_add(c << 2);
    shift_mix(u64::from(y).wrapping_mul(K2) ^ u64::from(z).wrapping_mul(K3)).wrapping_mul(K2)
  } else {
    K2
  }
}

/// Inputs of 17 to 32 bytes.
#[inline(always)]
pub(crate) fn hash_len_17_to_32(s: &[u8]) -> u64 {
  let len = s.len();
  let a = fetch64(s, 0).wrapping_mul(K1);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(K2);
  let d = fetch64(s, len - 16).wrapping_mul(K0);
  hash_len_16(
    rotate(a.wrapping_sub(b), 43)
      .wrapping_add(rotate(c, 30))
      .wrapping_add(d),
    a.wrapping_add(rotate(b ^ K3, 20))
      .wrapping_sub(c)
      .wrapping_add(len as u64),
  )
}

/// Inputs of 33 to 64 bytes.
#[inline(always)]
pub(crate) fn hash_len_33_to_64(s: &[u8]) -> u64 {
  let len = s.len();
  let mut z = fetch64(s, 24);
  let mut a = fetch64(s, 0).wrapping_add((len as u64).wrapping_add(fetch64(s, len - 16)).wrapping_mul(K0));
  let mut b = rotate(a.wrapping_add(z), 52);
  let mut c = rotate(a, 37);
  a = a.wrapping_add(fetch64(s, 8));
  c = c.wrapping_add(rotate(a, 7));
  a = a.wrapping_add(fetch64(s, 16));
  let vf = a.wrapping_add(z);
  let vs = b.wrapping_add(rotate(a, 31)).wrapping_add(c);

  a = fetch64(s, 16).wrapping_add(fetch64(s, len - 32));
  z = fetch64(s, len - 8);
  b = rotate(a.wrapping_add(z), 52);
  c = rotate(a, 37);
  a = a.wrapping_add(fetch64(s, len - 24));
  c = c.wrapping_add(rotate(a, 7));
  a = a.wrapping_add(fetch64(s, len - 16));
  let wf = a.wrapping_add(z);
  let ws = b.wrapping_add(rotate(a, 31)).wrapping_add(c);

  let r = shift_mix(
    vf.wrapping_add(ws)
      .wrapping_mul(K2)
      .wrapping_add(wf.wrapping_add(vs).wrapping_mul(K0)),
  );
  shift_mix(r.wrapping_mul(K0).wrapping_add(vs)).wrapping_mul(K2)
}

/// 128-bit hash of inputs under 128 bytes, folded with `seed`.
///
/// Over 16 bytes this walks the input in 16-byte steps from the front while
/// the two trailing words seed `c` and `d`.
#[inline]
pub(crate) fn city_murmur(s: &[u8], seed: Hash128) -> Hash128 {
  let len = s.len();
  let mut a = seed.low;
  let mut b = seed.high;
  let mut c;
  let mut d;

  if len <= 16 {
    a = shift_mix(a.wrapping_mul(K1)).wrapping_mul(K1);
    c = b.wrapping_mul(K1).wrapping_add(hash_len_0_to_16(s));
    d = shift_mix(a.wrapping_add(if len >= 8 { fetch64(s, 0) } else { c }));
  } else {
    c = hash_len_16(fetch64(s, len - 8).wrapping_add(K1), a);
    d = hash_len_16(b.wrapping_add(len as u64), c.wrapping_add(fetch64(s, len - 16)));
    a = a.wrapping_add(d);

    let mut offset = 0usize;
    while offset < len - 16 {
      a ^= shift_mix(fetch64(s, offset).wrapping_mul(K1)).wrapping_mul(K1);
      a = a.wrapping_mul(K1);
      b ^= a;
      c ^= shift_mix(fetch64(s, offset + 8).wrapping_mul(K1)).wrapping_mul(K1);
      c = c.wrapping_mul(K1);
      d ^= c;
      offset += 16;
    }
  }

  a = hash_len_16(a, c);
  b = hash_len_16(d, b);
  Hash128::new(a ^ b, hash_len_16(b, a))
}

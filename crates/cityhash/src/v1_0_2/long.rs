//! Long-input paths: the 64-bit hash over 64 bytes and the seeded 128-bit
//! hash from 128 bytes.
//!
//! Both families run the same per-chunk round over a 64-byte window, so the
//! round lives on [`ChunkState`] and each family supplies its own setup and
//! finalization.

#![allow(clippy::indexing_slicing)] // Length-derived windows into `s`

use super::mix::{K0, K1, fetch64, hash_len_16, rotate, shift_mix, weak_hash_len_32_with_seeds};
use crate::Hash128;

pub(crate) const CHUNK_LEN: usize = 64;

/// Running accumulators of the long-input loops.
#[derive(Clone, Copy)]
struct ChunkState {
  v: (u64, u64),
  w: (u64, u64),
  x: u64,
  y: u64,
  z: u64,
}

impl ChunkState {
  /// One round over a 64-byte chunk. Ends with `x` and `z` swapped.
  #[inline(always)]
  fn round(&mut self, chunk: &[u8; CHUNK_LEN]) {
    let Self { v, w, x, y, z } = self;
    *x = rotate(x.wrapping_add(*y).wrapping_add(v.0).wrapping_add(fetch64(chunk, 16)), 37).wrapping_mul(K1);
    *y = rotate(y.wrapping_add(v.1).wrapping_add(fetch64(chunk, 48)), 42).wrapping_mul(K1);
    *x ^= w.1;
    *y ^= v.0;
    *z = rotate(*z ^ w.0, 33);
    *v = weak_hash_len_32_with_seeds(chunk, 0, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
    *w = weak_hash_len_32_with_seeds(chunk, 32, z.wrapping_add(w.1), *y);
    core::mem::swap(z, x);
  }
}

/// 64-bit hash of inputs over 64 bytes.
///
/// State is seeded from the last 64 bytes, then every full 64-byte chunk of
/// `s[..(len - 1) & !63]` is consumed from the front. The final partial chunk
/// is covered only by the tail-seeded state.
#[inline(never)]
pub(crate) fn hash64_long(s: &[u8]) -> u64 {
  let len = s.len();
  debug_assert!(len > CHUNK_LEN);

  let y = fetch64(s, len - 16) ^ K1;
  let mut st = ChunkState {
    v: weak_hash_len_32_with_seeds(s, len - 64, len as u64, y),
    w: weak_hash_len_32_with_seeds(s, len - 32, (len as u64).wrapping_mul(K1), K0),
    x: fetch64(s, 0),
    y,
    z: fetch64(s, len - 56) ^ K0,
  };
  st.z = st.z.wrapping_add(shift_mix(st.v.1).wrapping_mul(K1));
  st.x = rotate(st.z.wrapping_add(st.x), 39).wrapping_mul(K1);
  st.y = rotate(st.y, 33).wrapping_mul(K1);

  let body = (len - 1) & !(CHUNK_LEN - 1);
  let (chunks, _) = s[..body].as_chunks::<CHUNK_LEN>();
  for chunk in chunks {
    st.round(chunk);
  }

  let ChunkState { v, w, x, y, z } = st;
  hash_len_16(
    hash_len_16(v.0, w.0)
      .wrapping_add(shift_mix(y).wrapping_mul(K1))
      .wrapping_add(z),
    hash_len_16(v.1, w.1).wrapping_add(x),
  )
}

/// Seeded 128-bit hash of inputs of at least 128 bytes.
///
/// Consumes 128-byte blocks (two rounds each) while at least 128 bytes remain,
/// then folds the remainder in 32-byte steps taken backwards from the end of
/// `s`. Tail steps may revisit bytes already consumed by the block loop.
#[inline(never)]
pub(crate) fn hash128_long(s: &[u8], seed: Hash128) -> Hash128 {
  let len = s.len();
  debug_assert!(len >= 2 * CHUNK_LEN);

  let x = seed.low;
  let y = seed.high;
  let z = (len as u64).wrapping_mul(K1);
  let v0 = rotate(y ^ K1, 49).wrapping_mul(K1).wrapping_add(fetch64(s, 0));
  let v1 = rotate(v0, 42).wrapping_mul(K1).wrapping_add(fetch64(s, 8));
  let w0 = rotate(y.wrapping_add(z), 35).wrapping_mul(K1).wrapping_add(x);
  let w1 = rotate(x.wrapping_add(fetch64(s, 88)), 53).wrapping_mul(K1);
  let mut st = ChunkState {
    v: (v0, v1),
    w: (w0, w1),
    x,
    y,
    z,
  };

  let blocks = len / (2 * CHUNK_LEN);
  let (chunks, _) = s[..blocks * 2 * CHUNK_LEN].as_chunks::<CHUNK_LEN>();
  for chunk in chunks {
    st.round(chunk);
  }

  let ChunkState {
    mut v,
    mut w,
    mut x,
    mut y,
    z,
  } = st;
  let tail = len - blocks * 2 * CHUNK_LEN;

  y = y.wrapping_add(rotate(w.0, 37).wrapping_mul(K0).wrapping_add(z));
  x = x.wrapping_add(rotate(v.0.wrapping_add(z), 49).wrapping_mul(K0));

  let mut tail_done = 0usize;
  while tail_done < tail {
    tail_done += 32;
    let at = len - tail_done;
    y = rotate(y.wrapping_sub(x), 42).wrapping_mul(K0).wrapping_add(v.1);
    w.0 = w.0.wrapping_add(fetch64(s, at + 16));
    x = rotate(x, 49).wrapping_mul(K0).wrapping_add(w.0);
    w.0 = w.0.wrapping_add(v.0);
    v = weak_hash_len_32_with_seeds(s, at, v.0, v.1);
  }

  x = hash_len_16(x, v.0);
  y = hash_len_16(y, w.0);
  Hash128::new(
    hash_len_16(x.wrapping_add(v.1), w.1).wrapping_add(y),
    hash_len_16(x.wrapping_add(w.1), y.wrapping_add(v.1)),
  )
}

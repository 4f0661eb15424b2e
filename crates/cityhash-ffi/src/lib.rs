//! Flat C ABI for CityHash v1.0.2.
//!
//! Every function takes a read-only byte pointer plus an explicit length, zero
//! or more `uint64_t` seeds, and writes multi-word results through separate
//! output pointers (`low` before `high`). No aggregate type crosses the
//! boundary, so any language with a C calling convention gets bit-identical
//! digests without knowing the Rust types.
//!
//! The symbol names match the ones the frozen C++ build exported, so existing
//! foreign callers can link against this library unchanged. The declarations
//! live in `include/cityhash_v1_0_2.h`.
//!
//! # Preconditions
//!
//! `(ptr, len)` must describe `len` readable bytes that stay unmodified for the
//! duration of the call. A null `ptr` is accepted only with `len == 0`. A null
//! input with nonzero length, or a null output slot, is a caller bug: the
//! function panics, which aborts the process at the `extern "C"` boundary
//! instead of reading or writing through a bad pointer.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![allow(non_snake_case)] // Exported names match the C++ symbols

use core::{ffi::c_char, slice};

use cityhash::{Hash128, v1_0_2};

/// Borrow the caller's buffer.
///
/// # Safety
///
/// `ptr` must be valid for `len` reads for the lifetime `'a`, or `len` must be 0.
#[inline]
unsafe fn input<'a>(ptr: *const c_char, len: usize) -> &'a [u8] {
  if len == 0 {
    return &[];
  }
  assert!(!ptr.is_null(), "null input pointer with nonzero length");
  // SAFETY: non-null, and the caller guarantees `len` readable bytes.
  unsafe { slice::from_raw_parts(ptr.cast::<u8>(), len) }
}

/// Store a 128-bit digest into the caller's two output slots.
///
/// # Safety
///
/// Both pointers must be valid for one aligned `u64` write.
#[inline]
unsafe fn store(digest: Hash128, low: *mut u64, high: *mut u64) {
  assert!(!low.is_null() && !high.is_null(), "null output slot");
  // SAFETY: non-null; the caller guarantees writability and alignment.
  unsafe {
    low.write(digest.low);
    high.write(digest.high);
  }
}

/// 64-bit hash of `len` bytes at `s`.
///
/// # Safety
///
/// See the crate-level preconditions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CityHash64(s: *const c_char, len: usize) -> u64 {
  // SAFETY: forwarded caller contract.
  v1_0_2::hash64(unsafe { input(s, len) })
}

/// 64-bit hash with one seed.
///
/// # Safety
///
/// See the crate-level preconditions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CityHash64WithSeed(s: *const c_char, len: usize, seed: u64) -> u64 {
  // SAFETY: forwarded caller contract.
  v1_0_2::hash64_with_seed(unsafe { input(s, len) }, seed)
}

/// 64-bit hash with two seeds.
///
/// # Safety
///
/// See the crate-level preconditions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CityHash64WithSeeds(s: *const c_char, len: usize, seed0: u64, seed1: u64) -> u64 {
  // SAFETY: forwarded caller contract.
  v1_0_2::hash64_with_seeds(unsafe { input(s, len) }, seed0, seed1)
}

/// 128-bit hash, written to `result_low` and `result_high`.
///
/// # Safety
///
/// See the crate-level preconditions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CityHash128(s: *const c_char, len: usize, result_low: *mut u64, result_high: *mut u64) {
  // SAFETY: forwarded caller contract.
  unsafe { store(v1_0_2::hash128(input(s, len)), result_low, result_high) }
}

/// 128-bit hash with the seed `(seed_low, seed_high)`.
///
/// # Safety
///
/// See the crate-level preconditions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CityHash128WithSeed(
  s: *const c_char,
  len: usize,
  seed_low: u64,
  seed_high: u64,
  result_low: *mut u64,
  result_high: *mut u64,
) {
  let seed = Hash128::new(seed_low, seed_high);
  // SAFETY: forwarded caller contract.
  unsafe { store(v1_0_2::hash128_with_seed(input(s, len), seed), result_low, result_high) }
}

/// Fold a 128-bit digest into 64 bits. Order-sensitive.
#[unsafe(no_mangle)]
pub extern "C" fn Hash128to64(low: u64, high: u64) -> u64 {
  v1_0_2::hash128_to_64(low, high)
}

/// 128-bit hash in the 16-byte checksum layout (`low` LE, then `high` LE).
///
/// # Safety
///
/// See the crate-level preconditions; `out` must be valid for 16 byte writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CityHash128Checksum(s: *const c_char, len: usize, out: *mut u8) {
  assert!(!out.is_null(), "null output slot");
  // SAFETY: forwarded caller contract.
  let bytes = v1_0_2::hash128(unsafe { input(s, len) }).to_le_bytes();
  // SAFETY: non-null, and the caller guarantees 16 writable bytes.
  unsafe { out.copy_from_nonoverlapping(bytes.as_ptr(), bytes.len()) }
}

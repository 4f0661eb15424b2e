//! Differential fuzzing against `cityhash-rs` and the C ABI.

#![no_main]

use cityhash::{Hash128, hash64, hash64_with_seed, hash64_with_seeds, hash128, hash128_with_seed};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_hash128_differential(data);
  test_abi_agrees(data);
  test_seed_algebra(data);
});

fn test_hash128_differential(data: &[u8]) {
  let ours = hash128(data);
  // `cityhash-rs` packs its `u128` as `(low << 64) | high`.
  let r = cityhash_rs::cityhash_102_128(data);
  let reference = Hash128::new((r >> 64) as u64, r as u64);
  assert_eq!(
    ours,
    reference,
    "CityHash128 differential mismatch: ours={ours:?}, reference={reference:?}, len={}",
    data.len()
  );
}

fn test_abi_agrees(data: &[u8]) {
  let p = data.as_ptr().cast();
  let n = data.len();
  let (mut low, mut high) = (0u64, 0u64);
  // SAFETY: `data` is live for the duration of each call; output slots are locals.
  unsafe {
    assert_eq!(cityhash_ffi::CityHash64(p, n), hash64(data), "CityHash64 ABI mismatch");
    cityhash_ffi::CityHash128(p, n, &mut low, &mut high);
  }
  assert_eq!(Hash128::new(low, high), hash128(data), "CityHash128 ABI mismatch");
}

fn test_seed_algebra(data: &[u8]) {
  // Split the input into seeds and message so seeds vary with the corpus.
  let Some((seed, msg)) = data.split_first_chunk::<16>() else {
    return;
  };
  let (s0, s1) = seed.split_at(8);
  let s0 = u64::from_le_bytes(s0.try_into().unwrap_or_default());
  let s1 = u64::from_le_bytes(s1.try_into().unwrap_or_default());
  assert_eq!(
    hash64_with_seed(msg, s1),
    hash64_with_seeds(msg, cityhash::v1_0_2::SEED64_CONSTANT, s1)
  );
  let h = hash128_with_seed(msg, Hash128::new(s0, s1));
  assert_eq!(h, Hash128::from_u128(h.to_u128()));
}

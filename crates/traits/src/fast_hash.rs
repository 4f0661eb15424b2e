//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash over a caller-owned byte slice.
///
/// These hashes are suitable for checksums of persisted data, sharding,
/// sampling, and other non-adversarial settings. They are **not** suitable for
/// signatures, MACs, password hashing, or untrusted inputs where collision
/// attacks matter.
///
/// This trait is intentionally one-shot: the frozen algorithms implementing it
/// do not support combining digests of concatenated inputs.
///
/// Implementors whose unseeded variant is not "seeded with `Seed::default()`"
/// must override [`FastHash::hash`].
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Name of the frozen algorithm revision, e.g. `"cityhash-1.0.2/64"`.
  ///
  /// Two types with different revisions never produce comparable digests.
  const REVISION: &'static str;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Compute the unseeded hash of `data`.
  ///
  /// The default implementation hashes with `Seed::default()`.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::FastHash;

  // Byte sum keyed by the seed; only exercises the provided method.
  struct Sum;

  impl FastHash for Sum {
    const OUTPUT_SIZE: usize = 8;
    const REVISION: &'static str = "sum/0";
    type Output = u64;
    type Seed = u64;

    fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
      data.iter().fold(seed, |acc, &b| acc.wrapping_add(u64::from(b)))
    }
  }

  #[test]
  fn default_hash_uses_default_seed() {
    assert_eq!(Sum::hash(b"abc"), Sum::hash_with_seed(0, b"abc"));
    assert_ne!(Sum::hash(b"abc"), Sum::hash_with_seed(1, b"abc"));
  }

  #[test]
  fn output_size_matches_output_type() {
    assert_eq!(Sum::OUTPUT_SIZE, core::mem::size_of::<<Sum as FastHash>::Output>());
  }
}

//! Optional diagnostics for path selection.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explaining which frozen branch a length takes without affecting normal
//! builds.

use core::fmt;

use crate::v1_0_2::{SizeClass, dispatch, long};

/// Where the unseeded 128-bit hash gets its seed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed128Source {
  /// `len >= 16`: first two words; the remaining `len - 16` bytes are hashed.
  LeadingWords,
  /// `8 <= len < 16`: both end words; nothing is left to hash.
  EndWords,
  /// `len < 8`: the fixed `(K0, K1)` pair.
  Constants,
}

/// Branch the seeded 128-bit hash takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Path128 {
  /// Fewer than 128 bytes.
  Murmur,
  /// 128-byte blocks plus 32-byte tail steps.
  Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionDiag {
  pub len: usize,
  pub path64: SizeClass,
  /// Full 64-byte chunks consumed by the 64-bit loop.
  pub chunks64: usize,
  pub seed128: Seed128Source,
  /// Bytes the unseeded 128-bit hash feeds to its seeded core.
  pub hashed128: usize,
  pub path128: Path128,
  /// 128-byte blocks consumed by the 128-bit long path.
  pub blocks128: usize,
  /// 32-byte tail steps after the 128-bit blocks.
  pub tail128: usize,
}

/// Explain how the unseeded 64- and 128-bit hashes process `len` bytes.
#[must_use]
pub fn explain(len: usize) -> SelectionDiag {
  let path64 = SizeClass::for_len(len);
  let chunks64 = match path64 {
    SizeClass::Long => ((len - 1) & !(long::CHUNK_LEN - 1)) / long::CHUNK_LEN,
    _ => 0,
  };

  let (seed128, hashed128) = if len >= 16 {
    (Seed128Source::LeadingWords, len - 16)
  } else if len >= 8 {
    (Seed128Source::EndWords, 0)
  } else {
    (Seed128Source::Constants, len)
  };

  let (path128, blocks128, tail128) = if hashed128 < dispatch::MURMUR_MAX_128 {
    (Path128::Murmur, 0, 0)
  } else {
    let block = 2 * long::CHUNK_LEN;
    let blocks = hashed128 / block;
    (Path128::Long, blocks, (hashed128 - blocks * block).div_ceil(32))
  };

  SelectionDiag {
    len,
    path64,
    chunks64,
    seed128,
    hashed128,
    path128,
    blocks128,
    tail128,
  }
}

impl fmt::Display for SelectionDiag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "len={} 64:{} chunks={} 128:{:?}/{:?} hashed={} blocks={} tail={}",
      self.len,
      self.path64.as_str(),
      self.chunks64,
      self.seed128,
      self.path128,
      self.hashed128,
      self.blocks128,
      self.tail128
    )
  }
}

//! ClickHouse compressed-block checksums.
//!
//! Every compressed block in a ClickHouse column file is framed as:
//!
//! ```text
//! [16 bytes checksum][1 byte method][u32 LE compressed_size][u32 LE decompressed_size][payload]
//! ```
//!
//! `compressed_size` counts the 9-byte header plus the payload. The checksum
//! is [`hash128`](crate::hash128) over those `compressed_size` bytes, stored as
//! `low` then `high`, each little-endian.
//!
//! This module only frames and verifies; it never decompresses.
//!
//! # Examples
//!
//! ```
//! use cityhash::block::{Blocks, CompressionMethod, seal_block, verify_block};
//!
//! let mut frame = [0u8; 64];
//! let n = seal_block(CompressionMethod::None, 5, b"hello", &mut frame).unwrap();
//! let block = verify_block(&frame[..n]).unwrap();
//! assert_eq!(block.payload, b"hello");
//! assert_eq!(Blocks::new(&frame[..n]).count(), 1);
//! ```

use core::fmt;

use crate::{Hash128, hash128};

/// Size of the leading checksum.
pub const CHECKSUM_LEN: usize = Hash128::BYTES;

/// Size of the method byte plus both size fields.
pub const HEADER_LEN: usize = 9;

/// Compression method byte codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum CompressionMethod {
  None = 0x02,
  Lz4 = 0x82,
  Zstd = 0x90,
  Multiple = 0x91,
  Delta = 0x92,
  T64 = 0x93,
  DoubleDelta = 0x94,
  Gorilla = 0x95,
  Aes128GcmSiv = 0x96,
  Aes256GcmSiv = 0x97,
  Fpc = 0x98,
  DeflateQpl = 0x99,
  Gcd = 0x9a,
  ZstdQpl = 0x9b,
}

impl CompressionMethod {
  #[must_use]
  pub const fn from_u8(byte: u8) -> Option<Self> {
    Some(match byte {
      0x02 => Self::None,
      0x82 => Self::Lz4,
      0x90 => Self::Zstd,
      0x91 => Self::Multiple,
      0x92 => Self::Delta,
      0x93 => Self::T64,
      0x94 => Self::DoubleDelta,
      0x95 => Self::Gorilla,
      0x96 => Self::Aes128GcmSiv,
      0x97 => Self::Aes256GcmSiv,
      0x98 => Self::Fpc,
      0x99 => Self::DeflateQpl,
      0x9a => Self::Gcd,
      0x9b => Self::ZstdQpl,
      _ => return None,
    })
  }

  #[inline]
  #[must_use]
  pub const fn as_u8(self) -> u8 {
    self as u8
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::None => "NONE",
      Self::Lz4 => "LZ4",
      Self::Zstd => "ZSTD",
      Self::Multiple => "Multiple",
      Self::Delta => "Delta",
      Self::T64 => "T64",
      Self::DoubleDelta => "DoubleDelta",
      Self::Gorilla => "Gorilla",
      Self::Aes128GcmSiv => "AES_128_GCM_SIV",
      Self::Aes256GcmSiv => "AES_256_GCM_SIV",
      Self::Fpc => "FPC",
      Self::DeflateQpl => "DeflateQpl",
      Self::Gcd => "GCD",
      Self::ZstdQpl => "ZSTD_QPL",
    }
  }
}

impl fmt::Display for CompressionMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Block framing or verification failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BlockError {
  /// Fewer bytes than the frame (or output buffer) requires.
  Truncated { needed: usize, available: usize },
  /// Method byte is not a known code.
  UnknownMethod(u8),
  /// `compressed_size` is smaller than the header it must include.
  SizeMismatch { compressed_size: u32 },
  /// Payload does not fit the `u32` size field.
  PayloadTooLarge { len: usize },
  /// Stored checksum differs from the one computed over the block.
  ChecksumMismatch { expected: Hash128, actual: Hash128 },
}

impl fmt::Display for BlockError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Truncated { needed, available } => {
        write!(f, "block truncated: need {needed} bytes, have {available}")
      }
      Self::UnknownMethod(byte) => write!(f, "unknown compression method {byte:#04x}"),
      Self::SizeMismatch { compressed_size } => {
        write!(f, "compressed size {compressed_size} is smaller than the {HEADER_LEN}-byte header")
      }
      Self::PayloadTooLarge { len } => write!(f, "payload of {len} bytes exceeds the u32 size field"),
      Self::ChecksumMismatch { expected, actual } => {
        write!(f, "checksum mismatch: stored {expected}, computed {actual}")
      }
    }
  }
}

impl core::error::Error for BlockError {}

/// Decoded 9-byte block header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
  pub method: CompressionMethod,
  /// Header plus payload.
  pub compressed_size: u32,
  pub decompressed_size: u32,
}

impl BlockHeader {
  /// Parse the header from the first [`HEADER_LEN`] bytes of `bytes`.
  pub fn parse(bytes: &[u8]) -> Result<Self, BlockError> {
    let Some(raw) = bytes.first_chunk::<HEADER_LEN>() else {
      return Err(BlockError::Truncated {
        needed: HEADER_LEN,
        available: bytes.len(),
      });
    };
    let [method, c0, c1, c2, c3, d0, d1, d2, d3] = *raw;
    let method = CompressionMethod::from_u8(method).ok_or(BlockError::UnknownMethod(method))?;
    let compressed_size = u32::from_le_bytes([c0, c1, c2, c3]);
    if (compressed_size as usize) < HEADER_LEN {
      return Err(BlockError::SizeMismatch { compressed_size });
    }
    Ok(Self {
      method,
      compressed_size,
      decompressed_size: u32::from_le_bytes([d0, d1, d2, d3]),
    })
  }

  #[must_use]
  pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
    let [c0, c1, c2, c3] = self.compressed_size.to_le_bytes();
    let [d0, d1, d2, d3] = self.decompressed_size.to_le_bytes();
    [self.method.as_u8(), c0, c1, c2, c3, d0, d1, d2, d3]
  }

  #[inline]
  #[must_use]
  pub fn payload_len(&self) -> usize {
    (self.compressed_size as usize).saturating_sub(HEADER_LEN)
  }

  /// Checksum, header, and payload. Saturates where `usize` is 32 bits wide.
  #[inline]
  #[must_use]
  pub fn frame_len(&self) -> usize {
    CHECKSUM_LEN.saturating_add(self.compressed_size as usize)
  }
}

/// A verified block borrowed from its frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block<'a> {
  pub checksum: Hash128,
  pub header: BlockHeader,
  /// Still-compressed payload.
  pub payload: &'a [u8],
}

impl Block<'_> {
  #[inline]
  #[must_use]
  pub fn frame_len(&self) -> usize {
    self.header.frame_len()
  }
}

/// Checksum of the header-plus-payload bytes of a block.
#[inline]
#[must_use]
pub fn block_checksum(compressed: &[u8]) -> Hash128 {
  hash128(compressed)
}

/// Parse and verify the block at the start of `frame`.
///
/// Trailing bytes after the block are ignored; use [`Block::frame_len`] to
/// step to the next one.
pub fn verify_block(frame: &[u8]) -> Result<Block<'_>, BlockError> {
  let Some((stored, rest)) = frame.split_first_chunk::<CHECKSUM_LEN>() else {
    return Err(BlockError::Truncated {
      needed: CHECKSUM_LEN + HEADER_LEN,
      available: frame.len(),
    });
  };
  let header = BlockHeader::parse(rest).map_err(|err| match err {
    BlockError::Truncated { needed, available } => BlockError::Truncated {
      needed: needed + CHECKSUM_LEN,
      available: available + CHECKSUM_LEN,
    },
    other => other,
  })?;

  let Some(compressed) = rest.get(..header.compressed_size as usize) else {
    return Err(BlockError::Truncated {
      needed: header.frame_len(),
      available: frame.len(),
    });
  };

  let expected = Hash128::from_le_bytes(*stored);
  let actual = block_checksum(compressed);
  if expected != actual {
    return Err(BlockError::ChecksumMismatch { expected, actual });
  }

  Ok(Block {
    checksum: actual,
    header,
    payload: compressed.get(HEADER_LEN..).unwrap_or_default(),
  })
}

/// Iterator over back-to-back block frames.
///
/// Yields each verified block in order and stops after the first error.
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
  rest: &'a [u8],
  failed: bool,
}

impl<'a> Blocks<'a> {
  #[must_use]
  pub fn new(bytes: &'a [u8]) -> Self {
    Self {
      rest: bytes,
      failed: false,
    }
  }

  /// Bytes not yet consumed.
  #[must_use]
  pub fn remainder(&self) -> &'a [u8] {
    self.rest
  }
}

impl<'a> Iterator for Blocks<'a> {
  type Item = Result<Block<'a>, BlockError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed || self.rest.is_empty() {
      return None;
    }
    match verify_block(self.rest) {
      Ok(block) => {
        self.rest = self.rest.get(block.frame_len()..).unwrap_or_default();
        Some(Ok(block))
      }
      Err(err) => {
        self.failed = true;
        Some(Err(err))
      }
    }
  }
}

/// `compressed_size` field for a payload of `payload_len` bytes.
fn compressed_size_for(payload_len: usize) -> Result<u32, BlockError> {
  payload_len
    .checked_add(HEADER_LEN)
    .and_then(|n| u32::try_from(n).ok())
    .ok_or(BlockError::PayloadTooLarge { len: payload_len })
}

/// Write a complete frame for `payload` into `out` and return its length.
///
/// The inverse of [`verify_block`]. `payload` is stored as-is; it must already
/// be encoded with `method`.
pub fn seal_block(
  method: CompressionMethod,
  decompressed_size: u32,
  payload: &[u8],
  out: &mut [u8],
) -> Result<usize, BlockError> {
  let compressed_size = compressed_size_for(payload.len())?;
  let header = BlockHeader {
    method,
    compressed_size,
    decompressed_size,
  };
  let frame_len = header.frame_len();
  let available = out.len();
  let Some(frame) = out.get_mut(..frame_len) else {
    return Err(BlockError::Truncated {
      needed: frame_len,
      available,
    });
  };

  let (checksum, compressed) = frame.split_at_mut(CHECKSUM_LEN);
  let (head, body) = compressed.split_at_mut(HEADER_LEN);
  head.copy_from_slice(&header.to_bytes());
  body.copy_from_slice(payload);
  checksum.copy_from_slice(&block_checksum(compressed).to_le_bytes());
  Ok(frame_len)
}

/// [`seal_block`] into a freshly allocated frame.
#[cfg(feature = "alloc")]
pub fn seal_block_vec(
  method: CompressionMethod,
  decompressed_size: u32,
  payload: &[u8],
) -> Result<alloc::vec::Vec<u8>, BlockError> {
  let frame_len = CHECKSUM_LEN
    .checked_add(compressed_size_for(payload.len())? as usize)
    .ok_or(BlockError::PayloadTooLarge { len: payload.len() })?;
  let mut out = alloc::vec![0u8; frame_len];
  let n = seal_block(method, decompressed_size, payload, &mut out)?;
  out.truncate(n);
  Ok(out)
}

//! Block framing must never panic and must round-trip what it seals.

#![no_main]

use cityhash::block::{BlockError, Blocks, CompressionMethod, seal_block_vec, verify_block};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  // Arbitrary bytes: parse errors are fine, panics are not.
  let mut consumed = 0usize;
  for block in Blocks::new(data) {
    match block {
      Ok(block) => consumed += block.frame_len(),
      Err(_) => break,
    }
  }
  assert!(consumed <= data.len());

  let Ok(frame) = seal_block_vec(CompressionMethod::Lz4, data.len() as u32, data) else {
    return;
  };
  let block = verify_block(&frame).unwrap_or_else(|err| panic!("sealed frame rejected: {err}"));
  assert_eq!(block.payload, data);

  // The last byte is always header or payload, both covered by the checksum.
  let mut corrupt = frame;
  let last = corrupt.len() - 1;
  corrupt[last] ^= 0x80;
  assert!(matches!(verify_block(&corrupt), Err(BlockError::ChecksumMismatch { .. })));
});

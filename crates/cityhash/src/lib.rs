//! CityHash v1.0.2, frozen (**NOT CRYPTO**).
//!
//! This is the CityHash revision that predates the v1.0.3 algorithm change.
//! ClickHouse persists it (checksums of compressed blocks, data part
//! checksums) and exposes it as the `cityHash64` SQL function, so digests
//! produced here must stay bit-for-bit identical forever. A newer CityHash or
//! FarmHash revision is a different, incompatible function and belongs in a
//! sibling module, never in [`v1_0_2`].
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Quick Start
//!
//! ```
//! use cityhash::{Hash128, hash64, hash128, hash128_to_64};
//!
//! assert_eq!(hash64(b"Moscow"), 12507901496292878638);
//!
//! let digest: Hash128 = hash128(b"Moscow");
//! assert_eq!(u128::from(digest), 46102140593102845793298614593550999405);
//! assert_eq!(digest.to_u64(), hash128_to_64(digest.low, digest.high));
//! ```
//!
//! # Modules
//!
//! - [`v1_0_2`] - The frozen algorithm (64-bit, 128-bit, and the 128-to-64 fold).
//! - [`block`] - ClickHouse compressed-block checksums built on [`hash128`].
//! - `diag` - Path-selection diagnostics (feature `diag`).
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Links `std` (implies `alloc`) |
//! | `alloc` | Yes | Enables `Vec`-returning block helpers |
//! | `diag` | No | Enables the `diag` module |
//!
//! # Bounds
//!
//! Every read is bounds-checked against the input slice. The algorithm itself
//! never reads outside `data`, so a panic here is always a bug in this crate.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod block;
#[cfg(feature = "diag")]
pub mod diag;
mod hash128;
pub mod v1_0_2;

pub use hash128::Hash128;
pub use traits::FastHash;
pub use v1_0_2::{
  CityHash64, CityHash128, SizeClass, hash64, hash64_with_seed, hash64_with_seeds, hash128, hash128_to_64,
  hash128_with_seed, size_class_for_len,
};

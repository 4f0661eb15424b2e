//! Core hashing traits for the cityhash workspace.
//!
//! This crate provides the one-shot trait that every hash type in the
//! workspace conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic fingerprints | CityHash64, CityHash128 |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fast_hash;

pub use fast_hash::FastHash;

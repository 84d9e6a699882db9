//! # ecverify-primitives
//!
//! Value types and size constants shared by the `ecverify` crates.
//!
//! Fixed-width byte types come from [`alloy_primitives`] and are re-exported here so the
//! verifier and its users agree on a single definition of [`Address`] and [`B256`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;

pub use constants::*;

pub use alloy_primitives::{self, address, b256, hex, keccak256, Address, B256};

//! Cipher engine implementations for the blockcrypt library
//!
//! This crate provides the concrete cipher engines behind the shared
//! processing contract defined in `blockcrypt-api`. The engines are pure
//! in-memory transforms: no I/O, no logging, no wire format. They are
//! designed to be usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Key schedules are zeroized on drop and on re-initialization
//! - Key material never appears in `Debug` output
//! - Validation happens before any key-dependent computation
//! - Errors fail loudly through `Result`; nothing degrades silently

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes, AesFast, AesLight};

// Re-export the contract so engine users need only this crate
pub use blockcrypt_api::{BlockCipher, CipherParameters};

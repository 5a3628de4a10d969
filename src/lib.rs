//! # blockcrypt
//!
//! A modular library of block-cipher engines behind a minimal shared
//! processing contract.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blockcrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`blockcrypt-api`](api): contract traits, parameter types, and the
//!   ecosystem error type
//! - [`blockcrypt-params`](params): algorithm size and round constants
//! - [`blockcrypt-algorithms`](algorithms): the cipher engines
//!
//! ## Example
//!
//! ```
//! use blockcrypt::prelude::*;
//!
//! let key = [0u8; 16];
//! let plaintext = [0u8; 16];
//! let mut ciphertext = [0u8; 16];
//!
//! let mut engine = Aes::new();
//! engine.init(true, CipherParameters::Key(&key))?;
//! engine.process_block(&plaintext, 0, &mut ciphertext, 0)?;
//! # Ok::<(), blockcrypt::api::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use blockcrypt_algorithms as algorithms;
pub use blockcrypt_api as api;
pub use blockcrypt_params as params;

/// Common imports for blockcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the engine contract and its parameter surface
    pub use crate::api::{BlockCipher, CipherParameters};

    // Re-export the AES engine family
    pub use crate::algorithms::{Aes, AesFast, AesLight};
}

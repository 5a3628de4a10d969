//! Public API traits and types for the blockcrypt library
//!
//! This crate provides the public API surface for the blockcrypt ecosystem,
//! including trait definitions, error types, and common types used throughout
//! the library. Cipher engines implement these traits; mode-of-operation,
//! key-wrap, and MAC collaborators consume them.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::CipherParameters;

// Re-export all traits from the traits module
pub use traits::BlockCipher;

// Re-export trait modules for direct access
pub use traits::symmetric;

//! Block cipher engines
//!
//! Every engine in this module implements the [`BlockCipher`] contract from
//! `blockcrypt-api` and is a stateless ECB-level primitive; chaining belongs
//! to external mode-of-operation collaborators.

pub mod aes;

pub use aes::{Aes, AesFast, AesLight};

pub use blockcrypt_api::BlockCipher;

//! Trait definitions for the blockcrypt ecosystem
//!
//! Every cipher engine in the library satisfies a small shared processing
//! contract so that mode-of-operation, key-wrap, and MAC collaborators can
//! compose over engines without knowing the concrete algorithm.

pub mod symmetric;

pub use symmetric::BlockCipher;

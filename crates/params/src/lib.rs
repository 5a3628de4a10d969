//! Algorithm constants for the blockcrypt library
//!
//! This crate collects the fixed size and round-count parameters shared by
//! the cipher engines and their collaborators. It contains only data, no
//! code, and is always `no_std`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod symmetric;

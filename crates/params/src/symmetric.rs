//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of rounds for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds for AES-192
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds for AES-256
pub const AES256_ROUNDS: usize = 14;

/// The largest round count across the AES key sizes
pub const AES_MAX_ROUNDS: usize = AES256_ROUNDS;

/// The key lengths accepted by the AES engines, in bytes
pub const AES_KEY_SIZES: [usize; 3] = [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

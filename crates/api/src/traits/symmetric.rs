//! Symmetric cipher contracts

use crate::error::Result;
use crate::types::CipherParameters;

/// The shared processing contract satisfied by every block-cipher engine.
///
/// An engine's lifecycle is `constructed → init → process_block*`, with
/// optional re-initialization. [`init`](Self::init) validates the key and
/// builds the engine's round-key schedule; a failed `init` leaves the engine
/// uninitialized, never with a stale schedule. After a successful `init` the
/// schedule is read-only, so an engine may be shared across threads for
/// concurrent [`process_block`](Self::process_block) calls; re-initialization
/// takes `&mut self` and therefore exclusive access.
///
/// The trait is object-safe: collaborators that select engines at runtime
/// hold them as `Box<dyn BlockCipher>`, while the performance-critical paths
/// use static dispatch.
pub trait BlockCipher {
    /// Initialize the engine for encryption or decryption with the given
    /// parameters, replacing any previous key schedule.
    ///
    /// Fails with an invalid-key error if the key length is unsupported, or
    /// an invalid-parameter error if `params` is not the parameter kind the
    /// engine accepts (block-cipher engines take raw key material only).
    fn init(&mut self, for_encryption: bool, params: CipherParameters<'_>) -> Result<()>;

    /// The name of the underlying algorithm, e.g. `"AES"`
    fn algorithm_name(&self) -> &'static str;

    /// The cipher's block size in bytes
    fn block_size(&self) -> usize;

    /// Transform one block: read `block_size()` bytes from `input` at
    /// `in_off`, write the transformed block to `output` at `out_off`, and
    /// return the number of bytes written.
    ///
    /// Fails with a not-initialized error before a successful `init`, or a
    /// buffer-too-short error if either buffer cannot hold a full block at
    /// its offset. On failure nothing is written to `output`.
    fn process_block(
        &self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize>;

    /// Return the engine to its post-`init` state.
    ///
    /// Stateless (ECB-level) engines carry no per-block chaining state, so
    /// for them this is a no-op; chaining collaborators rely on it.
    fn reset(&mut self);
}

//! Common parameter types for the blockcrypt ecosystem

/// Initialization parameters handed to a cipher engine.
///
/// Block-cipher engines accept only raw key material; chaining-mode
/// collaborators additionally accept a key plus IV and pass the bare key on
/// to the engine they wrap. Handing an engine the wrong parameter kind is a
/// contract violation and is rejected with an invalid-parameter error.
///
/// The parameters borrow the caller's buffers; nothing is copied until an
/// engine builds its key schedule from them.
#[derive(Clone, Copy)]
pub enum CipherParameters<'a> {
    /// Raw key material
    Key(&'a [u8]),
    /// Key material plus an initialization vector
    KeyWithIv {
        /// Raw key material
        key: &'a [u8],
        /// Initialization vector
        iv: &'a [u8],
    },
}

// Key material never appears in debug output, only the lengths do.
impl core::fmt::Debug for CipherParameters<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Key(key) => f
                .debug_struct("CipherParameters::Key")
                .field("len", &key.len())
                .field("key", &"[REDACTED]")
                .finish(),
            Self::KeyWithIv { key, iv } => f
                .debug_struct("CipherParameters::KeyWithIv")
                .field("key_len", &key.len())
                .field("iv_len", &iv.len())
                .field("key", &"[REDACTED]")
                .finish(),
        }
    }
}

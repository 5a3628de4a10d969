//! Error handling for cipher engines

use core::fmt;

use blockcrypt_api::{Error as ApiError, Result as ApiResult};

/// The error type for cipher engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unsupported key length
    KeyLength {
        /// Algorithm that rejected the key
        context: &'static str,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Operation attempted before initialization
    NotInitialized {
        /// Engine that was used uninitialized
        context: &'static str,
    },

    /// Buffer too short for a full block at the given offset
    BufferTooShort {
        /// Buffer that came up short
        context: &'static str,
        /// Bytes required past the offset
        needed: usize,
        /// Bytes actually available past the offset
        actual: usize,
    },
}

/// Result type for cipher engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyLength { context, actual } => {
                write!(f, "{}: unsupported key length {} bytes", context, actual)
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::NotInitialized { context } => {
                write!(f, "{} used before initialization", context)
            }
            Error::BufferTooShort {
                context,
                needed,
                actual,
            } => {
                write!(
                    f,
                    "{}: buffer too short (need {} bytes, have {})",
                    context, needed, actual
                )
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Lossless conversion into the ecosystem error type
impl From<Error> for ApiError {
    #[cfg_attr(not(feature = "std"), allow(unused_variables))]
    fn from(err: Error) -> Self {
        match err {
            Error::KeyLength { context, actual } => ApiError::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: std::format!("unsupported key length {} bytes", actual),
            },
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::NotInitialized { context } => ApiError::NotInitialized { context },
            Error::BufferTooShort {
                context,
                needed,
                actual,
            } => ApiError::BufferTooShort {
                context,
                needed,
                actual,
            },
        }
    }
}

/// Convert an engine result to an ecosystem result with additional context
#[inline]
pub fn to_api_result<T>(r: Result<T>, ctx: &'static str) -> ApiResult<T> {
    r.map_err(|e| ApiError::from(e).with_context(ctx))
}

// Re-export ecosystem error handling traits for convenience
pub use blockcrypt_api::error::ResultExt;

// Include the validation submodule
pub mod validate;

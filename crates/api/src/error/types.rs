//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation or algorithm that rejected the key
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },

    /// Operation attempted before initialization
    NotInitialized {
        /// Operation that requires prior initialization
        context: &'static str,
    },

    /// Buffer too short for the requested operation
    BufferTooShort {
        /// Buffer that came up short
        context: &'static str,
        /// Bytes required past the offset
        needed: usize,
        /// Bytes actually available past the offset
        actual: usize,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::NotInitialized { .. } => Self::NotInitialized { context },
            Self::BufferTooShort { needed, actual, .. } => Self::BufferTooShort {
                context,
                needed,
                actual,
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::NotInitialized { context } => Self::NotInitialized { context },
            Self::BufferTooShort {
                context,
                needed,
                actual,
            } => Self::BufferTooShort {
                context,
                needed,
                actual,
            },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } if !message.is_empty() => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } if !message.is_empty() => {
                write!(f, "Invalid parameter: {}: {}", context, message)
            }
            Self::InvalidParameter { context, .. } => {
                write!(f, "Invalid parameter: {}", context)
            }
            Self::NotInitialized { context } => {
                write!(f, "{} used before initialization", context)
            }
            Self::BufferTooShort {
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
            #[cfg(feature = "std")]
            Self::Other { context, message } if !message.is_empty() => {
                write!(f, "{}: {}", context, message)
            }
            Self::Other { context, .. } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}

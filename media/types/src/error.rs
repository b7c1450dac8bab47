/*!
    Error types shared by the media crates.
*/

use std::fmt;

/**
    Error type for the media crates.
*/
#[derive(Debug)]
pub enum Error {
    /// Demux or decode failure reported by the decoding backend
    Decode { message: String },
    /// Invalid data (buffer size mismatch, malformed metadata)
    InvalidData { message: String },
    /// Unsupported format (valid but not handled)
    UnsupportedFormat { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { message } => write!(f, "decode error: {message}"),
            Self::InvalidData { message } => write!(f, "invalid data: {message}"),
            Self::UnsupportedFormat { message } => write!(f, "unsupported format: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /**
        Create a decode error with the given message.
    */
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /**
        Create an invalid data error with the given message.
    */
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /**
        Create an unsupported format error with the given message.
    */
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }
}

/**
    Result type alias for the media crates.
*/
pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("video file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("could not read video file {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: media_types::Error,
    },

    #[error("failed to read frame from source")]
    Decode(#[source] media_types::Error),

    #[error("invalid source metadata: {0}")]
    InvalidMetadata(String),

    #[error("unknown format type: {format} (expected c_array, plain_hex or python_list)")]
    UnsupportedOutputFormat { format: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("frame transform failed")]
    Transform(#[source] media_types::Error),

    #[error("frame encoding failed: {0}")]
    Encode(String),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /**
        Classify a failure to open the source at `path`. Streams that report
        unusable dimensions or frame rate are malformed metadata, anything
        else means the file could not be read.
    */
    pub(crate) fn opening(path: impl Into<PathBuf>, source: media_types::Error) -> Self {
        match source {
            media_types::Error::InvalidData { message } => Self::InvalidMetadata(message),
            source => Self::SourceUnreadable {
                path: path.into(),
                source,
            },
        }
    }

    /**
        Attach a source path to errors raised while reading frames, so a
        decode failure mid-stream reports which file it came from.
    */
    pub(crate) fn with_source_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Decode(source) => Self::SourceUnreadable {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/*!
    Shared types for the vidhex media crates.

    This crate defines the vocabulary that crosses crate boundaries. It has
    no dependency on FFmpeg, so the conversion pipeline and its tests can
    depend on it without pulling in FFmpeg bindings.

    # Core Types

    - [`VideoFrame`] - Dense, row-major pixel buffer
    - [`PixelFormat`] - Packed pixel layouts understood by the pipeline
    - [`Rational`] - Frame rates as reported by containers

    # Sources

    - [`FrameSource`] - Sequential producer of frames plus [`SourceMetadata`]
    - [`MemorySource`] - In-memory source for synthetic or pre-decoded frames

    # Error Handling

    - [`Error`] and [`Result`] - Common error types
*/

mod error;
mod format;
mod frame;
mod rational;
mod source;
mod stream;

pub use error::{Error, Result};
pub use format::PixelFormat;
pub use frame::VideoFrame;
pub use rational::Rational;
pub use source::{FrameSource, MemorySource};
pub use stream::SourceMetadata;

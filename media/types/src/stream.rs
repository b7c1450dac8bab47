/*!
    Source stream metadata.
*/

use crate::{Error, Rational, Result};

/**
    Properties of a video source, read once when the source is opened.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Native frame rate.
    pub frame_rate: Rational,
    /**
        Number of frames in the stream.

        Containers without a stored frame count report an estimate derived
        from their duration, so this is advisory and may be zero.
    */
    pub total_frames: u64,
}

impl SourceMetadata {
    /**
        Create new source metadata.
    */
    pub fn new(width: u32, height: u32, frame_rate: Rational, total_frames: u64) -> Self {
        Self {
            width,
            height,
            frame_rate,
            total_frames,
        }
    }

    /**
        Returns the native frame rate in frames per second.
    */
    pub fn fps(&self) -> f64 {
        self.frame_rate.to_f64()
    }

    /**
        Check that dimensions and frame rate are strictly positive.
    */
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_data(format!(
                "source dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.frame_rate.is_positive() {
            return Err(Error::invalid_data(format!(
                "source frame rate must be positive, got {}",
                self.frame_rate
            )));
        }
        Ok(())
    }
}

/*!
    Decoded frame types.
*/

use crate::{Error, PixelFormat, Result};

/**
    A decoded video frame.

    Pixel data is dense and row-major: row 0 left to right, then row 1,
    and so on, with `format.channels()` bytes per pixel and no row padding.
    Decoders that produce strided buffers must repack before building one.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFrame {
    /// Raw pixel data.
    pub data: Vec<u8>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel format of the data.
    pub format: PixelFormat,
}

impl VideoFrame {
    /**
        Create a new video frame.

        The buffer is not checked here, use [`VideoFrame::validate`] before
        indexing into frames that came from outside the crate.
    */
    pub fn new(data: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /**
        Create a frame filled with a single pixel value.

        `pixel` must have exactly `format.channels()` bytes.
    */
    pub fn filled(width: u32, height: u32, format: PixelFormat, pixel: &[u8]) -> Self {
        debug_assert_eq!(pixel.len(), format.channels());
        let pixels = width as usize * height as usize;
        let data = pixel.repeat(pixels);
        Self::new(data, width, height, format)
    }

    /**
        Returns the number of bytes the buffer should hold.
    */
    pub fn expected_len(&self) -> usize {
        self.format.frame_len(self.width, self.height)
    }

    /**
        Check that the frame has non-zero dimensions and a buffer of exactly
        the expected size.
    */
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_data(format!(
                "frame has zero dimension {}x{}",
                self.width, self.height
            )));
        }
        if self.data.len() != self.expected_len() {
            return Err(Error::invalid_data(format!(
                "{}x{} {} frame needs {} bytes, buffer has {}",
                self.width,
                self.height,
                self.format,
                self.expected_len(),
                self.data.len()
            )));
        }
        Ok(())
    }
}

// Frames are handed between pipeline stages by value
static_assertions::assert_impl_all!(VideoFrame: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_frame_construction() {
        let frame = VideoFrame::new(vec![0u8; 100 * 50 * 3], 100, 50, PixelFormat::Bgr24);

        assert_eq!(frame.width, 100);
        assert_eq!(frame.height, 50);
        assert_eq!(frame.format, PixelFormat::Bgr24);
        assert_eq!(frame.expected_len(), 100 * 50 * 3);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn video_frame_filled() {
        let frame = VideoFrame::filled(2, 2, PixelFormat::Bgr24, &[1, 2, 3]);
        assert_eq!(frame.data, vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn video_frame_rejects_short_buffer() {
        let frame = VideoFrame::new(vec![0u8; 5], 2, 2, PixelFormat::Gray8);
        let err = frame.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidData { .. }));
        assert!(err.to_string().contains("needs 4 bytes, buffer has 5"));
    }

    #[test]
    fn video_frame_rejects_zero_size() {
        let frame = VideoFrame::new(vec![], 0, 4, PixelFormat::Gray8);
        assert!(frame.validate().is_err());
    }
}

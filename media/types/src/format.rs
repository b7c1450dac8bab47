/*!
    Pixel format types.
*/

use std::fmt;

/**
    Packed 8-bit pixel formats.

    Every format here stores one byte per channel with no padding between
    pixels, so a frame of `w x h` pixels is exactly `w * h * channels()` bytes.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Packed BGR, 24bpp (native layout of most decoders we read from)
    Bgr24,
    /// Packed RGB, 24bpp
    Rgb24,
    /// Single-channel luma, 8bpp
    Gray8,
}

impl PixelFormat {
    /**
        Returns the number of channels (and bytes) per pixel.
    */
    pub const fn channels(self) -> usize {
        match self {
            Self::Bgr24 | Self::Rgb24 => 3,
            Self::Gray8 => 1,
        }
    }

    /**
        Returns the buffer length in bytes for a frame of the given size.
    */
    pub const fn frame_len(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.channels()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bgr24 => write!(f, "bgr24"),
            Self::Rgb24 => write!(f, "rgb24"),
            Self::Gray8 => write!(f, "gray8"),
        }
    }
}

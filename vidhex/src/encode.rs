/*!
    Flattening transformed frames into byte sequences.
*/

use media_types::{PixelFormat, VideoFrame};

use crate::error::{Error, Result};

/**
    The bytes of one converted frame.

    Row-major, one byte per pixel for grayscale or three bytes per pixel in
    Blue, Green, Red order for color. No padding.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFrame(Vec<u8>);

impl EncodedFrame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for EncodedFrame {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/**
    Flatten a transformed frame.

    Only BGR24 and GRAY8 frames are accepted, since those are the layouts
    the output preserves byte for byte. The frame buffer must be exactly
    `width * height * channels` bytes.
*/
pub fn encode_frame(frame: VideoFrame) -> Result<EncodedFrame> {
    if !matches!(frame.format, PixelFormat::Bgr24 | PixelFormat::Gray8) {
        return Err(Error::Encode(format!(
            "expected bgr24 or gray8 frame, got {}",
            frame.format
        )));
    }
    frame
        .validate()
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(EncodedFrame(frame.data))
}

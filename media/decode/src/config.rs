/*!
    Source configuration types.
*/

use media_types::PixelFormat;

/**
    Configuration for a video source.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoSourceConfig {
    /// Packed format frames are converted to after decoding.
    pub pixel_format: PixelFormat,
}

impl Default for VideoSourceConfig {
    fn default() -> Self {
        Self {
            pixel_format: PixelFormat::Bgr24,
        }
    }
}

impl VideoSourceConfig {
    /**
        Create a new config with default settings (packed BGR24 output).
    */
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bgr() {
        assert_eq!(VideoSourceConfig::new().pixel_format, PixelFormat::Bgr24);
    }
}

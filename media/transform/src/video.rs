/*!
    Video frame transformation.
*/

use media_types::{Error, PixelFormat, Result, VideoFrame};

use crate::{area::AreaScaler, luma::luma};

/**
    Configuration for video transformation.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoTransformConfig {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Reduce output to a single luma channel.
    pub grayscale: bool,
}

impl VideoTransformConfig {
    /**
        Create a new transform configuration.
    */
    pub fn new(width: u32, height: u32, grayscale: bool) -> Self {
        Self {
            width,
            height,
            grayscale,
        }
    }

    /**
        Create a config for packed BGR output at the given size.
    */
    pub fn to_bgr(width: u32, height: u32) -> Self {
        Self::new(width, height, false)
    }

    /**
        Create a config for single-channel luma output at the given size.
    */
    pub fn to_gray(width: u32, height: u32) -> Self {
        Self::new(width, height, true)
    }

    /**
        Returns the pixel format of transformed frames.
    */
    pub fn output_format(&self) -> PixelFormat {
        if self.grayscale {
            PixelFormat::Gray8
        } else {
            PixelFormat::Bgr24
        }
    }
}

/**
    Video frame transformer.

    Resizes frames to the configured size with area interpolation, then maps
    channels to the output layout:

    | input  | grayscale output   | color output            |
    |--------|--------------------|-------------------------|
    | BGR24  | luma of (B, G, R)  | unchanged               |
    | RGB24  | luma of (B, G, R)  | reordered to B, G, R    |
    | GRAY8  | unchanged          | luma copied to B, G, R  |

    The scaler is created on the first frame and recreated if the source
    size changes.
*/
pub struct VideoTransform {
    config: VideoTransformConfig,
    scaler: Option<AreaScaler>,
}

impl VideoTransform {
    /**
        Create a new video transformer.
    */
    pub fn new(config: VideoTransformConfig) -> Self {
        Self {
            config,
            scaler: None,
        }
    }

    /**
        Transform a frame to the configured size and format.
    */
    pub fn transform(&mut self, frame: &VideoFrame) -> Result<VideoFrame> {
        if self.config.width == 0 || self.config.height == 0 {
            return Err(Error::invalid_data(format!(
                "target size must be positive, got {}x{}",
                self.config.width, self.config.height
            )));
        }
        frame.validate()?;

        let scaler = self.scaler_for(frame.width, frame.height);
        let resized = scaler.scale(&frame.data, frame.format.channels());

        let data = match (frame.format, self.config.grayscale) {
            (PixelFormat::Bgr24, false) | (PixelFormat::Gray8, true) => resized,
            (PixelFormat::Bgr24, true) => resized
                .chunks_exact(3)
                .map(|p| luma(p[0], p[1], p[2]))
                .collect(),
            (PixelFormat::Rgb24, true) => resized
                .chunks_exact(3)
                .map(|p| luma(p[2], p[1], p[0]))
                .collect(),
            (PixelFormat::Rgb24, false) => resized
                .chunks_exact(3)
                .flat_map(|p| [p[2], p[1], p[0]])
                .collect(),
            (PixelFormat::Gray8, false) => resized.iter().flat_map(|&y| [y, y, y]).collect(),
        };

        Ok(VideoFrame::new(
            data,
            self.config.width,
            self.config.height,
            self.config.output_format(),
        ))
    }

    fn scaler_for(&mut self, src_width: u32, src_height: u32) -> &AreaScaler {
        let (width, height) = (self.config.width, self.config.height);
        let reusable = matches!(
            &self.scaler,
            Some(scaler) if scaler.source_size() == (src_width, src_height)
        );
        if !reusable {
            tracing::debug!("building area scaler {src_width}x{src_height} -> {width}x{height}");
            self.scaler = Some(AreaScaler::new(src_width, src_height, width, height));
        }
        self.scaler.as_ref().expect("scaler initialized above")
    }
}

/*!
    The conversion driver.
*/

use media_transform::VideoTransform;
use media_types::FrameSource;

use crate::{
    config::ConversionConfig,
    encode::{EncodedFrame, encode_frame},
    error::{Error, Result},
    sampler::FrameSampler,
};

/// How often progress is logged, in retained frames.
const PROGRESS_INTERVAL: usize = 10;

/**
    Every frame kept by a conversion, in source order.

    All frames have the same length, fixed when the result is created.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionResult {
    frames: Vec<EncodedFrame>,
    bytes_per_frame: usize,
}

impl ConversionResult {
    /**
        Create an empty result for frames of `bytes_per_frame` bytes.
    */
    pub fn new(bytes_per_frame: usize) -> Self {
        Self {
            frames: Vec::new(),
            bytes_per_frame,
        }
    }

    /**
        Append a frame, rejecting it if its length differs from the rest.
    */
    pub fn push(&mut self, frame: EncodedFrame) -> Result<()> {
        if frame.len() != self.bytes_per_frame {
            return Err(Error::Encode(format!(
                "frame {} has {} bytes, expected {}",
                self.frames.len(),
                frame.len(),
                self.bytes_per_frame
            )));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn frames(&self) -> &[EncodedFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn bytes_per_frame(&self) -> usize {
        self.bytes_per_frame
    }

    pub fn total_bytes(&self) -> usize {
        self.frames.len() * self.bytes_per_frame
    }
}

/**
    Pulls frames from a source, keeps those the sampler selects, and
    transforms and encodes each one into a [`ConversionResult`].

    Runs strictly one frame at a time on the calling thread. The whole
    result is held in memory, so memory use grows with
    `retained frames * bytes per frame`.
*/
pub struct Converter {
    config: ConversionConfig,
    transform: VideoTransform,
}

impl Converter {
    /**
        Create a converter, validating the configuration up front.
    */
    pub fn new(config: ConversionConfig) -> Result<Self> {
        config.validate()?;
        let transform = VideoTransform::new(config.transform_config());
        Ok(Self { config, transform })
    }

    /**
        Convert every retained frame of `source`.

        Fails with [`Error::InvalidMetadata`] before reading any frame if
        the source reports non-positive dimensions or frame rate, and with
        [`Error::Decode`] if the source fails mid-stream.
    */
    pub fn convert<S: FrameSource + ?Sized>(&mut self, source: &mut S) -> Result<ConversionResult> {
        let metadata = source.metadata();
        metadata
            .validate()
            .map_err(|e| Error::InvalidMetadata(e.to_string()))?;

        let mut sampler = FrameSampler::new(metadata.fps(), self.config.fps)?;

        tracing::info!(
            width = metadata.width,
            height = metadata.height,
            fps = metadata.fps(),
            total_frames = metadata.total_frames,
            "source video"
        );
        tracing::info!(
            width = self.config.width,
            height = self.config.height,
            fps = self.config.fps,
            grayscale = self.config.grayscale,
            "conversion target"
        );
        tracing::info!(
            skip = sampler.skip(),
            expected = sampler.expected_retained(metadata.total_frames),
            "processing every {} frame(s)",
            sampler.skip()
        );

        let mut result = ConversionResult::new(self.config.bytes_per_frame());

        while let Some(frame) = source.next_frame().map_err(Error::Decode)? {
            if !sampler.advance() {
                continue;
            }

            let transformed = self.transform.transform(&frame).map_err(Error::Transform)?;
            result.push(encode_frame(transformed)?)?;

            if result.len() % PROGRESS_INTERVAL == 0 {
                tracing::debug!(processed = result.len(), "processed frames");
            }
        }

        tracing::info!(
            processed = result.len(),
            read = sampler.frames_seen(),
            "conversion finished"
        );

        Ok(result)
    }
}

/*!
    FFmpeg-backed video source.
*/

use std::path::Path;

use ffmpeg_next::{
    self as ffmpeg, Packet, codec,
    decoder::Video as VideoDecoderFFmpeg,
    format::{Pixel, context::Input},
    media,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
    util::frame::video::Video as VideoFrameFFmpeg,
};

use media_types::{
    Error, FrameSource, PixelFormat, Rational, Result, SourceMetadata, VideoFrame,
};

use crate::config::VideoSourceConfig;

/**
    Video source reading frames from a media file.

    Demuxes the best video stream of the container, decodes it, and
    converts every frame to the configured packed pixel format at its
    native resolution. Other streams are skipped.
*/
pub struct VideoSource {
    input: Input,
    stream_index: usize,
    decoder: VideoDecoderFFmpeg,
    scaler: ScalingContext,
    pixel_format: PixelFormat,
    metadata: SourceMetadata,
    decoded: VideoFrameFFmpeg,
    converted: VideoFrameFFmpeg,
    eof_sent: bool,
    drained: bool,
}

impl VideoSource {
    /**
        Open a media file and prepare its best video stream for decoding.
    */
    pub fn open(path: impl AsRef<Path>, config: VideoSourceConfig) -> Result<Self> {
        let path = path.as_ref();

        ffmpeg::init().map_err(|e| Error::decode(e.to_string()))?;
        ffmpeg::log::set_level(ffmpeg::log::Level::Error);

        let input = ffmpeg::format::input(path)
            .map_err(|e| Error::decode(format!("failed to open {}: {e}", path.display())))?;

        let stream = input
            .streams()
            .best(media::Type::Video)
            .ok_or_else(|| Error::unsupported_format("no video stream found"))?;
        let stream_index = stream.index();

        let decoder = codec::context::Context::from_parameters(stream.parameters())
            .map_err(|e| Error::decode(e.to_string()))?
            .decoder()
            .video()
            .map_err(|e| Error::decode(e.to_string()))?;

        let frame_rate = choose_frame_rate(
            from_ffmpeg_rational(stream.avg_frame_rate()),
            from_ffmpeg_rational(stream.rate()),
        );
        let total_frames = estimate_frame_count(stream.frames(), input.duration(), frame_rate);
        let metadata = SourceMetadata::new(
            decoder.width(),
            decoder.height(),
            frame_rate,
            total_frames,
        );
        metadata.validate()?;

        let scaler = ScalingContext::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            to_ffmpeg_pixel(config.pixel_format),
            decoder.width(),
            decoder.height(),
            ScalingFlags::AREA,
        )
        .map_err(|e| Error::decode(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            stream = stream_index,
            format = ?decoder.format(),
            width = decoder.width(),
            height = decoder.height(),
            frame_rate = %frame_rate,
            total_frames,
            "opened video source"
        );

        Ok(Self {
            input,
            stream_index,
            decoder,
            scaler,
            pixel_format: config.pixel_format,
            metadata,
            decoded: VideoFrameFFmpeg::empty(),
            converted: VideoFrameFFmpeg::empty(),
            eof_sent: false,
            drained: false,
        })
    }

    /**
        Feed the decoder with the next packet of our stream, or signal end
        of input once the container is exhausted.
    */
    fn feed(&mut self) -> Result<()> {
        loop {
            let mut packet = Packet::empty();
            match packet.read(&mut self.input) {
                Ok(()) if packet.stream() == self.stream_index => {
                    return self
                        .decoder
                        .send_packet(&packet)
                        .map_err(|e| Error::decode(e.to_string()));
                }
                Ok(()) => continue,
                Err(ffmpeg::Error::Eof) => {
                    self.eof_sent = true;
                    return self
                        .decoder
                        .send_eof()
                        .map_err(|e| Error::decode(e.to_string()));
                }
                Err(e) => return Err(Error::decode(e.to_string())),
            }
        }
    }

    /**
        Convert the last decoded frame into a dense frame of our format.
    */
    fn convert(&mut self) -> Result<VideoFrame> {
        self.scaler
            .run(&self.decoded, &mut self.converted)
            .map_err(|e| Error::decode(e.to_string()))?;

        let width = self.converted.width();
        let height = self.converted.height();
        let data = pack_rows(
            self.converted.data(0),
            self.converted.stride(0),
            self.pixel_format.frame_len(width, 1),
            height as usize,
        );

        Ok(VideoFrame::new(data, width, height, self.pixel_format))
    }
}

impl FrameSource for VideoSource {
    fn metadata(&self) -> SourceMetadata {
        self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<VideoFrame>> {
        if self.drained {
            return Ok(None);
        }
        loop {
            match self.decoder.receive_frame(&mut self.decoded) {
                Ok(()) => return self.convert().map(Some),
                Err(ffmpeg::Error::Eof) => {
                    self.drained = true;
                    return Ok(None);
                }
                Err(ffmpeg::Error::Other {
                    errno: ffmpeg::error::EAGAIN,
                }) if !self.eof_sent => self.feed()?,
                Err(e) => return Err(Error::decode(e.to_string())),
            }
        }
    }
}

fn to_ffmpeg_pixel(format: PixelFormat) -> Pixel {
    match format {
        PixelFormat::Bgr24 => Pixel::BGR24,
        PixelFormat::Rgb24 => Pixel::RGB24,
        PixelFormat::Gray8 => Pixel::GRAY8,
    }
}

fn from_ffmpeg_rational(r: ffmpeg::Rational) -> Rational {
    Rational::new(r.numerator(), r.denominator())
}

/**
    Prefer the average frame rate, falling back to the stream's base rate
    when the container leaves it unset.
*/
fn choose_frame_rate(average: Rational, base: Rational) -> Rational {
    if average.is_positive() {
        average
    } else {
        base
    }
}

/**
    Use the stored frame count when present, otherwise estimate it from the
    container duration (in microseconds) and the frame rate.
*/
fn estimate_frame_count(stored: i64, duration_us: i64, frame_rate: Rational) -> u64 {
    if stored > 0 {
        return stored as u64;
    }
    if duration_us <= 0 || !frame_rate.is_positive() {
        return 0;
    }
    let seconds = duration_us as f64 / f64::from(ffmpeg::ffi::AV_TIME_BASE);
    (seconds * frame_rate.to_f64()).round() as u64
}

/**
    Copy `height` rows of `row_len` bytes out of a strided plane.
*/
fn pack_rows(plane: &[u8], stride: usize, row_len: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(row_len * height);
    for row in 0..height {
        let start = row * stride;
        data.extend_from_slice(&plane[start..start + row_len]);
    }
    data
}

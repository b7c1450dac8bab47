/*!
    Video decoding for the vidhex pipeline.

    This crate turns a video file into a sequence of dense, native-size
    frames. It handles demuxing, codec decoding and conversion from the
    codec's pixel format (usually planar YUV) to a packed layout.

    # Example

    ```ignore
    use media_decode::{VideoSource, VideoSourceConfig};
    use media_types::FrameSource;

    let mut source = VideoSource::open("video.mp4", VideoSourceConfig::new())?;
    println!("{:?}", source.metadata());

    while let Some(frame) = source.next_frame()? {
        // frame.data is packed BGR, frame.width x frame.height
    }
    ```

    # Pixel Formats

    Frames are delivered as packed BGR24 by default, matching the channel
    order the rest of the pipeline encodes. Setting
    `VideoSourceConfig::pixel_format` to `Gray8` makes swscale produce
    single-channel frames instead.
*/

pub use media_types::{Error, FrameSource, PixelFormat, Result, SourceMetadata, VideoFrame};

mod config;
mod video;

pub use config::VideoSourceConfig;
pub use video::VideoSource;

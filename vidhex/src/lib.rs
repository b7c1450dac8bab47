/*!
    Convert video into hex byte arrays for embedding in firmware.

    Frames are pulled from a [`FrameSource`], thinned to a target frame
    rate, resized with area interpolation, optionally reduced to luma, and
    rendered as a C array, plain hex dump or Python list.

    ```ignore
    use std::path::Path;
    use vidhex::{ConversionConfig, OutputFormat, convert_file};

    let config = ConversionConfig::new(128, 64, 10).with_format(OutputFormat::PlainHex);
    let summary = convert_file(Path::new("bad_apple.mp4"), None, &config)?;
    println!("{}", summary.report);
    ```
*/

mod config;
mod encode;
mod error;
mod job;
mod pipeline;
mod render;
mod report;
mod sampler;

pub use media_types::{FrameSource, MemorySource, SourceMetadata, VideoFrame};

pub use config::{ConversionConfig, OutputFormat};
pub use encode::{EncodedFrame, encode_frame};
pub use error::{Error, Result};
pub use job::{ConversionSummary, convert_file, convert_source};
pub use pipeline::{ConversionResult, Converter};
pub use render::{render, render_to_string};
pub use report::ConversionReport;
pub use sampler::FrameSampler;

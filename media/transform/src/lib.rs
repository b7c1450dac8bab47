/*!
    Frame transformation for the vidhex pipeline.

    This crate converts decoded frames to the size and pixel layout the
    encoder expects:
    - **Scaling**: area-weighted resampling to an exact target size
    - **Color**: BGR/RGB reordering and BT.601 luma reduction

    # Usage

    ```ignore
    use media_transform::{VideoTransform, VideoTransformConfig};

    // Convert any frame to 128x64 single-channel luma
    let mut transform = VideoTransform::new(VideoTransformConfig::to_gray(128, 64));

    for frame in decoded_frames {
        let small = transform.transform(&frame)?;
        // Encode small.data
    }
    ```

    # Determinism

    Resampling weights are computed with integer arithmetic, so the output
    is a pure function of the input buffer and the target size. The same
    frame always produces the same bytes on every platform.

    # Lazy Initialization

    Scaling weights depend on the source size, which is only known once the
    first frame arrives. They are built on first use and rebuilt if the
    source size changes mid-stream.
*/

pub use media_types::{Error, PixelFormat, Result, VideoFrame};

mod area;
mod luma;
mod video;

pub use area::AreaScaler;
pub use luma::luma;
pub use video::{VideoTransform, VideoTransformConfig};

/*!
    C array output.

    ```text
    // Video data: 2 frames, 2x1, 1 channel(s)
    // Generated from: input.mp4

    const unsigned char video_data[2][2] = {
      // Frame 0
      {
        0x00, 0xFF
      },
      // Frame 1
      {
        0x7F, 0x80
      }
    };

    #define FRAME_COUNT 2
    #define FRAME_WIDTH 2
    #define FRAME_HEIGHT 1
    #define FRAME_CHANNELS 1
    ```
*/

use std::io::{self, Write};

use super::ELEMENTS_PER_LINE;
use crate::{config::ConversionConfig, pipeline::ConversionResult};

pub(super) fn write<W: Write + ?Sized>(
    out: &mut W,
    result: &ConversionResult,
    config: &ConversionConfig,
    source: &str,
) -> io::Result<()> {
    let count = result.len();
    let channels = config.channels();

    writeln!(
        out,
        "// Video data: {count} frames, {}x{}, {channels} channel(s)",
        config.width, config.height
    )?;
    writeln!(out, "// Generated from: {source}")?;
    writeln!(out)?;

    writeln!(
        out,
        "const unsigned char video_data[{count}][{}] = {{",
        config.bytes_per_frame()
    )?;

    for (i, frame) in result.frames().iter().enumerate() {
        write!(out, "  // Frame {i}\n  {{")?;

        let bytes = frame.as_bytes();
        for (j, byte) in bytes.iter().enumerate() {
            if j % ELEMENTS_PER_LINE == 0 {
                write!(out, "\n    ")?;
            }
            write!(out, "0x{byte:02X}")?;
            if j + 1 < bytes.len() {
                write!(out, ", ")?;
            }
        }

        write!(out, "\n  }}")?;
        if i + 1 < count {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "#define FRAME_COUNT {count}")?;
    writeln!(out, "#define FRAME_WIDTH {}", config.width)?;
    writeln!(out, "#define FRAME_HEIGHT {}", config.height)?;
    writeln!(out, "#define FRAME_CHANNELS {channels}")
}

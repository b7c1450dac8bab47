/*!
    Plain hex output.

    ```text
    # Video data: 1 frames, 17x1
    # Generated from: input.mp4

    # Frame 0
    00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F 
    10 

    ```

    Every element is followed by a single space, including the last one on
    a line. Frames end with a blank line.
*/

use std::io::{self, Write};

use super::{ELEMENTS_PER_LINE, write_hash_header};
use crate::{config::ConversionConfig, pipeline::ConversionResult};

pub(super) fn write<W: Write + ?Sized>(
    out: &mut W,
    result: &ConversionResult,
    config: &ConversionConfig,
    source: &str,
) -> io::Result<()> {
    write_hash_header(out, result, config, source)?;

    for (i, frame) in result.frames().iter().enumerate() {
        writeln!(out, "# Frame {i}")?;
        for (j, byte) in frame.as_bytes().iter().enumerate() {
            if j > 0 && j % ELEMENTS_PER_LINE == 0 {
                writeln!(out)?;
            }
            write!(out, "{byte:02X} ")?;
        }
        write!(out, "\n\n")?;
    }

    Ok(())
}

/*!
    Python list output.

    ```text
    # Video data: 2 frames, 2x1
    # Generated from: input.mp4

    video_data = [
        # Frame 0
        [0x00, 0xFF],
        # Frame 1
        [0x7F, 0x80]
    ]
    ```

    Long frames continue on lines indented to sit under the first element.
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

    let count = result.len();
    writeln!(out, "video_data = [")?;

    for (i, frame) in result.frames().iter().enumerate() {
        write!(out, "    # Frame {i}\n    [")?;

        let bytes = frame.as_bytes();
        for (j, byte) in bytes.iter().enumerate() {
            if j > 0 && j % ELEMENTS_PER_LINE == 0 {
                write!(out, "\n     ")?;
            }
            write!(out, "0x{byte:02X}")?;
            if j + 1 < bytes.len() {
                write!(out, ", ")?;
            }
        }

        write!(out, "]")?;
        if i + 1 < count {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "]")
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{ConversionConfig, OutputFormat},
        render::{render_to_string, tests::result_of},
    };

    fn list(width: u32, height: u32) -> ConversionConfig {
        ConversionConfig::new(width, height, 10).with_format(OutputFormat::PythonList)
    }

    #[test]
    fn two_frame_layout() {
        let result = result_of(&[&[0x00, 0xFF], &[0x7F, 0x80]]);

        let text = render_to_string(&result, &list(2, 1), "input.mp4");

        let expected = "\
# Video data: 2 frames, 2x1
# Generated from: input.mp4

video_data = [
    # Frame 0
    [0x00, 0xFF],
    # Frame 1
    [0x7F, 0x80]
]
";
        assert_eq!(text, expected);
    }

    #[test]
    fn header_matches_plain_hex() {
        let result = result_of(&[&[1, 2]]);
        let config = list(2, 1);

        let python = render_to_string(&result, &config, "clip.mp4");
        let plain = render_to_string(
            &result,
            &config.with_format(OutputFormat::PlainHex),
            "clip.mp4",
        );

        let header = "# Video data: 1 frames, 2x1\n# Generated from: clip.mp4\n\n";
        assert!(python.starts_with(header));
        assert!(plain.starts_with(header));
        assert!(!python.contains("FRAME_COUNT"));
    }

    #[test]
    fn wraps_every_sixteen_elements() {
        let bytes: Vec<u8> = (0..17).collect();
        let result = result_of(&[bytes.as_slice()]);

        let text = render_to_string(&result, &list(17, 1), "x");

        assert!(text.contains("0x0E, 0x0F, \n     0x10]\n]\n"));
    }
}

/*!
    Rendering converted frames as source-code text.

    Each [`OutputFormat`] has its own renderer module. All of them wrap
    elements 16 to a line and print bytes as two uppercase hex digits.
*/

use std::io::{self, Write};

use crate::{
    config::{ConversionConfig, OutputFormat},
    pipeline::ConversionResult,
};

mod c_array;
mod plain_hex;
mod python_list;

/// Elements per output line.
const ELEMENTS_PER_LINE: usize = 16;

/**
    Write `result` to `out` in the format selected by `config`.

    `source` is the label printed in the "Generated from" header line,
    normally the input path.
*/
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    result: &ConversionResult,
    config: &ConversionConfig,
    source: &str,
) -> io::Result<()> {
    match config.format {
        OutputFormat::CArray => c_array::write(out, result, config, source),
        OutputFormat::PlainHex => plain_hex::write(out, result, config, source),
        OutputFormat::PythonList => python_list::write(out, result, config, source),
    }
}

/**
    Render into a string. See [`render`].
*/
pub fn render_to_string(
    result: &ConversionResult,
    config: &ConversionConfig,
    source: &str,
) -> String {
    let mut buf = Vec::with_capacity(estimated_len(result));
    // Writing into a Vec cannot fail
    let _ = render(&mut buf, result, config, source);
    // Output is ASCII apart from the source label, which came from a &str
    String::from_utf8_lossy(&buf).into_owned()
}

/// Roughly six characters per element ("0xHH, ") plus headers.
fn estimated_len(result: &ConversionResult) -> usize {
    result.total_bytes() * 6 + 512
}

/**
    Header shared by the `#`-commented formats.
*/
fn write_hash_header<W: Write + ?Sized>(
    out: &mut W,
    result: &ConversionResult,
    config: &ConversionConfig,
    source: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "# Video data: {} frames, {}x{}",
        result.len(),
        config.width,
        config.height
    )?;
    writeln!(out, "# Generated from: {source}")?;
    writeln!(out)
}

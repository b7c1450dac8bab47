/*!
    File-to-file conversion.
*/

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use media_decode::{VideoSource, VideoSourceConfig};
use media_types::FrameSource;

use crate::{
    config::ConversionConfig,
    error::{Error, Result},
    pipeline::{ConversionResult, Converter},
    render::render,
    report::ConversionReport,
};

/**
    Outcome of a successful file conversion.
*/
#[derive(Clone, Debug)]
pub struct ConversionSummary {
    /// Where the text output was written.
    pub output_path: PathBuf,
    /// Statistics of the converted frames.
    pub report: ConversionReport,
}

/**
    Convert the video at `input` and write the rendered text.

    When `output` is `None` the path is derived from the input name, see
    [`ConversionConfig::output_path_for`]. The output file is only created
    once every frame has been converted, so a missing, unreadable or
    malformed source never leaves a file behind.
*/
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    config: &ConversionConfig,
) -> Result<ConversionSummary> {
    config.validate()?;

    if !input.exists() {
        return Err(Error::SourceNotFound {
            path: input.to_path_buf(),
        });
    }

    let mut source = VideoSource::open(input, VideoSourceConfig::new())
        .map_err(|source| Error::opening(input, source))?;

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_path_for(input));

    let label = input.display().to_string();
    let report = convert_source(&mut source, &label, &output_path, config)
        .map_err(|e| e.with_source_path(input))?;

    Ok(ConversionSummary {
        output_path,
        report,
    })
}

/**
    Convert every retained frame of `source` and write the rendered text to
    `output_path`.

    `label` is printed in the output header as the origin of the data.
*/
pub fn convert_source<S: FrameSource + ?Sized>(
    source: &mut S,
    label: &str,
    output_path: &Path,
    config: &ConversionConfig,
) -> Result<ConversionReport> {
    let mut converter = Converter::new(config.clone())?;
    let result = converter.convert(source)?;

    write_output(output_path, &result, config, label)?;

    Ok(ConversionReport::new(&result, config))
}

fn write_output(
    path: &Path,
    result: &ConversionResult,
    config: &ConversionConfig,
    label: &str,
) -> Result<()> {
    write_output_with(path, |path| File::create(path), result, config, label)
}

/**
    Render into the writer returned by `create`. A failed write removes
    whatever was already written to `path`.
*/
fn write_output_with<W: Write>(
    path: &Path,
    create: impl FnOnce(&Path) -> io::Result<W>,
    result: &ConversionResult,
    config: &ConversionConfig,
    label: &str,
) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(create(path).map_err(write_err)?);
    let written = render(&mut out, result, config, label).and_then(|()| out.flush());
    if let Err(source) = written {
        drop(out);
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not remove partial output");
        }
        return Err(write_err(source));
    }

    tracing::info!(path = %path.display(), format = %config.format, "hex data saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::OutputFormat, render::render_to_string};
    use media_types::{MemorySource, PixelFormat, Rational, SourceMetadata, VideoFrame};

    fn gradient_source(frames: u8) -> MemorySource {
        let meta = SourceMetadata::new(8, 4, Rational::whole(30), frames as u64);
        let frames = (0..frames).map(|i| {
            let data = (0..8 * 4)
                .flat_map(|p| [p as u8 * 4, i.wrapping_mul(9), 255 - p as u8])
                .collect();
            VideoFrame::new(data, 8, 4, PixelFormat::Bgr24)
        });
        MemorySource::new(meta, frames.collect::<Vec<_>>())
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.mp4");
        let config = ConversionConfig::default();

        let err = convert_file(&input, None, &config).unwrap_err();

        assert!(matches!(err, Error::SourceNotFound { ref path } if *path == input));
        assert!(!config.output_path_for(&input).exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn unreadable_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("garbage.mp4");
        std::fs::write(&input, b"this is not a video container").unwrap();
        let output = dir.path().join("out.txt");

        let config = ConversionConfig::default();

        let err = convert_file(&input, Some(output.as_path()), &config).unwrap_err();

        assert!(matches!(err, Error::SourceUnreadable { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_config_fails_before_touching_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.mp4");

        let err = convert_file(&input, None, &ConversionConfig::new(0, 0, 10)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn unknown_format_fails_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let mut source = gradient_source(3);

        let outcome = ConversionConfig::default()
            .with_format_selector("xml")
            .and_then(|config| convert_source(&mut source, "in.mp4", &output, &config));

        assert!(matches!(
            outcome,
            Err(Error::UnsupportedOutputFormat { ref format }) if format == "xml"
        ));
        assert_eq!(source.frames_read(), 0);
        assert!(!output.exists());
    }

    #[test]
    fn invalid_metadata_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let meta = SourceMetadata::new(8, 4, Rational::new(0, 0), 1);
        let mut source = MemorySource::new(
            meta,
            [VideoFrame::filled(8, 4, PixelFormat::Bgr24, &[0, 0, 0])],
        );

        let err = convert_source(&mut source, "in.mp4", &output, &ConversionConfig::default())
            .unwrap_err();

        assert!(matches!(err, Error::InvalidMetadata(_)));
        assert!(!output.exists());
    }

    #[test]
    fn writes_rendered_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.h");
        let config = ConversionConfig::new(4, 2, 10);

        let report = convert_source(&mut gradient_source(7), "in.mp4", &output, &config).unwrap();

        // 30 fps to 10 fps keeps frames 0, 3 and 6
        assert_eq!(report.frames, 3);
        assert_eq!(report.bytes_per_frame, 8);
        assert_eq!(report.total_bytes, 24);

        let written = std::fs::read_to_string(&output).unwrap();
        let result = Converter::new(config.clone())
            .unwrap()
            .convert(&mut gradient_source(7))
            .unwrap();
        assert_eq!(written, render_to_string(&result, &config, "in.mp4"));
        assert!(written.contains("#define FRAME_COUNT 3\n"));
    }

    /// Accepts a fixed number of bytes, then fails every write.
    struct ShortWriter {
        file: File,
        budget: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            self.file.write(&buf[..n])
        }

        fn flush(&mut self) -> io::Result<()> {
            self.file.flush()
        }
    }

    #[test]
    fn failed_write_removes_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.h");
        let config = ConversionConfig::new(4, 2, 10);
        let result = Converter::new(config.clone())
            .unwrap()
            .convert(&mut gradient_source(7))
            .unwrap();

        let err = write_output_with(
            &output,
            |path| {
                Ok(ShortWriter {
                    file: File::create(path)?,
                    budget: 16,
                })
            },
            &result,
            &config,
            "in.mp4",
        )
        .unwrap_err();

        assert!(matches!(err, Error::Write { ref path, .. } if *path == output));
        assert!(!output.exists());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dir = tempfile::tempdir().unwrap();

        for format in OutputFormat::ALL {
            for grayscale in [true, false] {
                let config = ConversionConfig::new(3, 3, 15)
                    .with_grayscale(grayscale)
                    .with_format(format);
                let first = dir.path().join("first.txt");
                let second = dir.path().join("second.txt");

                convert_source(&mut gradient_source(9), "in.mp4", &first, &config).unwrap();
                convert_source(&mut gradient_source(9), "in.mp4", &second, &config).unwrap();

                assert_eq!(
                    std::fs::read(&first).unwrap(),
                    std::fs::read(&second).unwrap()
                );
            }
        }
    }
}

/*!
    Conversion configuration.
*/

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use media_transform::VideoTransformConfig;

use crate::error::{Error, Result};

/**
    Text syntax the converted frames are rendered in.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// C array of `0xHH` literals plus `#define` size constants.
    #[default]
    CArray,
    /// Bare space-separated hex pairs.
    PlainHex,
    /// Python list of `0xHH` literals.
    PythonList,
}

impl OutputFormat {
    pub const ALL: [Self; 3] = [Self::CArray, Self::PlainHex, Self::PythonList];

    /**
        Returns the selector used to request this format.
    */
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CArray => "c_array",
            Self::PlainHex => "plain_hex",
            Self::PythonList => "python_list",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::UnsupportedOutputFormat {
                format: s.to_string(),
            })
    }
}

/**
    Target size, rate, color depth and syntax of a conversion.

    Fixed for the duration of a run.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Target frame rate.
    pub fps: u32,
    /// Reduce frames to one luma byte per pixel.
    pub grayscale: bool,
    /// Output syntax.
    pub format: OutputFormat,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            fps: 10,
            grayscale: true,
            format: OutputFormat::CArray,
        }
    }
}

impl ConversionConfig {
    /**
        Create a grayscale `c_array` config with the given size and rate.
    */
    pub fn new(width: u32, height: u32, fps: u32) -> Self {
        Self {
            width,
            height,
            fps,
            ..Self::default()
        }
    }

    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /**
        Set the output format from its selector string.

        Fails with [`Error::UnsupportedOutputFormat`] for anything other than
        `c_array`, `plain_hex` or `python_list`.
    */
    pub fn with_format_selector(self, selector: &str) -> Result<Self> {
        Ok(self.with_format(selector.parse()?))
    }

    /**
        Returns the number of bytes per output pixel.
    */
    pub const fn channels(&self) -> usize {
        if self.grayscale { 1 } else { 3 }
    }

    /**
        Returns the exact size of every encoded frame.
    */
    pub const fn bytes_per_frame(&self) -> usize {
        self.width as usize * self.height as usize * self.channels()
    }

    /**
        Check that the target size and rate are positive.
    */
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "target size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(Error::InvalidConfig(
                "target frame rate must be positive".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn transform_config(&self) -> VideoTransformConfig {
        VideoTransformConfig::new(self.width, self.height, self.grayscale)
    }

    /**
        Derive an output path next to `input`:
        `<stem>_<W>x<H>_<fps>fps[_grayscale]_hex.txt`.
    */
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());

        let mut name = format!("{stem}_{}x{}_{}fps", self.width, self.height, self.fps);
        if self.grayscale {
            name.push_str("_grayscale");
        }
        name.push_str("_hex.txt");

        input.with_file_name(name)
    }
}

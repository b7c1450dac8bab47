/*!
    Conversion statistics.
*/

use std::fmt;

use crate::{config::ConversionConfig, pipeline::ConversionResult};

/**
    Size summary of a conversion, derived from its result and config.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    pub frames: usize,
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    pub bytes_per_frame: usize,
    pub total_bytes: usize,
}

impl ConversionReport {
    pub fn new(result: &ConversionResult, config: &ConversionConfig) -> Self {
        let bytes_per_frame = config.bytes_per_frame();
        Self {
            frames: result.len(),
            width: config.width,
            height: config.height,
            channels: config.channels(),
            bytes_per_frame,
            total_bytes: result.len() * bytes_per_frame,
        }
    }

    /**
        Returns true if no frames were converted.
    */
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /**
        Returns the payload size in KiB.
    */
    pub fn total_kib(&self) -> f64 {
        self.total_bytes as f64 / 1024.0
    }

    fn mode(&self) -> &'static str {
        if self.channels == 1 {
            "Grayscale"
        } else {
            "Color"
        }
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No data processed yet");
        }
        writeln!(f, "Conversion Statistics:")?;
        writeln!(f, "- Frames: {}", self.frames)?;
        writeln!(f, "- Resolution: {}x{}", self.width, self.height)?;
        writeln!(f, "- Channels: {} ({})", self.channels, self.mode())?;
        writeln!(f, "- Bytes per frame: {}", self.bytes_per_frame)?;
        writeln!(f, "- Total bytes: {}", self.total_bytes)?;
        write!(f, "- File size estimate: {:.2} KB", self.total_kib())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::EncodedFrame;

    fn result(frames: usize, len: usize) -> ConversionResult {
        let mut result = ConversionResult::new(len);
        for _ in 0..frames {
            result.push(EncodedFrame::from(vec![0; len])).unwrap();
        }
        result
    }

    #[test]
    fn grayscale_sizes() {
        let config = ConversionConfig::new(128, 64, 10);
        let report = ConversionReport::new(&result(3, 8192), &config);

        assert_eq!(report.channels, 1);
        assert_eq!(report.bytes_per_frame, 8192);
        assert_eq!(report.total_bytes, 3 * 8192);
        assert_eq!(report.total_kib(), 24.0);
    }

    #[test]
    fn color_sizes() {
        let config = ConversionConfig::new(4, 2, 10).with_grayscale(false);
        let report = ConversionReport::new(&result(5, 24), &config);

        assert_eq!(report.channels, 3);
        assert_eq!(report.bytes_per_frame, 24);
        assert_eq!(report.total_bytes, 120);
    }

    #[test]
    fn display_lists_statistics() {
        let config = ConversionConfig::new(2, 1, 10);
        let report = ConversionReport::new(&result(2, 2), &config);

        let expected = "\
Conversion Statistics:
- Frames: 2
- Resolution: 2x1
- Channels: 1 (Grayscale)
- Bytes per frame: 2
- Total bytes: 4
- File size estimate: 0.00 KB";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn empty_result_is_reported_distinctly() {
        let config = ConversionConfig::default();
        let report = ConversionReport::new(&result(0, 8192), &config);

        assert!(report.is_empty());
        assert_eq!(report.total_bytes, 0);
        assert_eq!(report.total_kib(), 0.0);
        assert_eq!(report.to_string(), "No data processed yet");
    }
}

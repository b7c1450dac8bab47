/*!
    Area-weighted resampling.
*/

/**
    One source sample contributing to a destination sample.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tap {
    index: usize,
    weight: u64,
}

/**
    Coverage taps for every destination position along one axis.

    Positions are measured in units of `1 / (src_len * dst_len)` of the axis,
    so source sample `s` spans `[s * dst_len, (s + 1) * dst_len)` and
    destination sample `d` spans `[d * src_len, (d + 1) * src_len)`. The
    weight of a tap is the length of the overlap, which makes the weights of
    every destination sample sum to exactly `src_len`.
*/
fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Vec<Tap>> {
    let (src, dst) = (src_len as u64, dst_len as u64);
    (0..dst)
        .map(|d| {
            let start = d * src;
            let end = start + src;
            let first = start / dst;
            let last = (end - 1) / dst;
            (first..=last)
                .filter_map(|s| {
                    let lo = start.max(s * dst);
                    let hi = end.min((s + 1) * dst);
                    (hi > lo).then_some(Tap {
                        index: s as usize,
                        weight: hi - lo,
                    })
                })
                .collect()
        })
        .collect()
}

/**
    Resamples packed 8-bit frames of one size to another using area
    interpolation.

    Each destination pixel takes the coverage-weighted mean of the source
    pixels under its footprint. Downscaling averages whole blocks, upscaling
    replicates pixels and blends only where a destination pixel straddles a
    source boundary. Means are rounded half up.

    The scaler is tied to one pair of sizes; build a new one when the source
    size changes.
*/
#[derive(Clone, Debug)]
pub struct AreaScaler {
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    columns: Vec<Vec<Tap>>,
    rows: Vec<Vec<Tap>>,
}

impl AreaScaler {
    /**
        Build the weights for scaling `src_width x src_height` to
        `dst_width x dst_height`.

        # Panics

        Panics if any dimension is zero.
    */
    pub fn new(src_width: u32, src_height: u32, dst_width: u32, dst_height: u32) -> Self {
        assert!(
            src_width > 0 && src_height > 0 && dst_width > 0 && dst_height > 0,
            "scaler dimensions must be non-zero"
        );
        Self {
            src_width,
            src_height,
            dst_width,
            dst_height,
            columns: axis_taps(src_width as usize, dst_width as usize),
            rows: axis_taps(src_height as usize, dst_height as usize),
        }
    }

    /**
        Returns the source size this scaler was built for.
    */
    pub fn source_size(&self) -> (u32, u32) {
        (self.src_width, self.src_height)
    }

    /**
        Returns the destination size this scaler produces.
    */
    pub fn target_size(&self) -> (u32, u32) {
        (self.dst_width, self.dst_height)
    }

    /**
        Returns true if source and destination sizes are equal.
    */
    pub fn is_identity(&self) -> bool {
        self.source_size() == self.target_size()
    }

    /**
        Scale a packed buffer with `channels` bytes per pixel.

        `src` must hold exactly `src_width * src_height * channels` bytes.
        Channels are resampled independently and keep their order.
    */
    pub fn scale(&self, src: &[u8], channels: usize) -> Vec<u8> {
        let src_width = self.src_width as usize;
        debug_assert_eq!(src.len(), src_width * self.src_height as usize * channels);

        if self.is_identity() {
            return src.to_vec();
        }

        let denom = self.src_width as u64 * self.src_height as u64;
        let half = denom / 2;

        let mut out =
            Vec::with_capacity(self.dst_width as usize * self.dst_height as usize * channels);
        let mut acc = vec![0u64; channels];

        for row_taps in &self.rows {
            for col_taps in &self.columns {
                acc.fill(0);
                for ty in row_taps {
                    let row_start = ty.index * src_width * channels;
                    for tx in col_taps {
                        let weight = ty.weight * tx.weight;
                        let pixel = &src[row_start + tx.index * channels..][..channels];
                        for (sum, &value) in acc.iter_mut().zip(pixel) {
                            *sum += weight * value as u64;
                        }
                    }
                }
                out.extend(acc.iter().map(|&sum| ((sum + half) / denom).min(255) as u8));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_sum_to_source_length() {
        for (src, dst) in [(3, 2), (2, 3), (7, 5), (5, 7), (640, 128), (1, 9)] {
            for taps in axis_taps(src, dst) {
                let total: u64 = taps.iter().map(|t| t.weight).sum();
                assert_eq!(total, src as u64, "{src} -> {dst}");
            }
        }
    }

    #[test]
    fn taps_for_fractional_downscale() {
        let taps = axis_taps(3, 2);
        assert_eq!(
            taps[0],
            vec![Tap { index: 0, weight: 2 }, Tap { index: 1, weight: 1 }]
        );
        assert_eq!(
            taps[1],
            vec![Tap { index: 1, weight: 1 }, Tap { index: 2, weight: 2 }]
        );
    }

    #[test]
    fn downscale_averages_blocks() {
        let scaler = AreaScaler::new(4, 1, 2, 1);
        assert_eq!(scaler.scale(&[10, 20, 100, 200], 1), vec![15, 150]);

        let scaler = AreaScaler::new(2, 2, 1, 1);
        assert_eq!(scaler.scale(&[0, 100, 200, 100], 1), vec![100]);
    }

    #[test]
    fn downscale_fractional_coverage() {
        let scaler = AreaScaler::new(3, 1, 2, 1);
        // (0 * 2 + 30) / 3 = 10, (30 + 60 * 2) / 3 = 50
        assert_eq!(scaler.scale(&[0, 30, 60], 1), vec![10, 50]);
    }

    #[test]
    fn downscale_rounds_half_up() {
        let scaler = AreaScaler::new(2, 1, 1, 1);
        assert_eq!(scaler.scale(&[0, 1], 1), vec![1]);
        assert_eq!(scaler.scale(&[254, 255], 1), vec![255]);
    }

    #[test]
    fn downscale_keeps_channels_apart() {
        let scaler = AreaScaler::new(2, 1, 1, 1);
        let src = [10, 20, 30, 30, 40, 50];
        assert_eq!(scaler.scale(&src, 3), vec![20, 30, 40]);
    }

    #[test]
    fn upscale_replicates() {
        let scaler = AreaScaler::new(1, 1, 3, 2);
        assert_eq!(scaler.scale(&[42], 1), vec![42; 6]);

        let scaler = AreaScaler::new(2, 1, 4, 1);
        assert_eq!(scaler.scale(&[0, 100], 1), vec![0, 0, 100, 100]);
    }

    #[test]
    fn upscale_blends_straddling_pixels() {
        let scaler = AreaScaler::new(2, 1, 3, 1);
        // Middle destination pixel covers half of each source pixel
        assert_eq!(scaler.scale(&[0, 100], 1), vec![0, 50, 100]);
    }

    #[test]
    fn identity_is_copy() {
        let scaler = AreaScaler::new(3, 2, 3, 2);
        assert!(scaler.is_identity());
        let src: Vec<u8> = (0..18).collect();
        assert_eq!(scaler.scale(&src, 3), src);
    }

    #[test]
    fn output_has_exact_target_size() {
        let scaler = AreaScaler::new(17, 9, 5, 4);
        let src = vec![128u8; 17 * 9 * 3];
        let out = scaler.scale(&src, 3);
        assert_eq!(out.len(), 5 * 4 * 3);
        assert!(out.iter().all(|&v| v == 128));
    }

    #[test]
    #[should_panic]
    fn zero_dimension_panics() {
        let _ = AreaScaler::new(0, 1, 1, 1);
    }
}

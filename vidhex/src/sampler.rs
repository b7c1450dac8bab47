/*!
    Frame-rate reduction by index striding.
*/

use crate::error::{Error, Result};

/**
    Decides which source frames to keep to approximate a target rate.

    Keeps every `skip`-th frame, starting with the first, where
    `skip = max(1, floor(source_fps / target_fps))`. When the target rate is
    above the source rate every frame is kept; frames are never duplicated,
    so the output rate is then the source rate.
*/
#[derive(Clone, Debug)]
pub struct FrameSampler {
    skip: u64,
    index: u64,
}

impl FrameSampler {
    /**
        Create a sampler for the given source and target rates.

        Fails with [`Error::InvalidMetadata`] if `source_fps` is not a
        positive finite number, and with [`Error::InvalidConfig`] if
        `target_fps` is zero.
    */
    pub fn new(source_fps: f64, target_fps: u32) -> Result<Self> {
        if !(source_fps.is_finite() && source_fps > 0.0) {
            return Err(Error::InvalidMetadata(format!(
                "source frame rate must be positive, got {source_fps}"
            )));
        }
        if target_fps == 0 {
            return Err(Error::InvalidConfig(
                "target frame rate must be positive".into(),
            ));
        }
        let skip = ((source_fps / f64::from(target_fps)).floor() as u64).max(1);
        Ok(Self { skip, index: 0 })
    }

    /**
        Returns the stride between kept frames.
    */
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /**
        Returns true if the frame at `index` is kept.
    */
    pub fn keeps(&self, index: u64) -> bool {
        index % self.skip == 0
    }

    /**
        Decide on the next frame in source order and advance the counter.
    */
    pub fn advance(&mut self) -> bool {
        let keep = self.keeps(self.index);
        self.index += 1;
        keep
    }

    /**
        Returns how many frames have been offered so far.
    */
    pub fn frames_seen(&self) -> u64 {
        self.index
    }

    /**
        Returns how many of `total_frames` frames will be kept.
    */
    pub fn expected_retained(&self, total_frames: u64) -> u64 {
        total_frames.div_ceil(self.skip)
    }
}

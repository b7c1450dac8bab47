/*!
    Frame sources.
*/

use std::collections::VecDeque;

use crate::{Result, SourceMetadata, VideoFrame};

/**
    A sequential producer of decoded frames.

    Frames are returned in presentation order, one per call. Implementations
    may block while decoding. `Ok(None)` signals end of stream, after which
    further calls keep returning `Ok(None)`.
*/
pub trait FrameSource {
    /**
        Returns the metadata of the stream being read.
    */
    fn metadata(&self) -> SourceMetadata;

    /**
        Returns the next frame, or `None` at end of stream.
    */
    fn next_frame(&mut self) -> Result<Option<VideoFrame>>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn metadata(&self) -> SourceMetadata {
        (**self).metadata()
    }

    fn next_frame(&mut self) -> Result<Option<VideoFrame>> {
        (**self).next_frame()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn metadata(&self) -> SourceMetadata {
        (**self).metadata()
    }

    fn next_frame(&mut self) -> Result<Option<VideoFrame>> {
        (**self).next_frame()
    }
}

/**
    A frame source backed by frames already held in memory.

    Useful for synthetic input and for feeding image sequences through the
    same pipeline as decoded video.
*/
#[derive(Clone, Debug)]
pub struct MemorySource {
    metadata: SourceMetadata,
    frames: VecDeque<VideoFrame>,
    frames_read: u64,
}

impl MemorySource {
    /**
        Create a source that yields `frames` in order.
    */
    pub fn new(metadata: SourceMetadata, frames: impl IntoIterator<Item = VideoFrame>) -> Self {
        Self {
            metadata,
            frames: frames.into_iter().collect(),
            frames_read: 0,
        }
    }

    /**
        Returns how many frames have been handed out so far.
    */
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
}

impl FrameSource for MemorySource {
    fn metadata(&self) -> SourceMetadata {
        self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<VideoFrame>> {
        let frame = self.frames.pop_front();
        if frame.is_some() {
            self.frames_read += 1;
        }
        Ok(frame)
    }
}

//! Scheduler-agnostic bookkeeping for a per-frame callback loop.
//!
//! A loop holds at most one pending frame request. Stopping cancels that
//! request once; further stops are no-ops, and a stopped loop never
//! schedules again.

pub trait FrameScheduler {
    type Handle: Copy;

    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
pub struct FrameLoop<H> {
    pending: Option<H>,
    stopped: bool,
    frames: u64,
}

impl<H: Copy> Default for FrameLoop<H> {
    fn default() -> Self {
        Self {
            pending: None,
            stopped: false,
            frames: 0,
        }
    }
}

impl<H: Copy> FrameLoop<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the next frame unless stopped or already waiting on one.
    pub fn schedule<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> bool {
        if self.stopped || self.pending.is_some() {
            return false;
        }
        self.pending = scheduler.request_frame();
        self.pending.is_some()
    }

    /// Called when the scheduler fires. Returns whether the frame should run.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        if self.stopped {
            return false;
        }
        self.frames += 1;
        true
    }

    pub fn stop<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        if let Some(h) = self.pending.take() {
            scheduler.cancel_frame(h);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

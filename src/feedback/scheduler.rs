//! Delayed task scheduling for the feedback revert timer

/// Runs a callback once after a delay; the returned handle can cancel it
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub trait TaskHandle {
    /// Prevent the callback from running; no-op once it has fired
    fn cancel(&mut self);
}

/// The single scheduled transition back to `Idle` owned by a controller
pub struct PendingRevertTask<H: TaskHandle> {
    handle: H,
    generation: u64,
}

impl<H: TaskHandle> PendingRevertTask<H> {
    pub fn new(handle: H, generation: u64) -> Self {
        Self { handle, generation }
    }

    /// Success counter value this task was scheduled for
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(mut self) {
        self.handle.cancel();
    }
}

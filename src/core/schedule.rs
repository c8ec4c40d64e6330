// Bookkeeping for a self-rescheduling animation-frame loop.
//
// The frame callback owns a handle to itself, so whoever stops the loop must
// also release the callback, but never while it is running.

/// What the caller of [`LoopState::stop`] has to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopAction {
    /// Already stopped; nothing to do.
    None,
    /// Cancel this pending frame request and release the callback now.
    CancelAndRelease(i32),
    /// No frame pending and not inside a tick; release the callback now.
    Release,
    /// Called from inside the tick; the tick releases itself when it returns.
    ReleaseAfterTick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEnd {
    Reschedule,
    Release,
}

#[derive(Clone, Debug)]
pub struct LoopState {
    running: bool,
    in_tick: bool,
    pending: Option<i32>,
}

impl Default for LoopState {
    fn default() -> Self {
        Self {
            running: true,
            in_tick: false,
            pending: None,
        }
    }
}

impl LoopState {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn set_pending(&mut self, id: Option<i32>) {
        self.pending = id;
    }

    /// Enter a tick. Returns whether the frame body should run.
    pub fn begin_tick(&mut self) -> bool {
        self.pending = None;
        self.in_tick = self.running;
        self.running
    }

    pub fn end_tick(&mut self) -> TickEnd {
        self.in_tick = false;
        if self.running {
            TickEnd::Reschedule
        } else {
            TickEnd::Release
        }
    }

    pub fn stop(&mut self) -> StopAction {
        if !self.running {
            return StopAction::None;
        }
        self.running = false;
        if self.in_tick {
            return StopAction::ReleaseAfterTick;
        }
        match self.pending.take() {
            Some(id) => StopAction::CancelAndRelease(id),
            None => StopAction::Release,
        }
    }
}

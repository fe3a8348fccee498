use tracing::debug;

/// Whether the rendering surface can be manipulated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Ready,
}

/// Runs startup work exactly once: immediately when the surface is
/// already ready, otherwise when the ready signal arrives.
#[derive(Debug, Default)]
pub struct ReadyGate {
    deferred: bool,
    fired: bool,
}

impl ReadyGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns true when the caller should run startup now.
    pub fn request(&mut self, state: ReadyState) -> bool {
        if self.fired {
            return false;
        }
        match state {
            ReadyState::Ready => {
                self.fired = true;
                true
            }
            ReadyState::Loading => {
                debug!("Surface not ready, deferring startup");
                self.deferred = true;
                false
            }
        }
    }

    /// Returns true when a deferred startup should run now.
    pub fn signal_ready(&mut self) -> bool {
        if self.fired || !self.deferred {
            return false;
        }
        self.fired = true;
        true
    }
}

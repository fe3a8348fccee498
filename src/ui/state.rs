use tracing::warn;

/// The only state carried between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub loading: bool,
    pub error_visible: bool,
    in_flight: usize,
}

impl UiState {
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn request_started(&mut self) {
        if self.in_flight > 0 {
            warn!(
                "Starting a translation while {} request(s) are still outstanding",
                self.in_flight
            );
        }
        self.in_flight += 1;
        self.loading = true;
        self.error_visible = false;
    }

    /// The first completion leaves the loading state even if another
    /// overlapping request is still outstanding.
    pub(crate) fn request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = false;
    }
}

use super::{
    event::UiEvent,
    startup::{ReadyGate, ReadyState},
    state::UiState,
    suggestions::{SUGGESTIONS, suggestion},
    view::View,
};
use crate::{
    Error, Result,
    api::TranslationApi,
    error::MAX_INPUT_CHARS,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Trims the raw input and checks it against the length limits.
pub fn validate_input(raw: &str) -> Result<&str> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    if text.chars().count() > MAX_INPUT_CHARS {
        return Err(Error::InputTooLong {
            max: MAX_INPUT_CHARS,
        });
    }
    Ok(text)
}

/// A validated request whose loading state has already been entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    pub attempt: Uuid,
    pub text: String,
}

impl PendingTranslation {
    fn new(text: &str) -> Self {
        Self {
            attempt: Uuid::new_v4(),
            text: text.to_string(),
        }
    }

    /// Performs the network call. Touches no UI state, so it can run on
    /// any task; hand the result back to [`TranslationController::complete`].
    pub async fn dispatch(self, api: &dyn TranslationApi) -> CompletedTranslation {
        debug!(attempt = %self.attempt, "Sending translation request");
        let result = api.translate(&self.text).await;
        CompletedTranslation {
            attempt: self.attempt,
            result,
        }
    }
}

#[derive(Debug)]
pub struct CompletedTranslation {
    pub attempt: Uuid,
    pub result: Result<String>,
}

/// Startup health probe, returned so the caller can run it on its runtime.
pub struct HealthCheck {
    api: Arc<dyn TranslationApi>,
}

impl HealthCheck {
    pub async fn run(self) {
        health_check(self.api.as_ref()).await;
    }
}

/// Probes the service once. Failures are logged and never surfaced.
pub async fn health_check(api: &dyn TranslationApi) {
    match api.health().await {
        Ok(()) => debug!("API health check passed"),
        Err(Error::Unhealthy(status)) => warn!("API health check failed: HTTP {}", status),
        Err(e) => warn!("API health check error: {}", e),
    }
}

/// Owns the UI state flags and applies every change to the [`View`].
pub struct TranslationController<V: View> {
    view: V,
    api: Arc<dyn TranslationApi>,
    state: UiState,
    startup: ReadyGate,
}

impl<V: View> TranslationController<V> {
    pub fn new(view: V, api: Arc<dyn TranslationApi>) -> Self {
        Self {
            view,
            api,
            state: UiState::default(),
            startup: ReadyGate::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn api(&self) -> Arc<dyn TranslationApi> {
        Arc::clone(&self.api)
    }

    /// Reacts to a user action. A returned request still has to be
    /// dispatched and its outcome passed to [`Self::complete`].
    pub fn handle(&mut self, event: UiEvent) -> Option<PendingTranslation> {
        debug!("Handling {:?}", event);
        match event {
            UiEvent::SubmitActivated if self.state.loading => {
                debug!("Submit control is disabled while loading, ignoring activation");
                None
            }
            UiEvent::SubmitActivated | UiEvent::AcceleratedSubmit => self.begin_submit().ok(),
            UiEvent::ClearActivated => {
                self.clear();
                None
            }
            UiEvent::SuggestionSelected(index) => self.select_suggestion(index).ok(),
        }
    }

    /// Validates the input and, if it passes, enters the loading state.
    /// Validation errors are already displayed when this returns `Err`.
    pub fn begin_submit(&mut self) -> Result<PendingTranslation> {
        let raw = self.view.input_text();
        let text = match validate_input(&raw) {
            Ok(text) => text,
            Err(e) => {
                debug!("Rejected input: {}", e);
                self.show_error(&e.user_message());
                return Err(e);
            }
        };

        let pending = PendingTranslation::new(text);
        self.state.request_started();
        self.apply_loading();
        self.view.hide_error();
        self.view.set_output_text("");

        info!(
            attempt = %pending.attempt,
            "Translating {} characters",
            pending.text.chars().count()
        );
        Ok(pending)
    }

    /// Applies a finished request. The loading state is left on every path.
    pub fn complete(&mut self, completed: CompletedTranslation) -> Result<String> {
        let attempt = completed.attempt;
        let outcome = match completed.result {
            Ok(translated) => {
                info!(attempt = %attempt, "Translation succeeded");
                self.view.set_output_text(&translated);
                Ok(translated)
            }
            Err(e) => {
                error!(attempt = %attempt, "Translation error: {}", e);
                self.show_error(&e.user_message());
                Err(e)
            }
        };

        self.state.request_finished();
        self.apply_loading();
        outcome
    }

    /// Runs one full translation attempt inline.
    pub async fn submit(&mut self) -> Result<String> {
        let pending = self.begin_submit()?;
        let api = self.api();
        let completed = pending.dispatch(api.as_ref()).await;
        self.complete(completed)
    }

    pub fn clear(&mut self) {
        self.view.set_input_text("");
        self.view.set_output_text("");
        self.hide_error();
    }

    /// Puts a suggestion into the input and starts translating it.
    pub fn select_suggestion(&mut self, index: usize) -> Result<PendingTranslation> {
        let phrase = suggestion(index)
            .ok_or_else(|| Error::internal(format!("No suggestion at index {}", index)))?;
        debug!("Suggestion selected: {}", phrase);
        self.view.set_input_text(phrase);
        self.view.focus_input();
        self.begin_submit()
    }

    /// Fills the suggestion container. Returns false when the view has none.
    pub fn populate_suggestions(&mut self) -> bool {
        let Some(container) = self.view.suggestions() else {
            error!("Suggestions container not found");
            return false;
        };
        for phrase in SUGGESTIONS {
            container.append_suggestion(phrase);
        }
        debug!("Populated {} suggestions", SUGGESTIONS.len());
        true
    }

    /// Runs startup once the surface is ready. The returned health check
    /// is fire-and-forget.
    pub fn request_startup(&mut self, ready: ReadyState) -> Option<HealthCheck> {
        if self.startup.request(ready) {
            Some(self.run_startup())
        } else {
            None
        }
    }

    /// The ready signal for a startup deferred by [`Self::request_startup`].
    pub fn signal_ready(&mut self) -> Option<HealthCheck> {
        if self.startup.signal_ready() {
            Some(self.run_startup())
        } else {
            None
        }
    }

    fn run_startup(&mut self) -> HealthCheck {
        info!("Starting translation client");
        self.populate_suggestions();
        HealthCheck { api: self.api() }
    }

    fn apply_loading(&mut self) {
        let loading = self.state.loading;
        self.view.set_submit_enabled(!loading);
        self.view.set_label_visible(!loading);
        self.view.set_spinner_visible(loading);
    }

    fn show_error(&mut self, message: &str) {
        self.state.error_visible = true;
        self.view.show_error(message);
    }

    fn hide_error(&mut self) {
        self.state.error_visible = false;
        self.view.hide_error();
    }
}

use async_trait::async_trait;
use es_translator::{
    Error, Result,
    api::TranslationApi,
    ui::{SuggestionContainer, View},
};
use std::sync::{Arc, Mutex};

/// In-memory view that records every call made by the controller
#[derive(Debug, Clone)]
pub struct RecordingView {
    pub input: String,
    pub output: String,
    pub input_focused: bool,
    pub submit_enabled: bool,
    pub label_visible: bool,
    pub spinner_visible: bool,
    pub error_text: String,
    pub error_visible: bool,
    pub suggestions: Option<RecordedSuggestions>,
    pub calls: Vec<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordedSuggestions {
    pub phrases: Vec<&'static str>,
}

impl SuggestionContainer for RecordedSuggestions {
    fn append_suggestion(&mut self, phrase: &'static str) {
        self.phrases.push(phrase);
    }
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            input_focused: false,
            submit_enabled: true,
            label_visible: true,
            spinner_visible: false,
            error_text: String::new(),
            error_visible: false,
            suggestions: Some(RecordedSuggestions::default()),
            calls: Vec::new(),
        }
    }

    pub fn without_suggestions() -> Self {
        Self {
            suggestions: None,
            ..Self::new()
        }
    }

    pub fn with_input(mut self, text: &str) -> Self {
        self.input = text.to_string();
        self
    }

    pub fn shown_error(&self) -> Option<&str> {
        self.error_visible.then_some(self.error_text.as_str())
    }

    /// True when the submit control and label/spinner pair are idle.
    pub fn is_idle(&self) -> bool {
        self.submit_enabled && self.label_visible && !self.spinner_visible
    }
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RecordingView {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.calls.push("set_input_text");
        self.input = text.to_string();
    }

    fn focus_input(&mut self) {
        self.calls.push("focus_input");
        self.input_focused = true;
    }

    fn set_output_text(&mut self, text: &str) {
        self.calls.push("set_output_text");
        self.output = text.to_string();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.calls.push("set_submit_enabled");
        self.submit_enabled = enabled;
    }

    fn set_label_visible(&mut self, visible: bool) {
        self.calls.push("set_label_visible");
        self.label_visible = visible;
    }

    fn set_spinner_visible(&mut self, visible: bool) {
        self.calls.push("set_spinner_visible");
        self.spinner_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push("show_error");
        self.error_text = message.to_string();
        self.error_visible = true;
    }

    fn hide_error(&mut self) {
        self.calls.push("hide_error");
        self.error_visible = false;
    }

    fn suggestions(&mut self) -> Option<&mut dyn SuggestionContainer> {
        self.suggestions
            .as_mut()
            .map(|s| s as &mut dyn SuggestionContainer)
    }
}

/// Mock translation API for testing
#[derive(Debug, Clone)]
pub struct MockTranslationApi {
    pub responses: Arc<Mutex<Vec<std::result::Result<String, String>>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub health_calls: Arc<Mutex<usize>>,
    pub healthy: bool,
}

impl MockTranslationApi {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            health_calls: Arc::new(Mutex::new(0)),
            healthy: true,
        }
    }

    pub fn with_translation(self, translated: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Ok(translated.to_string()));
        self
    }

    pub fn with_failure(self, detail: &str) -> Self {
        self.responses.lock().unwrap().push(Err(detail.to_string()));
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn health_call_count(&self) -> usize {
        *self.health_calls.lock().unwrap()
    }
}

impl Default for MockTranslationApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationApi for MockTranslationApi {
    async fn translate(&self, text: &str) -> Result<String> {
        self.requests.lock().unwrap().push(text.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        responses.remove(0).map_err(Error::TranslationFailed)
    }

    async fn health(&self) -> Result<()> {
        *self.health_calls.lock().unwrap() += 1;
        if self.healthy {
            Ok(())
        } else {
            Err(Error::Unhealthy(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

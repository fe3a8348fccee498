use crate::ui::{SuggestionContainer, View};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Translate,
    Clear,
    Suggestions,
}

impl Focus {
    pub fn all() -> &'static [Focus] {
        &[
            Focus::Input,
            Focus::Translate,
            Focus::Clear,
            Focus::Suggestions,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    pub phrases: Vec<&'static str>,
    pub selected: usize,
}

impl SuggestionList {
    pub fn select_next(&mut self) {
        if !self.phrases.is_empty() {
            self.selected = (self.selected + 1) % self.phrases.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.phrases.is_empty() {
            self.selected = (self.selected + self.phrases.len() - 1) % self.phrases.len();
        }
    }
}

impl SuggestionContainer for SuggestionList {
    fn append_suggestion(&mut self, phrase: &'static str) {
        self.phrases.push(phrase);
    }
}

/// Everything the terminal draws, held independently of the terminal so
/// it can be driven headless.
#[derive(Debug, Clone)]
pub struct Screen {
    pub input: String,
    pub output: String,
    pub focus: Focus,
    pub submit_enabled: bool,
    pub label_visible: bool,
    pub spinner_visible: bool,
    pub error_text: String,
    pub error_visible: bool,
    pub suggestions: Option<SuggestionList>,
    spinner_tick: usize,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            suggestions: Some(SuggestionList::default()),
            ..Self::without_suggestions()
        }
    }

    /// A screen laid out without the suggestion panel.
    pub fn without_suggestions() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            focus: Focus::Input,
            submit_enabled: true,
            label_visible: true,
            spinner_visible: false,
            error_text: String::new(),
            error_visible: false,
            suggestions: None,
            spinner_tick: 0,
        }
    }

    pub fn input_focused(&self) -> bool {
        self.focus == Focus::Input
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        if self.focus == Focus::Suggestions && self.suggestions.is_none() {
            self.focus = self.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        if self.focus == Focus::Suggestions && self.suggestions.is_none() {
            self.focus = self.focus.prev();
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_visible.then_some(self.error_text.as_str())
    }

    pub fn suggestion_phrases(&self) -> Option<Vec<&'static str>> {
        self.suggestions.as_ref().map(|list| list.phrases.clone())
    }

    pub fn tick(&mut self) {
        if self.spinner_visible {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()]
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Screen {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    fn set_output_text(&mut self, text: &str) {
        self.output = text.to_string();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_label_visible(&mut self, visible: bool) {
        self.label_visible = visible;
    }

    fn set_spinner_visible(&mut self, visible: bool) {
        self.spinner_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error_text = message.to_string();
        self.error_visible = true;
    }

    // The text stays behind, only hidden.
    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn suggestions(&mut self) -> Option<&mut dyn SuggestionContainer> {
        self.suggestions
            .as_mut()
            .map(|list| list as &mut dyn SuggestionContainer)
    }
}

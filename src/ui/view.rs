/// The widgets the controller drives. Implementations own the actual
/// rendering surface; the controller only ever talks to this trait.
pub trait View {
    fn input_text(&self) -> String;
    fn set_input_text(&mut self, text: &str);
    fn focus_input(&mut self);

    fn set_output_text(&mut self, text: &str);

    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_label_visible(&mut self, visible: bool);
    fn set_spinner_visible(&mut self, visible: bool);

    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);

    /// `None` when the surface has no place to put suggestions.
    fn suggestions(&mut self) -> Option<&mut dyn SuggestionContainer>;
}

pub trait SuggestionContainer {
    /// Adds one selectable entry, in order, to the end of the container.
    fn append_suggestion(&mut self, phrase: &'static str);
}

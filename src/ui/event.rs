/// User actions the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The submit button was activated.
    SubmitActivated,
    /// The input field received modifier + confirm.
    AcceleratedSubmit,
    ClearActivated,
    SuggestionSelected(usize),
}

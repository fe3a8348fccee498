mod controller;
mod event;
mod startup;
mod state;
mod suggestions;
mod view;

pub use controller::{
    CompletedTranslation, HealthCheck, PendingTranslation, TranslationController, health_check,
    validate_input,
};
pub use event::UiEvent;
pub use startup::{ReadyGate, ReadyState};
pub use state::UiState;
pub use suggestions::{SUGGESTIONS, suggestion};
pub use view::{SuggestionContainer, View};

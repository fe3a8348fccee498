use super::screen::{Focus, Screen};
use crate::ui::UiEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Consumed by the screen itself (typing, focus, selection) or ignored.
    Handled,
    Event(UiEvent),
    Quit,
}

/// Enter with Control or Super held. Alt is accepted too, since many
/// terminals never report Control+Enter. Without enhanced key reporting,
/// Control+Enter arrives as a line feed, which crossterm reads as Control+J.
pub fn is_accelerated_submit(key: &KeyEvent) -> bool {
    let submit_modifiers =
        KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META | KeyModifiers::ALT;
    match key.code {
        KeyCode::Enter => key.modifiers.intersects(submit_modifiers),
        KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn handle_key(screen: &mut Screen, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Handled;
    }

    let is_ctrl_c = matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&'c'))
        && key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || is_ctrl_c {
        return KeyOutcome::Quit;
    }

    match key.code {
        KeyCode::Tab => {
            screen.focus_next();
            return KeyOutcome::Handled;
        }
        KeyCode::BackTab => {
            screen.focus_prev();
            return KeyOutcome::Handled;
        }
        _ => {}
    }

    match screen.focus {
        Focus::Input => handle_input_key(screen, key),
        Focus::Translate => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyOutcome::Event(UiEvent::SubmitActivated),
            _ => KeyOutcome::Handled,
        },
        Focus::Clear => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyOutcome::Event(UiEvent::ClearActivated),
            _ => KeyOutcome::Handled,
        },
        Focus::Suggestions => handle_suggestion_key(screen, key),
    }
}

fn handle_input_key(screen: &mut Screen, key: KeyEvent) -> KeyOutcome {
    if is_accelerated_submit(&key) {
        return KeyOutcome::Event(UiEvent::AcceleratedSubmit);
    }

    match key.code {
        KeyCode::Enter => screen.input.push('\n'),
        KeyCode::Backspace => {
            screen.input.pop();
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            screen.input.push(c);
        }
        _ => {}
    }
    KeyOutcome::Handled
}

fn handle_suggestion_key(screen: &mut Screen, key: KeyEvent) -> KeyOutcome {
    let Some(list) = screen.suggestions.as_mut() else {
        return KeyOutcome::Handled;
    };

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => list.select_next(),
        KeyCode::Up | KeyCode::Char('k') => list.select_prev(),
        KeyCode::Enter | KeyCode::Char(' ') if !list.phrases.is_empty() => {
            return KeyOutcome::Event(UiEvent::SuggestionSelected(list.selected));
        }
        _ => {}
    }
    KeyOutcome::Handled
}

mod keys;
mod render;
mod screen;

pub use keys::{KeyOutcome, handle_key, is_accelerated_submit};
pub use render::draw;
pub use screen::{Focus, Screen, SuggestionList};

use crate::{
    Result,
    api::{HttpTranslationApi, TranslationApi},
    config::Config,
    ui::{CompletedTranslation, PendingTranslation, ReadyState, TranslationController},
};
use crossterm::{
    ExecutableCommand,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, Stdout},
    sync::Arc,
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

const TICK: Duration = Duration::from_millis(80);

/// Owns raw mode and the alternate screen; both are restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self::setup();
        if guard.is_err() {
            let _ = disable_raw_mode();
            let _ = io::stdout().execute(LeaveAlternateScreen);
        }
        guard
    }

    /// Everything after raw mode. On error the caller restores the terminal.
    fn setup() -> Result<Self> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;

        // Needed to tell Ctrl+Enter apart from Enter.
        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if keyboard_enhanced {
            stdout.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
            ))?;
        }
        debug!("Terminal keyboard enhancement: {}", keyboard_enhanced);

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            keyboard_enhanced,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = io::stdout().execute(PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

pub async fn run(config: Config) -> Result<()> {
    let api: Arc<dyn TranslationApi> = Arc::new(HttpTranslationApi::new(&config.api)?);
    info!("Using translation service at {}", config.api.base_url);

    let mut guard = TerminalGuard::enter()?;
    let mut controller = TranslationController::new(Screen::new(), api);

    if let Some(health) = controller.request_startup(ReadyState::Ready) {
        tokio::spawn(health.run());
    }

    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<CompletedTranslation>();

    loop {
        while let Ok(completed) = done_rx.try_recv() {
            // Already shown on screen and logged.
            let _ = controller.complete(completed);
        }

        controller.view_mut().tick();
        guard
            .terminal
            .draw(|frame| draw(frame, controller.view()))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match handle_key(controller.view_mut(), key) {
            KeyOutcome::Quit => break,
            KeyOutcome::Handled => {}
            KeyOutcome::Event(ui_event) => {
                if let Some(pending) = controller.handle(ui_event) {
                    spawn_translation(&controller, pending, done_tx.clone());
                }
            }
        }
    }

    info!("Exiting translation client");
    Ok(())
}

fn spawn_translation(
    controller: &TranslationController<Screen>,
    pending: PendingTranslation,
    done_tx: mpsc::UnboundedSender<CompletedTranslation>,
) {
    let api = controller.api();
    tokio::spawn(async move {
        let completed = pending.dispatch(api.as_ref()).await;
        // The receiver is gone only once the UI has exited.
        let _ = done_tx.send(completed);
    });
}

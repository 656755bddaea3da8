use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io;
use std::os::unix::io::BorrowedFd;
use std::sync::{Arc, Mutex};
use term_input::RawMode;

use crate::ui::error::SessionError;

/// What the session changed on the terminal and must put back.
#[derive(Default)]
struct Changes {
    screen: bool,
    raw_mode: Option<RawMode>,
}

impl Changes {
    /// Keystroke mode is restored before the screen.
    fn undo(self) {
        if let Some(raw_mode) = self.raw_mode {
            if let Err(err) = raw_mode.restore() {
                tracing::warn!("Failed to restore terminal mode: {}", err);
            }
        }
        if self.screen {
            let mut stdout = io::stdout();
            let _ = stdout.execute(Show);
            let _ = stdout.execute(LeaveAlternateScreen);
        }
    }
}

/// Restores the terminal when dropped, or when the process panics first.
pub struct TerminalGuard {
    changes: Arc<Mutex<Option<Changes>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            changes: Arc::new(Mutex::new(Some(Changes::default()))),
        }
    }

    fn record(&self, apply: impl FnOnce(&mut Changes)) {
        if let Ok(mut slot) = self.changes.lock() {
            if let Some(changes) = slot.as_mut() {
                apply(changes);
            }
        }
    }

    fn install_panic_hook(&self) {
        let changes = Arc::clone(&self.changes);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            undo_recorded(&changes);
            default_hook(info);
        }));
    }
}

fn undo_recorded(changes: &Mutex<Option<Changes>>) {
    if let Ok(mut slot) = changes.lock() {
        if let Some(changes) = slot.take() {
            changes.undo();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        undo_recorded(&self.changes);
    }
}

/// Switch to the alternate screen, hide the cursor and put `tty` in raw
/// keystroke mode.
///
/// Whatever part of the setup succeeded is undone when the guard drops,
/// including when a later step fails.
pub fn setup_terminal(tty: BorrowedFd<'_>) -> Result<TerminalGuard, SessionError> {
    let guard = TerminalGuard::new();
    guard.install_panic_hook();

    // A partial failure may still have switched screens.
    guard.record(|changes| changes.screen = true);
    io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|stdout| stdout.execute(Hide))
        .map_err(SessionError::Output)?;

    let raw_mode = RawMode::enable(tty).map_err(SessionError::Configure)?;
    guard.record(|changes| changes.raw_mode = Some(raw_mode));

    Ok(guard)
}

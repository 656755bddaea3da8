use std::io;

use term_input::TtyReader;

use crate::config::WordRate;
use crate::document::Document;
use crate::ui::error::SessionError;
use crate::ui::events::TtyEvents;
use crate::ui::playback::StopReason;
use crate::ui::presenter::Presenter;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::viewport::TerminalViewport;

/// Show `document` on the controlling terminal.
///
/// The terminal is restored before this returns, on success and on error.
pub fn run(document: &Document, rate: WordRate) -> Result<StopReason, SessionError> {
    let reader = TtyReader::open().map_err(SessionError::OpenTerminal)?;
    let guard = setup_terminal(reader.fd())?;
    let events = TtyEvents::new(reader).map_err(SessionError::Configure)?;

    let stdout = io::stdout();
    let result = Presenter::new(document, events, TerminalViewport, stdout.lock()).run(rate);

    drop(guard);
    result
}

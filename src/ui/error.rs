use std::io;
use thiserror::Error;

/// Errors that end a display session.
///
/// Interrupted reads never surface here; they are retried by the event
/// source.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot open the controlling terminal")]
    OpenTerminal(#[source] io::Error),

    #[error("cannot configure the terminal")]
    Configure(#[source] io::Error),

    #[error("cannot query the terminal size")]
    TerminalSize(#[source] io::Error),

    #[error("cannot read from the terminal")]
    Input(#[source] io::Error),

    #[error("cannot write to the terminal")]
    Output(#[source] io::Error),
}

//! Intents for playback.

use term_input::Key;

/// Intents that can be dispatched to the playback reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIntent {
    /// A decoded keystroke.
    Key(Key),

    /// The countdown for the current word ran out.
    TimerExpired,

    /// The keyboard stream reached end of file.
    InputClosed,
}


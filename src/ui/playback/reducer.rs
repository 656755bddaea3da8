//! Reducer for playback.

use term_input::Key;

use super::intent::PlaybackIntent;
use super::state::PlaybackState;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every word was shown.
    Exhausted,
    /// The user pressed `q`.
    Quit,
    /// The keyboard stream closed.
    InputClosed,
}

/// What the runtime must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEffect {
    /// Keep waiting; the countdown keeps running.
    None,
    /// Rate or pause changed: restart the countdown at the new interval, or
    /// disarm it when paused. No redraw.
    Retime,
    /// Draw the word at this index.
    Show(usize),
    /// End the session.
    Stop(StopReason),
}

/// Reducer for playback transitions.
///
/// Pure function: drawing, timer handling and terminal I/O are handled by
/// the presenter around the dispatch call.
pub struct PlaybackReducer;

impl PlaybackReducer {
    /// Apply one intent, returning the next state and the effect the
    /// presenter must perform.
    pub fn reduce(state: PlaybackState, intent: PlaybackIntent) -> (PlaybackState, PlaybackEffect) {
        match intent {
            // A stale tick while paused must not advance.
            PlaybackIntent::TimerExpired if state.is_paused() => (state, PlaybackEffect::None),
            PlaybackIntent::TimerExpired => advance(state),

            PlaybackIntent::InputClosed => (state, PlaybackEffect::Stop(StopReason::InputClosed)),

            PlaybackIntent::Key(key) => match key {
                Key::Char(b'+') => (state.with_rate(state.rate().faster()), PlaybackEffect::Retime),
                Key::Char(b'-') => (state.with_rate(state.rate().slower()), PlaybackEffect::Retime),
                Key::Char(b'p') => (state.with_paused(!state.is_paused()), PlaybackEffect::Retime),
                Key::Char(b'q') => (state, PlaybackEffect::Stop(StopReason::Quit)),
                Key::Down | Key::Right => advance(state),
                // Back two, then forward one: the previous word again.
                Key::Up | Key::Left => advance(state.with_cursor(state.cursor().saturating_sub(2))),
                Key::Char(_) => (state, PlaybackEffect::None),
            },
        }
    }
}

fn advance(state: PlaybackState) -> (PlaybackState, PlaybackEffect) {
    if state.is_finished() {
        return (state, PlaybackEffect::Stop(StopReason::Exhausted));
    }
    let shown = state.cursor();
    (state.with_cursor(shown + 1), PlaybackEffect::Show(shown))
}

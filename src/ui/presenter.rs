use std::io::Write;
use std::time::Duration;

use term_input::KeyDecoder;

use crate::config::WordRate;
use crate::document::Document;
use crate::ui::countdown::Countdown;
use crate::ui::error::SessionError;
use crate::ui::events::{EventSource, SessionEvent};
use crate::ui::playback::{
    PlaybackEffect, PlaybackIntent, PlaybackReducer, PlaybackState, StopReason,
};
use crate::ui::render::draw_word;
use crate::ui::viewport::{TermSize, Viewport};

/// How long a lone ESC waits for the rest of an escape sequence.
pub const ESC_TIMEOUT: Duration = Duration::from_millis(25);

/// Drives one display session over a document.
///
/// Each iteration arms the countdown, then waits for events until the word
/// on screen changes or the session stops. Terminal size is refreshed
/// lazily: a resize only marks it stale, and the next draw re-queries it.
pub struct Presenter<'d, E, V, W> {
    document: &'d Document,
    events: E,
    viewport: V,
    out: W,
    decoder: KeyDecoder,
    countdown: Countdown,
    resize_pending: bool,
    size: TermSize,
}

impl<'d, E, V, W> Presenter<'d, E, V, W>
where
    E: EventSource,
    V: Viewport,
    W: Write,
{
    pub fn new(document: &'d Document, events: E, viewport: V, out: W) -> Self {
        Self {
            document,
            events,
            viewport,
            out,
            decoder: KeyDecoder::new(),
            countdown: Countdown::disarmed(),
            // Size is unknown until the first draw.
            resize_pending: true,
            size: TermSize::default(),
        }
    }

    /// Run the session until every word was shown, the user quits, or the
    /// keyboard stream closes.
    ///
    /// Unless the user quit, the last word stays up for one more interval
    /// (or until a key is pressed, which is consumed).
    pub fn run(mut self, rate: WordRate) -> Result<StopReason, SessionError> {
        let mut state = PlaybackState::new(self.document.len(), rate);
        tracing::debug!(words = self.document.len(), %rate, "Session started");

        let reason = loop {
            if state.is_finished() {
                break StopReason::Exhausted;
            }
            self.retime(&state);
            if let Some(reason) = self.step(&mut state)? {
                break reason;
            }
        };

        if reason != StopReason::Quit {
            self.retime(&state);
            self.final_wait()?;
        }
        self.countdown.disarm();

        tracing::debug!(?reason, cursor = state.cursor(), rate = %state.rate(), "Session ended");
        Ok(reason)
    }

    /// Dispatch events until a word is drawn (`None`) or the session stops.
    fn step(&mut self, state: &mut PlaybackState) -> Result<Option<StopReason>, SessionError> {
        loop {
            let Some(intent) = self.next_intent()? else {
                continue;
            };

            let (next, effect) = PlaybackReducer::reduce(*state, intent);
            tracing::trace!(?intent, ?effect, cursor = next.cursor(), "Dispatched");
            *state = next;

            match effect {
                PlaybackEffect::None => {}
                PlaybackEffect::Retime => self.retime(state),
                PlaybackEffect::Show(index) => {
                    self.draw(index)?;
                    return Ok(None);
                }
                PlaybackEffect::Stop(reason) => return Ok(Some(reason)),
            }
        }
    }

    /// Wait for one event and translate it. Resizes and partial escape
    /// sequences yield `None`.
    ///
    /// While an escape sequence is pending the wait is cut to
    /// [`ESC_TIMEOUT`]; if nothing follows in time the sequence is dropped
    /// and the word countdown keeps running.
    fn next_intent(&mut self) -> Result<Option<PlaybackIntent>, SessionError> {
        let countdown = self.countdown.remaining();
        let escape_bound =
            self.decoder.has_pending() && !matches!(countdown, Some(left) if left <= ESC_TIMEOUT);
        let timeout = if escape_bound {
            Some(ESC_TIMEOUT)
        } else {
            countdown
        };

        let event = self
            .events
            .next_event(timeout)
            .map_err(SessionError::Input)?;

        let intent = match event {
            SessionEvent::ByteReceived(byte) => self.decoder.feed(byte).map(PlaybackIntent::Key),
            SessionEvent::TimerExpired if escape_bound => {
                tracing::trace!("Escape sequence timed out");
                self.decoder.reset();
                None
            }
            SessionEvent::TimerExpired => {
                self.countdown.disarm();
                Some(PlaybackIntent::TimerExpired)
            }
            SessionEvent::Resized => {
                self.resize_pending = true;
                None
            }
            SessionEvent::EndOfInput => Some(PlaybackIntent::InputClosed),
        };
        Ok(intent)
    }

    fn final_wait(&mut self) -> Result<(), SessionError> {
        loop {
            let event = self
                .events
                .next_event(self.countdown.remaining())
                .map_err(SessionError::Input)?;
            if event == SessionEvent::Resized {
                self.resize_pending = true;
                continue;
            }
            return Ok(());
        }
    }

    fn retime(&mut self, state: &PlaybackState) {
        if state.is_paused() {
            self.countdown.disarm();
        } else {
            self.countdown.arm(state.rate().interval());
        }
    }

    fn draw(&mut self, index: usize) -> Result<(), SessionError> {
        if self.resize_pending {
            self.resize_pending = false;
            self.size = self.viewport.size().map_err(SessionError::TerminalSize)?;
            tracing::debug!(cols = self.size.cols, rows = self.size.rows, "Terminal size");
        }

        let (Some(text), Some(word)) = (self.document.text(index), self.document.word(index))
        else {
            return Ok(());
        };
        draw_word(&mut self.out, text, word.reverse_video(), self.size).map_err(SessionError::Output)
    }
}

//! State for playback.

use crate::config::WordRate;

/// Where playback stands.
///
/// `cursor` is the index of the word the next advance shows, so after word
/// `i` has been drawn the cursor is `i + 1`. A cursor equal to the word count
/// means every word has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    cursor: usize,
    word_count: usize,
    rate: WordRate,
    paused: bool,
}

impl PlaybackState {
    pub fn new(word_count: usize, rate: WordRate) -> Self {
        Self {
            cursor: 0,
            word_count,
            rate,
            paused: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rate(&self) -> WordRate {
        self.rate
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.word_count
    }

    pub(super) fn with_cursor(self, cursor: usize) -> Self {
        Self { cursor, ..self }
    }

    pub(super) fn with_rate(self, rate: WordRate) -> Self {
        Self { rate, ..self }
    }

    pub(super) fn with_paused(self, paused: bool) -> Self {
        Self { paused, ..self }
    }
}

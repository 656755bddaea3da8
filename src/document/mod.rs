//! Document loading and word splitting.
//!
//! The whole source is read into one owned buffer. Words are byte ranges
//! into that buffer, so a [`Document`] is self-contained and cheap to build.

mod loader;
mod width;

pub use loader::DocumentError;
pub use width::display_width;

use std::ops::Range;

/// One word of the document: a byte range plus its highlight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    range: Range<usize>,
    reverse_video: bool,
}

impl Word {
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Whether the word repeats its predecessor at an odd position of a
    /// run of identical words.
    pub fn reverse_video(&self) -> bool {
        self.reverse_video
    }
}

/// Owned source text and its words, in document order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    buffer: Vec<u8>,
    words: Vec<Word>,
}

impl Document {
    /// Split `buffer` into words and compute the highlight flags.
    pub fn from_bytes(buffer: Vec<u8>) -> Self {
        let mut words = split_words(&buffer);
        mark_repeats(&buffer, &mut words);
        Self { buffer, words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Bytes of the word at `index`.
    pub fn text(&self, index: usize) -> Option<&[u8]> {
        self.words.get(index).map(|word| &self.buffer[word.range()])
    }
}

/// Space, form-feed, newline, carriage return, tab and vertical tab.
pub fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | 0x0c | b'\n' | b'\r' | b'\t' | 0x0b)
}

fn split_words(buffer: &[u8]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut pos = 0;

    while pos < buffer.len() {
        while pos < buffer.len() && is_word_separator(buffer[pos]) {
            pos += 1;
        }
        if pos == buffer.len() {
            break;
        }

        let start = pos;
        while pos < buffer.len() && !is_word_separator(buffer[pos]) {
            pos += 1;
        }
        words.push(Word {
            range: start..pos,
            reverse_video: false,
        });
    }

    words
}

// A repeat flips the flag relative to its predecessor; anything else resets
// it, so only immediately adjacent repeats alternate.
fn mark_repeats(buffer: &[u8], words: &mut [Word]) {
    for i in 1..words.len() {
        if buffer[words[i].range()] == buffer[words[i - 1].range()] {
            words[i].reverse_video = !words[i - 1].reverse_video;
        }
    }
}

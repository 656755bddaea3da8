const ESC: u8 = 0x1b;

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Any byte outside an escape sequence, passed through as typed.
    Char(u8),
    Up,
    Down,
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Ground,
    /// Saw ESC.
    Escape,
    /// Saw `ESC [` or `ESC O`, collecting parameters until the final byte.
    Sequence,
}

/// Incremental decoder for keyboard input arriving one byte at a time.
///
/// Recognises the cursor keys in both normal (`ESC [ A`) and application
/// (`ESC O A`) mode, including sequences carrying modifier parameters such
/// as `ESC [ 1 ; 5 A`. Every other escape sequence is consumed silently.
/// An ESC followed by an ordinary byte yields that byte, so Alt+key behaves
/// like the key itself.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: State,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte. Returns a key once a complete keystroke is seen.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            State::Ground => {
                if byte == ESC {
                    self.state = State::Escape;
                    None
                } else {
                    Some(Key::Char(byte))
                }
            }
            State::Escape => match byte {
                b'[' | b'O' => {
                    self.state = State::Sequence;
                    None
                }
                ESC => None,
                _ => {
                    self.state = State::Ground;
                    Some(Key::Char(byte))
                }
            },
            State::Sequence => match byte {
                // Parameter and intermediate bytes.
                0x20..=0x3f => None,
                0x40..=0x7e => {
                    self.state = State::Ground;
                    match byte {
                        b'A' => Some(Key::Up),
                        b'B' => Some(Key::Down),
                        b'C' => Some(Key::Right),
                        b'D' => Some(Key::Left),
                        _ => None,
                    }
                }
                ESC => {
                    self.state = State::Escape;
                    None
                }
                _ => {
                    self.state = State::Ground;
                    None
                }
            },
        }
    }

    /// True while a sequence is partially decoded.
    pub fn has_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Abandon a partial sequence, e.g. a bare Escape keypress.
    pub fn reset(&mut self) {
        self.state = State::Ground;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<Key> {
        let mut decoder = KeyDecoder::new();
        bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
    }

    #[test]
    fn plain_bytes_pass_through() {
        assert_eq!(
            decode(b"+-pq"),
            vec![Key::Char(b'+'), Key::Char(b'-'), Key::Char(b'p'), Key::Char(b'q')]
        );
    }

    #[test]
    fn csi_arrows_decode() {
        assert_eq!(
            decode(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![Key::Up, Key::Down, Key::Right, Key::Left]
        );
    }

    #[test]
    fn application_mode_arrows_decode() {
        assert_eq!(decode(b"\x1bOA\x1bOD"), vec![Key::Up, Key::Left]);
    }

    #[test]
    fn modifier_parameters_are_skipped() {
        assert_eq!(decode(b"\x1b[1;5C"), vec![Key::Right]);
    }

    #[test]
    fn unknown_sequences_are_swallowed() {
        assert_eq!(decode(b"\x1b[2~q"), vec![Key::Char(b'q')]);
    }

    #[test]
    fn bare_letters_are_not_arrows() {
        assert_eq!(decode(b"A"), vec![Key::Char(b'A')]);
    }

    #[test]
    fn alt_prefix_yields_the_key() {
        assert_eq!(decode(b"\x1bq"), vec![Key::Char(b'q')]);
    }

    #[test]
    fn pending_tracks_partial_sequences() {
        let mut decoder = KeyDecoder::new();
        assert!(decoder.feed(0x1b).is_none());
        assert!(decoder.has_pending());
        decoder.feed(b'[');
        assert!(decoder.has_pending());
        assert_eq!(decoder.feed(b'B'), Some(Key::Down));
        assert!(!decoder.has_pending());
    }

    #[test]
    fn reset_after_bare_escape_restores_plain_keys() {
        let mut decoder = KeyDecoder::new();
        decoder.feed(0x1b);
        decoder.feed(b'[');
        decoder.reset();
        assert!(!decoder.has_pending());
        assert_eq!(decoder.feed(b'q'), Some(Key::Char(b'q')));
    }
}

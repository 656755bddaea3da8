//! Shared test utilities: scripted events, a fixed viewport and frame
//! splitting for captured output.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use rq::ui::events::{EventSource, SessionEvent};
use rq::ui::viewport::{TermSize, Viewport};

/// Prefix written at the start of every frame: home, then erase display.
pub const CLEAR: &str = "\x1b[1;1H\x1b[2J";

pub const ESC: u8 = 0x1b;

/// Replays a fixed list of events and records the countdown bound each wait
/// was given. Reports end of input once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    script: VecDeque<SessionEvent>,
    pub timeouts: Vec<Option<Duration>>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = SessionEvent>) -> Self {
        Self {
            script: events.into_iter().collect(),
            timeouts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<SessionEvent> {
        self.timeouts.push(timeout);
        Ok(self.script.pop_front().unwrap_or(SessionEvent::EndOfInput))
    }
}

/// Reports sizes from a list, one per query; the last one repeats.
pub struct FixedViewport {
    sizes: Vec<TermSize>,
    pub queries: usize,
}

impl FixedViewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self::sequence(vec![TermSize { cols, rows }])
    }

    pub fn sequence(sizes: Vec<TermSize>) -> Self {
        Self { sizes, queries: 0 }
    }
}

impl Viewport for FixedViewport {
    fn size(&mut self) -> io::Result<TermSize> {
        let index = self.queries.min(self.sizes.len() - 1);
        self.queries += 1;
        Ok(self.sizes[index])
    }
}

/// Keystroke bytes as events.
pub fn keys(bytes: &[u8]) -> Vec<SessionEvent> {
    bytes.iter().map(|&b| SessionEvent::ByteReceived(b)).collect()
}

pub fn ticks(count: usize) -> Vec<SessionEvent> {
    vec![SessionEvent::TimerExpired; count]
}

/// Split captured output into frames, dropping the clear prefix.
pub fn frames(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .split(CLEAR)
        .skip(1)
        .map(str::to_string)
        .collect()
}

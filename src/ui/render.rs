use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::document::display_width;
use crate::ui::viewport::TermSize;

/// 1-based `(row, column)` at which `word` starts when centered.
pub fn centered_position(word: &[u8], size: TermSize) -> (u16, u16) {
    let row = (u32::from(size.rows) + 1) / 2;
    let col = usize::from(size.cols).saturating_sub(display_width(word)) / 2 + 1;
    (row as u16, col.min(usize::from(u16::MAX)) as u16)
}

/// Clear the screen and draw `word` centered, in reverse video if asked.
///
/// The word's bytes are written as they are, escape sequences included.
pub fn draw_word<W: Write>(
    out: &mut W,
    word: &[u8],
    reverse_video: bool,
    size: TermSize,
) -> io::Result<()> {
    let (row, col) = centered_position(word, size);
    queue!(
        out,
        MoveTo(0, 0),
        Clear(ClearType::All),
        MoveTo(col - 1, row.saturating_sub(1))
    )?;

    if reverse_video {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    out.write_all(word)?;
    if reverse_video {
        queue!(out, SetAttribute(Attribute::NoReverse))?;
    }

    out.flush()
}

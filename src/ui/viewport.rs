use std::io;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TermSize {
    /// Used until the first successful query.
    fn default() -> Self {
        Self { cols: 80, rows: 30 }
    }
}

/// Something that can report the current terminal size.
pub trait Viewport {
    fn size(&mut self) -> io::Result<TermSize>;
}

/// The terminal attached to the process, queried through crossterm.
pub struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn size(&mut self) -> io::Result<TermSize> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(TermSize { cols, rows })
    }
}

impl<T: Viewport + ?Sized> Viewport for &mut T {
    fn size(&mut self) -> io::Result<TermSize> {
        (**self).size()
    }
}

use std::io;
use std::os::unix::io::{AsRawFd, BorrowedFd, OwnedFd};

/// Saved terminal attributes for a descriptor whose line discipline was
/// switched to raw keystroke input.
///
/// Only canonical mode, echo and signal-generating keys are turned off;
/// output processing is left alone. The descriptor is duplicated, so the
/// attributes can be restored after the reader that supplied it is gone.
/// `restore` may be called more than once.
pub struct RawMode {
    fd: OwnedFd,
    saved: libc::termios,
}

impl RawMode {
    /// Clear `ICANON`, `ECHO` and `ISIG` on `fd`, remembering the previous
    /// attributes.
    pub fn enable(fd: BorrowedFd<'_>) -> io::Result<Self> {
        let fd = fd.try_clone_to_owned()?;
        let saved = unsafe {
            let mut attrs: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd.as_raw_fd(), &mut attrs) < 0 {
                return Err(io::Error::last_os_error());
            }
            attrs
        };

        let mut raw = saved;
        raw.c_lflag &= !(libc::ICANON | libc::ECHO | libc::ISIG);
        set_attrs(&fd, &raw)?;

        Ok(Self { fd, saved })
    }

    pub fn restore(&self) -> io::Result<()> {
        set_attrs(&self.fd, &self.saved)
    }
}

fn set_attrs(fd: &OwnedFd, attrs: &libc::termios) -> io::Result<()> {
    loop {
        if unsafe { libc::tcsetattr(fd.as_raw_fd(), libc::TCSAFLUSH, attrs) } == 0 {
            return Ok(());
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

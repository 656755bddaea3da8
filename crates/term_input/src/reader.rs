use std::fs::OpenOptions;
use std::io::{self, Read};
use std::os::unix::io::{AsFd, AsRawFd, BorrowedFd};
use std::time::Duration;

/// Result of a single bounded read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// One byte arrived.
    Byte(u8),
    /// The timeout elapsed before any byte arrived.
    TimedOut,
    /// A signal interrupted the wait before anything arrived.
    Interrupted,
    /// The terminal reported end of file.
    Eof,
}

/// Terminal input reader. Opens /dev/tty and reads one byte at a time.
///
/// Uses `std::fs::File` for I/O and `select()` for readiness polling.
/// Unlike a plain blocking read, every wait is bounded by an optional
/// timeout and reports signal interruptions to the caller instead of
/// swallowing them, so asynchronous notifications can be observed between
/// keystrokes.
pub struct TtyReader {
    file: std::fs::File,
}

impl TtyReader {
    /// Open the controlling terminal for reading.
    ///
    /// Always uses `/dev/tty`: standard input may be carrying the document.
    pub fn open() -> io::Result<Self> {
        // std opens with O_CLOEXEC, so the descriptor never leaks to children.
        let file = OpenOptions::new().read(true).open("/dev/tty")?;
        Ok(Self::from_file(file))
    }

    /// Read from an already open descriptor, such as a pipe standing in for
    /// the terminal.
    pub fn from_file(file: std::fs::File) -> Self {
        Self { file }
    }

    /// Read the next byte, waiting at most `timeout` (forever when `None`).
    pub fn read_byte(&mut self, timeout: Option<Duration>) -> io::Result<ReadOutcome> {
        match self.select(timeout) {
            Ok(true) => {}
            Ok(false) => return Ok(ReadOutcome::TimedOut),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                return Ok(ReadOutcome::Interrupted)
            }
            Err(err) => return Err(err),
        }

        let mut byte = [0u8; 1];
        match self.file.read(&mut byte) {
            Ok(0) => Ok(ReadOutcome::Eof),
            Ok(_) => Ok(ReadOutcome::Byte(byte[0])),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(ReadOutcome::Interrupted),
            Err(err) => Err(err),
        }
    }

    /// Terminal descriptor, used to configure the terminal mode.
    pub fn fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }

    /// Wait for data using `select()`. Returns `Ok(false)` on timeout and
    /// `ErrorKind::Interrupted` when a signal arrives first.
    fn select(&self, timeout: Option<Duration>) -> io::Result<bool> {
        let fd = self.file.as_raw_fd();
        unsafe {
            let mut read_fds: libc::fd_set = std::mem::zeroed();
            libc::FD_ZERO(&mut read_fds);
            libc::FD_SET(fd, &mut read_fds);

            let mut tv = timeout.map(|timeout| libc::timeval {
                tv_sec: timeout.as_secs().min(libc::time_t::MAX as u64) as libc::time_t,
                tv_usec: timeout.subsec_micros() as libc::suseconds_t,
            });
            let tv_ptr = match tv.as_mut() {
                Some(tv) => tv as *mut libc::timeval,
                None => std::ptr::null_mut(),
            };

            let ret = libc::select(
                fd + 1,
                &mut read_fds,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                tv_ptr,
            );
            if ret < 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(ret > 0)
        }
    }
}

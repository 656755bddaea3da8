use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use signal_hook::SigId;
use term_input::{ReadOutcome, TtyReader};

/// Everything that can wake the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// One byte of keyboard input.
    ByteReceived(u8),
    /// The countdown bound passed to [`EventSource::next_event`] ran out.
    TimerExpired,
    /// The terminal window changed size.
    Resized,
    /// The keyboard stream closed.
    EndOfInput,
}

/// Source of session events.
///
/// `timeout` is the time left on the countdown; `None` means the countdown
/// is disarmed and only input, resize or end of input can wake the caller.
pub trait EventSource {
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<SessionEvent>;
}

/// Events from the controlling terminal.
///
/// Keystrokes come from [`TtyReader`]; SIGWINCH is delivered through a
/// `signal-hook` flag that is checked before every wait and whenever a
/// signal interrupts one.
pub struct TtyEvents {
    reader: TtyReader,
    resized: Arc<AtomicBool>,
    sigwinch: SigId,
}

impl TtyEvents {
    pub fn new(reader: TtyReader) -> io::Result<Self> {
        let resized = Arc::new(AtomicBool::new(false));
        let sigwinch = signal_hook::flag::register(libc::SIGWINCH, Arc::clone(&resized))?;
        Ok(Self {
            reader,
            resized,
            sigwinch,
        })
    }
}

impl EventSource for TtyEvents {
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<SessionEvent> {
        let deadline = timeout.and_then(|timeout| Instant::now().checked_add(timeout));

        loop {
            if self.resized.swap(false, Ordering::Relaxed) {
                return Ok(SessionEvent::Resized);
            }

            let remaining = deadline.map(|deadline| deadline.saturating_duration_since(Instant::now()));
            match self.reader.read_byte(remaining)? {
                ReadOutcome::Byte(byte) => return Ok(SessionEvent::ByteReceived(byte)),
                ReadOutcome::TimedOut => return Ok(SessionEvent::TimerExpired),
                ReadOutcome::Eof => return Ok(SessionEvent::EndOfInput),
                ReadOutcome::Interrupted => {
                    tracing::trace!("Terminal wait interrupted by a signal");
                }
            }
        }
    }
}

impl Drop for TtyEvents {
    fn drop(&mut self) {
        signal_hook::low_level::unregister(self.sigwinch);
    }
}

impl<T: EventSource + ?Sized> EventSource for &mut T {
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<SessionEvent> {
        (**self).next_event(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::os::unix::io::FromRawFd;
    use std::sync::{Mutex, MutexGuard};
    use std::thread;

    // Every registered SIGWINCH flag is set by any SIGWINCH, so tests that
    // own a TtyEvents must not overlap.
    static SIGNALS: Mutex<()> = Mutex::new(());

    fn exclusive() -> MutexGuard<'static, ()> {
        SIGNALS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn pipe_events() -> (TtyEvents, File) {
        let mut fds = [0; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
        let reader = unsafe { File::from_raw_fd(fds[0]) };
        let writer = unsafe { File::from_raw_fd(fds[1]) };
        let events = TtyEvents::new(TtyReader::from_file(reader)).unwrap();
        (events, writer)
    }

    struct Thread(libc::pthread_t);
    unsafe impl Send for Thread {}

    /// Deliver `signal` to the calling thread after `delay`.
    fn signal_me_after(signal: libc::c_int, delay: Duration) -> thread::JoinHandle<()> {
        let target = Thread(unsafe { libc::pthread_self() });
        thread::spawn(move || {
            let target = target;
            thread::sleep(delay);
            unsafe { libc::pthread_kill(target.0, signal) };
        })
    }

    extern "C" fn ignore_signal(_: libc::c_int) {}

    #[test]
    fn elapsed_bound_is_timer_expiry() {
        let _lock = exclusive();
        let (mut events, _writer) = pipe_events();
        let event = events.next_event(Some(Duration::from_millis(30))).unwrap();
        assert_eq!(event, SessionEvent::TimerExpired);
    }

    #[test]
    fn keystroke_is_byte_received() {
        let _lock = exclusive();
        let (mut events, mut writer) = pipe_events();
        writer.write_all(b"+").unwrap();
        assert_eq!(events.next_event(None).unwrap(), SessionEvent::ByteReceived(b'+'));
    }

    #[test]
    fn closed_input_is_end_of_input() {
        let _lock = exclusive();
        let (mut events, writer) = pipe_events();
        drop(writer);
        assert_eq!(events.next_event(None).unwrap(), SessionEvent::EndOfInput);
    }

    #[test]
    fn sigwinch_during_wait_is_resize() {
        let _lock = exclusive();
        let (mut events, _writer) = pipe_events();
        let started = Instant::now();
        let sender = signal_me_after(libc::SIGWINCH, Duration::from_millis(50));

        let event = events.next_event(Some(Duration::from_secs(5))).unwrap();
        sender.join().unwrap();
        assert_eq!(event, SessionEvent::Resized);
        assert!(started.elapsed() < Duration::from_secs(5));

        // The flag is consumed: the next wait runs to its own bound.
        let event = events.next_event(Some(Duration::from_millis(30))).unwrap();
        assert_eq!(event, SessionEvent::TimerExpired);
    }

    #[test]
    fn other_signals_retry_until_the_deadline() {
        let _lock = exclusive();
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = ignore_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
            libc::sigemptyset(&mut action.sa_mask);
            assert_eq!(libc::sigaction(libc::SIGUSR2, &action, std::ptr::null_mut()), 0);
        }

        let (mut events, _writer) = pipe_events();
        let started = Instant::now();
        let sender = signal_me_after(libc::SIGUSR2, Duration::from_millis(50));

        let event = events.next_event(Some(Duration::from_millis(200))).unwrap();
        sender.join().unwrap();
        assert_eq!(event, SessionEvent::TimerExpired);
        assert!(started.elapsed() >= Duration::from_millis(190));
    }
}

// Cancellation token fed by the host's interrupt signal
//
// The animation runs on a single thread. Signals only flip a shared flag,
// which the animator observes at loop boundaries and while waiting between
// frames.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::consts::CANCEL_POLL_INTERVAL;
use crate::errors::{AnimatorError, AnimatorResult};

/// Shared "stop requested" flag.
///
/// Clones observe the same flag. Cancelling more than once has the same
/// effect as cancelling once.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            log::debug!("Cancellation requested");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Block for `duration` unless cancelled first.
    ///
    /// Returns `true` as soon as cancellation is observed. Returns `false`
    /// only after at least `duration` has elapsed.
    ///
    /// A `duration` too large to represent as a deadline waits until
    /// cancelled.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        if self.is_cancelled() {
            return true;
        }
        let deadline = Instant::now().checked_add(duration);
        loop {
            if self.is_cancelled() {
                return true;
            }
            let slice = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    (deadline - now).min(CANCEL_POLL_INTERVAL)
                }
                None => CANCEL_POLL_INTERVAL,
            };
            thread::sleep(slice);
        }
    }

    /// Route the interactive interrupt (and SIGTERM on unix) into this token.
    ///
    /// Registering replaces the default "terminate" action, so a repeated
    /// Ctrl-C during shutdown is absorbed instead of killing the process
    /// before the farewell is printed.
    pub fn install_signal_handlers(&self) -> AnimatorResult<()> {
        use signal_hook::consts::SIGINT;

        signal_hook::flag::register(SIGINT, Arc::clone(&self.cancelled))
            .map_err(AnimatorError::Signal)?;

        #[cfg(unix)]
        {
            use signal_hook::consts::SIGTERM;
            signal_hook::flag::register(SIGTERM, Arc::clone(&self.cancelled))
                .map_err(AnimatorError::Signal)?;
        }

        log::debug!("Signal handlers installed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();

        clone.cancel();
        assert!(token.is_cancelled());

        // second cancel is a no-op
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_wait_timeout_waits_full_duration() {
        let token = CancellationToken::new();
        let start = Instant::now();

        assert!(!token.wait_timeout(Duration::from_millis(60)));
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn test_wait_timeout_returns_early_on_cancel() {
        let token = CancellationToken::new();
        let remote = token.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            remote.cancel();
        });

        let start = Instant::now();
        assert!(token.wait_timeout(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(5));
        handle.join().unwrap();
    }

    #[test]
    fn test_wait_timeout_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(token.wait_timeout(Duration::from_secs(10)));
    }

    #[test]
    fn test_wait_timeout_unrepresentable_deadline() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(token.wait_timeout(Duration::MAX));

        let token = CancellationToken::new();
        let remote = token.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            remote.cancel();
        });
        assert!(token.wait_timeout(Duration::MAX));
        handle.join().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_interrupt_signal_cancels_token() {
        use signal_hook::consts::SIGINT;
        use signal_hook::low_level::raise;

        let token = CancellationToken::new();
        token.install_signal_handlers().unwrap();

        // a repeated Ctrl-C is absorbed, the process keeps running
        raise(SIGINT).unwrap();
        raise(SIGINT).unwrap();

        assert!(token.wait_timeout(Duration::from_secs(2)));
        assert!(token.is_cancelled());
    }
}

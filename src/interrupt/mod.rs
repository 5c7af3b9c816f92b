//! Process interruption for the `max-time` limit.
//!
//! This module provides an [`Interrupt`] trait so tests can observe the
//! timeout without a real signal, and [`SignalInterrupt`] which delivers
//! one to the running process.
//!
//! # Platform Support
//!
//! - **Unix**: `SIGINT` to the own process via `nix`.
//! - **Windows**: a console `CTRL_BREAK` event via the `windows` crate.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

use std::sync::Arc;
use std::time::Duration;

/// Delivers a termination request to the process.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use flagstack::interrupt::Interrupt;
///
/// struct Flag(AtomicBool);
///
/// impl Interrupt for Flag {
///     fn interrupt(&self) {
///         self.0.store(true, Ordering::SeqCst);
///     }
/// }
///
/// let flag = Flag(AtomicBool::new(false));
/// flag.interrupt();
/// assert!(flag.0.load(Ordering::SeqCst));
/// ```
pub trait Interrupt: Send + Sync {
    /// Requests termination. Called at most once per armed timer.
    fn interrupt(&self);
}

/// Production interrupter using the platform's console signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalInterrupt;

impl Interrupt for SignalInterrupt {
    fn interrupt(&self) {
        #[cfg(unix)]
        unix::send_interrupt();
        #[cfg(windows)]
        windows::send_interrupt();
    }
}

/// Calls `interrupter` once after `after` has elapsed.
///
/// Runs on the current tokio runtime when there is one, otherwise on a
/// detached thread. There is no way to cancel an armed timer.
pub fn arm(after: Duration, interrupter: Arc<dyn Interrupt>) {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        tracing::debug!(?after, "Arming max-time timer on tokio runtime");
        handle.spawn(async move {
            tokio::time::sleep(after).await;
            interrupter.interrupt();
        });
        return;
    }

    tracing::debug!(?after, "Arming max-time timer on a thread");
    let spawned = std::thread::Builder::new()
        .name("max-time".to_owned())
        .spawn(move || {
            std::thread::sleep(after);
            interrupter.interrupt();
        });
    if let Err(e) = spawned {
        tracing::warn!("Failed to start max-time timer: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::sync::mpsc::{Sender, channel};

    /// Reports each interrupt on a channel.
    struct ChannelInterrupt(Mutex<Sender<()>>);

    impl Interrupt for ChannelInterrupt {
        fn interrupt(&self) {
            if let Ok(sender) = self.0.lock() {
                let _ = sender.send(());
            }
        }
    }

    #[test]
    fn thread_timer_fires_once() {
        let (tx, rx) = channel();
        arm(Duration::from_millis(20), Arc::new(ChannelInterrupt(Mutex::new(tx))));

        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn timer_does_not_fire_early() {
        let (tx, rx) = channel();
        arm(Duration::from_secs(60), Arc::new(ChannelInterrupt(Mutex::new(tx))));

        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[tokio::test]
    async fn runtime_timer_fires() {
        let (tx, rx) = channel();
        arm(Duration::from_millis(20), Arc::new(ChannelInterrupt(Mutex::new(tx))));

        let received = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap();
        assert!(received.is_ok());
    }
}

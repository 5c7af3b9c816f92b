//! `SIGINT` delivery on Unix.

use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;

pub(super) fn send_interrupt() {
    if let Err(e) = kill(Pid::this(), Signal::SIGINT) {
        tracing::warn!("Failed to send SIGINT: {e}");
    }
}

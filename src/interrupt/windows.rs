//! Console break delivery on Windows.

use windows::Win32::System::Console::{CTRL_BREAK_EVENT, GenerateConsoleCtrlEvent};

pub(super) fn send_interrupt() {
    // SAFETY: no pointers are passed; process group 0 is the calling console.
    if let Err(e) = unsafe { GenerateConsoleCtrlEvent(CTRL_BREAK_EVENT, 0) } {
        tracing::warn!("Failed to send CTRL_BREAK: {e}");
    }
}

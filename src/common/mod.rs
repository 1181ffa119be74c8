pub mod io;

use std::io::Error;

/// Restore the default SIGPIPE action so a closed console pipe ends the
/// process quietly. Call this first thing in main().
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Operator-facing text for an I/O error: the OS description with the
/// trailing " (os error N)" code removed.
pub fn io_error_msg(e: &Error) -> String {
    let text = e.to_string();
    if e.raw_os_error().is_none() {
        return text;
    }
    match text.rfind(" (os error ") {
        Some(cut) if text.ends_with(')') => text[..cut].to_string(),
        _ => text,
    }
}

/// Platform line terminator used for written output.
#[cfg(windows)]
pub const LINE_ENDING: &[u8] = b"\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &[u8] = b"\n";

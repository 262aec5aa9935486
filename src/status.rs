// src/status.rs
//! Transient status line on stderr. The line is a scoped resource: it is
//! drawn on acquisition and erased when the guard is dropped, whether that
//! happens on timer expiry or on an earlier unwind.

use std::io::Write;
use std::time::Duration;

pub struct StatusLine {
    active: bool,
}

impl StatusLine {
    /// Draw `text` on stderr without a trailing newline.
    pub fn show(text: &str) -> Self {
        eprint!("{text}");
        let _ = std::io::stderr().flush();
        Self { active: true }
    }

    /// Keep the line visible for `delay`, then erase it. A zero delay
    /// erases immediately.
    pub fn hold(mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.erase();
    }

    fn erase(&mut self) {
        if self.active {
            // Carriage return plus ANSI erase-line.
            eprint!("\r\x1B[2K");
            let _ = std::io::stderr().flush();
            self.active = false;
        }
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        self.erase();
    }
}

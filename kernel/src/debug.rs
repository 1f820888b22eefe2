// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for in-kernel debugging.
//!
//! For printing, this module provides two macros:
//!
//! ```rust,ignore
//! debug!("Yes the code gets here with value {}", i);
//! debug_verbose!("got here"); // Includes message count, file, and line.
//! ```
//!
//! Output is written line by line to the debug writer. Boards install a
//! writer with [`set_debug_writer`]; until they do, messages go to stderr.
//! Blocks only call these macros behind the flags in
//! [`crate::config::CONFIG`], so a default build of a design prints nothing
//! from inside the per-tick update functions.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

type DebugSink = Option<Box<dyn Write + Send>>;

static DEBUG_WRITER: Mutex<DebugSink> = Mutex::new(None);
static DEBUG_COUNT: AtomicUsize = AtomicUsize::new(0);

fn writer() -> MutexGuard<'static, DebugSink> {
    // A panic while printing must not silence every later message.
    match DEBUG_WRITER.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Replace the debug writer, returning the one previously installed.
pub fn set_debug_writer(sink: Box<dyn Write + Send>) -> Option<Box<dyn Write + Send>> {
    writer().replace(sink)
}

/// Go back to printing on stderr.
pub fn reset_debug_writer() -> Option<Box<dyn Write + Send>> {
    writer().take()
}

/// Number of messages printed so far.
pub fn debug_count() -> usize {
    DEBUG_COUNT.load(Ordering::Relaxed)
}

fn write_line(args: fmt::Arguments) {
    DEBUG_COUNT.fetch_add(1, Ordering::Relaxed);
    let mut sink = writer();
    let _ = match sink.as_mut() {
        Some(w) => w.write_fmt(format_args!("{}\n", args)).and_then(|()| w.flush()),
        None => io::stderr().write_fmt(format_args!("{}\n", args)),
    };
}

pub fn debug_println(args: fmt::Arguments) {
    write_line(args);
}

pub fn debug_verbose_println(args: fmt::Arguments, file_line: &(&'static str, u32)) {
    let (file, line) = *file_line;
    let count = DEBUG_COUNT.load(Ordering::Relaxed);
    write_line(format_args!("GATEWARE_DEBUG({}): {}:{}: {}", count, file, line, args));
}

/// In-kernel `println()` debugging.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print the location when hit
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_println(format_args!("{}", $msg))
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_println(format_args!($fmt, $($arg)+))
    });
}

/// In-kernel `println()` debugging that includes the message count, file, and
/// line.
#[macro_export]
macro_rules! debug_verbose {
    () => ({
        // Allow an empty debug_verbose!() to print the location when hit
        $crate::debug_verbose!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_verbose_println(format_args!("{}", $msg), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_verbose_println(format_args!($fmt, $($arg)+), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn messages_reach_installed_writer() {
        let capture = Capture::default();
        super::set_debug_writer(Box::new(capture.clone()));

        debug!("plain {}", 7);
        debug_verbose!("verbose");

        super::reset_debug_writer();

        let text = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("plain 7"));
        let verbose = lines.next().unwrap();
        assert!(verbose.starts_with("GATEWARE_DEBUG("));
        assert!(verbose.contains("debug.rs:"));
        assert!(verbose.ends_with(": verbose"));
        assert!(super::debug_count() >= 2);
    }
}

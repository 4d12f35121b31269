//! In-place redrawing of the last few terminal lines.
//!
//! A redraw cycle prints N lines, leaving the cursor at the end of the last
//! one, then moves the cursor back to the start of the first so the next cycle
//! overwrites them.
//!
//! # One-shot
//!
//! ```rust
//! use xprint::flush::move_up_to;
//!
//! let mut out = Vec::new();
//! move_up_to(&mut out, 4).unwrap();
//! assert_eq!(out, b"\x1b[3A\r");
//! ```
//!
//! # Scoped session
//!
//! [`Flushing`] counts lines as they are written and refuses more than it was
//! opened with. The move-up is emitted when the session closes, which also
//! happens on drop, so early returns still leave the cursor in place.
//!
//! ```rust
//! use xprint::flush::with_flushing_to;
//!
//! let mut out = Vec::new();
//! with_flushing_to(&mut out, 2, |f| {
//!     f.write_line("one")?;
//!     f.write_line("two")
//! })
//! .unwrap();
//! assert_eq!(out, b"one\ntwo\x1b[1A\r");
//! ```

use console::Term;
use std::io::{self, Write};
use tracing::{debug, trace};

use crate::codes::ESC;
use crate::error::{Result, XprintError};

/// Writes the cursor movement that rewinds over the last `lines` lines.
///
/// Non-positive counts do nothing. A single line needs no movement, so only a
/// flush happens.
pub fn move_up_to<W: Write>(out: &mut W, lines: isize) -> io::Result<()> {
    if lines <= 0 {
        return Ok(());
    }
    if lines > 1 {
        trace!(lines, "moving cursor up");
        write!(out, "{}[{}A\r", ESC, lines - 1)?;
    }
    out.flush()
}

/// [`move_up_to`] on stdout.
pub fn move_up(lines: isize) -> Result<()> {
    move_up_to(&mut Term::stdout(), lines)?;
    Ok(())
}

/// Prints a frame whose lines are separated by `'\r'`, then rewinds over it.
pub fn flush_print_to<W: Write>(out: &mut W, frame: &str) -> Result<()> {
    let lines: Vec<&str> = frame.split('\r').collect();
    if let Some((last, rest)) = lines.split_last() {
        for line in rest {
            writeln!(out, "{}", line)?;
        }
        write!(out, "{}", last)?;
    }
    move_up_to(out, lines.len() as isize)?;
    Ok(())
}

/// [`flush_print_to`] on stdout.
pub fn flush_print(frame: &str) -> Result<()> {
    flush_print_to(&mut Term::stdout(), frame)
}

/// A redraw cycle over a fixed number of lines.
///
/// Every line but the last declared one is followed by a line break. Closing
/// rewinds over however many lines were actually written.
#[derive(Debug)]
pub struct Flushing<W: Write> {
    out: W,
    lines: usize,
    written: usize,
    closed: bool,
}

impl Flushing<Term> {
    /// Opens a session on stdout.
    pub fn open(lines: usize) -> Self {
        Self::with_writer(Term::stdout(), lines)
    }
}

impl<W: Write> Flushing<W> {
    /// Opens a session writing to `out`.
    pub fn with_writer(out: W, lines: usize) -> Self {
        Self {
            out,
            lines,
            written: 0,
            closed: false,
        }
    }

    /// Number of lines declared at open.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes the next line.
    ///
    /// Fails with [`XprintError::OutOfRange`] once all declared lines have
    /// been written.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if self.written >= self.lines {
            return Err(XprintError::OutOfRange {
                index: self.written,
                lines: self.lines,
            });
        }
        if self.written + 1 < self.lines {
            writeln!(self.out, "{}", line)?;
        } else {
            write!(self.out, "{}", line)?;
        }
        self.written += 1;
        Ok(())
    }

    /// Ends the cycle, rewinding over the written lines.
    pub fn close(mut self) -> Result<()> {
        self.finish()?;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        debug!(written = self.written, lines = self.lines, "closing flush session");
        move_up_to(&mut self.out, self.written as isize)
    }
}

impl<W: Write> Drop for Flushing<W> {
    fn drop(&mut self) {
        if let Err(err) = self.finish() {
            debug!(%err, "failed to rewind flush session");
        }
    }
}

/// Runs `f` against a session on `out`, closing it whatever `f` returns.
///
/// The error from `f` takes precedence over an error while closing.
pub fn with_flushing_to<W, T, F>(out: W, lines: usize, f: F) -> Result<T>
where
    W: Write,
    F: FnOnce(&mut Flushing<W>) -> Result<T>,
{
    let mut session = Flushing::with_writer(out, lines);
    let result = f(&mut session);
    let closed = session.close();
    let value = result?;
    closed?;
    Ok(value)
}

/// [`with_flushing_to`] on stdout.
pub fn with_flushing<T, F>(lines: usize, f: F) -> Result<T>
where
    F: FnOnce(&mut Flushing<Term>) -> Result<T>,
{
    with_flushing_to(Term::stdout(), lines, f)
}

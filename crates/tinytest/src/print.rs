//! Printer - separator-joined printing of heterogeneous values
//!
//! A [`Printer`] writes any number of `Display` values to its sink with a
//! separator strictly between consecutive values. The sink is picked by the
//! type parameter: [`Printer::stdout`], [`Printer::stderr`], or a
//! [`SharedBuffer`] when the output has to be inspected afterwards.
//!
//! ```rust
//! use tinytest::{Printer, SharedBuffer, print_values, println_values};
//!
//! let buffer = SharedBuffer::new();
//! let mut out = Printer::with_separator(buffer.clone(), '+');
//! print_values!(out, 1, "two", 3.5).unwrap();
//! println_values!(out).unwrap(); // no values, no newline
//! assert_eq!(buffer.contents(), "1+two+3.5");
//! ```

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: char = ' ';

/// Writes values to a sink, separated by a fixed character.
#[derive(Debug)]
pub struct Printer<W: Write> {
    sink: W,
    separator: char,
}

impl Printer<Stdout> {
    /// Printer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Printer<Stderr> {
    /// Printer writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Printer<W> {
    /// Create a printer with the default separator.
    pub fn new(sink: W) -> Self {
        Self::with_separator(sink, DEFAULT_SEPARATOR)
    }

    /// Create a printer with a custom separator.
    pub fn with_separator(sink: W, separator: char) -> Self {
        Self { sink, separator }
    }

    /// The separator placed between values.
    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write `values` separated by the separator.
    ///
    /// Writes nothing when `values` is empty.
    pub fn print(&mut self, values: &[&dyn Display]) -> io::Result<()> {
        let mut values = values.iter();
        let Some(first) = values.next() else {
            return Ok(());
        };
        write!(self.sink, "{first}")?;
        for value in values {
            write!(self.sink, "{}{value}", self.separator)?;
        }
        Ok(())
    }

    /// Like [`print`](Self::print), followed by a newline and a flush.
    ///
    /// With no values this writes nothing at all, not even the newline.
    pub fn println(&mut self, values: &[&dyn Display]) -> io::Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        self.print(values)?;
        writeln!(self.sink)?;
        self.sink.flush()
    }
}

/// Print any number of values through a [`Printer`].
///
/// Expands to `printer.print(&[...])` and evaluates to its `io::Result`.
#[macro_export]
macro_rules! print_values {
    ($printer:expr $(, $value:expr)* $(,)?) => {
        $printer.print(&[$(&$value as &dyn ::core::fmt::Display),*])
    };
}

/// Print any number of values and a trailing newline through a [`Printer`].
///
/// With no values nothing is written.
#[macro_export]
macro_rules! println_values {
    ($printer:expr $(, $value:expr)* $(,)?) => {
        $printer.println(&[$(&$value as &dyn ::core::fmt::Display),*])
    };
}

/// Cloneable in-memory sink.
///
/// Every clone writes into the same buffer, so one handle can be given to a
/// printer or tracer while another reads the captured text.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured text so far (lossy UTF-8).
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Return the captured text and clear the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.inner.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(separator: char) -> (Printer<SharedBuffer>, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (Printer::with_separator(buffer.clone(), separator), buffer)
    }

    #[test]
    fn test_print_nothing() {
        let (mut out, buffer) = capture(',');
        print_values!(out).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_println_nothing_writes_no_newline() {
        let (mut out, buffer) = capture(',');
        println_values!(out).unwrap();
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn test_single_value_has_no_separator() {
        let (mut out, buffer) = capture(',');
        print_values!(out, "x").unwrap();
        assert_eq!(buffer.take(), "x");

        println_values!(out, "x").unwrap();
        assert_eq!(buffer.take(), "x\n");
    }

    #[test]
    fn test_separator_only_between_values() {
        let (mut out, buffer) = capture(',');
        print_values!(out, "x", "y", "z").unwrap();
        assert_eq!(buffer.take(), "x,y,z");
    }

    #[test]
    fn test_default_separator_is_space() {
        let buffer = SharedBuffer::new();
        let mut out = Printer::new(buffer.clone());
        assert_eq!(out.separator(), ' ');

        println_values!(out, "one", "two", 3).unwrap();
        assert_eq!(buffer.contents(), "one two 3\n");
    }

    #[test]
    fn test_heterogeneous_values() {
        let (mut out, buffer) = capture('+');
        let name = String::from("case");
        print_values!(out, name, 2u8, -1.5f64, 'c', true).unwrap();
        assert_eq!(buffer.contents(), "case+2+-1.5+c+true");
    }

    #[test]
    fn test_many_values() {
        let (mut out, buffer) = capture('+');
        let values: Vec<u32> = (1..=13).collect();
        let refs: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();
        out.println(&refs).unwrap();
        assert_eq!(buffer.contents(), "1+2+3+4+5+6+7+8+9+10+11+12+13\n");
    }

    #[test]
    fn test_shared_buffer_clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"abc").unwrap();
        assert_eq!(buffer.contents(), "abc");
        buffer.clear();
        assert!(writer.inner.lock().is_empty());
    }

    #[test]
    fn test_into_inner_returns_sink() {
        let mut out = Printer::new(Vec::new());
        print_values!(out, 1, 2).unwrap();
        assert_eq!(out.into_inner(), b"1 2");
    }
}

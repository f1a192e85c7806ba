//! Tracer - verbosity-gated trace output
//!
//! Every line the harness prints while cases run goes through a [`Tracer`]:
//! Enter/Leave markers, passing and failing checks, messages and warnings.
//! Lines above the configured [`Verbosity`] are dropped.
//!
//! On a terminal, lines are colored by level. Custom outputs (see
//! [`Tracer::with_output`]) are always plain.
//!
//! # Example
//!
//! ```rust
//! use tinytest::{SharedBuffer, Tracer, Verbosity};
//!
//! let buffer = SharedBuffer::new();
//! let mut tracer = Tracer::new(Verbosity::Message).with_output(buffer.clone());
//! tracer.trace(Verbosity::Message, "shown");
//! tracer.trace(Verbosity::All, "hidden");
//! assert_eq!(buffer.contents(), "shown\n");
//! ```

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::Verbosity;
use crate::print::Printer;

/// Output writer that can be colored or plain
pub enum OutputWriter {
    /// Standard stream with color support
    Colored(StandardStream),
    /// Plain writer (for capture)
    Plain(Box<dyn Write + Send>),
}

impl OutputWriter {
    /// Standard output, colored only when it is a terminal.
    pub fn stdout() -> Self {
        let choice = if io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::Colored(StandardStream::stdout(choice))
    }

    /// Standard error, never colored.
    pub fn stderr() -> Self {
        Self::Colored(StandardStream::stderr(ColorChoice::Never))
    }

    pub fn plain<W: Write + Send + 'static>(writer: W) -> Self {
        Self::Plain(Box::new(writer))
    }

    fn set_color(&mut self, spec: &ColorSpec) -> io::Result<()> {
        match self {
            Self::Colored(stream) => stream.set_color(spec),
            Self::Plain(_) => Ok(()),
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        match self {
            Self::Colored(stream) => stream.reset(),
            Self::Plain(_) => Ok(()),
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Colored(stream) => stream.write(buf),
            Self::Plain(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Colored(stream) => stream.flush(),
            Self::Plain(writer) => writer.flush(),
        }
    }
}

impl std::fmt::Debug for OutputWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Colored(_) => f.write_str("OutputWriter::Colored"),
            Self::Plain(_) => f.write_str("OutputWriter::Plain"),
        }
    }
}

fn level_color(level: Verbosity) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match level {
        Verbosity::Error => spec.set_fg(Some(Color::Red)).set_bold(true),
        Verbosity::Message => spec.set_fg(Some(Color::Yellow)),
        Verbosity::TestNames => spec.set_fg(Some(Color::Cyan)),
        Verbosity::All => spec.set_fg(Some(Color::Green)),
    };
    spec
}

/// Verbosity-gated line writer
#[derive(Debug)]
pub struct Tracer {
    verbosity: Verbosity,
    printer: Printer<OutputWriter>,
}

impl Tracer {
    /// Tracer writing to standard output.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            printer: Printer::new(OutputWriter::stdout()),
        }
    }

    /// Set a custom output destination (disables colors)
    #[must_use]
    pub fn with_output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.printer = Printer::new(OutputWriter::plain(output));
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Whether lines of `level` are printed.
    pub fn enabled(&self, level: Verbosity) -> bool {
        level <= self.verbosity
    }

    /// Print `message` as one line if `level` is enabled.
    ///
    /// Write failures are logged and otherwise ignored: losing a trace line
    /// must not change the outcome of a run.
    pub fn trace(&mut self, level: Verbosity, message: &str) {
        if !self.enabled(level) {
            return;
        }
        if let Err(err) = self.write_line(level, message) {
            tracing::warn!(%err, level = %level, "dropped trace line");
        }
    }

    fn write_line(&mut self, level: Verbosity, message: &str) -> io::Result<()> {
        self.printer.sink_mut().set_color(&level_color(level))?;
        let written = crate::println_values!(self.printer, message);
        self.printer.sink_mut().reset()?;
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::SharedBuffer;

    fn capture(verbosity: Verbosity) -> (Tracer, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (Tracer::new(verbosity).with_output(buffer.clone()), buffer)
    }

    #[test]
    fn test_level_filtering() {
        let (mut tracer, buffer) = capture(Verbosity::TestNames);
        tracer.trace(Verbosity::Error, "error line");
        tracer.trace(Verbosity::Message, "message line");
        tracer.trace(Verbosity::TestNames, "Enter: a");
        tracer.trace(Verbosity::All, "Ok: 'x' passed");

        let output = buffer.contents();
        assert!(output.contains("error line"));
        assert!(output.contains("message line"));
        assert!(output.contains("Enter: a"));
        assert!(!output.contains("Ok: 'x' passed"));
    }

    #[test]
    fn test_error_only_by_default() {
        let (mut tracer, buffer) = capture(Verbosity::default());
        tracer.trace(Verbosity::Message, "quiet");
        tracer.trace(Verbosity::Error, "loud");
        assert_eq!(buffer.contents(), "loud\n");
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let (mut tracer, buffer) = capture(Verbosity::All);
        tracer.trace(Verbosity::Error, "[error] failed");
        assert!(!buffer.contents().contains('\x1b'));
    }

    #[test]
    fn test_empty_message_still_ends_line() {
        let (mut tracer, buffer) = capture(Verbosity::All);
        tracer.trace(Verbosity::All, "");
        assert_eq!(buffer.contents(), "\n");
    }
}

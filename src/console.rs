//! Output sink for status lines.
//!
//! The query flow never prints directly; it hands each line to a [`Console`]
//! together with a [`Tone`]. The terminal implementation turns tones into
//! colors, the recorder keeps the lines around for tests.

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;
use std::io::{self, Stdout, Write};

/// How a line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Progress chatter before the result.
    Info,
    /// The model's answer.
    Success,
    /// A failed query.
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Info => Color::Cyan,
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
        }
    }
}

/// Somewhere to put status lines.
pub trait Console {
    /// Write one line of text in the given tone.
    fn emit(&mut self, tone: Tone, text: &str) -> io::Result<()>;
}

/// Console backed by a writer, usually stdout.
pub struct Terminal<W: Write> {
    out: W,
    color: bool,
}

impl Terminal<Stdout> {
    /// Console on stdout. Colors are only used for a real terminal and can be
    /// turned off with `NO_COLOR`.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_tty() && std::env::var_os("NO_COLOR").is_none();
        Self::new(out, color)
    }
}

impl<W: Write> Terminal<W> {
    /// Console on an arbitrary writer.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Give back the underlying writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Console for Terminal<W> {
    fn emit(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.with(tone.color()))?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()
    }
}

/// Console that remembers every line instead of printing it.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<(Tone, String)>,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl Console for Recorder {
    fn emit(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        self.lines.push((tone, text.to_string()));
        Ok(())
    }
}

//! Style-tagged line output.
//!
//! Traversal and reporting code only knows about [`Style`] tags and the
//! [`Emit`] trait; how a tag turns into terminal colors is decided by the sink.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};

/// Semantic tag attached to each emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Header,
    Directory,
    File,
    Error,
    Warning,
    Plain,
}

impl Style {
    /// Foreground color used by [`Terminal`] when color is enabled.
    pub fn color(&self) -> Option<Color> {
        match self {
            Style::Header => Some(Color::Cyan),
            Style::Directory => Some(Color::Blue),
            Style::File => Some(Color::Green),
            Style::Error => Some(Color::Red),
            Style::Warning => Some(Color::Yellow),
            Style::Plain => None,
        }
    }
}

/// A sink for whole output lines.
pub trait Emit {
    /// Writes `text` as one line tagged with `style`.
    fn emit(&mut self, text: &str, style: Style) -> io::Result<()>;
}

/// Writes lines to any [`Write`], optionally colored with ANSI sequences.
pub struct Terminal<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Terminal<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Emit for Terminal<W> {
    fn emit(&mut self, text: &str, style: Style) -> io::Result<()> {
        match style.color() {
            Some(color) if self.color => {
                queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)?;
                writeln!(self.out)?;
            }
            _ => writeln!(self.out, "{}", text)?,
        }
        self.out.flush()
    }
}

/// Keeps emitted lines in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<(String, Style)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded text, without style tags.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(text, _)| text.as_str()).collect()
    }
}

impl Emit for Recorder {
    fn emit(&mut self, text: &str, style: Style) -> io::Result<()> {
        self.lines.push((text.to_string(), style));
        Ok(())
    }
}

impl<E: Emit + ?Sized> Emit for &mut E {
    fn emit(&mut self, text: &str, style: Style) -> io::Result<()> {
        (**self).emit(text, style)
    }
}

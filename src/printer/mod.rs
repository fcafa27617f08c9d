use serde::Deserialize;
use std::fmt;
use std::ops::{Deref, DerefMut};


/// Number of spaces emitted per indent level in multi-line mode.
pub const INDENT_WIDTH: usize = 4;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LineMode {
    /// Everything on one line, line breaks collapse to a single space.
    #[default]
    SingleLine,
    /// Line breaks are real newlines and indentation is printed.
    MultiLine,
}

impl fmt::Display for LineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineMode::SingleLine => write!(f, "single-line"),
            LineMode::MultiLine => write!(f, "multi-line"),
        }
    }
}

/// Text sink shared by one render pass.
///
/// Output is written to the main buffer. Separators that must not end up at
/// the very end of the text go to the deferred-character buffer and are only
/// committed once something real is appended after them. Whole lines that have
/// to appear after the next line break (here-document bodies, for instance)
/// are queued in the deferred-line buffer.
#[derive(Debug, Clone)]
pub struct Printer {
    main: String,
    deferred_chars: String,
    deferred_lines: String,
    indent_level: usize,
    // level of the most recent print_indent, i.e. of the current line
    line_indent: usize,
    line_mode: LineMode,
}

impl Printer {
    pub fn new(line_mode: LineMode) -> Self {
        Self {
            main: String::new(),
            deferred_chars: String::new(),
            deferred_lines: String::new(),
            indent_level: 0,
            line_indent: 0,
            line_mode,
        }
    }

    pub fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Indent level last written by [`Printer::print_indent`].
    pub fn line_indent(&self) -> usize {
        self.line_indent
    }

    /// Commits pending deferred characters, then appends `text`.
    pub fn append(&mut self, text: &str) {
        self.commit_deferred_chars();
        self.main.push_str(text);
    }

    pub fn defer_char(&mut self, text: &str) {
        self.deferred_chars.push_str(text);
    }

    pub fn clear_deferred_chars(&mut self) {
        self.deferred_chars.clear();
    }

    pub fn commit_deferred_chars(&mut self) {
        self.main.push_str(&self.deferred_chars);
        self.deferred_chars.clear();
    }

    /// Queues a line to be emitted right after the next line break.
    /// Ignored in single-line mode.
    pub fn defer_line(&mut self, text: &str) {
        self.deferred_lines.push_str(text);
    }

    pub fn break_line(&mut self) {
        self.deferred_chars.clear();
        match self.line_mode {
            LineMode::SingleLine => {
                self.deferred_chars.push(' ');
                self.deferred_lines.clear();
            }
            LineMode::MultiLine => {
                self.main.push('\n');
                self.main.push_str(&self.deferred_lines);
                self.deferred_lines.clear();
            }
        }
    }

    /// Writes the current indentation straight into the main buffer.
    pub fn print_indent(&mut self) {
        self.line_indent = self.indent_level;
        if self.line_mode == LineMode::MultiLine {
            let width = INDENT_WIDTH * self.indent_level;
            self.main.extend(std::iter::repeat_n(' ', width));
        }
    }

    /// Raises the indent level by `increment` until the guard is dropped.
    pub fn indented(&mut self, increment: usize) -> IndentGuard<'_> {
        let previous = self.indent_level;
        self.indent_level += increment;
        IndentGuard {
            printer: self,
            previous,
        }
    }

    /// Sets the indent level to `level` until the guard is dropped.
    pub fn indented_to(&mut self, level: usize) -> IndentGuard<'_> {
        let previous = self.indent_level;
        self.indent_level = level;
        IndentGuard {
            printer: self,
            previous,
        }
    }

    /// Text written so far. Deferred buffers are not included.
    pub fn render(&self) -> &str {
        &self.main
    }

    pub fn into_string(self) -> String {
        self.main
    }
}

/// Scoped indent increment. Dereferences to the printer it borrows and
/// restores the previous indent level when dropped.
pub struct IndentGuard<'a> {
    printer: &'a mut Printer,
    previous: usize,
}

impl Deref for IndentGuard<'_> {
    type Target = Printer;

    fn deref(&self) -> &Printer {
        self.printer
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Printer {
        self.printer
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.printer.indent_level = self.previous;
    }
}

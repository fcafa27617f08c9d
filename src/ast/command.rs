use serde::Deserialize;
use crate::ast::source::SourceLocation;
use crate::ast::list::Sequence;
use crate::ast::word::{Assignment, Word};
use crate::ast::Render;
use crate::printer::{LineMode, Printer};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Command {
    // Simple command: "A=1 echo hello"
    Simple(SimpleCommand),
    // Grouping: "{ make; make install; }"
    Grouping(Grouping),
    // Subshell: "(cd build; make)"
    Subshell(Subshell),
}

impl Command {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Command::Simple(c) => &c.location,
            Command::Grouping(c) => &c.location,
            Command::Subshell(c) => &c.location,
        }
    }
}

impl Render for Command {
    fn render(&self, printer: &mut Printer) {
        match self {
            Command::Simple(c) => c.render(printer),
            Command::Grouping(c) => c.render(printer),
            Command::Subshell(c) => c.render(printer),
        }
    }
}

impl From<SimpleCommand> for Command {
    fn from(c: SimpleCommand) -> Self {
        Command::Simple(c)
    }
}

impl From<Grouping> for Command {
    fn from(c: Grouping) -> Self {
        Command::Grouping(c)
    }
}

impl From<Subshell> for Command {
    fn from(c: Subshell) -> Self {
        Command::Subshell(c)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct SimpleCommand {
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl SimpleCommand {
    pub fn new(assignments: Vec<Assignment>, words: Vec<Word>) -> Self {
        Self {
            assignments,
            words,
            location: SourceLocation::default(),
        }
    }

    /// A command of literal words with no assignments.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Vec::new(), words.into_iter().map(Word::literal).collect())
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }
}

impl Render for SimpleCommand {
    fn render(&self, printer: &mut Printer) {
        for assignment in &self.assignments {
            assignment.render(printer);
            printer.defer_char(" ");
        }
        for word in &self.words {
            word.render(printer);
            printer.defer_char(" ");
        }
    }
}

/// `{ body; }`
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Grouping {
    #[serde(default)]
    pub body: Sequence,
    #[serde(default)]
    pub location: SourceLocation,
}

impl Grouping {
    pub fn new(body: Sequence) -> Self {
        Self {
            body,
            location: SourceLocation::default(),
        }
    }
}

impl Render for Grouping {
    fn render(&self, printer: &mut Printer) {
        // Braces line up with the line the group opens on, which may sit
        // below the current level (after `&&`, for instance).
        let base = printer.line_indent();
        printer.append("{");
        printer.break_line();
        {
            let mut inner = printer.indented_to(base + 1);
            inner.print_indent();
            self.body.render(&mut inner);
        }
        match printer.line_mode() {
            // the body's trailing "; " or "& " is needed before the brace
            LineMode::SingleLine => printer.commit_deferred_chars(),
            LineMode::MultiLine => {
                printer.break_line();
                let mut closing = printer.indented_to(base);
                closing.print_indent();
            }
        }
        printer.append("}");
        printer.defer_char(" ");
    }
}

/// `(body)`
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Subshell {
    #[serde(default)]
    pub body: Sequence,
    #[serde(default)]
    pub location: SourceLocation,
}

impl Subshell {
    pub fn new(body: Sequence) -> Self {
        Self {
            body,
            location: SourceLocation::default(),
        }
    }
}

impl Render for Subshell {
    fn render(&self, printer: &mut Printer) {
        printer.append("(");
        self.body.render(printer);
        printer.clear_deferred_chars();
        printer.append(")");
        printer.defer_char(" ");
    }
}

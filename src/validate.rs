use crate::ast::{AndOrList, Assignment, Command, Pipeline, Sequence, SourceLocation, Word};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    EmptyPipeline,
    EmptyCommand,
    EmptyWord,
    EmptyAssignmentName,
    EmptyBody,
}

impl IssueKind {
    fn describe(self) -> &'static str {
        match self {
            IssueKind::EmptyPipeline => "pipeline has no commands",
            IssueKind::EmptyCommand => "simple command has no words or assignments",
            IssueKind::EmptyWord => "word has no components",
            IssueKind::EmptyAssignmentName => "assignment has an empty name",
            IssueKind::EmptyBody => "compound command has an empty body",
        }
    }
}

/// A structural problem found in a tree. The tree still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    /// Dotted path to the offending node, e.g. `lists[0].rest[1].pipeline`.
    pub path: String,
    pub location: Option<SourceLocation>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{} ({}): {}", self.path, loc, self.kind.describe()),
            None => write!(f, "{}: {}", self.path, self.kind.describe()),
        }
    }
}

/// Checks that every node which needs content has some.
pub fn validate(sequence: &Sequence) -> Vec<Issue> {
    let mut checker = Checker { issues: Vec::new() };
    checker.sequence(sequence, "");
    checker.issues
}

struct Checker {
    issues: Vec<Issue>,
}

impl Checker {
    fn report(&mut self, kind: IssueKind, path: String, location: Option<&SourceLocation>) {
        self.issues.push(Issue {
            kind,
            path,
            location: location.cloned(),
        });
    }

    fn sequence(&mut self, sequence: &Sequence, prefix: &str) {
        for (i, list) in sequence.lists.iter().enumerate() {
            self.and_or_list(list, &format!("{}lists[{}]", prefix, i));
        }
    }

    fn and_or_list(&mut self, list: &AndOrList, path: &str) {
        self.pipeline(&list.pipeline, &format!("{}.pipeline", path));
        for (i, conditional) in list.rest.iter().enumerate() {
            self.pipeline(&conditional.pipeline, &format!("{}.rest[{}].pipeline", path, i));
        }
    }

    fn pipeline(&mut self, pipeline: &Pipeline, path: &str) {
        if pipeline.commands.is_empty() {
            self.report(IssueKind::EmptyPipeline, path.to_string(), None);
        }
        for (i, command) in pipeline.commands.iter().enumerate() {
            self.command(command, &format!("{}.commands[{}]", path, i));
        }
    }

    fn command(&mut self, command: &Command, path: &str) {
        let location = command.location();
        match command {
            Command::Simple(simple) => {
                if simple.words.is_empty() && simple.assignments.is_empty() {
                    self.report(IssueKind::EmptyCommand, path.to_string(), Some(location));
                }
                for (i, assignment) in simple.assignments.iter().enumerate() {
                    self.assignment(assignment, &format!("{}.assignments[{}]", path, i), location);
                }
                for (i, word) in simple.words.iter().enumerate() {
                    self.word(word, format!("{}.words[{}]", path, i), location);
                }
            }
            Command::Grouping(group) => self.body(&group.body, path, location),
            Command::Subshell(sub) => self.body(&sub.body, path, location),
        }
    }

    fn body(&mut self, body: &Sequence, path: &str, location: &SourceLocation) {
        if body.is_empty() {
            self.report(IssueKind::EmptyBody, format!("{}.body", path), Some(location));
        }
        self.sequence(body, &format!("{}.body.", path));
    }

    // An empty value (`A=`) is fine, only the name is required.
    fn assignment(&mut self, assignment: &Assignment, path: &str, location: &SourceLocation) {
        if assignment.name.is_empty() {
            self.report(IssueKind::EmptyAssignmentName, format!("{}.name", path), Some(location));
        }
    }

    fn word(&mut self, word: &Word, path: String, location: &SourceLocation) {
        if word.components.is_empty() {
            self.report(IssueKind::EmptyWord, path, Some(location));
        }
    }
}

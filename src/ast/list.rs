use serde::Deserialize;
use crate::ast::command::Command;
use crate::ast::Render;
use crate::printer::Printer;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExitStatusType {
    #[default]
    Straight,
    Negated, // !
}

/// Commands connected by pipes: "! ls | grep target"
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Pipeline {
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub exit_status: ExitStatusType,
}

impl Pipeline {
    pub fn new(exit_status: ExitStatusType, commands: Vec<Command>) -> Self {
        Self {
            commands,
            exit_status,
        }
    }

    pub fn single(command: impl Into<Command>) -> Self {
        Self::new(ExitStatusType::Straight, vec![command.into()])
    }

    pub fn is_negated(&self) -> bool {
        self.exit_status == ExitStatusType::Negated
    }
}

impl Render for Pipeline {
    fn render(&self, printer: &mut Printer) {
        if self.is_negated() {
            printer.append("! ");
        }
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                printer.append("| ");
            }
            command.render(printer);
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    AndThen, // &&
    OrElse,  // ||
}

impl Condition {
    pub fn operator(self) -> &'static str {
        match self {
            Condition::AndThen => "&&",
            Condition::OrElse => "||",
        }
    }
}

/// A pipeline that runs depending on the exit status of the one before it.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConditionalPipeline {
    pub condition: Condition,
    #[serde(default)]
    pub pipeline: Pipeline,
}

impl ConditionalPipeline {
    /// A missing pipeline is replaced with an empty one.
    pub fn new(condition: Condition, pipeline: Option<Pipeline>) -> Self {
        Self {
            condition,
            pipeline: pipeline.unwrap_or_default(),
        }
    }
}

impl Render for ConditionalPipeline {
    fn render(&self, printer: &mut Printer) {
        printer.append(self.condition.operator());
        printer.break_line();
        printer.print_indent();
        let mut inner = printer.indented(1);
        self.pipeline.render(&mut inner);
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Synchronicity {
    #[default]
    Sequential,   // ;
    Asynchronous, // &
}

/// "make && make test || echo failed&"
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AndOrList {
    pub pipeline: Pipeline,
    #[serde(default)]
    pub rest: Vec<ConditionalPipeline>,
    #[serde(default)]
    pub synchronicity: Synchronicity,
}

impl AndOrList {
    pub fn new(pipeline: Pipeline, rest: Vec<ConditionalPipeline>, synchronicity: Synchronicity) -> Self {
        Self {
            pipeline,
            rest,
            synchronicity,
        }
    }

    pub fn sequential(pipeline: Pipeline) -> Self {
        Self::new(pipeline, Vec::new(), Synchronicity::Sequential)
    }

    pub fn asynchronous(pipeline: Pipeline) -> Self {
        Self::new(pipeline, Vec::new(), Synchronicity::Asynchronous)
    }

    pub fn then(mut self, condition: Condition, pipeline: Pipeline) -> Self {
        self.rest.push(ConditionalPipeline::new(condition, Some(pipeline)));
        self
    }
}

impl Render for AndOrList {
    fn render(&self, printer: &mut Printer) {
        self.pipeline.render(printer);
        for conditional in &self.rest {
            conditional.render(printer);
        }
        // The last word's pending space never precedes the marker.
        printer.clear_deferred_chars();
        match self.synchronicity {
            Synchronicity::Sequential => printer.defer_char(";"),
            Synchronicity::Asynchronous => printer.append("&"),
        }
        printer.defer_char(" ");
    }
}

/// Top-level command list, rendered in order.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Sequence {
    #[serde(default)]
    pub lists: Vec<AndOrList>,
}

impl Sequence {
    pub fn new(lists: Vec<AndOrList>) -> Self {
        Self { lists }
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl Render for Sequence {
    fn render(&self, printer: &mut Printer) {
        for list in &self.lists {
            list.render(printer);
        }
    }
}

impl FromIterator<AndOrList> for Sequence {
    fn from_iter<I: IntoIterator<Item = AndOrList>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

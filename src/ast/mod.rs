pub mod source;
pub mod word;
pub mod command;
pub mod list;

pub use command::{Command, Grouping, SimpleCommand, Subshell};
pub use list::{AndOrList, Condition, ConditionalPipeline, ExitStatusType, Pipeline, Sequence, Synchronicity};
pub use source::SourceLocation;
pub use word::{Assignment, RawString, Word};

use crate::printer::{LineMode, Printer};
use log::debug;

#[cfg(test)]
mod tests;

/// A node that can write itself onto a [`Printer`].
///
/// Rendering is total: any tree that can be built can be printed, whether or
/// not it is valid shell syntax.
pub trait Render {
    fn render(&self, printer: &mut Printer);

    /// Renders into a fresh printer and returns the committed text.
    fn to_source(&self, mode: LineMode) -> String {
        debug!("Rendering {} in {} mode", std::any::type_name::<Self>(), mode);
        let mut printer = Printer::new(mode);
        self.render(&mut printer);
        printer.into_string()
    }
}

//! Syntax trees for a shell command language and the printer that turns them
//! back into source text, either on one line or broken across lines with
//! indentation.

pub mod ast;
pub mod config;
pub mod document;
pub mod printer;
pub mod validate;

pub use ast::Render;
pub use printer::{IndentGuard, LineMode, Printer};

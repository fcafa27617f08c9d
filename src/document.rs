use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::path::Path;
use crate::ast::Sequence;

/// Builds a tree from a TOML tree document.
///
/// ```toml
/// [[lists]]
/// synchronicity = "asynchronous"
/// pipeline = { exit_status = "negated", commands = [
///     { kind = "simple", words = ["grep", ["-", "q"], "x"] },
/// ] }
/// ```
pub fn parse_tree(content: &str) -> Result<Sequence> {
    let tree: Sequence = toml::from_str(content).context("Failed to parse tree document")?;
    debug!("Loaded tree with {} and-or lists", tree.lists.len());
    Ok(tree)
}

pub fn load_tree(path: &Path) -> Result<Sequence> {
    if !path.exists() {
        bail!("❌ Tree document not found: {:?}", path);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree document: {}", path.display()))?;
    parse_tree(&content).with_context(|| format!("Invalid tree document: {}", path.display()))
}

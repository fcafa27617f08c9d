use anyhow::{Result, bail};
use colored::*;
use std::path::PathBuf;
use shprint::document::load_tree;
use shprint::validate::validate;

pub fn handle_check(file: PathBuf) -> Result<()> {
    let tree = load_tree(&file)?;
    let issues = validate(&tree);

    if issues.is_empty() {
        eprintln!("{} {} is structurally complete.", "✅".green(), file.display().to_string().bold());
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {} {}", "•".red(), issue);
    }
    bail!("❌ {} structural issue(s) in {}", issues.len(), file.display());
}

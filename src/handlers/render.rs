use anyhow::Result;
use colored::*;
use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};
use shprint::ast::Render;
use shprint::config::load_config;
use shprint::document::load_tree;
use shprint::printer::LineMode;
use shprint::validate::{Issue, validate};

pub fn handle_render(
    file: PathBuf,
    mode_override: Option<LineMode>,
    no_validate: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let current_dir = env::current_dir()?;
    let config = load_config(&current_dir, config_path)?;
    let mode = mode_override.unwrap_or(config.render.line_mode);

    let tree = load_tree(&file)?;

    if config.render.validate && !no_validate {
        // Rendering is total, so an invalid tree is still printed.
        let issues = validate(&tree);
        for line in issue_report(&file, &issues) {
            eprintln!("{}", line);
        }
        for issue in &issues {
            warn!("{}", issue);
        }
    }

    debug!("Rendering {} in {} mode", file.display(), mode);
    println!("{}", tree.to_source(mode));
    Ok(())
}

/// Stderr lines for a tree that renders but is structurally incomplete.
fn issue_report(file: &Path, issues: &[Issue]) -> Vec<String> {
    if issues.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!(
        "{} {} has structural issues:",
        "⚠️".yellow(),
        file.display().to_string().bold()
    )];
    lines.extend(issues.iter().map(|issue| format!("  {} {}", "•".yellow(), issue)));
    lines
}

pub fn handle_modes(file: PathBuf) -> Result<()> {
    let tree = load_tree(&file)?;

    for mode in [LineMode::SingleLine, LineMode::MultiLine] {
        println!("{}", format!("── {} ──", mode).bold().underline());
        println!("{}", tree.to_source(mode));
        println!();
    }
    Ok(())
}

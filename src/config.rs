use anyhow::{Context, Result, bail};
use colored::*;
use log::info;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use crate::printer::LineMode;

pub const CONFIG_FILE: &str = "shprint.toml";
pub const LINE_MODE_ENV: &str = "SHPRINT_LINE_MODE";

#[derive(Debug, Deserialize, Default)]
pub struct ShprintConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RenderConfig {
    #[serde(default)]
    pub line_mode: LineMode,
    #[serde(default = "enabled")]
    pub validate: bool,
}

fn enabled() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_mode: LineMode::default(),
            validate: true,
        }
    }
}

pub fn parse_line_mode(value: &str) -> Result<LineMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "single" | "single-line" => Ok(LineMode::SingleLine),
        "multi" | "multi-line" => Ok(LineMode::MultiLine),
        other => bail!("Unknown line mode '{}' (expected 'single-line' or 'multi-line')", other),
    }
}

/// Loads configuration from `explicit` or, failing that, `shprint.toml` in `dir`.
///
/// An explicit path must exist. The default file is optional.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<ShprintConfig> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("❌ Critical: config file {:?} not found.", path);
            }
            Some(path.to_path_buf())
        }
        None => Some(dir.join(CONFIG_FILE)).filter(|p| p.exists()),
    };

    // 1. File (Base Layer)
    let mut config: ShprintConfig = match config_path {
        Some(path) => {
            info!("{} Loading config from: {}", "⚙️".cyan(), path.display().to_string().bold());
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => ShprintConfig::default(),
    };

    // 2. Environment (Override Layer)
    if let Ok(value) = env::var(LINE_MODE_ENV) {
        config.render.line_mode = parse_line_mode(&value)
            .with_context(|| format!("Invalid {} value", LINE_MODE_ENV))?;
    }

    Ok(config)
}

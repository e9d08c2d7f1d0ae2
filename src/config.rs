use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Names a config file to use instead of the per-user one.
pub const CONFIG_ENV_VAR: &str = "MYSHELL_CONFIG";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize)]
pub struct Config {
    pub shell: ShellSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize)]
pub struct ShellSettings {
    pub prompt: String,
    pub max_line_length: usize,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    shell: ShellOverlay,
    #[serde(default)]
    logging: LoggingOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct ShellOverlay {
    prompt: Option<String>,
    max_line_length: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct LoggingOverlay {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Embedded defaults, with the user's file (if any) applied on top.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = overlay_path().and_then(|path| load_overlay(&path)) {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Scalars present in the overlay replace the defaults.
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(prompt) = overlay.shell.prompt {
            self.shell.prompt = prompt;
        }
        if let Some(max) = overlay.shell.max_line_length {
            self.shell.max_line_length = max;
        }
        if let Some(level) = overlay.logging.level {
            self.logging.level = level;
        }
        if overlay.logging.file.is_some() {
            self.logging.file = overlay.logging.file;
        }
    }
}

fn overlay_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|dir| dir.join("myshell/config.toml")),
    }
}

/// Missing files are silently skipped; unparsable ones are reported once.
fn load_overlay(path: &Path) -> Option<ConfigOverlay> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_overlay(&content, path)
}

fn parse_overlay(content: &str, path: &Path) -> Option<ConfigOverlay> {
    match toml::from_str(content) {
        Ok(overlay) => Some(overlay),
        Err(e) => {
            eprintln!("myshell: {}: config parse error: {e}", path.display());
            None
        }
    }
}

use std::fs::OpenOptions;

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::config::LoggingSettings;

/// Overrides the configured level, e.g. `MYSHELL_LOG=debug`.
pub const LOG_ENV_VAR: &str = "MYSHELL_LOG";

/// Install the global logger. Logs never go to stdout, which belongs to the
/// shell's own output. Best-effort: a logger that cannot be set up is skipped.
pub fn init(settings: &LoggingSettings) {
    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
        .or_else(|| parse_level(&settings.level))
        .unwrap_or(LevelFilter::Off);

    if level == LevelFilter::Off {
        return;
    }

    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();

    let installed = match &settings.file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => WriteLogger::init(level, config, file),
            Err(e) => {
                eprintln!("myshell: {}: cannot open log file: {e}", path.display());
                return;
            }
        },
        None => TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Never),
    };

    if let Err(e) = installed {
        eprintln!("myshell: logger already installed: {e}");
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

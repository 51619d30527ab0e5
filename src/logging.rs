//! Logger setup shared by both binaries.

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::config::{self, PathConfig};

/// 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Initialize env_logger.
///
/// With `--log` the output goes to a file (`default_name` in the data dir
/// unless a path was given); otherwise to stderr, honouring RUST_LOG.
pub fn init(
    verbosity: u8,
    log_file: Option<&Option<PathBuf>>,
    default_name: &str,
    paths: &PathConfig,
) -> Result<()> {
    let level = level_for(verbosity);

    if let Some(log_path_opt) = log_file {
        let log_path = log_path_opt
            .clone()
            .unwrap_or_else(|| config::data_file(default_name, paths));
        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(level)
            .filter_module("egui", log::LevelFilter::Info)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), level);
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
        )
        .filter_module("egui", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), log::LevelFilter::Warn);
        assert_eq!(level_for(1), log::LevelFilter::Info);
        assert_eq!(level_for(2), log::LevelFilter::Debug);
        assert_eq!(level_for(9), log::LevelFilter::Trace);
    }
}

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory name under the platform config/data dirs
const APP_DIR: &str = "expbuilder";

/// Files whose presence in the working directory makes it the config dir
const LOCAL_FILES: [&str; 3] = ["expbuilder.json", "expbuilder.log", "explayer.log"];

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Priority: CLI args → ENV var (EXPBUILDER_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| {
            std::env::var("EXPBUILDER_CONFIG_DIR")
                .ok()
                .map(PathBuf::from)
        });

        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. EXPBUILDER_CONFIG_DIR environment variable
/// 3. Local folder IF any of our files exist there
/// 4. Platform config directory from dirs-next, e.g. ~/.config/expbuilder/{name}
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::config_dir()).join(name)
}

/// Get path to a data file (logs); same priority as `config_file` but
/// falls back to the platform data directory.
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::data_dir()).join(name)
}

/// Create the config and data directories if missing.
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = resolve_dir(config, dirs_next::config_dir());
    let data_dir = resolve_dir(config, dirs_next::data_dir());

    for dir in [&config_dir, &data_dir] {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }
    Ok(())
}

fn has_local_files(dir: &Path) -> bool {
    LOCAL_FILES.iter().any(|f| dir.join(f).exists())
}

fn resolve_dir(config: &PathConfig, platform: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    if let Ok(current_dir) = std::env::current_dir()
        && has_local_files(&current_dir)
    {
        return current_dir;
    }

    platform
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };
        assert_eq!(
            config_file("expbuilder.json", &config),
            PathBuf::from("/custom/expbuilder.json")
        );
        assert_eq!(
            data_file("explayer.log", &config),
            PathBuf::from("/custom/explayer.log")
        );
    }

    #[test]
    fn test_cli_dir_wins() {
        let config = PathConfig::from_env_and_cli(Some(PathBuf::from("/from_cli")));
        assert_eq!(config.config_dir, Some(PathBuf::from("/from_cli")));
    }

    #[test]
    fn test_ensure_dirs_creates_custom_dir() {
        let dir = std::env::temp_dir().join("expbuilder_test_config_dir");
        let _ = std::fs::remove_dir_all(&dir);
        let config = PathConfig {
            config_dir: Some(dir.clone()),
        };
        ensure_dirs(&config).unwrap();
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_local_files_detection() {
        let dir = std::env::temp_dir().join("expbuilder_test_local_files");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(!has_local_files(&dir));
        std::fs::write(dir.join("expbuilder.json"), "{}").unwrap();
        assert!(has_local_files(&dir));
        let _ = std::fs::remove_dir_all(&dir);
    }
}

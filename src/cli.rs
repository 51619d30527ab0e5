use clap::Parser;
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Experiment format: v", crate::entities::experiment::FORMAT_VERSION, "\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Experiment builder: compose slides of text and images
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct EditorArgs {
    /// Experiment file to open (JSON)
    #[arg(value_name = "FILE")]
    pub file_path: Option<PathBuf>,

    /// Start with an empty experiment even if one was open last time
    #[arg(short = 'n', long = "new")]
    pub new: bool,

    /// Enable debug logging to file (default: expbuilder.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Experiment player: present an experiment built with expbuilder
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct PlayerArgs {
    /// Experiment file to play (skips the file dialog)
    #[arg(value_name = "FILE")]
    pub file_path: Option<PathBuf>,

    /// Force a 1400x900 window
    #[arg(short = 'w', long = "windowed", conflicts_with = "fullscreen")]
    pub windowed: bool,

    /// Force full-screen
    #[arg(short = 'F', long = "fullscreen")]
    pub fullscreen: bool,

    /// Enable debug logging to file (default: explayer.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_args() {
        let args = PlayerArgs::parse_from(["explayer", "-vv", "--windowed", "exp.json"]);
        assert_eq!(args.verbosity, 2);
        assert!(args.windowed);
        assert_eq!(args.file_path, Some(PathBuf::from("exp.json")));
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_player_window_flags_conflict() {
        assert!(PlayerArgs::try_parse_from(["explayer", "-w", "-F"]).is_err());
    }

    #[test]
    fn test_editor_log_flag_without_value() {
        let args = EditorArgs::parse_from(["expbuilder", "--log"]);
        assert_eq!(args.log_file, Some(None));
    }
}

//! Experiment player.
//!
//! Startup: pick an experiment, load it, then hand a `PlayerController`
//! to an undecorated window. Cancelling the pick ends the process before
//! any controller or window exists.

pub mod app;
pub mod controller;

pub use app::PlayerApp;
pub use controller::{PlayerController, Step};

use anyhow::{Result, anyhow};
use eframe::egui;
use log::info;
use std::path::{Path, PathBuf};

use crate::entities::Experiment;
use crate::widgets::file_dialogs::create_experiment_dialog;

/// Debug builds play in a window, release builds full-screen.
pub const DEBUG: bool = cfg!(debug_assertions);

/// Window size used in windowed mode
pub const DEBUG_WINDOW_SIZE: [f32; 2] = [1400.0, 900.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Windowed,
    Fullscreen,
}

impl DisplayMode {
    /// Explicit flags win over the build's debug flag.
    pub fn resolve(debug: bool, windowed: bool, fullscreen: bool) -> Self {
        if windowed {
            DisplayMode::Windowed
        } else if fullscreen || !debug {
            DisplayMode::Fullscreen
        } else {
            DisplayMode::Windowed
        }
    }
}

/// Where the experiment file comes from
pub trait ExperimentSource {
    /// Chosen file, or None when the user cancelled.
    fn choose(&mut self) -> Option<PathBuf>;
}

/// Blocking native open dialog
pub struct FileDialogSource;

impl ExperimentSource for FileDialogSource {
    fn choose(&mut self) -> Option<PathBuf> {
        create_experiment_dialog("Open Experiment").pick_file()
    }
}

/// File given up front (command line)
pub struct FixedSource(Option<PathBuf>);

impl FixedSource {
    pub fn new(path: PathBuf) -> Self {
        Self(Some(path))
    }
}

impl ExperimentSource for FixedSource {
    fn choose(&mut self) -> Option<PathBuf> {
        self.0.take()
    }
}

#[derive(Debug)]
pub enum Bootstrap {
    /// No file chosen: exit cleanly
    Cancelled,
    Ready(PlayerController),
}

/// Choose and load an experiment. Load errors propagate.
pub fn bootstrap<S, L>(source: &mut S, load: L) -> Result<Bootstrap>
where
    S: ExperimentSource + ?Sized,
    L: FnOnce(&Path) -> Result<Experiment>,
{
    let Some(path) = source.choose() else {
        info!("No experiment chosen");
        return Ok(Bootstrap::Cancelled);
    };
    info!("Loading experiment {}", path.display());
    let experiment = load(&path)?;
    Ok(Bootstrap::Ready(PlayerController::new(experiment)))
}

pub fn native_options(mode: DisplayMode) -> eframe::NativeOptions {
    let viewport = egui::ViewportBuilder::default()
        .with_title("Experiment Player")
        .with_decorations(false);
    let viewport = match mode {
        DisplayMode::Windowed => viewport
            .with_inner_size(DEBUG_WINDOW_SIZE)
            .with_resizable(false),
        DisplayMode::Fullscreen => viewport.with_fullscreen(true),
    };
    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}

/// Open the player window and block until it closes.
pub fn run(controller: PlayerController, mode: DisplayMode) -> Result<()> {
    info!("Starting player ({:?})", mode);
    eframe::run_native(
        "Experiment Player",
        native_options(mode),
        Box::new(move |_cc| Ok(Box::new(PlayerApp::new(controller)))),
    )
    .map_err(|e| anyhow!("Player window error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cancelling;

    impl ExperimentSource for Cancelling {
        fn choose(&mut self) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn test_cancel_builds_no_controller() {
        let mut loaded = false;
        let result = bootstrap(&mut Cancelling, |_| {
            loaded = true;
            Ok(Experiment::new("never"))
        })
        .unwrap();
        assert!(matches!(result, Bootstrap::Cancelled));
        assert!(!loaded);
    }

    #[test]
    fn test_fixed_source_loads_once() {
        let mut source = FixedSource::new(PathBuf::from("exp.json"));
        let result = bootstrap(&mut source, |p| {
            assert_eq!(p, Path::new("exp.json"));
            Ok(Experiment::new("fixed"))
        })
        .unwrap();
        match result {
            Bootstrap::Ready(c) => assert_eq!(c.experiment().name, "fixed"),
            Bootstrap::Cancelled => panic!("expected controller"),
        }
        assert!(source.choose().is_none());
    }

    #[test]
    fn test_load_error_propagates() {
        let mut source = FixedSource::new(PathBuf::from("broken.json"));
        let result = bootstrap(&mut source, |_| Err(anyhow!("Invalid experiment file")));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_mode() {
        assert_eq!(DisplayMode::resolve(true, false, false), DisplayMode::Windowed);
        assert_eq!(DisplayMode::resolve(false, false, false), DisplayMode::Fullscreen);
        assert_eq!(DisplayMode::resolve(true, false, true), DisplayMode::Fullscreen);
        assert_eq!(DisplayMode::resolve(false, true, false), DisplayMode::Windowed);
    }

    #[test]
    fn test_native_options_undecorated() {
        let windowed = native_options(DisplayMode::Windowed);
        assert_eq!(windowed.viewport.decorations, Some(false));
        assert_eq!(windowed.viewport.inner_size, Some(egui::vec2(1400.0, 900.0)));
        let full = native_options(DisplayMode::Fullscreen);
        assert_eq!(full.viewport.fullscreen, Some(true));
    }
}

//! Experiment I/O for EditorApp.
//!
//! - Export/save (export_experiment, quick_save, export_experiment_as)
//! - Open (load_experiment, show_open_experiment_dialog)
//! - New experiment

use super::EditorApp;
use crate::entities::Experiment;
use crate::widgets::file_dialogs::create_experiment_dialog;

use anyhow::Result;
use log::{error, info};
use std::path::{Path, PathBuf};

impl EditorApp {
    /// Write the experiment, with the current list registry, to `path`.
    pub fn export_experiment(&mut self, path: &Path) -> Result<PathBuf> {
        let snapshot = self.stage.export_snapshot(&self.editor.lists);
        let written = snapshot.save(path)?;
        self.stage.mark_saved(written.clone());
        self.settings.last_experiment = Some(written.clone());
        info!("Exported experiment to {}", written.display());
        Ok(written)
    }

    fn export_reporting(&mut self, path: &Path) {
        match self.export_experiment(path) {
            Ok(written) => {
                self.error_msg = None;
                self.status_bar
                    .set_message(format!("Exported {}", written.display()));
            }
            Err(e) => {
                error!("{:#}", e);
                self.error_msg = Some(format!("{:#}", e));
            }
        }
    }

    /// Save to the experiment's file, or ask where when it has none.
    pub fn quick_save(&mut self) {
        match self.stage.path().map(Path::to_path_buf) {
            Some(path) => self.export_reporting(&path),
            None => self.export_experiment_as(),
        }
    }

    /// Ask for a destination and export there.
    pub fn export_experiment_as(&mut self) {
        let file_name = format!("{}.json", self.stage.experiment().name);
        if let Some(path) = create_experiment_dialog("Export Experiment")
            .set_file_name(file_name)
            .save_file()
        {
            self.export_reporting(&path);
        }
    }

    /// Load an experiment file and rebuild the editor around it.
    pub fn load_experiment(&mut self, path: &Path) -> Result<()> {
        let experiment = Experiment::load_experiment(path)?;
        self.status_bar
            .set_message(format!("Opened '{}'", experiment.name));
        self.stage.replace(experiment, Some(path.to_path_buf()));
        self.rebuild_regions();
        self.settings.last_experiment = Some(path.to_path_buf());
        self.error_msg = None;
        Ok(())
    }

    pub fn show_open_experiment_dialog(&mut self) {
        if let Some(path) = create_experiment_dialog("Open Experiment").pick_file()
            && let Err(e) = self.load_experiment(&path)
        {
            error!("{:#}", e);
            self.error_msg = Some(format!("{:#}", e));
        }
    }

    /// Replace the stage with an empty experiment.
    pub fn new_experiment(&mut self) {
        self.stage.replace(Experiment::new("Untitled Experiment"), None);
        self.rebuild_regions();
        self.settings.last_experiment = None;
        self.error_msg = None;
        self.status_bar.set_message("New experiment");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StringList;

    #[test]
    fn test_export_then_load_keeps_lists() {
        let dir = std::env::temp_dir().join("expbuilder_test_app_io");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("exp");

        let mut app = EditorApp::default();
        app.stage.add_text("hello");
        app.editor
            .lists
            .add_string_list(StringList::with_items("words", vec!["a".to_string()]));
        let written = app.export_experiment(&path).unwrap();
        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("json"));
        assert!(!app.stage.is_dirty());
        assert_eq!(app.settings.last_experiment.as_deref(), Some(written.as_path()));

        let mut other = EditorApp::default();
        other.load_experiment(&written).unwrap();
        assert!(other.editor.lists.contains("words"));
        assert_eq!(other.stage.current_slide().elements.len(), 1);
        assert_eq!(other.stage.path(), Some(written.as_path()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let mut app = EditorApp::default();
        let missing = std::env::temp_dir().join("expbuilder_test_missing.json");
        assert!(app.load_experiment(&missing).is_err());
    }

    #[test]
    fn test_new_experiment_resets() {
        let mut app = EditorApp::default();
        app.stage.add_blank_slide();
        app.new_experiment();
        assert_eq!(app.stage.slides().len(), 1);
        assert!(app.stage.path().is_none());
    }
}

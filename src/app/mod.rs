//! Editor application - EditorApp and related functionality.
//!
//! - `events` - event bus dispatch and keyboard input
//! - `project_io` - open, export and new experiment
//! - `run` - eframe::App implementation (panel layout, dialogs, persistence)

mod events;
mod project_io;
mod run;

use crate::builder::{build_sidebar, build_slide_switcher, build_toolbar};
use crate::config::PathConfig;
use crate::core::{EditorContext, EventBus, Stage};
use crate::dialogs::create_list::CreateListDialog;
use crate::dialogs::prefs::AppSettings;
use crate::dialogs::repeat::RepeatDialog;
use crate::entities::Experiment;
use crate::help::{EDITOR_HELP, HelpEntry, HelpProvider};
use crate::widgets::sidebar::Sidebar;
use crate::widgets::stage_view::StageViewState;
use crate::widgets::status::StatusBar;
use crate::widgets::switcher::SlideStrip;
use crate::widgets::textures::TextureCache;
use crate::widgets::toolbar::Toolbar;

/// Main editor state.
///
/// Only `settings` is persisted; the experiment itself lives in its own
/// file and is reopened from `settings.last_experiment`.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct EditorApp {
    pub settings: AppSettings,
    #[serde(skip)]
    pub stage: Stage,
    #[serde(skip)]
    pub editor: EditorContext,
    #[serde(skip)]
    pub toolbar: Toolbar,
    #[serde(skip)]
    pub sidebar: Sidebar,
    #[serde(skip)]
    pub strip: SlideStrip,
    #[serde(skip)]
    pub stage_view: StageViewState,
    #[serde(skip)]
    pub textures: TextureCache,
    #[serde(skip)]
    pub status_bar: StatusBar,
    #[serde(skip)]
    pub error_msg: Option<String>,
    #[serde(skip)]
    pub event_bus: EventBus,
    #[serde(skip)]
    pub show_help: bool,
    #[serde(skip)]
    pub show_settings: bool,
    #[serde(skip)]
    pub show_create_list: bool,
    #[serde(skip)]
    pub create_list: CreateListDialog,
    #[serde(skip)]
    pub repeat_dialog: Option<RepeatDialog>,
    #[serde(skip)]
    pub path_config: PathConfig,
}

impl Default for EditorApp {
    fn default() -> Self {
        let stage = Stage::new(Experiment::new("Untitled Experiment"));
        let mut editor = EditorContext::new();
        let sidebar = build_sidebar(&mut editor, &stage);
        let strip = build_slide_switcher(&stage);
        Self {
            settings: AppSettings::default(),
            stage,
            editor,
            toolbar: build_toolbar(),
            sidebar,
            strip,
            stage_view: StageViewState::new(),
            textures: TextureCache::new(),
            status_bar: StatusBar::new(),
            error_msg: None,
            event_bus: EventBus::new(),
            show_help: false,
            show_settings: false,
            show_create_list: false,
            create_list: CreateListDialog::new(),
            repeat_dialog: None,
            path_config: PathConfig::default(),
        }
    }
}

impl EditorApp {
    /// Rebuild context and regions after the stage got a new experiment.
    ///
    /// The list registry is reseeded from the experiment file; the toolbar
    /// does not depend on the experiment and is kept.
    pub fn rebuild_regions(&mut self) {
        self.editor = EditorContext::with_lists(self.stage.experiment().lists.clone());
        self.sidebar = build_sidebar(&mut self.editor, &self.stage);
        self.strip = build_slide_switcher(&self.stage);
        self.stage_view = StageViewState::new();
        self.textures.clear_files();
        self.repeat_dialog = None;
    }
}

impl HelpProvider for EditorApp {
    fn help_title(&self) -> &'static str {
        "Editor"
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        EDITOR_HELP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Selection;
    use crate::entities::StringList;

    #[test]
    fn test_only_settings_persisted() {
        let mut app = EditorApp::default();
        app.settings.font_size = 15.0;
        app.show_help = true;
        let json = serde_json::to_string(&app).unwrap();
        let restored: EditorApp = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.settings.font_size, 15.0);
        assert!(!restored.show_help);
    }

    #[test]
    fn test_rebuild_seeds_lists_from_experiment() {
        let mut app = EditorApp::default();
        let mut exp = Experiment::new("loaded");
        exp.lists
            .add_string_list(StringList::with_items("words", vec!["a".to_string()]));
        let first = exp.slides[0].uuid;
        app.stage.replace(exp, None);
        app.rebuild_regions();

        assert!(app.editor.lists.contains("words"));
        assert_eq!(app.editor.selection.current(), Selection::Slide(first));
        assert_eq!(app.strip.len(), 1);
    }
}

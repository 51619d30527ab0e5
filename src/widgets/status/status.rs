use eframe::egui;

use crate::core::{EditorContext, Selection, Stage};

/// Status bar: experiment file, slide position, selection, last message
#[derive(Debug, Default)]
pub struct StatusBar {
    pub current_message: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.current_message = message.into();
    }

    /// Render status bar at bottom of screen
    pub fn render(
        &self,
        ctx: &egui::Context,
        stage: &Stage,
        editor: &EditorContext,
        error_msg: Option<&str>,
    ) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // File name
                let file = stage
                    .path()
                    .and_then(|p| p.file_name())
                    .and_then(|n| n.to_str())
                    .unwrap_or("unsaved");
                let dirty = if stage.is_dirty() { " *" } else { "" };
                ui.monospace(format!("{}{}", file, dirty));

                ui.separator();

                // Slide position
                ui.monospace(format!(
                    "Slide {}/{}",
                    stage.current_index() + 1,
                    stage.slides().len()
                ));

                ui.separator();

                let selection = match editor.selection.current() {
                    Selection::None => "nothing selected".to_string(),
                    Selection::Slide(_) => "slide".to_string(),
                    Selection::Element { element, .. } => stage
                        .find_element(element)
                        .map(|(_, e)| e.content.kind_name().to_lowercase())
                        .unwrap_or_else(|| "stale element".to_string()),
                };
                ui.monospace(selection);

                ui.separator();

                ui.monospace(format!("{} lists", editor.lists.len()));

                if let Some(err) = error_msg {
                    ui.separator();
                    ui.colored_label(ui.visuals().error_fg_color, err);
                } else if !self.current_message.is_empty() {
                    ui.separator();
                    ui.label(&self.current_message);
                }
            });
        });
    }
}

//! Hotkey help.
//!
//! Each window provides its own `HelpEntry` table; F1 toggles an overlay
//! listing them.

use eframe::egui;

/// Single help entry (key binding + description)
#[derive(Clone, Debug)]
pub struct HelpEntry {
    pub key: &'static str,
    pub desc: &'static str,
}

impl HelpEntry {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self { key, desc }
    }
}

/// Trait for windows that provide context help
pub trait HelpProvider {
    /// Section title (e.g., "Editor", "Player")
    fn help_title(&self) -> &'static str;

    fn help_entries(&self) -> &'static [HelpEntry];
}

/// Editor hotkeys
pub const EDITOR_HELP: &[HelpEntry] = &[
    HelpEntry::new("F1", "Toggle help"),
    HelpEntry::new("F12", "Toggle Preferences"),
    HelpEntry::new("Ctrl+S", "Save Experiment"),
    HelpEntry::new("Ctrl+O", "Open Experiment"),
    HelpEntry::new("Ctrl+N", "New Experiment"),
    HelpEntry::new("Ctrl+T", "Add Text"),
    HelpEntry::new("Ctrl+L", "Create List"),
    HelpEntry::new("Delete", "Remove Selected Element"),
    HelpEntry::new("PageUp/PageDown", "Previous/Next Slide"),
    HelpEntry::new("Left Drag", "Move Element"),
];

/// Player hotkeys
pub const PLAYER_HELP: &[HelpEntry] = &[
    HelpEntry::new("F1", "Toggle help"),
    HelpEntry::new("Space / Enter / Right", "Next"),
    HelpEntry::new("Left Click", "Next"),
    HelpEntry::new("ESC", "Quit"),
];

/// Render help overlay for a window
pub fn render_help_overlay(ui: &mut egui::Ui, title: &str, entries: &[HelpEntry]) {
    let font_id = egui::FontId::proportional(13.0);
    let text_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200);
    let key_color = egui::Color32::from_rgb(255, 200, 100);

    // Align descriptions (estimate from char count)
    let max_key_len = entries.iter().map(|e| e.key.len()).max().unwrap_or(10);
    let max_key_width = (max_key_len as f32) * 8.0 + 20.0;

    egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
        .inner_margin(12.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .font(font_id.clone())
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(4.0);
            for entry in entries {
                ui.horizontal(|ui| {
                    ui.add_sized(
                        [max_key_width, 18.0],
                        egui::Label::new(
                            egui::RichText::new(entry.key)
                                .font(font_id.clone())
                                .color(key_color),
                        ),
                    );
                    ui.label(
                        egui::RichText::new(entry.desc)
                            .font(font_id.clone())
                            .color(text_color),
                    );
                });
            }
        });
}

/// Show the provider's help in a floating area at the top-left corner.
pub fn show_help_area(ctx: &egui::Context, provider: &dyn HelpProvider) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            render_help_overlay(ui, provider.help_title(), provider.help_entries());
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f1_listed_everywhere() {
        for table in [EDITOR_HELP, PLAYER_HELP] {
            assert!(table.iter().any(|e| e.key == "F1"));
        }
    }
}

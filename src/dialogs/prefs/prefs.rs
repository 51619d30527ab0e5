use eframe::egui;
use std::path::PathBuf;

/// Settings categories
#[derive(Debug, Clone, Copy, PartialEq)]
enum SettingsCategory {
    General,
    UI,
}

impl SettingsCategory {
    fn as_str(&self) -> &'static str {
        match self {
            SettingsCategory::General => "General",
            SettingsCategory::UI => "UI",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "General" => Some(SettingsCategory::General),
            "UI" => Some(SettingsCategory::UI),
            _ => None,
        }
    }
}

/// Application settings (persisted with the editor state)
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppSettings {
    // UI
    pub show_help: bool,
    pub show_tooltips: bool,
    pub dark_mode: bool,
    pub font_size: f32,

    // Experiment
    pub reopen_last: bool,
    pub last_experiment: Option<PathBuf>,
    pub default_text: String,

    // Internal
    pub selected_settings_category: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_help: false,
            show_tooltips: true,
            dark_mode: true,
            font_size: 13.0,
            reopen_last: true,
            last_experiment: None,
            default_text: "New Text".to_string(),
            selected_settings_category: Some("UI".to_string()),
        }
    }
}

/// Render General settings category
fn render_general_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Experiment");
    ui.add_space(8.0);

    ui.checkbox(&mut settings.reopen_last, "Reopen last experiment on startup");
    if let Some(path) = &settings.last_experiment {
        ui.weak(format!("Last: {}", path.display()));
    }
    ui.add_space(8.0);

    ui.label("Text for new text elements:");
    ui.text_edit_singleline(&mut settings.default_text);
}

/// Render UI settings category
fn render_ui_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Appearance");
    ui.add_space(8.0);

    ui.label("Font Size:");
    ui.add(
        egui::Slider::new(&mut settings.font_size, 10.0..=18.0)
            .suffix(" px")
            .step_by(0.5),
    );
    ui.add_space(16.0);

    ui.checkbox(&mut settings.dark_mode, "Dark Mode");
    ui.checkbox(&mut settings.show_tooltips, "Show Tooltips");
    ui.checkbox(&mut settings.show_help, "Show help on startup");
}

pub fn render_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
) {
    let mut selected = settings
        .selected_settings_category
        .as_deref()
        .and_then(SettingsCategory::from_str)
        .unwrap_or(SettingsCategory::UI);

    egui::Window::new("Settings")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .default_size([500.0, 320.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Left: category list
                ui.vertical(|ui| {
                    ui.set_width(120.0);
                    for category in [SettingsCategory::General, SettingsCategory::UI] {
                        ui.selectable_value(&mut selected, category, category.as_str());
                    }
                });

                ui.separator();

                // Right: content for selected category
                ui.vertical(|ui| {
                    match selected {
                        SettingsCategory::General => render_general_settings(ui, settings),
                        SettingsCategory::UI => render_ui_settings(ui, settings),
                    }
                });
            });
        });

    settings.selected_settings_category = Some(selected.as_str().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_missing_fields_default() {
        let settings: AppSettings = serde_json::from_str(r#"{"dark_mode":false}"#).unwrap();
        assert!(!settings.dark_mode);
        assert_eq!(settings.font_size, AppSettings::default().font_size);
        assert!(settings.reopen_last);
    }

    #[test]
    fn test_category_names() {
        for c in [SettingsCategory::General, SettingsCategory::UI] {
            assert_eq!(SettingsCategory::from_str(c.as_str()), Some(c));
        }
        assert_eq!(SettingsCategory::from_str("Cache"), None);
    }
}

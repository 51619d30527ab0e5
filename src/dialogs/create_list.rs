//! Create List dialog: a named list of strings or files.
//!
//! Text lists take one item per line. File lists are picked with the
//! native dialog. Names must be non-empty and unused in the registry.

use eframe::egui;
use std::path::PathBuf;

use crate::core::{ListDatabase, ListKind};
use crate::entities::{FileList, StringList};
use crate::widgets::actions::ActionQueue;
use crate::widgets::file_dialogs::create_image_dialog;

/// List built by the dialog, ready to register
#[derive(Debug, Clone, PartialEq)]
pub enum NewList {
    Strings(StringList),
    Files(FileList),
}

impl NewList {
    pub fn name(&self) -> &str {
        match self {
            NewList::Strings(l) => l.name(),
            NewList::Files(l) => l.name(),
        }
    }

    /// Move the list into the registry.
    pub fn register(self, lists: &mut ListDatabase) {
        match self {
            NewList::Strings(l) => lists.add_string_list(l),
            NewList::Files(l) => lists.add_file_reference_list(l),
        }
    }
}

/// Emitted when the dialog is confirmed with valid input
#[derive(Clone, Debug)]
pub struct CreateListEvent(pub NewList);

#[derive(Debug, Clone)]
pub struct CreateListDialog {
    pub name: String,
    pub kind: ListKind,
    pub text_items: String,
    pub files: Vec<PathBuf>,
    error: Option<String>,
}

impl Default for CreateListDialog {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ListKind::Strings,
            text_items: String::new(),
            files: Vec::new(),
            error: None,
        }
    }
}

impl CreateListDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blank lines, trimmed.
    fn string_items(&self) -> Vec<String> {
        self.text_items
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate input against the registry and build the list.
    pub fn build(&self, lists: &ListDatabase) -> Result<NewList, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("List name is empty".to_string());
        }
        if lists.contains(name) {
            return Err(format!("A list named '{}' already exists", name));
        }
        match self.kind {
            ListKind::Strings => {
                let items = self.string_items();
                if items.is_empty() {
                    return Err("Enter at least one line of text".to_string());
                }
                Ok(NewList::Strings(StringList::with_items(name, items)))
            }
            ListKind::Files => {
                if self.files.is_empty() {
                    return Err("Add at least one file".to_string());
                }
                Ok(NewList::Files(FileList::with_items(name, self.files.clone())))
            }
        }
    }

    /// Draw the dialog. `open` is cleared on cancel or successful create.
    pub fn render(&mut self, ctx: &egui::Context, open: &mut bool, lists: &ListDatabase) -> ActionQueue {
        let mut actions = ActionQueue::new();
        let mut close = false;

        egui::Window::new("Create List")
            .id(egui::Id::new("create_list_window"))
            .collapsible(false)
            .resizable(true)
            .default_size([360.0, 320.0])
            .show(ctx, |ui| {
                egui::Grid::new("create_list_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Name");
                    ui.add(egui::TextEdit::singleline(&mut self.name).id_salt("create_list_name"));
                    ui.end_row();

                    ui.label("Type");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut self.kind, ListKind::Strings, ListKind::Strings.as_str());
                        ui.radio_value(&mut self.kind, ListKind::Files, ListKind::Files.as_str());
                    });
                    ui.end_row();
                });
                ui.separator();

                match self.kind {
                    ListKind::Strings => {
                        ui.label("One item per line:");
                        ui.add(
                            egui::TextEdit::multiline(&mut self.text_items)
                                .id_salt("create_list_items")
                                .desired_rows(8)
                                .desired_width(f32::INFINITY),
                        );
                    }
                    ListKind::Files => {
                        ui.horizontal(|ui| {
                            if ui.button("Add Files...").clicked()
                                && let Some(picked) = create_image_dialog("Add Files").pick_files()
                            {
                                self.files.extend(picked);
                            }
                            if ui
                                .add_enabled(!self.files.is_empty(), egui::Button::new("Clear"))
                                .clicked()
                            {
                                self.files.clear();
                            }
                        });
                        egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                            for path in &self.files {
                                ui.label(path.display().to_string());
                            }
                        });
                    }
                }

                if let Some(err) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                }
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Create").clicked() {
                        match self.build(lists) {
                            Ok(list) => {
                                log::info!("Created list '{}'", list.name());
                                actions.send(CreateListEvent(list));
                                close = true;
                            }
                            Err(e) => self.error = Some(e),
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            *self = Self::default();
            *open = false;
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_string_list_skips_blank_lines() {
        let dialog = CreateListDialog {
            name: " words ".to_string(),
            text_items: "apple\n\n  pear \n".to_string(),
            ..Default::default()
        };
        let list = dialog.build(&ListDatabase::new()).unwrap();
        assert_eq!(
            list,
            NewList::Strings(StringList::with_items(
                "words",
                vec!["apple".to_string(), "pear".to_string()]
            ))
        );
    }

    #[test]
    fn test_build_rejects_empty_and_duplicate_names() {
        let mut lists = ListDatabase::new();
        lists.add_string_list(StringList::with_items("taken", vec!["a".to_string()]));

        let mut dialog = CreateListDialog {
            text_items: "a".to_string(),
            ..Default::default()
        };
        assert!(dialog.build(&lists).is_err());

        dialog.name = "taken".to_string();
        assert!(dialog.build(&lists).is_err());

        dialog.name = "free".to_string();
        assert!(dialog.build(&lists).is_ok());
    }

    #[test]
    fn test_build_file_list_needs_files() {
        let mut dialog = CreateListDialog {
            name: "pics".to_string(),
            kind: ListKind::Files,
            ..Default::default()
        };
        assert!(dialog.build(&ListDatabase::new()).is_err());

        dialog.files.push(PathBuf::from("a.png"));
        let list = dialog.build(&ListDatabase::new()).unwrap();
        let mut lists = ListDatabase::new();
        list.register(&mut lists);
        assert_eq!(lists.file_list("pics").map(|l| l.len()), Some(1));
    }
}

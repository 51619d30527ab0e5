//! Event handling for EditorApp.
//!
//! - Event bus events (handle_events)
//! - Toolbar actions (perform_toolbar_action)
//! - Keyboard input (handle_keyboard_input)

use super::EditorApp;
use crate::core::downcast_event;
use crate::dialogs::create_list::CreateListEvent;
use crate::dialogs::repeat::{RepeatDialog, RepeatForm};
use crate::widgets::file_dialogs::create_image_dialog;
use crate::widgets::sidebar::*;
use crate::widgets::stage_view::SelectElementEvent;
use crate::widgets::switcher::{AddSlideEvent, MenuCommand, SelectSlideEvent, SlideMenuEvent};
use crate::widgets::toolbar::{ToolbarAction, ToolbarActionEvent};

use eframe::egui;
use log::{debug, info, trace, warn};

impl EditorApp {
    /// Handle events from event bus.
    pub fn handle_events(&mut self) {
        let mut deferred_action: Option<ToolbarAction> = None;

        for event in self.event_bus.poll() {
            // === Toolbar ===
            if let Some(e) = downcast_event::<ToolbarActionEvent>(&event) {
                trace!("Toolbar action: {:?}", e.0);
                deferred_action = Some(e.0);
                continue;
            }

            // === Slide switcher ===
            if let Some(e) = downcast_event::<SelectSlideEvent>(&event) {
                self.stage.set_current(e.0);
                self.editor
                    .selection
                    .select_slide(self.stage.current_slide().uuid);
                continue;
            }
            if downcast_event::<AddSlideEvent>(&event).is_some() {
                let index = self.stage.add_blank_slide();
                let uuid = self.stage.current_slide().uuid;
                self.strip.add_slide(uuid);
                self.editor.selection.select_slide(uuid);
                self.status_bar.set_message(format!("Added slide {}", index + 1));
                continue;
            }
            if let Some(e) = downcast_event::<SlideMenuEvent>(&event) {
                self.handle_menu_command(e.index, e.command);
                continue;
            }

            // === Stage view ===
            if let Some(e) = downcast_event::<SelectElementEvent>(&event) {
                match e.element {
                    Some(element) => self.editor.selection.select_element(e.slide, element),
                    None => self.editor.selection.select_slide(e.slide),
                }
                continue;
            }

            // === Sidebar ===
            if let Some(e) = downcast_event::<UpdateElementEvent>(&event) {
                if !self.stage.set_element_content(e.element, e.content.clone()) {
                    warn!("UpdateElementEvent: element {} not found", e.element);
                }
                continue;
            }
            if let Some(e) = downcast_event::<MoveElementEvent>(&event) {
                self.stage.set_element_bounds(e.element, e.bounds);
                continue;
            }
            if let Some(e) = downcast_event::<DeleteElementEvent>(&event) {
                self.delete_element(e.0);
                continue;
            }
            if let Some(e) = downcast_event::<RenameSlideEvent>(&event) {
                self.stage.rename_slide(e.index, e.name.clone());
                continue;
            }
            if let Some(e) = downcast_event::<SetRepeatEvent>(&event) {
                if self.stage.set_repeat(e.index, e.repeat.clone()) {
                    self.status_bar
                        .set_message(format!("Slide {} shown {}", e.index + 1, e.repeat.describe()));
                }
                continue;
            }

            // === Dialogs ===
            if let Some(e) = downcast_event::<CreateListEvent>(&event) {
                let name = e.0.name().to_string();
                e.0.clone().register(&mut self.editor.lists);
                self.stage.mark_dirty();
                self.status_bar.set_message(format!("Created list '{}'", name));
                continue;
            }

            debug!("Unhandled event: {}", (*event).type_name());
        }

        // Dialog-opening actions run after the loop so the bus is not borrowed
        if let Some(action) = deferred_action {
            self.perform_toolbar_action(action);
        }

        self.strip.sync(self.stage.slides());
    }

    fn handle_menu_command(&mut self, index: usize, command: MenuCommand) {
        match command {
            MenuCommand::MakeCopy => {
                if let Some(copy) = self.stage.duplicate_slide(index) {
                    self.strip.sync(self.stage.slides());
                    self.editor
                        .selection
                        .select_slide(self.stage.current_slide().uuid);
                    self.status_bar
                        .set_message(format!("Copied slide {} to {}", index + 1, copy + 1));
                }
            }
            MenuCommand::RepeatTimes | MenuCommand::RepeatUntil => {
                let form = if command == MenuCommand::RepeatTimes {
                    RepeatForm::Times
                } else {
                    RepeatForm::Until
                };
                if let Some(slide) = self.stage.slides().get(index) {
                    self.repeat_dialog = Some(RepeatDialog::new(index, form, &slide.repeat));
                }
            }
        }
    }

    fn delete_element(&mut self, uuid: uuid::Uuid) {
        if self.stage.remove_element(uuid).is_some() {
            self.editor.selection.forget_element(uuid);
            self.status_bar.set_message("Element deleted");
        }
    }

    /// Execute a toolbar action against the stage.
    pub fn perform_toolbar_action(&mut self, action: ToolbarAction) {
        info!("Toolbar: {}", action.label());
        match action {
            ToolbarAction::AddImage => {
                if let Some(path) = create_image_dialog("Add Image").pick_file() {
                    let uuid = self.stage.add_image(path);
                    self.select_new_element(uuid);
                }
            }
            ToolbarAction::AddText => {
                let text = self.settings.default_text.clone();
                let uuid = self.stage.add_text(&text);
                self.select_new_element(uuid);
            }
            ToolbarAction::Export => self.export_experiment_as(),
            ToolbarAction::CreateList => self.show_create_list = true,
            ToolbarAction::AddVideo | ToolbarAction::AddSound | ToolbarAction::AddContainer => {
                warn!("{} is not available", action.label());
            }
        }
    }

    fn select_new_element(&mut self, element: uuid::Uuid) {
        let slide = self.stage.current_slide().uuid;
        self.editor.selection.select_element(slide, element);
    }

    /// Global hotkeys. Text fields keep their keys while focused.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let typing = ctx.wants_keyboard_input();
        let input = ctx.input(|i| i.clone());

        if input.key_pressed(egui::Key::F1) {
            self.show_help = !self.show_help;
        }
        if input.key_pressed(egui::Key::F12) {
            self.show_settings = !self.show_settings;
        }

        if input.modifiers.command {
            if input.key_pressed(egui::Key::S) {
                self.quick_save();
            } else if input.key_pressed(egui::Key::O) {
                self.show_open_experiment_dialog();
            } else if input.key_pressed(egui::Key::N) {
                self.new_experiment();
            } else if input.key_pressed(egui::Key::T) {
                self.event_bus.emit(ToolbarActionEvent(ToolbarAction::AddText));
            } else if input.key_pressed(egui::Key::L) {
                self.event_bus
                    .emit(ToolbarActionEvent(ToolbarAction::CreateList));
            }
            return;
        }

        if typing {
            return;
        }

        if input.key_pressed(egui::Key::Delete)
            && let Some(element) = self.editor.selection.element()
        {
            self.event_bus.emit(DeleteElementEvent(element));
        }

        let current = self.stage.current_index();
        if input.key_pressed(egui::Key::PageDown) {
            self.event_bus.emit(SelectSlideEvent(current + 1));
        }
        if input.key_pressed(egui::Key::PageUp) && current > 0 {
            self.event_bus.emit(SelectSlideEvent(current - 1));
        }

        // ESC: dialogs first, then help
        if input.key_pressed(egui::Key::Escape) {
            if self.repeat_dialog.is_some() {
                self.repeat_dialog = None;
            } else if self.show_create_list {
                self.show_create_list = false;
            } else if self.show_settings {
                self.show_settings = false;
            } else {
                self.show_help = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Selection;
    use crate::dialogs::create_list::NewList;
    use crate::entities::{ElementContent, Repeat, StringList};
    use crate::widgets::switcher::StripItem;

    #[test]
    fn test_add_slide_keeps_single_trailing_add_control() {
        let mut app = EditorApp::default();
        for _ in 0..4 {
            app.event_bus.emit(AddSlideEvent);
            app.handle_events();
        }
        assert_eq!(app.stage.slides().len(), 5);
        assert_eq!(app.stage.current_index(), 4);
        let items: Vec<_> = app.strip.items().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(
            items.iter().filter(|i| matches!(i, StripItem::AddSlide)).count(),
            1
        );
        assert!(matches!(items.last(), Some(StripItem::AddSlide)));
    }

    #[test]
    fn test_add_text_selects_new_element() {
        let mut app = EditorApp::default();
        app.perform_toolbar_action(ToolbarAction::AddText);
        let element = app.editor.selection.element().unwrap();
        let (slide, found) = app.stage.find_element(element).unwrap();
        assert_eq!(slide, 0);
        assert!(matches!(found.content, ElementContent::Text { .. }));
        assert!(app.stage.is_dirty());
    }

    #[test]
    fn test_delete_clears_element_selection() {
        let mut app = EditorApp::default();
        app.perform_toolbar_action(ToolbarAction::AddText);
        let element = app.editor.selection.element().unwrap();
        app.event_bus.emit(DeleteElementEvent(element));
        app.handle_events();
        assert!(app.stage.find_element(element).is_none());
        assert_eq!(
            app.editor.selection.current(),
            Selection::Slide(app.stage.current_slide().uuid)
        );
    }

    #[test]
    fn test_make_copy_inserts_after_source() {
        let mut app = EditorApp::default();
        app.perform_toolbar_action(ToolbarAction::AddText);
        app.event_bus.emit(SlideMenuEvent {
            index: 0,
            command: MenuCommand::MakeCopy,
        });
        app.handle_events();
        assert_eq!(app.stage.slides().len(), 2);
        assert_eq!(app.strip.len(), 2);
        assert_eq!(app.stage.current_index(), 1);
        assert_eq!(app.stage.slides()[1].elements.len(), 1);
    }

    #[test]
    fn test_repeat_menu_opens_dialog_and_applies() {
        let mut app = EditorApp::default();
        app.event_bus.emit(SlideMenuEvent {
            index: 0,
            command: MenuCommand::RepeatTimes,
        });
        app.handle_events();
        let dialog = app.repeat_dialog.as_ref().unwrap();
        assert_eq!(dialog.form, RepeatForm::Times);

        app.event_bus.emit(SetRepeatEvent {
            index: 0,
            repeat: Repeat::Times(3),
        });
        app.handle_events();
        assert_eq!(app.stage.slides()[0].repeat, Repeat::Times(3));
    }

    #[test]
    fn test_create_list_event_registers() {
        let mut app = EditorApp::default();
        let list = StringList::with_items("words", vec!["x".to_string()]);
        app.event_bus.emit(CreateListEvent(NewList::Strings(list)));
        app.handle_events();
        assert!(app.editor.lists.string_list("words").is_some());
        assert!(app.stage.is_dirty());
    }

    #[test]
    fn test_disabled_actions_do_nothing() {
        let mut app = EditorApp::default();
        app.perform_toolbar_action(ToolbarAction::AddVideo);
        assert!(app.stage.current_slide().elements.is_empty());
        assert!(!app.stage.is_dirty());
    }
}

//! Repeat dialog opened from a slide thumbnail's menu.

use eframe::egui;

use crate::entities::Repeat;
use crate::widgets::actions::ActionQueue;
use crate::widgets::sidebar::SetRepeatEvent;

/// Keys offered for "Repeat Until"
pub const UNTIL_KEYS: &[egui::Key] = &[
    egui::Key::Space,
    egui::Key::Enter,
    egui::Key::ArrowRight,
    egui::Key::Y,
    egui::Key::N,
];

/// Repeat mode ending on `key`, stored under the key's egui name.
pub fn until_repeat(key: egui::Key) -> Repeat {
    Repeat::UntilKey(key.name().to_string())
}

/// Which repeat form the dialog edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatForm {
    Times,
    Until,
}

#[derive(Debug, Clone)]
pub struct RepeatDialog {
    pub slide: usize,
    pub form: RepeatForm,
    pub times: u32,
    pub key: egui::Key,
}

impl RepeatDialog {
    /// Dialog for `slide`, seeded from its current repeat mode.
    pub fn new(slide: usize, form: RepeatForm, current: &Repeat) -> Self {
        let times = match current {
            Repeat::Times(n) => *n,
            _ => 2,
        };
        let key = current.until_key().unwrap_or(egui::Key::Space);
        Self {
            slide,
            form,
            times,
            key,
        }
    }

    pub fn repeat(&self) -> Repeat {
        match self.form {
            RepeatForm::Times => Repeat::Times(self.times.max(1)),
            RepeatForm::Until => until_repeat(self.key),
        }
    }

    /// Draw the dialog. Returns the queue and whether it is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> (ActionQueue, bool) {
        let mut actions = ActionQueue::new();
        let mut keep_open = true;
        let title = match self.form {
            RepeatForm::Times => "Repeat x times",
            RepeatForm::Until => "Repeat Until",
        };

        egui::Window::new(title)
            .id(egui::Id::new("repeat_window"))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                match self.form {
                    RepeatForm::Times => {
                        ui.horizontal(|ui| {
                            ui.label("Show slide");
                            ui.add(egui::DragValue::new(&mut self.times).range(1..=1000));
                            ui.label("times");
                        });
                    }
                    RepeatForm::Until => {
                        ui.horizontal(|ui| {
                            ui.label("Repeat until");
                            egui::ComboBox::from_id_salt("repeat_until_key")
                                .selected_text(self.key.name())
                                .show_ui(ui, |ui| {
                                    for key in UNTIL_KEYS {
                                        ui.selectable_value(&mut self.key, *key, key.name());
                                    }
                                });
                            ui.label("is pressed");
                        });
                    }
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        actions.send(SetRepeatEvent {
                            index: self.slide,
                            repeat: self.repeat(),
                        });
                        keep_open = false;
                    }
                    if ui.button("Cancel").clicked() {
                        keep_open = false;
                    }
                });
            });

        (actions, keep_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_current_repeat() {
        let d = RepeatDialog::new(0, RepeatForm::Times, &Repeat::Times(5));
        assert_eq!(d.repeat(), Repeat::Times(5));

        let d = RepeatDialog::new(0, RepeatForm::Until, &Repeat::UntilKey("Enter".to_string()));
        assert_eq!(d.key, egui::Key::Enter);
        assert_eq!(d.repeat(), Repeat::UntilKey("Enter".to_string()));
    }

    #[test]
    fn test_times_never_zero() {
        let mut d = RepeatDialog::new(1, RepeatForm::Times, &Repeat::Once);
        d.times = 0;
        assert_eq!(d.repeat(), Repeat::Times(1));
    }
}

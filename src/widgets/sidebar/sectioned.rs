//! Sectioned property panel: element, slide and list properties, each
//! section headed by a `SectionDivider`.
//!
//! Edits are made on clones and sent as events; the app applies them to
//! the stage after the frame is rendered.

use eframe::egui;

use super::sidebar_events::*;
use crate::core::{EditorContext, ListKind, Stage};
use crate::dialogs::repeat::{UNTIL_KEYS, until_repeat};
use crate::entities::{Bounds, ElementContent, Repeat};
use crate::widgets::actions::ActionQueue;
use crate::widgets::file_dialogs::create_image_dialog;
use crate::widgets::section_divider::SectionDivider;
use crate::widgets::toolbar::{ToolbarAction, ToolbarActionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Element,
    Slide,
    Lists,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Element => "Element",
            Section::Slide => "Slide",
            Section::Lists => "Lists",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionedPanel {
    pub sections: Vec<Section>,
}

impl Default for SectionedPanel {
    fn default() -> Self {
        Self {
            sections: vec![Section::Element, Section::Slide, Section::Lists],
        }
    }
}

impl SectionedPanel {
    pub fn render(&self, ui: &mut egui::Ui, stage: &Stage, ctx: &EditorContext) -> ActionQueue {
        let mut actions = ActionQueue::new();
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for section in &self.sections {
                    ui.add(SectionDivider::new(section.title()));
                    ui.add_space(4.0);
                    match section {
                        Section::Element => element_section(ui, stage, ctx, &mut actions),
                        Section::Slide => slide_section(ui, stage, &mut actions),
                        Section::Lists => lists_section(ui, ctx, &mut actions),
                    }
                    ui.add_space(8.0);
                }
            });
        actions
    }
}

fn element_section(ui: &mut egui::Ui, stage: &Stage, ctx: &EditorContext, actions: &mut ActionQueue) {
    let Some((_, element)) = ctx
        .selection
        .element()
        .and_then(|uuid| stage.find_element(uuid))
    else {
        ui.weak("No element selected");
        return;
    };

    ui.label(format!("Type: {}", element.content.kind_name()));

    let mut content = element.content.clone();
    let mut changed = false;
    match &mut content {
        ElementContent::Text { text, size, list } => {
            changed |= ui
                .add(
                    egui::TextEdit::multiline(text)
                        .id_salt("element_text")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                )
                .changed();
            ui.horizontal(|ui| {
                ui.label("Size");
                changed |= ui
                    .add(egui::DragValue::new(size).range(4.0..=200.0).speed(0.5))
                    .changed();
            });
            changed |= list_combo(ui, "text_list", list, ctx, ListKind::Strings);
        }
        ElementContent::Image { path, list } => {
            ui.horizontal(|ui| {
                ui.label(
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "(none)".to_string()),
                )
                .on_hover_text(path.display().to_string());
                if ui.button("Browse...").clicked()
                    && let Some(picked) = create_image_dialog("Choose Image").pick_file()
                {
                    *path = picked;
                    changed = true;
                }
            });
            changed |= list_combo(ui, "image_list", list, ctx, ListKind::Files);
        }
    }
    if changed {
        actions.send(UpdateElementEvent {
            element: element.uuid,
            content,
        });
    }

    let mut bounds = element.bounds;
    if bounds_editor(ui, &mut bounds) {
        actions.send(MoveElementEvent {
            element: element.uuid,
            bounds,
        });
    }

    if ui.button("Delete Element").clicked() {
        actions.send(DeleteElementEvent(element.uuid));
    }
}

/// ComboBox choosing an optional list of `kind`. Returns true on change.
fn list_combo(
    ui: &mut egui::Ui,
    id: &str,
    list: &mut Option<String>,
    ctx: &EditorContext,
    kind: ListKind,
) -> bool {
    let before = list.clone();
    ui.horizontal(|ui| {
        ui.label("From list");
        egui::ComboBox::from_id_salt(id)
            .selected_text(list.as_deref().unwrap_or("(none)"))
            .show_ui(ui, |ui| {
                ui.selectable_value(list, None, "(none)");
                for l in ctx.lists.iter().filter(|l| l.kind() == kind) {
                    ui.selectable_value(list, Some(l.name().to_string()), l.name());
                }
            });
    });
    *list != before
}

fn bounds_editor(ui: &mut egui::Ui, bounds: &mut Bounds) -> bool {
    let mut changed = false;
    egui::Grid::new("element_bounds").num_columns(4).show(ui, |ui| {
        for (label, value) in [("X", &mut bounds.x), ("Y", &mut bounds.y)] {
            ui.label(label);
            changed |= ui
                .add(egui::DragValue::new(value).range(0.0..=1.0).speed(0.005))
                .changed();
        }
        ui.end_row();
        for (label, value) in [("W", &mut bounds.w), ("H", &mut bounds.h)] {
            ui.label(label);
            changed |= ui
                .add(egui::DragValue::new(value).range(0.01..=1.0).speed(0.005))
                .changed();
        }
        ui.end_row();
    });
    changed
}

/// Editable repeat mode labels
const REPEAT_MODES: [&str; 3] = ["Once", "Times", "Until key"];

fn repeat_mode_index(repeat: &Repeat) -> usize {
    match repeat {
        Repeat::Once => 0,
        Repeat::Times(_) => 1,
        Repeat::UntilKey(_) => 2,
    }
}

/// Fresh repeat mode for a mode combo index.
fn repeat_for_mode(mode: usize) -> Repeat {
    match mode {
        0 => Repeat::Once,
        1 => Repeat::Times(2),
        _ => until_repeat(egui::Key::Space),
    }
}

fn slide_section(ui: &mut egui::Ui, stage: &Stage, actions: &mut ActionQueue) {
    let index = stage.current_index();
    let slide = stage.current_slide();

    let mut name = slide.name.clone();
    ui.horizontal(|ui| {
        ui.label("Name");
        if ui
            .add(egui::TextEdit::singleline(&mut name).id_salt("slide_name"))
            .changed()
        {
            actions.send(RenameSlideEvent { index, name: name.clone() });
        }
    });

    let mut repeat = slide.repeat.clone();
    let mut mode = repeat_mode_index(&repeat);
    ui.horizontal(|ui| {
        ui.label("Repeat");
        egui::ComboBox::from_id_salt("slide_repeat")
            .selected_text(REPEAT_MODES[mode])
            .show_ui(ui, |ui| {
                for (i, label) in REPEAT_MODES.iter().enumerate() {
                    ui.selectable_value(&mut mode, i, *label);
                }
            });
    });
    if mode != repeat_mode_index(&repeat) {
        repeat = repeat_for_mode(mode);
    }
    match &mut repeat {
        Repeat::Once => {}
        Repeat::Times(n) => {
            ui.horizontal(|ui| {
                ui.label("Times");
                ui.add(egui::DragValue::new(n).range(1..=1000));
            });
        }
        Repeat::UntilKey(name) => {
            let current = Repeat::UntilKey(name.clone()).until_key();
            let mut key = current;
            ui.horizontal(|ui| {
                ui.label("Key");
                egui::ComboBox::from_id_salt("slide_repeat_key")
                    .selected_text(key.map_or("(none)", |k| k.name()))
                    .show_ui(ui, |ui| {
                        for k in UNTIL_KEYS {
                            ui.selectable_value(&mut key, Some(*k), k.name());
                        }
                    });
            });
            if let Some(k) = key
                && key != current
            {
                *name = k.name().to_string();
            }
        }
    }
    if repeat != slide.repeat {
        actions.send(SetRepeatEvent { index, repeat });
    }

    ui.weak(format!("{} elements", slide.elements.len()));
}

fn lists_section(ui: &mut egui::Ui, ctx: &EditorContext, actions: &mut ActionQueue) {
    if ctx.lists.is_empty() {
        ui.weak("No lists yet");
    } else {
        egui::Grid::new("lists_grid").striped(true).num_columns(3).show(ui, |ui| {
            for list in ctx.lists.iter() {
                ui.label(list.name());
                ui.weak(list.kind().as_str());
                ui.label(format!("{} items", list.len()));
                ui.end_row();
            }
        });
    }
    if ui.button("Create List...").clicked() {
        actions.send(ToolbarActionEvent(ToolbarAction::CreateList));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Experiment, Slide};
    use crate::player::{PlayerController, Step};

    #[test]
    fn test_repeat_for_mode_matches_index() {
        for mode in 0..REPEAT_MODES.len() {
            assert_eq!(repeat_mode_index(&repeat_for_mode(mode)), mode);
        }
    }

    #[test]
    fn test_until_choices_can_be_left() {
        let mut choices = vec![repeat_for_mode(2)];
        choices.extend(UNTIL_KEYS.iter().copied().map(until_repeat));

        for repeat in choices {
            let key = repeat.until_key().expect("sidebar stores a real key");
            let mut exp = Experiment::new("t");
            exp.slides.clear();
            let mut slide = Slide::new("Wait");
            slide.repeat = repeat.clone();
            exp.slides.push(slide);
            exp.slides.push(Slide::new("After"));

            let mut c = PlayerController::new(exp);
            assert_eq!(c.advance(None), Step::Repeat);
            assert_eq!(c.advance(Some(key)), Step::Next, "{:?}", repeat);
        }
    }
}

//! Main editor loop - eframe::App implementation.
//!
//! Border layout: toolbar on top, status bar and slide switcher at the
//! bottom, fixed-width sidebar on the right, stage view in the center.

use eframe::egui;
use log::trace;

use crate::app::EditorApp;
use crate::dialogs::prefs::render_settings_window;
use crate::help::show_help_area;
use crate::widgets::actions::ActionQueue;
use crate::widgets::{switcher, toolbar};

impl EditorApp {
    fn dispatch(&self, actions: ActionQueue) {
        for event in actions.events {
            self.event_bus.emit_boxed(event);
        }
    }

    fn apply_style(&self, ctx: &egui::Context) {
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut style = (*ctx.style()).clone();
        for (_, font_id) in style.text_styles.iter_mut() {
            font_id.size = self.settings.font_size;
        }
        ctx.set_style(style);
    }
}

impl eframe::App for EditorApp {
    /// Flow:
    /// 1. Apply theme and font settings
    /// 2. Render regions (toolbar, status, switcher, sidebar, stage)
    /// 3. Render dialogs and help
    /// 4. Handle keyboard input
    /// 5. Apply queued events to the stage
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_style(ctx);

        // Toolbar (top, height of its tallest item)
        let actions = egui::TopBottomPanel::top("toolbar")
            .exact_height(self.toolbar.preferred_height())
            .resizable(false)
            .show(ctx, |ui| {
                toolbar::render(ui, &self.toolbar, &mut self.textures, self.settings.show_tooltips)
            })
            .inner;
        self.dispatch(actions);

        self.status_bar
            .render(ctx, &self.stage, &self.editor, self.error_msg.as_deref());

        // Slide switcher (bottom, fixed height)
        let names: Vec<&str> = self
            .stage
            .slides()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        let actions = egui::TopBottomPanel::bottom("slide_switcher")
            .exact_height(switcher::SLIDE_SWITCHER_HEIGHT)
            .resizable(false)
            .show(ctx, |ui| {
                switcher::render(
                    ui,
                    &mut self.strip,
                    self.stage.current_index(),
                    &names,
                    &mut self.textures,
                    self.settings.show_tooltips,
                )
            })
            .inner;
        self.dispatch(actions);

        // Sidebar (right, fixed width)
        let actions = egui::SidePanel::right("sidebar")
            .exact_width(self.sidebar.width)
            .resizable(false)
            .show(ctx, |ui| {
                self.sidebar
                    .render(ui, &self.stage, &self.editor, &mut self.textures)
            })
            .inner;
        self.dispatch(actions);

        // Stage (center)
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.stage_view
                    .render(ui, &self.stage, &self.editor, &mut self.textures)
            })
            .inner;
        self.dispatch(actions);

        // Dialogs
        if self.show_settings {
            render_settings_window(ctx, &mut self.show_settings, &mut self.settings);
        }

        if self.show_create_list {
            let actions =
                self.create_list
                    .render(ctx, &mut self.show_create_list, &self.editor.lists);
            self.dispatch(actions);
        }

        if let Some(dialog) = &mut self.repeat_dialog {
            let (actions, keep_open) = dialog.render(ctx);
            self.dispatch(actions);
            if !keep_open {
                self.repeat_dialog = None;
            }
        }

        if self.show_help {
            show_help_area(ctx, &*self);
        }

        self.handle_keyboard_input(ctx);

        if self.event_bus.queue_len() > 0 {
            self.handle_events();
            ctx.request_repaint();
        }
    }

    /// Persist settings (the experiment is saved only on export).
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.show_help = self.show_help;
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            trace!(
                "Settings saved: dark={}, font={}, last={:?}",
                self.settings.dark_mode,
                self.settings.font_size,
                self.settings.last_experiment
            );
        }
    }
}

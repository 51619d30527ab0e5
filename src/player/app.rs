//! Player window: full-surface slide presentation.

use eframe::egui;
use log::{debug, info};

use super::controller::PlayerController;
use crate::help::{HelpEntry, HelpProvider, PLAYER_HELP, show_help_area};
use crate::widgets::slide_painter::{SlidePaint, fit_slide_rect};
use crate::widgets::textures::TextureCache;

/// Keys that always advance
const ADVANCE_KEYS: [egui::Key; 3] = [egui::Key::Space, egui::Key::Enter, egui::Key::ArrowRight];

pub struct PlayerApp {
    controller: PlayerController,
    textures: TextureCache,
    show_help: bool,
}

impl PlayerApp {
    pub fn new(controller: PlayerController) -> Self {
        Self {
            controller,
            textures: TextureCache::new(),
            show_help: false,
        }
    }

    /// Key of the current slide's "repeat until", if any.
    fn until_key(&self) -> Option<egui::Key> {
        self.controller.current_slide()?.repeat.until_key()
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let until = self.until_key();
        let (pressed, clicked, escape, f1) = ctx.input(|i| {
            let pressed: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } if ADVANCE_KEYS.contains(key) || Some(*key) == until => Some(*key),
                    _ => None,
                })
                .collect();
            (
                pressed,
                i.pointer.primary_clicked(),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F1),
            )
        });

        if escape {
            info!("Escape pressed, closing player");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if f1 {
            self.show_help = !self.show_help;
        }

        // One advance per frame keeps a burst of keys from skipping slides
        let step = if let Some(key) = pressed.first() {
            Some(self.controller.advance(Some(*key)))
        } else if clicked {
            Some(self.controller.advance(None))
        } else {
            None
        };
        if let Some(step) = step {
            debug!(
                "Advance: {:?} (slide {}, iteration {})",
                step,
                self.controller.slide_index(),
                self.controller.iteration()
            );
        }
    }
}

fn render_end_screen(ui: &mut egui::Ui) {
    let rect = ui.max_rect();
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "End of experiment. Press Esc to exit.",
        egui::FontId::proportional(28.0),
        egui::Color32::WHITE,
    );
}

impl HelpProvider for PlayerApp {
    fn help_title(&self) -> &'static str {
        "Player"
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        PLAYER_HELP
    }
}

impl eframe::App for PlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| match self.controller.current_slide() {
                Some(slide) => {
                    let slide_rect = fit_slide_rect(ui.max_rect());
                    SlidePaint {
                        slide,
                        lists: &self.controller.experiment().lists,
                        iteration: self.controller.iteration(),
                        selected: None,
                        outlines: false,
                    }
                    .paint(ui.ctx(), ui.painter(), slide_rect, &mut self.textures);
                }
                None => render_end_screen(ui),
            });

        if self.show_help {
            show_help_area(ctx, &*self);
        }
    }
}

//! Preview panel: scaled rendering of the current slide.

use eframe::egui;

use crate::core::{EditorContext, Stage};
use crate::widgets::slide_painter::{SlidePaint, fit_slide_rect};
use crate::widgets::textures::TextureCache;

/// Default preview height
pub const PREVIEW_HEIGHT: f32 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPanel {
    pub preferred_height: f32,
}

impl Default for PreviewPanel {
    fn default() -> Self {
        Self {
            preferred_height: PREVIEW_HEIGHT,
        }
    }
}

impl PreviewPanel {
    /// Draw into `ui`, width clamped to `max_width`.
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        max_width: f32,
        stage: &Stage,
        ctx: &EditorContext,
        textures: &mut TextureCache,
    ) {
        let width = ui.available_width().min(max_width);
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(width, self.preferred_height),
            egui::Sense::hover(),
        );
        ui.painter()
            .rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

        let slide = stage.current_slide();
        let paint = SlidePaint {
            slide,
            lists: &ctx.lists,
            iteration: 0,
            selected: ctx.selection.element(),
            outlines: true,
        };
        let painter = ui.painter_at(rect);
        paint.paint(ui.ctx(), &painter, fit_slide_rect(rect.shrink(6.0)), textures);
    }
}

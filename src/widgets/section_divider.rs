//! Captioned section divider with a vertical gradient background.
//!
//! Fixed 30px height, stretches to the available width. The caption is
//! drawn 30px from the left edge and vertically centered on its line box.

use eframe::egui;
use egui::{Color32, FontFamily, FontId, Pos2, Rect, Response, Sense, Ui, Widget};

/// Preferred and maximum height
pub const PREFERRED_HEIGHT: f32 = 30.0;

/// Caption offset from the left edge
pub const OFFSET: f32 = 30.0;

/// Caption font size
pub const FONT_SIZE: f32 = 14.0;

/// Scale RGB by 0.7 (truncating), alpha untouched.
pub fn darker(c: Color32) -> Color32 {
    let scale = |v: u8| (v as u16 * 7 / 10) as u8;
    Color32::from_rgba_premultiplied(scale(c.r()), scale(c.g()), scale(c.b()), c.a())
}

/// Bottom color of the gradient for a given background.
pub fn gradient_end(background: Color32) -> Color32 {
    darker(darker(background))
}

/// Vertical font metrics of the caption line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    /// Split a line box height into ascent/descent.
    ///
    /// egui does not expose the split; the caption position only depends
    /// on the sum, so a fixed ratio is enough.
    pub fn from_line_height(height: f32) -> Self {
        Self {
            ascent: height * 0.8,
            descent: height * 0.2,
        }
    }

    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Baseline y of the caption inside a widget of height `h`.
pub fn baseline_y(h: f32, metrics: LineMetrics) -> f32 {
    (h + metrics.ascent + metrics.descent) / 2.0 - metrics.descent
}

pub struct SectionDivider<'a> {
    text: &'a str,
}

impl<'a> SectionDivider<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Fill `rect` with a two-stop vertical gradient.
    fn paint_gradient(painter: &egui::Painter, rect: Rect, top: Color32, bottom: Color32) {
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), top);
        mesh.colored_vertex(rect.right_top(), top);
        mesh.colored_vertex(rect.right_bottom(), bottom);
        mesh.colored_vertex(rect.left_bottom(), bottom);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(egui::Shape::mesh(mesh));
    }
}

impl Widget for SectionDivider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = egui::vec2(ui.available_width(), PREFERRED_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let background = ui.visuals().panel_fill;
            Self::paint_gradient(&painter, rect, background, gradient_end(background));

            let font = FontId::new(FONT_SIZE, FontFamily::Proportional);
            let color = ui.visuals().strong_text_color();
            let galley = painter.layout_no_wrap(self.text.to_string(), font, color);
            let metrics = LineMetrics::from_line_height(galley.size().y);
            let baseline = baseline_y(rect.height(), metrics);
            let top = rect.top() + baseline - metrics.ascent;
            painter.galley(Pos2::new(rect.left() + OFFSET, top), galley, color);
        }

        response
    }
}

//! Slide rendering shared by the editor stage, the sidebar preview and the
//! player.

use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};
use std::path::Path;
use uuid::Uuid;

use crate::core::list_db::ListDatabase;
use crate::entities::{Bounds, ElementContent, Slide, SlideElement};
use crate::widgets::textures::TextureCache;

/// Reference slide size; text sizes are expressed at this height
pub const SLIDE_SIZE: Vec2 = Vec2::new(1400.0, 900.0);

/// Slide background
pub const SLIDE_BG: Color32 = Color32::WHITE;

/// Largest rect with slide aspect ratio centered in `available`.
pub fn fit_slide_rect(available: Rect) -> Rect {
    let aspect = SLIDE_SIZE.x / SLIDE_SIZE.y;
    let mut size = available.size();
    if size.x / size.y.max(1.0) > aspect {
        size.x = size.y * aspect;
    } else {
        size.y = size.x / aspect;
    }
    Rect::from_center_size(available.center(), size)
}

/// Screen rect of normalized bounds inside a slide rect.
pub fn element_rect(slide_rect: Rect, b: &Bounds) -> Rect {
    Rect::from_min_size(
        slide_rect.min + Vec2::new(b.x * slide_rect.width(), b.y * slide_rect.height()),
        Vec2::new(b.w * slide_rect.width(), b.h * slide_rect.height()),
    )
}

/// Normalized slide coordinates of a screen position.
pub fn to_slide_coords(slide_rect: Rect, pos: Pos2) -> (f32, f32) {
    (
        (pos.x - slide_rect.left()) / slide_rect.width(),
        (pos.y - slide_rect.top()) / slide_rect.height(),
    )
}

/// Text shown for `content` on the given repetition; list items win over
/// the static text when the list exists and is non-empty.
pub fn resolve_text<'a>(
    content: &'a ElementContent,
    lists: &'a ListDatabase,
    iteration: usize,
) -> Option<&'a str> {
    let ElementContent::Text { text, list, .. } = content else {
        return None;
    };
    let from_list = list
        .as_deref()
        .and_then(|name| lists.string_list(name))
        .and_then(|l| l.cycle(iteration));
    Some(from_list.unwrap_or(text).as_str())
}

/// Image file shown for `content` on the given repetition.
pub fn resolve_image<'a>(
    content: &'a ElementContent,
    lists: &'a ListDatabase,
    iteration: usize,
) -> Option<&'a Path> {
    let ElementContent::Image { path, list } = content else {
        return None;
    };
    let from_list = list
        .as_deref()
        .and_then(|name| lists.file_list(name))
        .and_then(|l| l.cycle(iteration));
    Some(from_list.unwrap_or(path).as_path())
}

/// Everything needed to draw one slide.
pub struct SlidePaint<'a> {
    pub slide: &'a Slide,
    pub lists: &'a ListDatabase,
    pub iteration: usize,
    pub selected: Option<Uuid>,
    /// Outline every element (editor) or only draw content (player)
    pub outlines: bool,
}

impl SlidePaint<'_> {
    pub fn paint(
        &self,
        ctx: &egui::Context,
        painter: &Painter,
        slide_rect: Rect,
        textures: &mut TextureCache,
    ) {
        painter.rect_filled(slide_rect, 0.0, SLIDE_BG);
        let scale = slide_rect.height() / SLIDE_SIZE.y;

        for element in &self.slide.elements {
            self.paint_element(ctx, painter, slide_rect, scale, element, textures);
        }
    }

    fn paint_element(
        &self,
        ctx: &egui::Context,
        painter: &Painter,
        slide_rect: Rect,
        scale: f32,
        element: &SlideElement,
        textures: &mut TextureCache,
    ) {
        let rect = element_rect(slide_rect, &element.bounds);
        match &element.content {
            ElementContent::Text { size, .. } => {
                let text = resolve_text(&element.content, self.lists, self.iteration)
                    .unwrap_or_default();
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional((size * scale).max(4.0)),
                    Color32::BLACK,
                );
            }
            ElementContent::Image { .. } => {
                let texture = resolve_image(&element.content, self.lists, self.iteration)
                    .and_then(|path| textures.file(ctx, path));
                match texture {
                    Some(tex) => {
                        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                        painter.image(tex.id(), rect, uv, Color32::WHITE);
                    }
                    None => {
                        painter.rect_filled(rect, 0.0, Color32::from_gray(220));
                        painter.text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            "missing image",
                            FontId::proportional((14.0 * scale).max(8.0)),
                            Color32::DARK_GRAY,
                        );
                    }
                }
            }
        }

        if self.outlines {
            let selected = self.selected == Some(element.uuid);
            let stroke = if selected {
                Stroke::new(2.0, Color32::from_rgb(30, 120, 255))
            } else {
                Stroke::new(1.0, Color32::from_gray(180))
            };
            painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Inside);
        }
    }
}

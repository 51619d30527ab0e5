use eframe::egui;
use egui::{Color32, Sense, Stroke};
use std::path::Path;

use super::toolbar::{TOOLBAR_ICON_SIZE, Toolbar, ToolbarButton, ToolbarItem};
use super::toolbar_events::ToolbarActionEvent;
use crate::widgets::actions::ActionQueue;
use crate::widgets::textures::TextureCache;

/// Render the toolbar into a top panel `ui`. Hover text only when `tooltips`.
pub fn render(
    ui: &mut egui::Ui,
    toolbar: &Toolbar,
    textures: &mut TextureCache,
    tooltips: bool,
) -> ActionQueue {
    let mut actions = ActionQueue::new();
    let height = toolbar.preferred_height();

    let rect = ui.available_rect_before_wrap();
    actions.hovered = ui.rect_contains_pointer(rect);

    ui.horizontal(|ui| {
        ui.set_height(height);
        for item in &toolbar.items {
            match item {
                ToolbarItem::Button(button) => {
                    if render_button(ui, button, textures, tooltips) {
                        actions.send(ToolbarActionEvent(button.action));
                    }
                }
                ToolbarItem::Separator(size) => {
                    let (sep_rect, _) = ui.allocate_exact_size(*size, Sense::hover());
                    ui.painter()
                        .rect_filled(sep_rect, 0.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
                }
            }
        }
    });

    if toolbar.beveled {
        paint_bevel(ui, ui.min_rect());
    }

    actions
}

/// Returns true when the button was clicked.
fn render_button(
    ui: &mut egui::Ui,
    button: &ToolbarButton,
    textures: &mut TextureCache,
    tooltips: bool,
) -> bool {
    let label = button.action.label();
    let icon = textures.icon(ui.ctx(), Path::new(button.action.icon()));

    let widget = match &icon {
        Some(tex) => egui::Button::image_and_text(
            egui::Image::new(tex).fit_to_exact_size(egui::vec2(TOOLBAR_ICON_SIZE, TOOLBAR_ICON_SIZE)),
            label,
        ),
        None => egui::Button::new(label),
    }
    .min_size(button.size());

    let mut response = ui.add_enabled(button.enabled, widget);
    if let Some(text) = hover_text(button, tooltips) {
        response = if button.enabled {
            response.on_hover_text(text)
        } else {
            response.on_disabled_hover_text(text)
        };
    }
    response.clicked()
}

fn hover_text(button: &ToolbarButton, tooltips: bool) -> Option<String> {
    if !tooltips {
        return None;
    }
    let label = button.action.label();
    Some(if button.enabled {
        label.to_string()
    } else {
        format!("{} (not available yet)", label)
    })
}

/// Raised bevel: light top/left edge, dark bottom/right edge.
fn paint_bevel(ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter();
    let light = Stroke::new(1.0, Color32::from_white_alpha(90));
    let dark = Stroke::new(1.0, Color32::from_black_alpha(140));
    painter.line_segment([rect.left_top(), rect.right_top()], light);
    painter.line_segment([rect.left_top(), rect.left_bottom()], light);
    painter.line_segment([rect.left_bottom(), rect.right_bottom()], dark);
    painter.line_segment([rect.right_top(), rect.right_bottom()], dark);
}

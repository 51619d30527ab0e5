use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::strip::{
    MENU_TOGGLE_SIZE, MenuCommand, SLIDE_THUMBNAIL_SIZE, SlideStrip, SlideThumbnail, StripItem,
};
use super::switcher_events::{AddSlideEvent, SelectSlideEvent, SlideMenuEvent};
use crate::widgets::actions::ActionQueue;
use crate::widgets::textures::{TextureCache, rgb_to_color_image};

/// Render the slide strip; `current` is highlighted. Items wrap onto new
/// rows when the panel is too narrow; rows scroll vertically.
pub fn render(
    ui: &mut egui::Ui,
    strip: &mut SlideStrip,
    current: usize,
    names: &[&str],
    textures: &mut TextureCache,
    tooltips: bool,
) -> ActionQueue {
    let mut actions = ActionQueue::new();
    actions.hovered = ui.rect_contains_pointer(ui.available_rect_before_wrap());

    let mut toggled: Option<usize> = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for item in strip.items() {
                    match item {
                        StripItem::Thumbnail(index, thumb) => {
                            let name = names.get(index).copied().unwrap_or("");
                            render_thumbnail(
                                ui,
                                index,
                                thumb,
                                index == current,
                                name,
                                textures,
                                &mut actions,
                                &mut toggled,
                            );
                        }
                        StripItem::AddSlide => {
                            if render_add_slide(ui, tooltips) {
                                actions.send(AddSlideEvent);
                            }
                        }
                    }
                }
            });
        });

    if let Some(index) = toggled {
        strip.toggle_menu(index);
    }
    actions
}

#[allow(clippy::too_many_arguments)]
fn render_thumbnail(
    ui: &mut egui::Ui,
    index: usize,
    thumb: &SlideThumbnail,
    is_current: bool,
    name: &str,
    textures: &mut TextureCache,
    actions: &mut ActionQueue,
    toggled: &mut Option<usize>,
) {
    let (rect, response) = ui.allocate_exact_size(SLIDE_THUMBNAIL_SIZE, Sense::click());

    // Background layer
    let background = textures.generated(ui.ctx(), "thumbnail_blank", || {
        rgb_to_color_image(thumb.background())
    });
    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    ui.painter().image(background.id(), rect, uv, Color32::WHITE);
    ui.painter().text(
        rect.left_bottom() + Vec2::new(4.0, -4.0),
        Align2::LEFT_BOTTOM,
        format!("{}. {}", index + 1, name),
        FontId::proportional(11.0),
        Color32::WHITE,
    );
    let border = if is_current {
        Stroke::new(2.0, Color32::from_rgb(30, 120, 255))
    } else {
        Stroke::new(1.0, Color32::BLACK)
    };
    ui.painter().rect_stroke(rect, 0.0, border, StrokeKind::Inside);

    // Overlay layer: menu toggle in the top-right corner
    let toggle_rect = Rect::from_min_size(
        egui::pos2(rect.right() - MENU_TOGGLE_SIZE - 2.0, rect.top() + 2.0),
        Vec2::splat(MENU_TOGGLE_SIZE),
    );
    let toggle = ui.interact(toggle_rect, ui.id().with(("thumb_toggle", index)), Sense::click());
    ui.painter().text(
        toggle_rect.center(),
        Align2::CENTER_CENTER,
        "v",
        FontId::monospace(10.0),
        if toggle.hovered() { Color32::YELLOW } else { Color32::WHITE },
    );
    if toggle.clicked() {
        *toggled = Some(index);
    } else if response.clicked() && !thumb.menu_visible() {
        actions.send(SelectSlideEvent(index));
    }

    if thumb.menu_visible() {
        let menu_rect = Rect::from_min_size(rect.min, rect.size() - Vec2::splat(MENU_TOGGLE_SIZE));
        ui.painter().rect_filled(menu_rect, 0.0, ui.visuals().window_fill);
        let row_height = menu_rect.height() / MenuCommand::ALL.len() as f32;
        for (row, command) in MenuCommand::ALL.iter().enumerate() {
            let row_rect = Rect::from_min_size(
                menu_rect.min + Vec2::new(0.0, row as f32 * row_height),
                Vec2::new(menu_rect.width(), row_height),
            );
            let button = egui::Button::new(command.caption()).stroke(Stroke::new(1.0, Color32::BLACK));
            if ui.put(row_rect, button).clicked() {
                actions.send(SlideMenuEvent {
                    index,
                    command: *command,
                });
                *toggled = Some(index);
            }
        }
    }
}

/// "+ / New Slide" control. Returns true when activated.
fn render_add_slide(ui: &mut egui::Ui, tooltips: bool) -> bool {
    let (rect, _) = ui.allocate_exact_size(SLIDE_THUMBNAIL_SIZE, Sense::hover());
    ui.painter()
        .rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK), StrokeKind::Inside);

    let label_height = 18.0;
    let plus_rect = Rect::from_min_max(
        rect.min + Vec2::splat(4.0),
        egui::pos2(rect.right() - 4.0, rect.bottom() - label_height),
    );
    let mut response = ui.put(plus_rect, egui::Button::new(egui::RichText::new("+").size(24.0)));
    if tooltips {
        response = response.on_hover_text("Add a blank slide at the end");
    }
    let clicked = response.clicked();
    ui.painter().text(
        egui::pos2(rect.center().x, rect.bottom() - label_height / 2.0),
        Align2::CENTER_CENTER,
        "New Slide",
        FontId::proportional(12.0),
        ui.visuals().text_color(),
    );
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Slide;

    #[test]
    fn test_narrow_strip_wraps_to_rows() {
        let slides: Vec<Slide> = (1..=4).map(|i| Slide::new(format!("S{i}"))).collect();
        let names: Vec<&str> = slides.iter().map(|s| s.name.as_str()).collect();
        let mut strip = SlideStrip::from_slides(&slides);
        let mut textures = TextureCache::new();

        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(320.0, 800.0))),
            ..Default::default()
        };
        let mut height = 0.0;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let scoped = ui.scope(|ui| render(ui, &mut strip, 0, &names, &mut textures, true));
                height = scoped.response.rect.height();
            });
        });

        // Five items at 137 px cannot share one 320 px row
        assert!(height > SLIDE_THUMBNAIL_SIZE.y * 2.0, "height {height}");
    }
}

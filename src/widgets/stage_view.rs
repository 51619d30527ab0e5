//! Stage view: the current slide at full editor size.
//!
//! Click selects the topmost element under the pointer (or the slide
//! itself), dragging moves the selected element.

use eframe::egui;
use uuid::Uuid;

use crate::core::{EditorContext, Stage};
use crate::entities::Bounds;
use crate::widgets::actions::ActionQueue;
use crate::widgets::sidebar::MoveElementEvent;
use crate::widgets::slide_painter::{SlidePaint, fit_slide_rect, to_slide_coords};
use crate::widgets::textures::TextureCache;

/// Element (or slide, when `element` is None) clicked on the stage
#[derive(Clone, Debug)]
pub struct SelectElementEvent {
    pub slide: Uuid,
    pub element: Option<Uuid>,
}

/// Drag state kept between frames
#[derive(Debug, Default)]
pub struct StageViewState {
    dragging: Option<(Uuid, Bounds)>,
}

impl StageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        stage: &Stage,
        ctx: &EditorContext,
        textures: &mut TextureCache,
    ) -> ActionQueue {
        let mut actions = ActionQueue::new();
        let available = ui.available_rect_before_wrap();
        let response = ui.interact(available, ui.id().with("stage_view"), egui::Sense::click_and_drag());
        actions.hovered = response.hovered();

        ui.painter().rect_filled(available, 0.0, ui.visuals().extreme_bg_color);
        let slide_rect = fit_slide_rect(available.shrink(16.0));
        let slide = stage.current_slide();

        SlidePaint {
            slide,
            lists: &ctx.lists,
            iteration: 0,
            selected: ctx.selection.element(),
            outlines: true,
        }
        .paint(ui.ctx(), &ui.painter_at(available), slide_rect, textures);

        let hit = |pos: egui::Pos2| {
            let (x, y) = to_slide_coords(slide_rect, pos);
            slide.element_at(x, y).map(|e| (e.uuid, e.bounds))
        };

        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
        {
            actions.send(SelectElementEvent {
                slide: slide.uuid,
                element: hit(pos).map(|(id, _)| id),
            });
        }

        if response.drag_started()
            && let Some(pos) = response.interact_pointer_pos()
        {
            self.dragging = hit(pos);
            if let Some((id, _)) = self.dragging {
                actions.send(SelectElementEvent {
                    slide: slide.uuid,
                    element: Some(id),
                });
            }
        }

        if let Some((id, start)) = self.dragging {
            if response.dragged() {
                let delta = response.drag_delta();
                let moved = start.translated(
                    delta.x / slide_rect.width(),
                    delta.y / slide_rect.height(),
                );
                self.dragging = Some((id, moved));
                actions.send(MoveElementEvent {
                    element: id,
                    bounds: moved,
                });
            }
            if response.drag_stopped() {
                self.dragging = None;
            }
        }

        actions
    }
}

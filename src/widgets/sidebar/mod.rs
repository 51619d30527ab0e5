//! Sidebar widget
//!
//! Fixed-width column: slide preview on top, sectioned property panel
//! below filling the remaining height. Both panels read the selection from
//! the `EditorContext`.

pub mod preview;
pub mod sectioned;
pub mod sidebar_events;

pub use preview::{PREVIEW_HEIGHT, PreviewPanel};
pub use sectioned::{Section, SectionedPanel};
pub use sidebar_events::*;

use eframe::egui;

use crate::core::{EditorContext, Stage};
use crate::widgets::actions::ActionQueue;
use crate::widgets::textures::TextureCache;

/// Sidebar width in points (not resizable)
pub const SIDEBAR_WIDTH: f32 = 300.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    pub width: f32,
    pub preview: PreviewPanel,
    pub properties: SectionedPanel,
}

impl Sidebar {
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        stage: &Stage,
        ctx: &EditorContext,
        textures: &mut TextureCache,
    ) -> ActionQueue {
        ui.set_width(self.width);
        self.preview.render(ui, self.width, stage, ctx, textures);
        ui.separator();
        let mut actions = self.properties.render(ui, stage, ctx);
        actions.hovered = ui.rect_contains_pointer(ui.max_rect());
        actions
    }
}

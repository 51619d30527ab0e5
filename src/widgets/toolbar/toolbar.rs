//! Toolbar model: ordered buttons and separators.
//!
//! Three sections: add elements to the current slide, experiment-level
//! actions, and room for slide properties later. Unimplemented element
//! kinds (video, sound, container) are present but disabled.

use eframe::egui::Vec2;

/// Height reserved for separators; also the toolbar's tallest item
pub const TOOLBAR_HEIGHT: f32 = 70.0;

/// Separator size (some platforms draw zero-height separators otherwise)
pub const TOOLBAR_SEPARATOR_SIZE: Vec2 = Vec2::new(2.0, TOOLBAR_HEIGHT);

/// Button size (icon above label)
pub const TOOLBAR_BUTTON_SIZE: Vec2 = Vec2::new(72.0, 56.0);

/// Icon edge in pixels
pub const TOOLBAR_ICON_SIZE: f32 = 24.0;

/// Action a toolbar button is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    AddImage,
    AddVideo,
    AddSound,
    AddText,
    AddContainer,
    Export,
    CreateList,
}

impl ToolbarAction {
    pub fn label(&self) -> &'static str {
        match self {
            ToolbarAction::AddImage => "Add Image",
            ToolbarAction::AddVideo => "Add Video",
            ToolbarAction::AddSound => "Add Sound",
            ToolbarAction::AddText => "Add Text",
            ToolbarAction::AddContainer => "Add Container",
            ToolbarAction::Export => "Export",
            ToolbarAction::CreateList => "Create List",
        }
    }

    /// Icon path relative to the working directory.
    pub fn icon(&self) -> &'static str {
        match self {
            ToolbarAction::AddImage => "images/picture_add.png",
            ToolbarAction::AddVideo => "images/film_add.png",
            ToolbarAction::AddSound => "images/sound_add.png",
            ToolbarAction::AddText => "images/font_add.png",
            ToolbarAction::AddContainer => "images/container_add.png",
            ToolbarAction::Export => "images/export_icon.png",
            ToolbarAction::CreateList => "images/list_add.png",
        }
    }

    /// Video, sound and container elements have no editor support yet.
    pub fn is_implemented(&self) -> bool {
        !matches!(
            self,
            ToolbarAction::AddVideo | ToolbarAction::AddSound | ToolbarAction::AddContainer
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    pub enabled: bool,
}

impl ToolbarButton {
    pub fn size(&self) -> Vec2 {
        TOOLBAR_BUTTON_SIZE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarItem {
    Button(ToolbarButton),
    Separator(Vec2),
}

impl ToolbarItem {
    pub fn size(&self) -> Vec2 {
        match self {
            ToolbarItem::Button(b) => b.size(),
            ToolbarItem::Separator(size) => *size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    pub items: Vec<ToolbarItem>,
    pub floatable: bool,
    pub beveled: bool,
}

impl Toolbar {
    /// Buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &ToolbarButton> {
        self.items.iter().filter_map(|item| match item {
            ToolbarItem::Button(b) => Some(b),
            ToolbarItem::Separator(_) => None,
        })
    }

    pub fn button(&self, action: ToolbarAction) -> Option<&ToolbarButton> {
        self.buttons().find(|b| b.action == action)
    }

    /// Height of the tallest item; width always fills the parent.
    pub fn preferred_height(&self) -> f32 {
        self.items
            .iter()
            .map(|item| item.size().y)
            .fold(0.0, f32::max)
    }
}

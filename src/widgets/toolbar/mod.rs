//! Toolbar widget
//!
//! Buttons bound to editing actions; clicks become `ToolbarActionEvent`s
//! executed by the app against the stage.

mod toolbar;
pub mod toolbar_events;
pub mod toolbar_ui;

pub use toolbar::{
    TOOLBAR_BUTTON_SIZE, TOOLBAR_HEIGHT, TOOLBAR_ICON_SIZE, TOOLBAR_SEPARATOR_SIZE, Toolbar,
    ToolbarAction, ToolbarButton, ToolbarItem,
};
pub use toolbar_events::ToolbarActionEvent;
pub use toolbar_ui::render;

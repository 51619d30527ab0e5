//! UI Widgets - self-contained panels that report user actions as events

pub mod actions;
pub mod file_dialogs;
pub mod section_divider;
pub mod sidebar;
pub mod slide_painter;
pub mod stage_view;
pub mod status;
pub mod switcher;
pub mod textures;
pub mod toolbar;

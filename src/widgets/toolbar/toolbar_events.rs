//! Toolbar events.

use super::toolbar::ToolbarAction;

/// A toolbar button was clicked
#[derive(Clone, Debug)]
pub struct ToolbarActionEvent(pub ToolbarAction);

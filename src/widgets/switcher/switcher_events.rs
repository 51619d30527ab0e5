//! Slide switcher events.

use super::strip::MenuCommand;

/// Thumbnail clicked: make slide current
#[derive(Clone, Debug)]
pub struct SelectSlideEvent(pub usize);

/// "New Slide" activated
#[derive(Clone, Debug)]
pub struct AddSlideEvent;

/// Entry of a thumbnail's context menu chosen
#[derive(Clone, Debug)]
pub struct SlideMenuEvent {
    pub index: usize,
    pub command: MenuCommand,
}

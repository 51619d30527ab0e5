//! Sidebar (property panel) events.

use uuid::Uuid;

use crate::entities::{Bounds, ElementContent, Repeat};

/// Replace an element's content
#[derive(Clone, Debug)]
pub struct UpdateElementEvent {
    pub element: Uuid,
    pub content: ElementContent,
}

/// Move/resize an element
#[derive(Clone, Debug)]
pub struct MoveElementEvent {
    pub element: Uuid,
    pub bounds: Bounds,
}

#[derive(Clone, Debug)]
pub struct DeleteElementEvent(pub Uuid);

#[derive(Clone, Debug)]
pub struct RenameSlideEvent {
    pub index: usize,
    pub name: String,
}

/// Change how often a slide is shown by the player
#[derive(Clone, Debug)]
pub struct SetRepeatEvent {
    pub index: usize,
    pub repeat: Repeat,
}

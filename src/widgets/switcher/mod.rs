//! Slide switcher widget
//!
//! Horizontal strip of slide thumbnails with a trailing "New Slide" control.

mod strip;
pub mod switcher_events;
pub mod switcher_ui;

pub use strip::{
    MENU_TOGGLE_SIZE, MenuCommand, OnClick, SLIDE_SWITCHER_HEIGHT, SLIDE_THUMBNAIL_HEIGHT,
    SLIDE_THUMBNAIL_SIZE, SLIDE_THUMBNAIL_WIDTH, SlideStrip, SlideThumbnail, StripItem,
    blank_background,
};
pub use switcher_events::{AddSlideEvent, SelectSlideEvent, SlideMenuEvent};
pub use switcher_ui::render;

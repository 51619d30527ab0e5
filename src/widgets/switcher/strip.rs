//! Slide strip model: ordered thumbnails plus a trailing "New Slide"
//! affordance that is never stored in the sequence, so it is always last.

use eframe::egui::Vec2;
use image::{Rgb, RgbImage};
use log::trace;
use uuid::Uuid;

use crate::entities::Slide;

/// Height of the switcher panel
pub const SLIDE_SWITCHER_HEIGHT: f32 = 100.0;

pub const SLIDE_THUMBNAIL_WIDTH: u32 = 137;
pub const SLIDE_THUMBNAIL_HEIGHT: u32 = 85;

/// Thumbnail size in UI points
pub const SLIDE_THUMBNAIL_SIZE: Vec2 =
    Vec2::new(SLIDE_THUMBNAIL_WIDTH as f32, SLIDE_THUMBNAIL_HEIGHT as f32);

/// Edge of the menu toggle in the thumbnail's top-right corner
pub const MENU_TOGGLE_SIZE: f32 = 10.0;

/// Placeholder background color
pub const THUMBNAIL_GRAY: Rgb<u8> = Rgb([128, 128, 128]);

/// Per-slide context menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    MakeCopy,
    RepeatTimes,
    RepeatUntil,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 3] = [
        MenuCommand::MakeCopy,
        MenuCommand::RepeatTimes,
        MenuCommand::RepeatUntil,
    ];

    pub fn caption(&self) -> &'static str {
        match self {
            MenuCommand::MakeCopy => "Make Copy",
            MenuCommand::RepeatTimes => "Repeat x times",
            MenuCommand::RepeatUntil => "Repeat Until ...",
        }
    }
}

/// Something that reacts to a click.
pub trait OnClick {
    fn on_click(&mut self);
}

/// Gray placeholder bitmap with thumbnail dimensions.
pub fn blank_background() -> RgbImage {
    RgbImage::from_pixel(SLIDE_THUMBNAIL_WIDTH, SLIDE_THUMBNAIL_HEIGHT, THUMBNAIL_GRAY)
}

/// Layered thumbnail: background bitmap plus an overlay menu.
#[derive(Debug, Clone)]
pub struct SlideThumbnail {
    slide: Uuid,
    background: RgbImage,
    menu_visible: bool,
}

impl SlideThumbnail {
    pub fn blank(slide: Uuid) -> Self {
        Self {
            slide,
            background: blank_background(),
            menu_visible: false,
        }
    }

    pub fn slide(&self) -> Uuid {
        self.slide
    }

    pub fn background(&self) -> &RgbImage {
        &self.background
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }
}

/// The "v" toggle flips the menu.
impl OnClick for SlideThumbnail {
    fn on_click(&mut self) {
        self.menu_visible = !self.menu_visible;
        trace!("Thumbnail {} menu visible: {}", self.slide, self.menu_visible);
    }
}

/// Element of the strip in display order
#[derive(Debug, Clone, Copy)]
pub enum StripItem<'a> {
    Thumbnail(usize, &'a SlideThumbnail),
    AddSlide,
}

#[derive(Debug, Clone, Default)]
pub struct SlideStrip {
    thumbnails: Vec<SlideThumbnail>,
}

impl SlideStrip {
    pub fn from_slides(slides: &[Slide]) -> Self {
        Self {
            thumbnails: slides.iter().map(|s| SlideThumbnail::blank(s.uuid)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    pub fn thumbnails(&self) -> &[SlideThumbnail] {
        &self.thumbnails
    }

    /// Append a blank thumbnail for a new slide. Returns its position.
    pub fn add_slide(&mut self, slide: Uuid) -> usize {
        self.thumbnails.push(SlideThumbnail::blank(slide));
        self.thumbnails.len() - 1
    }

    /// Thumbnails in order, then the add affordance.
    pub fn items(&self) -> impl Iterator<Item = StripItem<'_>> {
        self.thumbnails
            .iter()
            .enumerate()
            .map(|(i, t)| StripItem::Thumbnail(i, t))
            .chain(std::iter::once(StripItem::AddSlide))
    }

    pub fn toggle_menu(&mut self, index: usize) {
        if let Some(thumb) = self.thumbnails.get_mut(index) {
            thumb.on_click();
        }
    }

    /// Rebuild to match the experiment's slide order, keeping menu state
    /// of slides that are still present.
    pub fn sync(&mut self, slides: &[Slide]) {
        let unchanged = self.thumbnails.len() == slides.len()
            && self.thumbnails.iter().zip(slides).all(|(t, s)| t.slide == s.uuid);
        if unchanged {
            return;
        }
        let mut old = std::mem::take(&mut self.thumbnails);
        self.thumbnails = slides
            .iter()
            .map(|s| match old.iter().position(|t| t.slide == s.uuid) {
                Some(pos) => old.swap_remove(pos),
                None => SlideThumbnail::blank(s.uuid),
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_count(strip: &SlideStrip) -> usize {
        strip.items().filter(|i| matches!(i, StripItem::AddSlide)).count()
    }

    #[test]
    fn test_add_control_always_last() {
        let mut strip = SlideStrip::from_slides(&[Slide::new("one")]);
        for n in 0..12 {
            strip.add_slide(Uuid::new_v4());
            assert_eq!(add_count(&strip), 1);
            assert!(matches!(strip.items().last(), Some(StripItem::AddSlide)));
            assert_eq!(strip.items().count(), n + 3);
        }
    }

    #[test]
    fn test_add_appends_left_to_right() {
        let first = Slide::new("one");
        let mut strip = SlideStrip::from_slides(std::slice::from_ref(&first));
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(strip.add_slide(a), 1);
        assert_eq!(strip.add_slide(b), 2);
        let order: Vec<Uuid> = strip.thumbnails().iter().map(|t| t.slide()).collect();
        assert_eq!(order, vec![first.uuid, a, b]);
    }

    #[test]
    fn test_empty_strip_only_add() {
        let strip = SlideStrip::default();
        let items: Vec<_> = strip.items().collect();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], StripItem::AddSlide));
    }

    #[test]
    fn test_toggle_flips_menu() {
        let mut strip = SlideStrip::from_slides(&[Slide::new("one")]);
        assert!(!strip.thumbnails()[0].menu_visible());
        strip.toggle_menu(0);
        assert!(strip.thumbnails()[0].menu_visible());
        strip.toggle_menu(0);
        assert!(!strip.thumbnails()[0].menu_visible());
        strip.toggle_menu(7);
    }

    #[test]
    fn test_blank_background_is_gray() {
        let thumb = SlideThumbnail::blank(Uuid::new_v4());
        let bg = thumb.background();
        assert_eq!(bg.dimensions(), (SLIDE_THUMBNAIL_WIDTH, SLIDE_THUMBNAIL_HEIGHT));
        assert!(bg.pixels().all(|p| *p == THUMBNAIL_GRAY));
    }

    #[test]
    fn test_sync_keeps_menu_state() {
        let slides = vec![Slide::new("a"), Slide::new("b")];
        let mut strip = SlideStrip::from_slides(&slides);
        strip.toggle_menu(1);

        let mut reordered = slides.clone();
        reordered.insert(1, Slide::new("copy"));
        strip.sync(&reordered);

        assert_eq!(strip.len(), 3);
        assert_eq!(strip.thumbnails()[1].slide(), reordered[1].uuid);
        assert!(!strip.thumbnails()[1].menu_visible());
        assert!(strip.thumbnails()[2].menu_visible());
    }
}

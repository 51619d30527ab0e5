//! Slide and slide element model.
//!
//! Element bounds are normalized to the slide (0..1 on both axes) so the
//! same slide renders in the editor stage, the sidebar preview, the
//! switcher and the full-screen player.

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Default font size for new text elements (points at 1.0 slide height = 900px)
pub const DEFAULT_TEXT_SIZE: f32 = 32.0;

/// Normalized element rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Move by (dx, dy), keeping the rect inside the slide.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: (self.x + dx).clamp(0.0, (1.0 - self.w).max(0.0)),
            y: (self.y + dy).clamp(0.0, (1.0 - self.h).max(0.0)),
            ..*self
        }
    }

    /// Clamp size and position into the unit square.
    pub fn clamped(&self) -> Self {
        let w = self.w.clamp(0.01, 1.0);
        let h = self.h.clamp(0.01, 1.0);
        Self {
            x: self.x.clamp(0.0, 1.0 - w),
            y: self.y.clamp(0.0, 1.0 - h),
            w,
            h,
        }
    }
}

/// What an element shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementContent {
    Text {
        text: String,
        size: f32,
        /// Optional string list supplying the text per repetition
        #[serde(default)]
        list: Option<String>,
    },
    Image {
        path: PathBuf,
        /// Optional file list supplying the image per repetition
        #[serde(default)]
        list: Option<String>,
    },
}

impl ElementContent {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ElementContent::Text { .. } => "Text",
            ElementContent::Image { .. } => "Image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideElement {
    pub uuid: Uuid,
    pub bounds: Bounds,
    pub content: ElementContent,
}

impl SlideElement {
    pub fn new(bounds: Bounds, content: ElementContent) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            bounds,
            content,
        }
    }

    /// Text element centered in the upper half of the slide.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(
            Bounds::new(0.25, 0.2, 0.5, 0.15),
            ElementContent::Text {
                text: text.into(),
                size: DEFAULT_TEXT_SIZE,
                list: None,
            },
        )
    }

    pub fn image(path: PathBuf) -> Self {
        Self::new(
            Bounds::new(0.3, 0.3, 0.4, 0.4),
            ElementContent::Image { path, list: None },
        )
    }
}

/// How often a slide is shown by the player
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Repeat {
    #[default]
    Once,
    /// Show N times in a row
    Times(u32),
    /// Show again until the named key is pressed
    UntilKey(String),
}

impl Repeat {
    pub fn describe(&self) -> String {
        match self {
            Repeat::Once => "once".to_string(),
            Repeat::Times(n) => format!("{} times", n),
            Repeat::UntilKey(key) => format!("until '{}'", key),
        }
    }

    /// Key that ends an `UntilKey` repeat.
    ///
    /// Accepts egui's key names and aliases in any case ("space", "Return").
    /// None for other modes and for names that match no key.
    pub fn until_key(&self) -> Option<egui::Key> {
        let Repeat::UntilKey(name) = self else {
            return None;
        };
        let name = name.trim();
        egui::Key::from_name(name).or_else(|| {
            egui::Key::ALL
                .iter()
                .copied()
                .find(|k| k.name().eq_ignore_ascii_case(name))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub elements: Vec<SlideElement>,
    #[serde(default)]
    pub repeat: Repeat,
}

impl Slide {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            elements: Vec::new(),
            repeat: Repeat::Once,
        }
    }

    /// Deep copy with fresh ids for the slide and every element.
    pub fn duplicate(&self) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: format!("{} copy", self.name),
            elements: self
                .elements
                .iter()
                .map(|e| SlideElement {
                    uuid: Uuid::new_v4(),
                    ..e.clone()
                })
                .collect(),
            repeat: self.repeat.clone(),
        }
    }

    pub fn element(&self, uuid: Uuid) -> Option<&SlideElement> {
        self.elements.iter().find(|e| e.uuid == uuid)
    }

    pub fn element_mut(&mut self, uuid: Uuid) -> Option<&mut SlideElement> {
        self.elements.iter_mut().find(|e| e.uuid == uuid)
    }

    pub fn remove_element(&mut self, uuid: Uuid) -> Option<SlideElement> {
        let idx = self.elements.iter().position(|e| e.uuid == uuid)?;
        Some(self.elements.remove(idx))
    }

    /// Topmost element under a normalized point (last drawn wins).
    pub fn element_at(&self, x: f32, y: f32) -> Option<&SlideElement> {
        self.elements.iter().rev().find(|e| {
            let b = &e.bounds;
            x >= b.x && x <= b.x + b.w && y >= b.y && y <= b.y + b.h
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_key_canonical() {
        let key = |name: &str| Repeat::UntilKey(name.to_string()).until_key();
        assert_eq!(key("Space"), Some(egui::Key::Space));
        assert_eq!(key("space"), Some(egui::Key::Space));
        assert_eq!(key("Return"), Some(egui::Key::Enter));
        assert_eq!(key("y"), Some(egui::Key::Y));
        assert_eq!(key(" N "), Some(egui::Key::N));
        assert_eq!(key(""), None);
        assert_eq!(key("NoSuchKey"), None);
        assert_eq!(Repeat::Times(2).until_key(), None);
    }

    #[test]
    fn test_duplicate_fresh_ids() {
        let mut slide = Slide::new("Intro");
        slide.elements.push(SlideElement::text("Hello"));
        slide.repeat = Repeat::Times(3);

        let copy = slide.duplicate();
        assert_ne!(copy.uuid, slide.uuid);
        assert_eq!(copy.name, "Intro copy");
        assert_eq!(copy.repeat, Repeat::Times(3));
        assert_eq!(copy.elements.len(), 1);
        assert_ne!(copy.elements[0].uuid, slide.elements[0].uuid);
        assert_eq!(copy.elements[0].content, slide.elements[0].content);
    }

    #[test]
    fn test_element_at_prefers_topmost() {
        let mut slide = Slide::new("s");
        let below = SlideElement::new(
            Bounds::new(0.0, 0.0, 0.5, 0.5),
            ElementContent::Text { text: "below".into(), size: 10.0, list: None },
        );
        let above = SlideElement::new(
            Bounds::new(0.25, 0.25, 0.5, 0.5),
            ElementContent::Text { text: "above".into(), size: 10.0, list: None },
        );
        let above_id = above.uuid;
        slide.elements.push(below);
        slide.elements.push(above);

        assert_eq!(slide.element_at(0.3, 0.3).map(|e| e.uuid), Some(above_id));
        assert!(slide.element_at(0.9, 0.1).is_none());
    }

    #[test]
    fn test_bounds_translate_stays_inside() {
        let b = Bounds::new(0.8, 0.1, 0.2, 0.2).translated(0.5, -0.5);
        assert_eq!(b.x, 0.8);
        assert_eq!(b.y, 0.0);
    }

    #[test]
    fn test_repeat_serde_shape() {
        let json = serde_json::to_string(&Repeat::UntilKey("Space".into())).unwrap();
        assert_eq!(json, r#"{"mode":"until_key","value":"Space"}"#);
        let back: Repeat = serde_json::from_str(r#"{"mode":"times","value":4}"#).unwrap();
        assert_eq!(back, Repeat::Times(4));
    }
}

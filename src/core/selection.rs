//! Selection state shared by the stage view, preview and property panels.
//!
//! Owned by `EditorContext`; panels read it every frame instead of being
//! pushed updates.

use log::trace;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Slide(Uuid),
    Element { slide: Uuid, element: Uuid },
}

#[derive(Debug, Default)]
pub struct SelectionManager {
    current: Selection,
    /// Bumped on every change
    generation: u64,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn select_slide(&mut self, slide: Uuid) {
        self.set(Selection::Slide(slide));
    }

    pub fn select_element(&mut self, slide: Uuid, element: Uuid) {
        self.set(Selection::Element { slide, element });
    }

    pub fn clear(&mut self) {
        self.set(Selection::None);
    }

    /// Selected element id, if an element is selected.
    pub fn element(&self) -> Option<Uuid> {
        match self.current {
            Selection::Element { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Slide the selection belongs to.
    pub fn slide(&self) -> Option<Uuid> {
        match self.current {
            Selection::None => None,
            Selection::Slide(slide) | Selection::Element { slide, .. } => Some(slide),
        }
    }

    /// Drop an element selection that points at a removed element.
    pub fn forget_element(&mut self, element: Uuid) {
        if let Selection::Element { slide, element: selected } = self.current
            && selected == element
        {
            self.set(Selection::Slide(slide));
        }
    }

    fn set(&mut self, selection: Selection) {
        if self.current != selection {
            trace!("Selection {:?} -> {:?}", self.current, selection);
            self.current = selection;
            self.generation += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_bumps_on_change_only() {
        let mut sel = SelectionManager::new();
        let slide = Uuid::new_v4();
        sel.select_slide(slide);
        assert_eq!(sel.generation(), 1);
        sel.select_slide(slide);
        assert_eq!(sel.generation(), 1);
        sel.clear();
        assert_eq!(sel.generation(), 2);
    }

    #[test]
    fn test_forget_element_falls_back_to_slide() {
        let mut sel = SelectionManager::new();
        let slide = Uuid::new_v4();
        let element = Uuid::new_v4();
        sel.select_element(slide, element);
        assert_eq!(sel.element(), Some(element));

        sel.forget_element(Uuid::new_v4());
        assert_eq!(sel.element(), Some(element));

        sel.forget_element(element);
        assert_eq!(sel.current(), Selection::Slide(slide));
        assert_eq!(sel.slide(), Some(slide));
    }
}

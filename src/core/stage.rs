//! Stage - the editing target handed to toolbar actions and panels.
//!
//! Wraps the experiment under edit, the current slide index and the
//! file it came from. Every mutation marks the stage dirty.

use log::{debug, info};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::entities::{Bounds, ElementContent, Experiment, Repeat, Slide, SlideElement};

#[derive(Debug)]
pub struct Stage {
    experiment: Experiment,
    current: usize,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Experiment::default())
    }
}

impl Stage {
    /// Wrap an experiment; an empty one gets a blank first slide.
    pub fn new(mut experiment: Experiment) -> Self {
        if experiment.slides.is_empty() {
            experiment.slides.push(Slide::new("Slide 1"));
        }
        Self {
            experiment,
            current: 0,
            path: None,
            dirty: false,
        }
    }

    pub fn experiment(&self) -> &Experiment {
        &self.experiment
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.experiment.slides[self.current]
    }

    pub fn current_slide_mut(&mut self) -> &mut Slide {
        self.dirty = true;
        &mut self.experiment.slides[self.current]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.experiment.slides
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record where the experiment now lives on disk.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }

    /// Flag unsaved changes made outside the stage (list registry).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Swap in a freshly loaded experiment.
    pub fn replace(&mut self, experiment: Experiment, path: Option<PathBuf>) {
        *self = Self::new(experiment);
        self.path = path;
    }

    /// Select slide by index, clamped to the valid range.
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.experiment.slides.len() - 1);
    }

    /// Append a blank slide and make it current. Returns its index.
    pub fn add_blank_slide(&mut self) -> usize {
        let name = format!("Slide {}", self.experiment.slides.len() + 1);
        self.experiment.slides.push(Slide::new(name));
        self.current = self.experiment.slides.len() - 1;
        self.dirty = true;
        debug!("Added slide #{}", self.current);
        self.current
    }

    /// Insert a copy of slide `index` right after it. Returns the copy's index.
    pub fn duplicate_slide(&mut self, index: usize) -> Option<usize> {
        let copy = self.experiment.slides.get(index)?.duplicate();
        self.experiment.slides.insert(index + 1, copy);
        self.current = index + 1;
        self.dirty = true;
        info!("Duplicated slide #{} -> #{}", index, index + 1);
        Some(index + 1)
    }

    pub fn set_repeat(&mut self, index: usize, repeat: Repeat) -> bool {
        match self.experiment.slides.get_mut(index) {
            Some(slide) => {
                debug!("Slide '{}' repeat: {}", slide.name, repeat.describe());
                slide.repeat = repeat;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn rename_slide(&mut self, index: usize, name: String) -> bool {
        match self.experiment.slides.get_mut(index) {
            Some(slide) => {
                slide.name = name;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Add element to the current slide. Returns its id.
    pub fn add_element(&mut self, element: SlideElement) -> Uuid {
        let uuid = element.uuid;
        debug!(
            "Adding {} element {} to slide #{}",
            element.content.kind_name(),
            uuid,
            self.current
        );
        self.current_slide_mut().elements.push(element);
        uuid
    }

    pub fn add_text(&mut self, text: &str) -> Uuid {
        self.add_element(SlideElement::text(text))
    }

    pub fn add_image(&mut self, path: PathBuf) -> Uuid {
        self.add_element(SlideElement::image(path))
    }

    /// Find element anywhere in the experiment: (slide index, element).
    pub fn find_element(&self, uuid: Uuid) -> Option<(usize, &SlideElement)> {
        self.experiment
            .slides
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.element(uuid).map(|e| (i, e)))
    }

    fn element_mut(&mut self, uuid: Uuid) -> Option<&mut SlideElement> {
        self.experiment
            .slides
            .iter_mut()
            .find_map(|s| s.element_mut(uuid))
    }

    pub fn set_element_content(&mut self, uuid: Uuid, content: ElementContent) -> bool {
        let Some(element) = self.element_mut(uuid) else {
            return false;
        };
        element.content = content;
        self.dirty = true;
        true
    }

    pub fn set_element_bounds(&mut self, uuid: Uuid, bounds: Bounds) -> bool {
        let Some(element) = self.element_mut(uuid) else {
            return false;
        };
        element.bounds = bounds.clamped();
        self.dirty = true;
        true
    }

    pub fn remove_element(&mut self, uuid: Uuid) -> Option<SlideElement> {
        let removed = self
            .experiment
            .slides
            .iter_mut()
            .find_map(|s| s.remove_element(uuid));
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Experiment ready for export, carrying the given list registry.
    pub fn export_snapshot(&self, lists: &crate::core::list_db::ListDatabase) -> Experiment {
        let mut experiment = self.experiment.clone();
        experiment.lists = lists.clone();
        experiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list_db::ListDatabase;
    use crate::entities::StringList;

    #[test]
    fn test_empty_experiment_gets_slide() {
        let mut exp = Experiment::new("x");
        exp.slides.clear();
        let stage = Stage::new(exp);
        assert_eq!(stage.slides().len(), 1);
        assert!(!stage.is_dirty());
    }

    #[test]
    fn test_add_blank_slide_appends_and_selects() {
        let mut stage = Stage::default();
        assert_eq!(stage.add_blank_slide(), 1);
        assert_eq!(stage.add_blank_slide(), 2);
        assert_eq!(stage.current_index(), 2);
        assert_eq!(stage.current_slide().name, "Slide 3");
        assert!(stage.is_dirty());
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let mut stage = Stage::default();
        stage.add_blank_slide();
        stage.add_blank_slide();
        let source = stage.slides()[0].uuid;

        assert_eq!(stage.duplicate_slide(0), Some(1));
        assert_eq!(stage.slides().len(), 4);
        assert_eq!(stage.slides()[0].uuid, source);
        assert_eq!(stage.slides()[1].name, "Slide 1 copy");
        assert_eq!(stage.duplicate_slide(10), None);
    }

    #[test]
    fn test_set_current_clamps() {
        let mut stage = Stage::default();
        stage.add_blank_slide();
        stage.set_current(42);
        assert_eq!(stage.current_index(), 1);
    }

    #[test]
    fn test_element_edit_and_remove() {
        let mut stage = Stage::default();
        let id = stage.add_text("Hello");
        assert_eq!(stage.find_element(id).map(|(i, _)| i), Some(0));

        assert!(stage.set_element_bounds(id, Bounds::new(0.9, 0.9, 0.5, 0.5)));
        let (_, el) = stage.find_element(id).unwrap();
        assert_eq!(el.bounds, Bounds::new(0.5, 0.5, 0.5, 0.5));

        assert!(stage.remove_element(id).is_some());
        assert!(stage.find_element(id).is_none());
        assert!(!stage.set_element_content(
            id,
            ElementContent::Text { text: String::new(), size: 1.0, list: None }
        ));
    }

    #[test]
    fn test_export_snapshot_carries_lists() {
        let stage = Stage::default();
        let mut lists = ListDatabase::new();
        lists.add_string_list(StringList::new("words"));
        let exported = stage.export_snapshot(&lists);
        assert_eq!(exported.lists.get_names(), vec!["words"]);
        assert!(stage.experiment().lists.is_empty());
    }
}

//! EBList - named, ordered list of strings or file references.
//!
//! Slides reference lists by name; the player picks one item per slide
//! repetition (see `cycle`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Named ordered sequence of `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbList<T> {
    name: String,
    items: Vec<T>,
}

/// List of plain text items
pub type StringList = EbList<String>;

/// List of file references (images, mostly)
pub type FileList = EbList<PathBuf>;

impl<T> EbList<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Item for the n-th pass over the list, wrapping around at the end.
    pub fn cycle(&self, n: usize) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(n % self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let list = StringList::with_items("words", vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(list.cycle(0).map(String::as_str), Some("a"));
        assert_eq!(list.cycle(4).map(String::as_str), Some("b"));
        assert_eq!(list.cycle(5).map(String::as_str), Some("c"));
    }

    #[test]
    fn test_cycle_empty() {
        let list = FileList::new("images");
        assert!(list.is_empty());
        assert_eq!(list.cycle(3), None);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut list = StringList::new("colors");
        list.push("red".into());
        list.push("green".into());
        assert_eq!(list.items(), &["red".to_string(), "green".to_string()]);
        assert_eq!(list.name(), "colors");
    }
}

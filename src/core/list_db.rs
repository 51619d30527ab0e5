//! List registry - the only place that tracks every EBList.
//!
//! Two homogeneous collections (string lists, file-reference lists).
//! Lookup is a linear scan, string lists first, and the first name match
//! wins. Names are not forced unique here; the Create List dialog refuses
//! duplicates before they reach the registry.

use serde::{Deserialize, Serialize};

use crate::entities::eblist::{FileList, StringList};

/// Which flavour of list a name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    Strings,
    Files,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Strings => "Text",
            ListKind::Files => "Files",
        }
    }
}

/// Borrowed list of either flavour, returned by `get_by_name`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListRef<'a> {
    Strings(&'a StringList),
    Files(&'a FileList),
}

impl ListRef<'_> {
    pub fn name(&self) -> &str {
        match self {
            ListRef::Strings(l) => l.name(),
            ListRef::Files(l) => l.name(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListRef::Strings(l) => l.len(),
            ListRef::Files(l) => l.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ListKind {
        match self {
            ListRef::Strings(_) => ListKind::Strings,
            ListRef::Files(_) => ListKind::Files,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListDatabase {
    string_lists: Vec<StringList>,
    file_lists: Vec<FileList>,
}

impl ListDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// First list named `name`, string lists searched before file lists.
    pub fn get_by_name(&self, name: &str) -> Option<ListRef<'_>> {
        if let Some(list) = self.string_lists.iter().find(|l| l.name() == name) {
            return Some(ListRef::Strings(list));
        }
        self.file_lists
            .iter()
            .find(|l| l.name() == name)
            .map(ListRef::Files)
    }

    /// All names: string lists then file lists, insertion order, duplicates kept.
    pub fn get_names(&self) -> Vec<&str> {
        self.string_lists
            .iter()
            .map(|l| l.name())
            .chain(self.file_lists.iter().map(|l| l.name()))
            .collect()
    }

    pub fn add_string_list(&mut self, list: StringList) {
        self.string_lists.push(list);
    }

    pub fn add_file_reference_list(&mut self, list: FileList) {
        self.file_lists.push(list);
    }

    /// String list by name, ignoring a file list with the same name.
    pub fn string_list(&self, name: &str) -> Option<&StringList> {
        self.string_lists.iter().find(|l| l.name() == name)
    }

    /// File list by name, ignoring a string list with the same name.
    pub fn file_list(&self, name: &str) -> Option<&FileList> {
        self.file_lists.iter().find(|l| l.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }

    /// Every list in `get_names` order.
    pub fn iter(&self) -> impl Iterator<Item = ListRef<'_>> {
        self.string_lists
            .iter()
            .map(ListRef::Strings)
            .chain(self.file_lists.iter().map(ListRef::Files))
    }

    pub fn len(&self) -> usize {
        self.string_lists.len() + self.file_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

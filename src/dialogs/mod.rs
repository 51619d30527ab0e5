//! Modal-style windows: preferences, list creation, slide repeat.

pub mod create_list;
pub mod prefs;
pub mod repeat;

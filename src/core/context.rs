//! Editor context - process state built once at startup and passed by
//! reference to the builders and panels that need it.

use crate::core::list_db::ListDatabase;
use crate::core::selection::SelectionManager;

#[derive(Debug, Default)]
pub struct EditorContext {
    pub lists: ListDatabase,
    pub selection: SelectionManager,
}

impl EditorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with the lists stored in a loaded experiment.
    pub fn with_lists(lists: ListDatabase) -> Self {
        Self {
            lists,
            selection: SelectionManager::new(),
        }
    }
}

//! Core editor state - independent of UI.

pub mod context;
pub mod event_bus;
pub mod list_db;
pub mod selection;
pub mod stage;

pub use context::EditorContext;
pub use event_bus::{BoxedEvent, Event, EventBus, downcast_event};
pub use list_db::{ListDatabase, ListKind, ListRef};
pub use selection::{Selection, SelectionManager};
pub use stage::Stage;

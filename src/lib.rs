//! Experiment builder library
//!
//! Shared by the editor (`expbuilder`) and player (`explayer`) binaries.

// Data model and editing state
pub mod core;
pub mod entities;

// App modules
pub mod app;
pub mod builder;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod help;
pub mod logging;
pub mod player;
pub mod widgets;

pub use core::{EditorContext, EventBus, ListDatabase, SelectionManager, Stage};
pub use entities::{EbList, Experiment, FileList, Slide, SlideElement, StringList};

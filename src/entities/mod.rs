//! Experiment data model: experiments, slides, elements, lists.

pub mod eblist;
pub mod experiment;
pub mod slide;

pub use eblist::{EbList, FileList, StringList};
pub use experiment::Experiment;
pub use slide::{Bounds, ElementContent, Repeat, Slide, SlideElement};

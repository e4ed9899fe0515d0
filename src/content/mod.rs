//! Site content: embedded records and the writings filter.

pub mod catalog;
pub mod filter;
pub mod writing;

pub use catalog::{Catalog, GalleryCategory, GalleryFilter, Persona};
pub use filter::FilterCriteria;
pub use writing::{Category, Tag, WritingRecord};

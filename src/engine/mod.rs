// src/engine/mod.rs
//! Category indexing and the filter/sort pass.

mod engine;
pub mod categories;
pub mod types;

pub use categories::derive_categories;
pub use engine::{apply, matches_search};
pub use types::{CategoryFilter, SortMode, ViewState};

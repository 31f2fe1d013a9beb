// src/specs/mod.rs
//! # Source "specs"
//!
//! Knowledge of how the remote directory document is laid out lives here:
//! the published key names, their quirks, and how each maps onto
//! [`crate::data::Provider`].
//!
//! ## What lives here
//! - **Record shape** of the endpoint (`RawProviderRecord`), tolerant of
//!   missing keys and of numbers/strings used interchangeably.
//! - **Normalization rules**: placeholders, the "Other" category, phone
//!   formatting, rating parsing and clamping.
//!
//! ## What does **not** live here
//! - **Transport** (`core::net`) and load orchestration (`fetch`).
//! - **Filtering, sorting, categories** (`engine`).
//! - **Presentation** (`present`, `output`, `gui`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → fetch::collect_providers → core::net::http_get_json
//!                                      ↘ specs::providers::normalize
//! ```
//!
//! Normalization is pure and deterministic: same document in, same providers
//! out, in input order. It never fails; a document that is not an array
//! degrades to an empty list with a warning in the log.
pub mod providers;

pub use providers::{RawProviderRecord, normalize};

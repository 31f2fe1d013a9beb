// src/engine/categories.rs
use std::collections::BTreeSet;

use crate::config::consts::OTHER_CATEGORY;
use crate::data::Provider;

/// Distinct categories across the collection, minus the "Other" bucket.
/// BTreeSet iteration gives the ascending order the dropdown shows.
pub fn derive_categories(providers: &[Provider]) -> BTreeSet<String> {
    providers
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| *c != OTHER_CATEGORY)
        .map(String::from)
        .collect()
}

// src/data.rs
//
// Canonical and view-layer provider data.
//
// - Provider:     one normalized directory entry.
// - Directory:    the loaded collection + derived categories. Replaced
//                 wholesale on every successful load, never edited in place.
// - ProviderView: ordered subset produced by the filter/sort engine.
//                 Holds row indexes into the directory's slice.

use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::engine::derive_categories;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub company: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub category: String,
    pub specialty: String,
    pub service_area: String,
    pub testimonial: String,
    pub rating: u8,
}

impl Provider {
    /// Column names used by table/CSV/TSV output, in `cells()` order.
    pub const COLUMNS: [&'static str; 10] = [
        "Company", "Contact", "Email", "Phone", "Location",
        "Category", "Specialty", "Service Area", "Testimonial", "Rating",
    ];

    /// Fields the search box looks at, space-joined.
    pub fn search_haystack(&self) -> String {
        [
            self.company.as_str(),
            self.contact.as_str(),
            self.category.as_str(),
            self.specialty.as_str(),
            self.service_area.as_str(),
        ]
        .join(" ")
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.company.clone(),
            self.contact.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.location.clone(),
            self.category.clone(),
            self.specialty.clone(),
            self.service_area.clone(),
            self.testimonial.clone(),
            self.rating.to_string(),
        ]
    }
}

/// Authoritative collection from the last successful load.
#[derive(Clone, Debug)]
pub struct Directory {
    providers: Vec<Provider>,
    categories: BTreeSet<String>,
    loaded_at: DateTime<Local>,
}

impl Directory {
    /// Categories are derived here, from scratch, every time.
    pub fn new(providers: Vec<Provider>, loaded_at: DateTime<Local>) -> Self {
        let categories = derive_categories(&providers);
        Self { providers, categories, loaded_at }
    }

    pub fn providers(&self) -> &[Provider] { &self.providers }
    pub fn categories(&self) -> &BTreeSet<String> { &self.categories }
    pub fn loaded_at(&self) -> DateTime<Local> { self.loaded_at }
    pub fn len(&self) -> usize { self.providers.len() }
    pub fn is_empty(&self) -> bool { self.providers.is_empty() }
}

/// Zero-copy ordered view for display.
#[derive(Clone, Debug)]
pub struct ProviderView<'a> {
    /// Positions of kept providers, in display order
    pub row_ix: Vec<usize>,
    providers: &'a [Provider],
}

impl<'a> ProviderView<'a> {
    /// Build a view directly from precomputed indices.
    pub fn from_indices(providers: &'a [Provider], row_ix: Vec<usize>) -> Self {
        Self { row_ix, providers }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a provider by display position.
    pub fn get(&self, i: usize) -> Option<&'a Provider> {
        self.row_ix.get(i).and_then(|&ix| self.providers.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Provider> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.providers.get(ix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::normalize;
    use serde_json::json;

    #[test]
    fn view_indexes_into_directory() {
        let ps = normalize(&json!([
            { "Company": "A" }, { "Company": "B" }, { "Company": "C" },
        ]));
        let view = ProviderView::from_indices(&ps, vec![2, 0]);
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(0).map(|p| p.company.as_str()), Some("C"));
        assert_eq!(view.get(2), None);
        let names: Vec<&str> = view.iter().map(|p| p.company.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn directory_derives_categories() {
        let ps = normalize(&json!([
            { "Category": "Roofing" }, { "Category": "Other" }, {}, { "Category": "Roofing" },
        ]));
        let dir = Directory::new(ps, Local::now());
        assert_eq!(dir.len(), 4);
        assert_eq!(dir.categories().iter().collect::<Vec<_>>(), vec!["Roofing"]);
    }

    #[test]
    fn haystack_has_the_five_search_fields() {
        let p = &normalize(&json!([{
            "Company": "Acme", "Contact": "Dana", "Category": "Roofing",
            "Specialty": "Slate", "Service_Area": "Metro", "email": "hidden@x.test",
        }]))[0];
        let h = p.search_haystack();
        for part in ["Acme", "Dana", "Roofing", "Slate", "Metro"] {
            assert!(h.contains(part));
        }
        assert!(!h.contains("hidden"));
    }
}

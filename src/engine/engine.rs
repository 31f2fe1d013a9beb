// src/engine/engine.rs
//
// Filter → sort over a borrowed provider slice. Produces an index view;
// nothing is cloned until a front end asks for owned rows.

use std::cmp::Reverse;

use crate::core::sanitize::collation_key;
use crate::data::{Provider, ProviderView};
use crate::engine::types::{SortMode, ViewState};

/// Run one filter/sort pass.
pub fn apply<'a>(providers: &'a [Provider], view: &ViewState) -> ProviderView<'a> {
    let needle = view.needle();

    let mut row_ix: Vec<usize> = providers
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_search(p, needle.as_deref()) && view.category.matches(&p.category))
        .map(|(i, _)| i)
        .collect();

    sort_indices(providers, &mut row_ix, view.sort);

    logd!(
        "Engine: search={:?} category={:?} sort={} → {}/{}",
        view.search_term,
        view.category.label(),
        view.sort.key(),
        row_ix.len(),
        providers.len()
    );

    ProviderView::from_indices(providers, row_ix)
}

/// Case-insensitive substring match over the searchable fields.
/// `needle` must already be lowercased; None matches everything.
pub fn matches_search(p: &Provider, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) => p.search_haystack().to_lowercase().contains(n),
    }
}

/// Stable in-place sort of row indices (`sort_by_*` on slices is stable,
/// so equal keys keep their filter order).
fn sort_indices(providers: &[Provider], row_ix: &mut [usize], mode: SortMode) {
    match mode {
        SortMode::Name => {
            row_ix.sort_by_cached_key(|&i| collation_key(&providers[i].company));
        }
        SortMode::Rating => {
            row_ix.sort_by_key(|&i| Reverse(providers[i].rating));
        }
        SortMode::Category => {
            row_ix.sort_by_cached_key(|&i| {
                let p = &providers[i];
                (collation_key(&p.category), collation_key(&p.company))
            });
        }
        SortMode::Unsorted => {}
    }
}

// src/engine/types.rs

/// Sort order for the provider list.
///
/// Keys match the sort control values: `name`, `rating`, `category`.
/// Anything else resolves to [`SortMode::Unsorted`] (filter order kept).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    #[default]
    Name,
    Rating,
    Category,
    Unsorted,
}

impl SortMode {
    /// Choices offered by the sort control.
    pub const CHOICES: [SortMode; 3] = [SortMode::Name, SortMode::Rating, SortMode::Category];

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "name" => SortMode::Name,
            "rating" => SortMode::Rating,
            "category" => SortMode::Category,
            _ => SortMode::Unsorted,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Rating => "rating",
            SortMode::Category => "category",
            SortMode::Unsorted => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Name => "Name (A–Z)",
            SortMode::Rating => "Rating (high → low)",
            SortMode::Category => "Category",
            SortMode::Unsorted => "As listed",
        }
    }
}

/// Category selection. `Any` is the "all categories" choice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    Any,
    Exact(String),
}

impl CategoryFilter {
    /// Control value → filter. `""` and `"any"` select everything.
    pub fn from_control(value: &str) -> Self {
        if value.trim().is_empty() || value == "any" {
            CategoryFilter::Any
        } else {
            CategoryFilter::Exact(s!(value))
        }
    }

    #[inline]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Exact(want) => want == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::Any => "All categories",
            CategoryFilter::Exact(c) => c,
        }
    }
}

/// Inputs of one filter/sort pass. Built fresh from the controls each time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
}

impl ViewState {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter, sort: SortMode) -> Self {
        Self { search_term: search_term.into(), category, sort }
    }

    /// Lowercased, trimmed search term; None when blank (matches everything).
    pub fn needle(&self) -> Option<String> {
        let t = self.search_term.trim();
        if t.is_empty() { None } else { Some(t.to_lowercase()) }
    }
}

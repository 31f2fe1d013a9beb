// src/present.rs
//
// What front ends get to see. A presenter receives an immutable ViewModel
// and answers with the user's intents; it holds no pipeline state.

use chrono::{DateTime, Local};

use crate::config::options::ViewOptions;
use crate::data::Provider;
use crate::intent::Intent;

/// Load status shown in the status surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Loading => "Loading",
            LoadStatus::Ready => "Ready",
            LoadStatus::Error(_) => "Error",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewModel<'a> {
    /// Filtered and sorted
    pub providers: Vec<&'a Provider>,
    /// Ascending, without "Other"
    pub categories: Vec<&'a str>,
    pub status: &'a LoadStatus,
    pub last_updated: Option<DateTime<Local>>,
    /// Size of the whole collection
    pub total: usize,
    /// Current control values
    pub controls: &'a ViewOptions,
    pub panel_open: bool,
    /// A load is in flight (may be a background refresh over existing data)
    pub loading: bool,
}

/// What the main area should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Body<'v, 'a> {
    Loading,
    Error(&'v str),
    /// Loaded, but nothing passes the filters
    Empty,
    Providers(&'v [&'a Provider]),
}

impl<'a> ViewModel<'a> {
    pub fn body(&self) -> Body<'_, 'a> {
        match self.status {
            LoadStatus::Error(msg) => Body::Error(msg),
            LoadStatus::Loading if self.last_updated.is_none() => Body::Loading,
            _ if self.providers.is_empty() => Body::Empty,
            _ => Body::Providers(&self.providers),
        }
    }

    pub fn count_label(&self) -> String {
        let noun = if self.total == 1 { "provider" } else { "providers" };
        format!("Showing {} of {} {}", self.providers.len(), self.total, noun)
    }

    /// Status line: state plus, when known, the last successful load time.
    pub fn status_line(&self) -> String {
        let state = match self.status {
            LoadStatus::Error(msg) => join!("Error: ", msg),
            LoadStatus::Loading if self.last_updated.is_none() => s!("Loading…"),
            LoadStatus::Loading => s!("Refreshing…"),
            LoadStatus::Ready if self.loading => s!("Refreshing…"),
            LoadStatus::Ready => s!("Ready"),
        };
        match self.last_updated {
            Some(t) => format!("{state} · Last updated {}", last_updated_text(t)),
            None => state,
        }
    }
}

/// Front-end seam: render `view`, report what the user asked for.
pub trait Presenter {
    type Error;

    fn present(&mut self, view: &ViewModel<'_>) -> Result<Vec<Intent>, Self::Error>;
}

/// Local time, then local date.
pub fn last_updated_text(t: DateTime<Local>) -> String {
    t.format("%X %x").to_string()
}

/// "★★★☆☆" for a 1..=5 rating.
pub fn stars(rating: u8) -> String {
    let r = rating.min(5) as usize;
    join!(&"★".repeat(r), &"☆".repeat(5 - r))
}

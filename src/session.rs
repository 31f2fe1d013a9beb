// src/session.rs
//
// Session controller: single source of truth for one browsing session.
// Owns the loaded directory, the control values, load bookkeeping and the
// two timers (search debounce, auto refresh). Front ends feed it intents and
// completed loads, and read back a ViewModel.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::consts::{REFRESH_INTERVAL, SEARCH_DEBOUNCE};
use crate::config::options::ViewOptions;
use crate::data::Directory;
use crate::engine::{self, CategoryFilter, ViewState};
use crate::fetch::LoadOutcome;
use crate::intent::Intent;
use crate::present::{LoadStatus, ViewModel};
use crate::schedule::{AutoRefresh, Debouncer, LoadTicket, LoadTracker, LoadTrigger};

#[derive(Debug)]
pub struct Session {
    directory: Option<Directory>,
    status: LoadStatus,
    controls: ViewOptions,

    // result of the last filter/sort pass (indexes into directory)
    row_ix: Vec<usize>,

    loads: LoadTracker,
    refresh: AutoRefresh,
    search: Debouncer<String>,
    panel_open: bool,
}

impl Session {
    pub fn new(controls: ViewOptions) -> Self {
        Self::with_timing(controls, REFRESH_INTERVAL, SEARCH_DEBOUNCE)
    }

    pub fn with_timing(controls: ViewOptions, refresh_every: Duration, search_quiet: Duration) -> Self {
        Self {
            directory: None,
            status: LoadStatus::Loading,
            controls,
            row_ix: Vec::new(),
            loads: LoadTracker::default(),
            refresh: AutoRefresh::new(refresh_every),
            search: Debouncer::new(search_quiet),
            panel_open: false,
        }
    }

    /* ---------- lifecycle ---------- */

    /// Arm auto refresh and hand out the initial load.
    pub fn start(&mut self, now: Instant) -> Option<LoadTicket> {
        self.refresh.start(now);
        self.begin_load(LoadTrigger::Initial)
    }

    /// Teardown: no more timer-driven work.
    pub fn stop(&mut self) {
        self.refresh.stop();
        self.search.cancel();
    }

    /* ---------- input ---------- */

    /// Apply one intent. Returns a ticket when the caller must start a load.
    pub fn handle(&mut self, intent: Intent, now: Instant) -> Option<LoadTicket> {
        logd!("Intent: {:?}", intent);
        match intent {
            Intent::SearchChanged(text) => {
                if text != self.controls.search {
                    self.controls.search = text.clone();
                    self.search.push(text, now);
                }
                None
            }
            Intent::CategoryChanged(category) => {
                self.controls.category = category;
                self.search.cancel();
                self.filter_pass();
                None
            }
            Intent::SortChanged(sort) => {
                self.controls.sort = sort;
                self.search.cancel();
                self.filter_pass();
                None
            }
            Intent::ClearFilters => {
                self.controls.search.clear();
                self.controls.category = CategoryFilter::Any;
                self.search.cancel();
                self.filter_pass();
                None
            }
            Intent::Refresh => self.begin_load(LoadTrigger::Manual),
            Intent::Retry => self.begin_load(LoadTrigger::Retry),
            Intent::OpenPanel => {
                self.panel_open = true;
                None
            }
            Intent::ClosePanel => {
                self.panel_open = false;
                None
            }
        }
    }

    /// Drive timers. Runs a debounced search pass when due; returns a ticket
    /// when auto refresh fires and nothing else is loading.
    pub fn tick(&mut self, now: Instant) -> Option<LoadTicket> {
        if let Some(text) = self.search.poll(now) {
            logd!("Search: quiet period over, filtering for {:?}", text);
            self.filter_pass();
        }
        if self.refresh.poll(now) {
            return self.begin_load(LoadTrigger::Auto);
        }
        None
    }

    /// Time until the next timer wants a `tick`.
    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        match (self.search.remaining(now), self.refresh.remaining(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /* ---------- loads ---------- */

    fn begin_load(&mut self, trigger: LoadTrigger) -> Option<LoadTicket> {
        let ticket = self.loads.begin(trigger)?;
        self.status = LoadStatus::Loading;
        logf!("Load: begin #{} ({:?}), {} in flight", ticket.id, trigger, self.loads.in_flight());
        Some(ticket)
    }

    /// Apply a completed load. Success swaps in a whole new directory;
    /// failure keeps the old one and flips the status to Error.
    /// Returns true on success.
    pub fn finish_load(&mut self, outcome: LoadOutcome, loaded_at: DateTime<Local>) -> bool {
        self.loads.finish(&outcome.ticket);
        let id = outcome.ticket.id;

        match outcome.result {
            Ok(providers) => {
                let dir = Directory::new(providers, loaded_at);
                logf!(
                    "Load: OK #{} providers={} categories={}",
                    id,
                    dir.len(),
                    dir.categories().len()
                );

                // A category that vanished from the new data can't be picked any more.
                if let CategoryFilter::Exact(c) = &self.controls.category {
                    if !dir.categories().contains(c) {
                        logf!("Filter: category {:?} no longer present, showing all", c);
                        self.controls.category = CategoryFilter::Any;
                    }
                }

                self.directory = Some(dir);
                self.status = LoadStatus::Ready;
                self.filter_pass();
                true
            }
            Err(e) => {
                loge!("Load: #{} failed: {}", id, e);
                self.status = LoadStatus::Error(e.to_string());
                false
            }
        }
    }

    /* ---------- view ---------- */

    /// Fresh from the controls; never cached.
    pub fn view_state(&self) -> ViewState {
        ViewState::new(
            self.controls.search.clone(),
            self.controls.category.clone(),
            self.controls.sort,
        )
    }

    fn filter_pass(&mut self) {
        let view = self.view_state();
        self.row_ix = match &self.directory {
            Some(dir) => engine::apply(dir.providers(), &view).row_ix,
            None => Vec::new(),
        };
    }

    pub fn view_model(&self) -> ViewModel<'_> {
        let (providers, categories, total, last_updated) = match &self.directory {
            Some(dir) => (
                self.row_ix
                    .iter()
                    .filter_map(|&ix| dir.providers().get(ix))
                    .collect(),
                dir.categories().iter().map(String::as_str).collect(),
                dir.len(),
                Some(dir.loaded_at()),
            ),
            None => (Vec::new(), Vec::new(), 0, None),
        };

        ViewModel {
            providers,
            categories,
            status: &self.status,
            last_updated,
            total,
            controls: &self.controls,
            panel_open: self.panel_open,
            loading: self.loads.is_loading(),
        }
    }

    /* ---------- tiny accessors ---------- */

    pub fn status(&self) -> &LoadStatus { &self.status }
    pub fn controls(&self) -> &ViewOptions { &self.controls }
    pub fn directory(&self) -> Option<&Directory> { self.directory.as_ref() }
    pub fn is_loading(&self) -> bool { self.loads.is_loading() }
    pub fn panel_open(&self) -> bool { self.panel_open }
    pub fn auto_refresh_running(&self) -> bool { self.refresh.is_running() }
    pub fn search_pending(&self) -> bool { self.search.is_pending() }
}

// src/schedule.rs
//
// Cooperative timing primitives for the single UI thread. Nothing here
// sleeps or spawns: callers pass `now` in and poll on each frame/tick.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// What asked for a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTrigger {
    Initial,
    Manual,
    Retry,
    Auto,
}

/// Handle for one in-flight load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub id: u64,
    pub trigger: LoadTrigger,
}

/// Tracks loads in flight.
///
/// An `Auto` trigger is refused while anything is in flight. Every other
/// trigger always gets a ticket. Tickets are never cancelled; completions are
/// applied in arrival order, so the last one to finish wins.
#[derive(Debug, Default)]
pub struct LoadTracker {
    next_id: u64,
    in_flight: BTreeSet<u64>,
}

impl LoadTracker {
    pub fn begin(&mut self, trigger: LoadTrigger) -> Option<LoadTicket> {
        if trigger == LoadTrigger::Auto && !self.in_flight.is_empty() {
            logd!("Load: auto refresh skipped ({} in flight)", self.in_flight.len());
            return None;
        }
        self.next_id += 1;
        let ticket = LoadTicket { id: self.next_id, trigger };
        self.in_flight.insert(ticket.id);
        Some(ticket)
    }

    /// Idempotent.
    pub fn finish(&mut self, ticket: &LoadTicket) {
        self.in_flight.remove(&ticket.id);
    }

    pub fn in_flight(&self) -> usize { self.in_flight.len() }
    pub fn is_loading(&self) -> bool { !self.in_flight.is_empty() }
}

/// Periodic reload with an explicit start/stop lifecycle.
#[derive(Debug)]
pub struct AutoRefresh {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutoRefresh {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_due: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
        logd!("AutoRefresh: started, every {:?}", self.interval);
    }

    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            logd!("AutoRefresh: stopped");
        }
    }

    pub fn is_running(&self) -> bool { self.next_due.is_some() }
    pub fn interval(&self) -> Duration { self.interval }

    /// True once per elapsed interval; re-arms from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// Coalesces bursts: each `push` replaces the pending value and restarts the
/// quiet window; `poll` hands out the last value once the window has passed.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.quiet));
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}

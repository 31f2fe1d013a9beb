// src/fetch.rs
//
// Load orchestration: GET the document, normalize it, and (for the GUI)
// do that on a worker thread that reports back over a channel.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use serde_json::Value;

use crate::config::options::SourceOptions;
use crate::core::net::{self, LoadError};
use crate::data::Provider;
use crate::schedule::LoadTicket;
use crate::specs;

/// Result of one load, tagged with the ticket that started it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub result: Result<Vec<Provider>, LoadError>,
}

/// Raw decoded document.
pub fn load(source: &SourceOptions) -> Result<Value, LoadError> {
    net::http_get_json(source)
}

/// Load + normalize.
pub fn collect_providers(source: &SourceOptions) -> Result<Vec<Provider>, LoadError> {
    let doc = load(source)?;
    Ok(specs::normalize(&doc))
}

/// Run `collect_providers` on a named worker thread. The outcome goes to `tx`;
/// `wake` runs afterwards so an idle UI notices.
pub fn spawn_load<F>(
    ticket: LoadTicket,
    source: SourceOptions,
    tx: Sender<LoadOutcome>,
    wake: F,
) -> Result<JoinHandle<()>, LoadError>
where
    F: FnOnce() + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(format!("load-{}", ticket.id))
        .spawn(move || {
            let result = collect_providers(&source);
            // Receiver gone means the app is shutting down.
            let _ = tx.send(LoadOutcome { ticket, result });
            wake();
        })?;
    Ok(handle)
}

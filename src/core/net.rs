// src/core/net.rs
//
// One blocking HTTP GET of the directory document. Runs on a worker thread
// (see fetch::spawn_load); never touches shared state.

use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::consts::USER_AGENT;
use crate::config::options::SourceOptions;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Connect/DNS/timeout/body-read failure.
    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx status.
    #[error("{url} answered HTTP {status}")]
    Response { url: String, status: u16 },

    /// Body is not JSON.
    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The load thread could not be started.
    #[error("could not start load worker: {0}")]
    Worker(#[from] std::io::Error),
}

fn build_client(opts: &SourceOptions) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(t) = opts.timeout {
        builder = builder.timeout(t);
    }
    builder.build()
}

/// GET `opts.url` and decode the body as JSON. Any JSON shape is accepted
/// here; shape checks belong to the normalizer.
pub fn http_get_json(opts: &SourceOptions) -> Result<Value, LoadError> {
    let url = opts.url.as_str();
    let transport = |source| LoadError::Transport { url: s!(url), source };

    let client = build_client(opts).map_err(transport)?;
    let resp = client.get(url).send().map_err(transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Response { url: s!(url), status: status.as_u16() });
    }

    let body = resp.text().map_err(transport)?;
    serde_json::from_str(&body).map_err(|source| LoadError::Decode { url: s!(url), source })
}

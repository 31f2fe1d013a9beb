// src/config/options.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::engine::{CategoryFilter, SortMode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub view: ViewOptions,
    pub output: OutputOptions,
}

/// Where the directory document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    /// None → transport default.
    pub timeout: Option<Duration>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_ENDPOINT),
            timeout: None,
        }
    }
}

impl SourceOptions {
    /// Defaults, overridden by `PROVIDERS_URL` / `PROVIDERS_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(url) = env::var(ENV_ENDPOINT) {
            let url = url.trim();
            if !url.is_empty() {
                opts.url = s!(url);
            }
        }
        if let Ok(secs) = env::var(ENV_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => opts.timeout = Some(Duration::from_secs(n)),
                _ => logw!("Ignoring {ENV_TIMEOUT_SECS}={secs:?} (expected whole seconds > 0)"),
            }
        }
        opts
    }
}

/// Initial control values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
    Html,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    /// Field delimiter for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// None → stdout.
    pub out_path: Option<PathBuf>,
}

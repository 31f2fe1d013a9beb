// src/cli.rs
//
// Command-line front end. Same session controller as the GUI; loads run
// inline on this thread and every render goes through WriterPresenter.

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, bail, eyre};

use crate::config::consts::{DEFAULT_ENDPOINT, ENV_ENDPOINT, ENV_TIMEOUT_SECS};
use crate::config::options::{AppOptions, OutputFormat, OutputOptions, SourceOptions, ViewOptions};
use crate::engine::{CategoryFilter, SortMode};
use crate::fetch::{self, LoadOutcome};
use crate::file;
use crate::output::WriterPresenter;
use crate::present::{LoadStatus, Presenter};
use crate::schedule::LoadTicket;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "provider_dir", version)]
#[command(about = "Browse the service-provider directory from the terminal")]
pub struct Args {
    /// Directory document URL
    #[arg(long, env = ENV_ENDPOINT, default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long, env = ENV_TIMEOUT_SECS)]
    pub timeout: Option<u64>,

    /// Free-text search (company, contact, category, specialty, service area)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact category; omit or pass "any" for all
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// name | rating | category (anything else keeps document order)
    #[arg(long, default_value = "name")]
    pub sort: String,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Leave out the header row (csv/tsv)
    #[arg(long)]
    pub no_headers: bool,

    /// Print the category list and exit
    #[arg(long)]
    pub list_categories: bool,

    /// Keep running and re-render after every automatic refresh
    #[arg(long)]
    pub watch: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Csv,
    Tsv,
    Json,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Csv => OutputFormat::Csv,
            Format::Tsv => OutputFormat::Tsv,
            Format::Json => OutputFormat::Json,
            Format::Html => OutputFormat::Html,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            source: SourceOptions {
                url: self.url.trim().to_string(),
                timeout: self.timeout.filter(|&n| n > 0).map(Duration::from_secs),
            },
            view: ViewOptions {
                search: self.search.clone(),
                category: CategoryFilter::from_control(&self.category),
                sort: SortMode::from_key(&self.sort),
            },
            output: OutputOptions {
                format: self.format.into(),
                out_path: self.out.clone(),
            },
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.to_options();
    logf!(
        "CLI: url={} format={:?} sort={} watch={}",
        opts.source.url,
        opts.output.format,
        opts.view.sort.key(),
        args.watch
    );

    let mut session = Session::new(opts.view.clone());
    let first = session.start(Instant::now());
    if !args.watch {
        session.stop();
    }
    load_inline(&mut session, &opts.source, first);

    if args.list_categories {
        return list_categories(&session);
    }

    render(&session, &opts.output, !args.no_headers)?;

    if !args.watch {
        if let LoadStatus::Error(msg) = session.status() {
            bail!("load failed: {msg}");
        }
        return Ok(());
    }

    loop {
        let now = Instant::now();
        let wait = session.next_wake(now).ok_or_else(|| eyre!("auto refresh is not running"))?;
        thread::sleep(wait);

        if let Some(ticket) = session.tick(Instant::now()) {
            load_inline(&mut session, &opts.source, Some(ticket));
            render(&session, &opts.output, !args.no_headers)?;
        }
    }
}

fn load_inline(session: &mut Session, source: &SourceOptions, ticket: Option<LoadTicket>) {
    let Some(ticket) = ticket else { return };
    let result = fetch::collect_providers(source);
    session.finish_load(LoadOutcome { ticket, result }, Local::now());
}

fn list_categories(session: &Session) -> Result<()> {
    if let LoadStatus::Error(msg) = session.status() {
        bail!("load failed: {msg}");
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for c in session.view_model().categories {
        writeln!(out, "{c}")?;
    }
    Ok(())
}

fn render(session: &Session, output: &OutputOptions, include_headers: bool) -> Result<()> {
    let view = session.view_model();
    match &output.out_path {
        Some(path) => {
            let path = if path.extension().is_none() {
                path.with_extension(output.format.ext())
            } else {
                path.clone()
            };
            let mut p = WriterPresenter::new(Vec::new(), output.format).include_headers(include_headers);
            p.present(&view)?;
            let written = file::write_output(&path, &p.into_inner())?;
            eprintln!("Wrote {} ({})", written.display(), view.count_label());
        }
        None => {
            let stdout = io::stdout();
            let mut p = WriterPresenter::new(stdout.lock(), output.format).include_headers(include_headers);
            p.present(&view)?;
        }
    }
    Ok(())
}

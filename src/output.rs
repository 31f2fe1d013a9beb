// src/output.rs
//
// Text-stream presenter for the CLI. Renders one ViewModel per call in the
// configured format; asks for nothing back.

use std::io::Write;

use serde::Serialize;

use crate::config::options::OutputFormat;
use crate::core::html;
use crate::data::Provider;
use crate::delimited;
use crate::file::OutputError;
use crate::intent::Intent;
use crate::present::{Body, Presenter, ViewModel, stars};

pub struct WriterPresenter<W: Write> {
    out: W,
    format: OutputFormat,
    include_headers: bool,
}

impl<W: Write> WriterPresenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format, include_headers: true }
    }

    pub fn include_headers(mut self, yes: bool) -> Self {
        self.include_headers = yes;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for WriterPresenter<W> {
    type Error = OutputError;

    fn present(&mut self, view: &ViewModel<'_>) -> Result<Vec<Intent>, OutputError> {
        match self.format {
            OutputFormat::Text => write_text(&mut self.out, view)?,
            OutputFormat::Csv | OutputFormat::Tsv => {
                let delim = self.format.delim().unwrap_or(',');
                delimited::write_providers(&mut self.out, view.providers.iter().copied(), delim, self.include_headers)?;
            }
            OutputFormat::Json => {
                let doc = JsonView::from(view);
                serde_json::to_writer_pretty(&mut self.out, &doc)?;
                writeln!(self.out)?;
            }
            OutputFormat::Html => self.out.write_all(html::render_document(view).as_bytes())?,
        }
        self.out.flush()?;
        Ok(Vec::new())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
    total: usize,
    shown: usize,
    categories: &'a [&'a str],
    providers: &'a [&'a Provider],
}

impl<'a> From<&'a ViewModel<'a>> for JsonView<'a> {
    fn from(v: &'a ViewModel<'a>) -> Self {
        let error = match v.status {
            crate::present::LoadStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        };
        Self {
            status: v.status.label(),
            error,
            last_updated: v.last_updated.map(|t| t.to_rfc3339()),
            total: v.total,
            shown: v.providers.len(),
            categories: &v.categories,
            providers: &v.providers,
        }
    }
}

fn write_text<W: Write>(out: &mut W, view: &ViewModel<'_>) -> std::io::Result<()> {
    writeln!(out, "{}", view.status_line())?;

    match view.body() {
        Body::Loading => writeln!(out, "Loading providers…")?,
        Body::Error(msg) => writeln!(out, "Could not load providers: {msg}")?,
        Body::Empty => writeln!(out, "No providers match the current filters.")?,
        Body::Providers(list) => {
            writeln!(out, "{}", view.count_label())?;
            for p in list {
                writeln!(out)?;
                write_card(out, p)?;
            }
        }
    }
    Ok(())
}

fn write_card<W: Write>(out: &mut W, p: &Provider) -> std::io::Result<()> {
    writeln!(out, "{}  {}", p.company, stars(p.rating))?;
    writeln!(out, "  [{}]", p.category)?;
    let fields = [
        ("Specialty", &p.specialty),
        ("Contact", &p.contact),
        ("Phone", &p.phone),
        ("Email", &p.email),
        ("Location", &p.location),
        ("Service area", &p.service_area),
    ];
    for (label, value) in fields.iter().filter(|(_, v)| !v.is_empty()) {
        writeln!(out, "  {label}: {value}")?;
    }
    if !p.testimonial.is_empty() {
        writeln!(out, "  \"{}\"", p.testimonial)?;
    }
    Ok(())
}

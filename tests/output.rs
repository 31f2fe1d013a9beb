// tests/output.rs
//
// CLI presenter formats and markup escaping.

use std::time::Instant;

use chrono::Local;
use serde_json::json;

use provider_dir::config::options::{OutputFormat, ViewOptions};
use provider_dir::core::html;
use provider_dir::fetch::LoadOutcome;
use provider_dir::intent::Intent;
use provider_dir::output::WriterPresenter;
use provider_dir::present::Presenter;
use provider_dir::session::Session;
use provider_dir::specs::normalize;

fn session_with(doc: serde_json::Value) -> Session {
    let mut s = Session::new(ViewOptions::default());
    let ticket = s.start(Instant::now()).unwrap();
    s.finish_load(LoadOutcome { ticket, result: Ok(normalize(&doc)) }, Local::now());
    s.stop();
    s
}

fn render(s: &Session, format: OutputFormat) -> String {
    let mut p = WriterPresenter::new(Vec::new(), format);
    let intents = p.present(&s.view_model()).unwrap();
    assert!(intents.is_empty());
    String::from_utf8(p.into_inner()).unwrap()
}

#[test]
fn html_escapes_provider_fields() {
    let s = session_with(json!([
        { "Company": "<script>alert('x')</script>", "Testimonial": "Fast & \"cheap\"" },
    ]));
    let out = render(&s, OutputFormat::Html);
    assert!(!out.contains("<script>"));
    assert!(out.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(out.contains("Fast &amp; &quot;cheap&quot;"));
    assert!(out.contains("Showing 1 of 1 provider"));
}

#[test]
fn empty_result_renders_empty_message() {
    let mut s = session_with(json!([{ "Company": "Acme" }]));
    s.handle(Intent::CategoryChanged(provider_dir::engine::CategoryFilter::Exact("Nope".into())), Instant::now());

    let out = render(&s, OutputFormat::Html);
    assert!(out.contains("No providers match the current filters."));
    assert!(!out.contains("provider-card"));

    let text = render(&s, OutputFormat::Text);
    assert!(text.contains("No providers match the current filters."));
}

#[test]
fn text_lists_cards_with_stars() {
    let s = session_with(json!([
        { "Company": "Beta Plumbing", "Category": "Home Services", "Rating": 2, "number": "5551234567" },
        { "Company": "Acme Roofing", "Rating": 5 },
    ]));
    let out = render(&s, OutputFormat::Text);
    let acme = out.find("Acme Roofing  ★★★★★").unwrap();
    let beta = out.find("Beta Plumbing  ★★☆☆☆").unwrap();
    assert!(acme < beta);
    assert!(out.contains("  Phone: (555) 123-4567"));
    assert!(out.contains("Showing 2 of 2 providers"));
}

#[test]
fn tsv_has_header_and_visible_rows() {
    let s = session_with(json!([
        { "Company": "Acme, Inc.", "Rating": 4 },
    ]));
    let out = render(&s, OutputFormat::Tsv);
    let mut lines = out.lines();
    assert_eq!(lines.next().unwrap().split('\t').next(), Some("Company"));
    let row: Vec<&str> = lines.next().unwrap().split('\t').collect();
    assert_eq!(row[0], "Acme, Inc.");
    assert_eq!(row[5], "Other");
    assert_eq!(row[9], "4");
    assert!(lines.next().is_none());

    let csv = render(&s, OutputFormat::Csv);
    assert!(csv.contains("\"Acme, Inc.\""));
}

#[test]
fn json_view_shape() {
    let s = session_with(json!([
        { "Company": "Acme", "Category": "Roofing", "Service_Area": "Metro" },
    ]));
    let out = render(&s, OutputFormat::Json);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["status"], "Ready");
    assert_eq!(v["total"], 1);
    assert_eq!(v["shown"], 1);
    assert_eq!(v["categories"], json!(["Roofing"]));
    assert_eq!(v["providers"][0]["serviceArea"], "Metro");
    assert!(v.get("error").is_none());
}

#[test]
fn card_skips_blank_fields() {
    let providers = normalize(&json!([{ "Company": "Acme" }]));
    let card = html::render_card(&providers[0]);
    assert!(card.contains("<h3>Acme</h3>"));
    assert!(!card.contains("<dt>Phone</dt>"));
    assert!(!card.contains("blockquote"));
}

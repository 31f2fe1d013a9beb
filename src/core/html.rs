// src/core/html.rs
//
// Markup output. Every provider field is untrusted sheet text and goes
// through `escape` before it lands in a document.

use std::borrow::Cow;
use std::fmt::Write;

use crate::data::Provider;
use crate::present::{Body, ViewModel, stars};

/// Escape `& < > " '` for element text and quoted attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// One provider card.
pub fn render_card(p: &Provider) -> String {
    let mut out = s!();
    let _ = writeln!(out, r#"<article class="provider-card">"#);
    let _ = writeln!(
        out,
        r#"  <header><h3>{}</h3><span class="rating" title="{} of 5">{}</span></header>"#,
        escape(&p.company),
        p.rating,
        stars(p.rating)
    );
    let _ = writeln!(out, r#"  <p class="category">{}</p>"#, escape(&p.category));

    let fields: [(&str, &str); 6] = [
        ("Specialty", &p.specialty),
        ("Contact", &p.contact),
        ("Phone", &p.phone),
        ("Email", &p.email),
        ("Location", &p.location),
        ("Service area", &p.service_area),
    ];
    let _ = writeln!(out, "  <dl>");
    for (label, value) in fields.iter().filter(|(_, v)| !v.is_empty()) {
        let _ = writeln!(out, "    <dt>{}</dt><dd>{}</dd>", label, escape(value));
    }
    let _ = writeln!(out, "  </dl>");

    if !p.testimonial.is_empty() {
        let _ = writeln!(out, "  <blockquote>{}</blockquote>", escape(&p.testimonial));
    }
    let _ = writeln!(out, "</article>");
    out
}

/// Standalone page for the current view: status, counter, cards or the
/// empty/error/loading message.
pub fn render_document(view: &ViewModel<'_>) -> String {
    let mut out = s!("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>Provider Directory</title>\n</head>\n<body>");
    let _ = writeln!(out, r#"<p class="status">{}</p>"#, escape(&view.status_line()));

    match view.body() {
        Body::Loading => {
            let _ = writeln!(out, r#"<p class="loading">Loading providers…</p>"#);
        }
        Body::Error(msg) => {
            let _ = writeln!(out, r#"<p class="error">Could not load providers: {}</p>"#, escape(msg));
        }
        Body::Empty => {
            let _ = writeln!(out, r#"<p class="empty">No providers match the current filters.</p>"#);
        }
        Body::Providers(list) => {
            let _ = writeln!(out, r#"<p class="count">{}</p>"#, escape(&view.count_label()));
            let _ = writeln!(out, r#"<section class="provider-grid">"#);
            for p in list {
                out.push_str(&render_card(p));
            }
            let _ = writeln!(out, "</section>");
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_chars() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
    }
}

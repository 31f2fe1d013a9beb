// src/specs/providers.rs
//
// Directory document → canonical providers.
//
// The sheet behind the endpoint is hand-edited, so records arrive with
// missing keys, odd spacing, and numbers where strings are expected
// (and vice versa). Everything here is total: no input makes it fail.

use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::{COMPANY_PLACEHOLDER, DEFAULT_RATING, MAX_RATING, MIN_RATING, OTHER_CATEGORY};
use crate::core::sanitize::{format_phone, parse_int_prefix};
use crate::data::Provider;

/// One record as published. Key spelling follows the source sheet's headers.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawProviderRecord {
    #[serde(rename = "Company")]
    pub company: Option<Value>,
    #[serde(rename = "Contact")]
    pub contact: Option<Value>,
    #[serde(rename = "email")]
    pub email: Option<Value>,
    #[serde(rename = "number")]
    pub phone: Option<Value>,
    #[serde(rename = "Main Location")]
    pub location: Option<Value>,
    #[serde(rename = "Category")]
    pub category: Option<Value>,
    #[serde(rename = "Specialty")]
    pub specialty: Option<Value>,
    #[serde(rename = "Service_Area")]
    pub service_area: Option<Value>,
    #[serde(rename = "Testimonial")]
    pub testimonial: Option<Value>,
    #[serde(rename = "Rating")]
    pub rating: Option<Value>,
}

impl RawProviderRecord {
    /// Non-objects become a record with every field missing.
    pub fn from_value(v: &Value) -> Self {
        if !v.is_object() {
            return Self::default();
        }
        Self::deserialize(v).unwrap_or_default()
    }

    pub fn to_provider(&self) -> Provider {
        Provider {
            company: or_default(text(&self.company), COMPANY_PLACEHOLDER),
            contact: text(&self.contact),
            email: text(&self.email),
            phone: format_phone(&raw_text(&self.phone)),
            location: text(&self.location),
            category: or_default(text(&self.category), OTHER_CATEGORY),
            specialty: text(&self.specialty),
            service_area: text(&self.service_area),
            testimonial: text(&self.testimonial),
            rating: rating(&self.rating),
        }
    }
}

/// Normalize a decoded document. Anything but an array yields no providers.
pub fn normalize(doc: &Value) -> Vec<Provider> {
    let Some(items) = doc.as_array() else {
        logw!("Normalize: expected a JSON array, got {}; using an empty list", json_kind(doc));
        return Vec::new();
    };

    items
        .iter()
        .map(|v| RawProviderRecord::from_value(v).to_provider())
        .collect()
}

/* ---------- helpers ---------- */

fn text(v: &Option<Value>) -> String {
    match v {
        Some(Value::String(s)) => s!(s.trim()),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => s!(),
    }
}

/// Like `text`, but strings come through untrimmed.
fn raw_text(v: &Option<Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        _ => text(v),
    }
}

fn or_default(s: String, fallback: &str) -> String {
    if s.is_empty() { s!(fallback) } else { s }
}

/// Integer-prefix parse, clamped to 1..=5; unparsable → 3.
fn rating(v: &Option<Value>) -> u8 {
    let parsed = match v {
        Some(Value::String(s)) => parse_int_prefix(s),
        // `as` saturates, and truncates toward zero
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    };

    match parsed {
        Some(n) => n.clamp(MIN_RATING, MAX_RATING) as u8,
        None => DEFAULT_RATING,
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one(v: Value) -> Provider {
        RawProviderRecord::from_value(&v).to_provider()
    }

    #[test]
    fn missing_fields_get_defaults() {
        let p = one(json!({}));
        assert_eq!(p.company, COMPANY_PLACEHOLDER);
        assert_eq!(p.category, OTHER_CATEGORY);
        assert_eq!(p.rating, 3);
        assert_eq!(p.contact, "");
        assert_eq!(p.phone, "");
    }

    #[test]
    fn blank_company_and_category_fall_back() {
        let p = one(json!({ "Company": "   ", "Category": "" }));
        assert_eq!(p.company, COMPANY_PLACEHOLDER);
        assert_eq!(p.category, OTHER_CATEGORY);
    }

    #[test]
    fn rating_table() {
        let cases = [
            (json!(-5), 1),
            (json!(0), 1),
            (json!(7), 5),
            (json!("abc"), 3),
            (json!(3.7), 3),
            (json!(4), 4),
            (json!("9"), 5),
            (json!("3.7"), 3),
            (json!(" 2 "), 2),
            (json!(null), 3),
            (json!(true), 3),
        ];
        for (input, want) in cases {
            let p = one(json!({ "Rating": input.clone() }));
            assert_eq!(p.rating, want, "rating for {input}");
        }
    }

    #[test]
    fn numeric_phone_is_formatted() {
        let p = one(json!({ "number": 5551234567u64 }));
        assert_eq!(p.phone, "(555) 123-4567");
    }

    #[test]
    fn unformattable_phone_kept_verbatim() {
        assert_eq!(one(json!({ "number": " 12345 " })).phone, " 12345 ");
        assert_eq!(one(json!({ "number": " 555 123 4567 " })).phone, "(555) 123-4567");
    }

    #[test]
    fn keys_with_spaces_and_underscores_map() {
        let p = one(json!({
            "Main Location": "Duluth",
            "Service_Area": "Northland",
            "email": "a@b.c",
            "Testimonial": "Great work",
            "Specialty": "Shingles",
        }));
        assert_eq!(p.location, "Duluth");
        assert_eq!(p.service_area, "Northland");
        assert_eq!(p.email, "a@b.c");
        assert_eq!(p.testimonial, "Great work");
        assert_eq!(p.specialty, "Shingles");
    }

    #[test]
    fn non_array_document_is_empty() {
        assert!(normalize(&json!({ "Company": "X" })).is_empty());
        assert!(normalize(&json!(null)).is_empty());
        assert!(normalize(&json!("nope")).is_empty());
    }

    #[test]
    fn non_object_elements_normalize_to_defaults() {
        let out = normalize(&json!([42, "x", { "Company": "Real Co" }]));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].company, COMPANY_PLACEHOLDER);
        assert_eq!(out[1].category, OTHER_CATEGORY);
        assert_eq!(out[2].company, "Real Co");
    }
}

// src/core/sanitize.rs

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Keep only ASCII digits.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `(AAA) BBB-CCCC` when exactly ten digits can be pulled out of `raw`;
/// otherwise `raw` unchanged.
pub fn format_phone(raw: &str) -> String {
    let d = digits_only(raw);
    if d.len() != 10 {
        return s!(raw);
    }
    format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..])
}

/// Sort key approximating a locale collation: accents and case are ignored
/// first, then raw code points break ties so the order stays total.
pub fn collation_key(s: &str) -> (String, String) {
    let folded: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    (folded, s!(s))
}

/// Leading integer of `s`, JavaScript `parseInt` style: leading whitespace,
/// optional sign, then decimal digits up to the first non-digit.
/// Saturates instead of overflowing.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (neg, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let mut seen = false;
    let mut n: i64 = 0;
    for b in rest.bytes() {
        if !b.is_ascii_digit() { break; }
        seen = true;
        n = n.saturating_mul(10).saturating_add((b - b'0') as i64);
    }

    if !seen { return None; }
    Some(if neg { -n } else { n })
}

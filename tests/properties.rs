// tests/properties.rs
use proptest::prelude::*;
use serde_json::json;

use provider_dir::core::sanitize::format_phone;
use provider_dir::specs::normalize;

proptest! {
    #[test]
    fn numeric_rating_always_in_range(r in any::<i64>()) {
        let p = &normalize(&json!([{ "Rating": r }]))[0];
        prop_assert!((1..=5).contains(&p.rating));
        if (1..=5).contains(&r) {
            prop_assert_eq!(p.rating as i64, r);
        }
    }

    #[test]
    fn float_rating_truncates_then_clamps(r in -100.0f64..100.0) {
        let p = &normalize(&json!([{ "Rating": r }]))[0];
        let expected = (r.trunc() as i64).clamp(1, 5) as u8;
        prop_assert_eq!(p.rating, expected);
    }

    #[test]
    fn text_rating_always_in_range(s in ".{0,12}") {
        let p = &normalize(&json!([{ "Rating": s }]))[0];
        prop_assert!((1..=5).contains(&p.rating));
    }

    #[test]
    fn ten_digit_phones_format(d in "[0-9]{10}", sep in "[ .()-]{0,2}") {
        let raw = format!("{}{}{}{}{}", &d[..3], sep, &d[3..6], sep, &d[6..]);
        let want = format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]);
        prop_assert_eq!(format_phone(&raw), want);
    }

    #[test]
    fn other_digit_counts_unchanged(d in "[0-9]{0,9}|[0-9]{11,14}") {
        prop_assert_eq!(format_phone(&d), d.clone());
    }

    #[test]
    fn company_and_category_never_blank(c in "[ \t]{0,3}[a-z]{0,5}[ \t]{0,3}", k in "[ ]{0,2}[A-Za-z]{0,6}") {
        let p = &normalize(&json!([{ "Company": c, "Category": k }]))[0];
        prop_assert!(!p.company.trim().is_empty());
        prop_assert!(!p.category.trim().is_empty());
    }
}

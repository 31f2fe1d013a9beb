// benches/filter_sort.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use provider_dir::{
    engine::{self, CategoryFilter, SortMode, ViewState},
    specs,
};

const CATEGORIES: [&str; 6] = ["Landscaping", "Mortgage Lender", "Roofing", "Plumbing", "Électricien", ""];

/// Synthetic sheet export, roughly the shape of a real one.
fn sample_doc(n: usize) -> Value {
    let rows: Vec<Value> = (0..n)
        .map(|i| {
            let suffix = if i % 3 == 0 { "Ávila" } else { "Co" };
            let area = if i % 2 == 0 { "North County" } else { "Metro" };
            json!({
                "Company": format!("Provider {:05} {}", (i * 7919) % n, suffix),
                "Contact": format!("Contact {i}"),
                "email": format!("p{i}@example.test"),
                "number": format!("555{:07}", i),
                "Main Location": "Springfield",
                "Category": CATEGORIES[i % CATEGORIES.len()],
                "Specialty": "General",
                "Service_Area": area,
                "Testimonial": "Great work",
                "Rating": (i % 7).to_string(),
            })
        })
        .collect();
    Value::Array(rows)
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = sample_doc(2_000);

    c.bench_function("normalize_2k", |b| {
        b.iter(|| black_box(specs::normalize(black_box(&doc)).len()))
    });

    let providers = specs::normalize(&doc);

    for (name, view) in [
        ("sort_name", ViewState::new("", CategoryFilter::Any, SortMode::Name)),
        ("sort_rating", ViewState::new("", CategoryFilter::Any, SortMode::Rating)),
        ("sort_category", ViewState::new("", CategoryFilter::Any, SortMode::Category)),
        ("search_north", ViewState::new("north", CategoryFilter::Any, SortMode::Name)),
        ("category_roofing", ViewState::new("", CategoryFilter::Exact("Roofing".into()), SortMode::Name)),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| black_box(engine::apply(black_box(&providers), &view).len()))
        });
    }

    c.bench_function("derive_categories", |b| {
        b.iter(|| black_box(engine::derive_categories(black_box(&providers)).len()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);

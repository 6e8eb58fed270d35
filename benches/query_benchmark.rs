//! Query engine benchmarks: filtering and sorting a large compendium.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lorebook::model::{OneOrMany, Scalar, Spell};
use lorebook::state::SortOrder;
use lorebook::view_state::query;

/// Generate a large spell list with varied names and levels.
fn generate_spells(count: usize) -> Vec<Spell> {
    let schools = ["A", "C", "D", "EN", "EV", "I", "N", "T"];
    (0..count)
        .map(|i| Spell {
            name: format!("Spell of the {} Word {}", schools[i % schools.len()], i),
            level: Scalar::Int((i % 10) as i64),
            classes: Some("Wizard, Sorcerer".to_string()),
            time: Some("1 action".to_string()),
            duration: Some("Instantaneous".to_string()),
            range: Some("60 feet".to_string()),
            components: Some("V, S".to_string()),
            school: Some(schools[i % schools.len()].to_string()),
            text: OneOrMany::One(format!("Rules text for spell {i}.")),
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let spells = generate_spells(5_000);

    c.bench_function("query/unfiltered_default_sort", |b| {
        b.iter(|| query(black_box(&spells), "", None))
    });

    c.bench_function("query/filtered", |b| {
        b.iter(|| query(black_box(&spells), black_box("word 3"), None))
    });

    let by_level = SortOrder::ascending("level");
    c.bench_function("query/sorted_by_level", |b| {
        b.iter(|| query(black_box(&spells), "", Some(black_box(&by_level))))
    });

    let by_school_desc = SortOrder::descending("school");
    c.bench_function("query/filtered_and_sorted", |b| {
        b.iter(|| query(black_box(&spells), black_box("spell"), Some(black_box(&by_school_desc))))
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);

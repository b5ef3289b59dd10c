//! Affinity Benchmark Suite
//!
//! The UI polls tier and percentage every frame while a scene is active, so
//! the read path has to stay well under a microsecond:
//!   ui_poll_full_roster ............ per-frame read of every character
//!   add_points_with_tier_change .... scripted point change crossing a band
//!   script_line_addlove ............ parse + execute one `@addlove` line

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use affinity_core::{DEFAULT_ROSTER, RelationshipStore};
use affinity_script::{BufferSink, ScriptSession};

fn make_store() -> RelationshipStore {
    let mut store = RelationshipStore::with_roster(DEFAULT_ROSTER);
    for (i, name) in DEFAULT_ROSTER.iter().enumerate() {
        store.add_points(name, i32::try_from(i * 20).unwrap_or(0));
    }
    store
}

/// Benchmark: one frame of UI polling across the whole roster.
fn bench_ui_poll(c: &mut Criterion) {
    let store = make_store();
    c.bench_function("ui_poll_full_roster", |b| {
        b.iter(|| {
            for name in DEFAULT_ROSTER {
                black_box(store.tier(black_box(name)));
                black_box(store.percentage(black_box(name)));
            }
        });
    });
}

/// Benchmark: drop below and climb back over the Friend boundary (40).
fn bench_add_points(c: &mut Criterion) {
    let mut store = make_store();
    c.bench_function("add_points_with_tier_change", |b| {
        b.iter(|| {
            store.add_points(black_box("character3"), black_box(-5));
            store.add_points(black_box("character3"), black_box(5));
            black_box(store.consume_tier_up_reaction("character3"));
        });
    });
}

/// Benchmark: parse and execute a single script line.
fn bench_script_line(c: &mut Criterion) {
    let mut session = ScriptSession::new(make_store(), BufferSink::new());
    c.bench_function("script_line_addlove", |b| {
        b.iter(|| {
            black_box(session.run_line(black_box("@addlove characterName:brownsugar points:1")));
        });
    });
}

criterion_group!(benches, bench_ui_poll, bench_add_points, bench_script_line);
criterion_main!(benches);

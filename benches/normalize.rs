use criterion::{black_box, criterion_group, criterion_main, Criterion};

use holdem_range::{compute_stats, normalize_raw, Action, ActionWeight, Range, RawAction};

fn normalizing_raw_entries(c: &mut Criterion) {
    let raw = vec![
        RawAction::new("open", 33.333),
        RawAction::new("CALL", 33.333),
        RawAction::new("LIMP", 10.0),
        RawAction::new("fold", 33.333),
    ];
    c.bench_function("normalize a 4-entry raw list", |b| {
        b.iter(|| normalize_raw(black_box(&raw)))
    });
}

fn painting_full_grid(c: &mut Criterion) {
    let mix = [
        ActionWeight::new(Action::Open, 60.0),
        ActionWeight::new(Action::Fold, 40.0),
    ];
    c.bench_function("paint all 169 hands", |b| {
        b.iter(|| {
            let mut range = Range::new("bench");
            for cell in holdem_range::enumerate_hands() {
                range = range.set_hand(cell.key.as_str(), black_box(&mix));
            }
            range
        })
    });
}

fn computing_full_grid_stats(c: &mut Criterion) {
    let mut range = Range::new("bench");
    for cell in holdem_range::enumerate_hands() {
        range = range.set_hand(
            cell.key.as_str(),
            &[
                ActionWeight::new(Action::Open, 60.0),
                ActionWeight::new(Action::Fold, 40.0),
            ],
        );
    }
    c.bench_function("stats over 169 painted hands", |b| {
        b.iter(|| compute_stats(black_box(&range)))
    });
}

criterion_group!(
    benches,
    normalizing_raw_entries,
    painting_full_grid,
    computing_full_grid_stats
);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use diabolo_judge::ranking::{panel_standings, PanelEntry};
use diabolo_judge::rules::{RuleBook, Tier};
use diabolo_judge::scorer::Scorer;
use diabolo_judge::selection::Selection;
use std::hint::black_box;

fn full_selection(rules: &RuleBook) -> Selection {
    Selection::new()
        .select_trick(rules, "Vertax", Tier::D4)
        .and_then(|s| s.toggle_level(rules, 5))
        .and_then(|s| s.toggle_feature(rules, "Leg Pass"))
        .and_then(|s| s.toggle_feature(rules, "Turn-1080"))
        .and_then(|s| s.toggle_feature(rules, "Blind"))
        .and_then(|s| s.set_execution_grade(rules, 2))
        .and_then(|s| s.toggle_deduction(rules, "Tangle"))
        .and_then(|s| s.toggle_deduction(rules, "Stick Drop"))
        .expect("valid selection")
}

fn panel(n: usize) -> Vec<PanelEntry> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            PanelEntry {
                name: format!("c{}", i),
                technical: [f % 17.0, f % 23.0, f % 31.0],
                performance: [f % 7.0, f % 11.0],
                disqualified: i % 13 == 0,
            }
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::default();
    let selection = full_selection(&scorer.rules);

    c.bench_function("final_score (trick + 3 features + 2 deductions)", |b| {
        b.iter(|| scorer.final_score(black_box(&selection)))
    });

    c.bench_function("preview (score + identifier + description)", |b| {
        b.iter(|| scorer.preview(black_box(&selection)))
    });

    let entries = panel(500);
    c.bench_function("panel_standings (500 entrants)", |b| {
        b.iter(|| panel_standings(black_box(&entries), 70.0))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

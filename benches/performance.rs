use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palletplan::planner::{breakdown, plan, LoadPlanInput};
use palletplan::tui::action::Action;
use palletplan::tui::reducer::reduce;
use palletplan::tui::state::AppState;
use palletplan::tui::view;
use ratatui::{buffer::Buffer, layout::Rect};
use std::time::SystemTime;

/// Inputs covering both binding constraints
fn sample_inputs() -> Vec<LoadPlanInput> {
    vec![
        LoadPlanInput::new(12000.0, 48, 15.0, 1200.0),
        LoadPlanInput::new(24000.0, 100, 5.0, 1000.0),
        LoadPlanInput::new(0.0, 40, 12.5, 1500.0),
        LoadPlanInput::new(987_654.3, 56, 21.7, 2000.0),
    ]
}

/// Benchmark the planner itself
fn bench_planner(c: &mut Criterion) {
    let inputs = sample_inputs();

    let mut group = c.benchmark_group("planner");

    group.bench_function("plan", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = plan(black_box(input));
            }
        })
    });

    group.bench_function("breakdown", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = breakdown(black_box(input));
            }
        })
    });

    group.bench_function("invalid_input", |b| {
        let input = LoadPlanInput::new(12000.0, 0, 15.0, 1200.0);
        b.iter(|| plan(black_box(&input)))
    });

    group.finish();
}

/// Benchmark reducer action dispatch
fn bench_reducer_dispatch(c: &mut Criterion) {
    let state = AppState::default();

    let mut group = c.benchmark_group("reducer");

    group.bench_function("navigate_tab_right", |b| {
        b.iter(|| reduce(black_box(state.clone()), black_box(Action::NavigateTabRight)))
    });

    group.bench_function("cycle_preset", |b| {
        b.iter(|| reduce(black_box(state.clone()), black_box(Action::CyclePreset)))
    });

    group.bench_function("edit_and_commit", |b| {
        b.iter(|| {
            let mut s = black_box(state.clone());
            for action in [
                Action::StartEdit,
                Action::EditChar('9'),
                Action::EditChar('0'),
                Action::EditChar('0'),
                Action::CommitEdit,
            ] {
                s = reduce(s, action);
            }
            s
        })
    });

    group.bench_function("tick", |b| {
        b.iter(|| {
            reduce(
                black_box(state.clone()),
                black_box(Action::Tick(SystemTime::UNIX_EPOCH)),
            )
        })
    });

    group.finish();
}

/// Benchmark rendering a full frame
fn bench_render(c: &mut Criterion) {
    let state = AppState::default();
    let area = Rect::new(0, 0, 120, 40);

    let mut group = c.benchmark_group("render");

    group.bench_function("planner_frame", |b| {
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            view::render(black_box(&state), "12:00:00", area, &mut buf);
            buf
        })
    });

    group.bench_function("clone_full_state", |b| b.iter(|| black_box(state.clone())));

    group.finish();
}

criterion_group!(benches, bench_planner, bench_reducer_dispatch, bench_render);
criterion_main!(benches);

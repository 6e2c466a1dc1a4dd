//! Benchmarks for the check button's per-frame work.

use checkmark_core::{RecordingCanvas, Rect, Widget};
use checkmark_widgets::{select_group, CheckButton};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const FRAME: f64 = 1.0 / 60.0;

// =============================================================================
// Timeline
// =============================================================================

fn bench_build_select_group(c: &mut Criterion) {
    c.bench_function("select_group_build", |b| {
        b.iter(|| select_group(black_box(0.5)));
    });
}

fn bench_full_select_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_timeline");

    for side in [50.0f32, 200.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, &side| {
            b.iter(|| {
                let mut button = CheckButton::new();
                button.layout(Rect::new(0.0, 0.0, side, side));
                button.set_selected(true);
                let mut canvas = RecordingCanvas::new();
                while button.is_animating() {
                    button.tick(FRAME);
                    button.paint(&mut canvas);
                }
                black_box(canvas.command_count())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Paint
// =============================================================================

fn bench_paint_resting(c: &mut Criterion) {
    let mut button = CheckButton::new();
    button.layout(Rect::new(0.0, 0.0, 50.0, 50.0));

    c.bench_function("check_button_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            black_box(&button).paint(&mut canvas);
            canvas
        });
    });
}

criterion_group!(
    benches,
    bench_build_select_group,
    bench_full_select_timeline,
    bench_paint_resting,
);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_chart_axis::{AxisPadding, AxisRange, TickConfig, Ticks};

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_chart_axis");

    let mut forced = TickConfig::default();
    forced.set_label_count_forced(11, true);
    let mut centered = TickConfig::default();
    centered.set_center_labels(true);

    for &(name, min, max) in &[
        ("unit", 0.0_f64, 1.0_f64),
        ("wide", -12_345.0, 987_654.0),
        ("tiny", 0.000_12, 0.000_47),
    ] {
        for (mode, config) in [
            ("default", TickConfig::default()),
            ("forced", forced),
            ("centered", centered),
        ] {
            group.bench_function(format!("compute_{mode}({name})"), |b| {
                b.iter(|| black_box(Ticks::compute(black_box(min), black_box(max), &config)));
            });
        }

        // Reuses the entry buffers across frames, as a chart does while panning.
        group.bench_function(format!("recompute({name})"), |b| {
            let config = TickConfig::default();
            let mut ticks = Ticks::default();
            b.iter(|| {
                ticks.recompute(black_box(min), black_box(max), &config);
                black_box(ticks.len());
            });
        });
    }

    group.bench_function("axis_range_fractional", |b| {
        let mut axis = AxisRange::new(AxisPadding::FRACTIONAL_DEFAULT);
        b.iter(|| {
            axis.calculate(black_box(-3.5), black_box(120.25));
            black_box(axis.range());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);

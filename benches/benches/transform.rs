// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_chart_view::{ChartViewport, Transformer};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn setup() -> (ChartViewport, Transformer) {
    let mut viewport = ChartViewport::new(1_280.0, 720.0);
    viewport.set_margins(48.0, 16.0, 16.0, 32.0);
    viewport.refresh(viewport.zoom_by(2.5, 1.5));

    let mut transformer = Transformer::new();
    transformer.prepare_value_to_pixel_matrix(&viewport, 0.0, 1_000.0, 200.0, -100.0);
    transformer.prepare_offset_matrix(&viewport, false);
    (viewport, transformer)
}

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| Point::new(rng.next_f64() * 1_000.0, rng.next_f64() * 200.0 - 100.0))
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_chart_view");
    let (viewport, transformer) = setup();

    for &n in &[1_000_usize, 100_000] {
        let points = random_points(n, 0xC4A2_0000_0000_0001);

        group.bench_function(format!("point_values_to_pixel(n={n})"), |b| {
            b.iter_batched(
                || points.clone(),
                |mut pts| {
                    transformer.point_values_to_pixel(&viewport, &mut pts);
                    black_box(pts);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("pixels_to_values(n={n})"), |b| {
            b.iter_batched(
                || points.clone(),
                |mut pts| {
                    transformer
                        .pixels_to_values(&viewport, &mut pts)
                        .expect("bench transform is invertible");
                    black_box(pts);
                },
                BatchSize::LargeInput,
            );
        });

        let bars: Vec<Rect> = points
            .iter()
            .map(|p| Rect::new(p.x, 0.0, p.x + 0.8, p.y))
            .collect();
        group.bench_function(format!("rect_values_to_pixel(n={n})"), |b| {
            b.iter_batched(
                || bars.clone(),
                |mut rects| {
                    transformer.rect_values_to_pixel(&viewport, &mut rects);
                    black_box(rects);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("zoom_and_refresh", |b| {
        let mut viewport = viewport.clone();
        let pivot = Point::new(640.0, -360.0);
        b.iter(|| {
            let zoomed = viewport.refresh(viewport.zoom_in(pivot));
            let restored = viewport.refresh(viewport.zoom_out(pivot));
            black_box((zoomed, restored));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);

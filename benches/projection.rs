use atlas_quiz::{GeoPoint, ImageSize, PixelPoint, RobinsonProjector, SCHOOL_ATLAS_ASPECT_RATIO};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn projection_benchmark(c: &mut Criterion) {
    let projector = RobinsonProjector::default();
    let size = ImageSize::from_height(1809.0, SCHOOL_ATLAS_ASPECT_RATIO);

    c.bench_function("project", |b| {
        b.iter(|| projector.project(black_box(GeoPoint::new(47.63, 9.375)), size));
    });

    c.bench_function("unproject", |b| {
        b.iter(|| projector.unproject(black_box(PixelPoint::new(1320.5, 512.25)), size));
    });

    c.bench_function("round_trip_grid", |b| {
        b.iter(|| {
            let mut points = Vec::new();
            for lat in (-80..=80).step_by(10) {
                for lon in (-170..=170).step_by(20) {
                    let pixel = projector.project(GeoPoint::new(lat as f64, lon as f64), size);
                    points.push(projector.unproject(pixel, size));
                }
            }
            points
        });
    });
}

criterion_group!(benches, projection_benchmark);
criterion_main!(benches);

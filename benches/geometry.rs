use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trigon::math::matrix::Matrix;
use trigon::prelude::*;

fn unit_box() -> Volume {
    generate_rectangle(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
        .expect("unit box is valid")
}

/// A row of `count` boxes merged into one volume.
fn box_row(count: usize) -> Volume {
    let mut volume = Volume::new();
    for i in 0..count {
        let mut cell = unit_box();
        cell.translate(Vec3::new(i as f64 * 2.0, 0.0, 0.0));
        for t in cell.triangles() {
            volume.push_triangle(t).expect("box faces are valid");
        }
    }
    volume
}

fn benchmark_generation(c: &mut Criterion) {
    c.bench_function("generate_rectangle", |b| {
        b.iter(|| {
            generate_rectangle(
                black_box(Point3::new(0.0, 0.0, 0.0)),
                black_box(Point3::new(2.0, 1.5, 1.0)),
            )
        });
    });
}

fn benchmark_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let angle = Angle::from_degrees(30.0, 45.0, 60.0);

    for count in [1usize, 10, 100] {
        let volume = box_row(count);

        group.bench_with_input(BenchmarkId::new("translate", count), &volume, |b, v| {
            let mut v = v.clone();
            b.iter(|| {
                v.translate(black_box(Vec3::new(0.5, 0.0, 0.0)));
            });
        });

        group.bench_with_input(BenchmarkId::new("rotate", count), &volume, |b, v| {
            let mut v = v.clone();
            b.iter(|| {
                v.rotate(black_box(&angle)).expect("rotation succeeds");
            });
        });

        group.bench_with_input(BenchmarkId::new("surface_area", count), &volume, |b, v| {
            b.iter(|| black_box(v).surface_area());
        });

        group.bench_with_input(BenchmarkId::new("render_buffer", count), &volume, |b, v| {
            b.iter(|| black_box(v).to_render_buffer());
        });
    }

    group.finish();
}

fn benchmark_matrix(c: &mut Criterion) {
    let a = Matrix::filled(16, 16, 1.5).expect("valid shape");
    let b = Matrix::filled(16, 16, 0.5).expect("valid shape");

    c.bench_function("dot_product_16x16", |bench| {
        bench.iter(|| black_box(&a).dot_product(black_box(&b)));
    });

    c.bench_function("rotation_from_angle", |bench| {
        let angle = Angle::from_degrees(10.0, 20.0, 30.0);
        bench.iter(|| Rotation::from_angle(black_box(&angle)));
    });
}

criterion_group!(benches, benchmark_generation, benchmark_transforms, benchmark_matrix);
criterion_main!(benches);

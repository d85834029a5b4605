use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simd4_math::{Mat4, Quat, Vec4};

fn bench_vec4(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec4");
    let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let b = Vec4::new(2.0, 3.0, 4.0, 5.0);

    group.bench_function("normalize", |bench| bench.iter(|| black_box(a).normalize()));
    group.bench_function("fast_normalize", |bench| bench.iter(|| black_box(a).fast_normalize()));
    group.bench_function("cross", |bench| bench.iter(|| black_box(a).cross(black_box(b))));
    group.bench_function("dot", |bench| bench.iter(|| black_box(a).dot(black_box(b))));
    group.finish();
}

fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");
    let m = Mat4::rotate_y(0.3) * Mat4::translate(Vec4::new(1.0, 2.0, 3.0, 1.0));
    let v = Vec4::new(1.0, 2.0, 3.0, 1.0);

    group.bench_function("mul_vec", |bench| bench.iter(|| black_box(m) * black_box(v)));
    group.bench_function("vec_mul", |bench| bench.iter(|| black_box(v) * black_box(m)));
    group.bench_function("mul_mat", |bench| bench.iter(|| black_box(m) * black_box(m)));
    group.bench_function("transpose", |bench| bench.iter(|| black_box(m).transpose()));
    group.bench_function("look_at", |bench| {
        bench.iter(|| {
            Mat4::look_at(
                black_box(Vec4::new(1.0, 2.0, 3.0, 1.0)),
                black_box(Vec4::new(0.0, 0.0, 0.0, 1.0)),
                black_box(Vec4::Y),
            )
        })
    });
    group.finish();
}

fn bench_quat(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat");
    let a = Quat::from_axis_angle(Vec4::new(1.0, 2.0, 3.0, 0.0), 0.7);
    let b = Quat::from_axis_angle(Vec4::new(-1.0, 0.5, 0.0, 0.0), 1.3);

    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("to_mat4", |bench| bench.iter(|| black_box(a).to_mat4()));
    group.finish();
}

criterion_group!(benches, bench_vec4, bench_mat4, bench_quat);
criterion_main!(benches);

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cuberoot_core::cube_root;

/// Inputs spread over [0, 1e10) with a fixed stride, so runs are comparable.
fn inputs(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| ((i * 7_919) % n) as f64 / n as f64 * 1e10)
        .collect()
}

fn bench_cube_root(c: &mut Criterion) {
    let values = inputs(1_024);

    c.bench_function("cube_root/0..1e10", |b| {
        let mut i = 0;
        b.iter(|| {
            let d = values[i % values.len()];
            i += 1;
            cube_root(black_box(d))
        })
    });

    c.bench_function("cube_root/27", |b| b.iter(|| cube_root(black_box(27.0))));
}

criterion_group!(benches, bench_cube_root);
criterion_main!(benches);

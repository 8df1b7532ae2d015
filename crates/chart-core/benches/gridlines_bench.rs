use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use touchchart_core::{DataPoint, ScaleModel, Series};

fn gen_series(n: usize, amplitude: f64) -> Series {
    (0..n)
        .map(|i| DataPoint::new(format!("p{i}"), (i as f64 * 0.1).sin() * amplitude))
        .collect()
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_model");
    for &amplitude in &[20.0f64, 400.0, 5_000.0] {
        let series = gen_series(365, amplitude);
        group.bench_with_input(BenchmarkId::from_parameter(format!("amp{amplitude}")), &series, |b, s| {
            b.iter(|| black_box(ScaleModel::from_series(s)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scale);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sharecomb::document::sample_cases;
use sharecomb::interpolate::interpolate_at_zero;
use sharecomb::radix::decode;
use sharecomb::reconstruct::{decode_shares, reconstruct, select_shares};

fn radix_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix");
    group.noise_threshold(0.05);

    let long_base_3 = "20120221122211000100210021102001201112121";

    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode(long_base_3, 3).unwrap()))
    });
}

fn interpolation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    group.noise_threshold(0.05);

    let case = sample_cases().into_iter().nth(1).unwrap();
    let shares = select_shares(decode_shares(&case.shares).unwrap(), case.params.k).unwrap();

    group.bench_function("at_zero", |b| {
        b.iter(|| black_box(interpolate_at_zero(&shares).unwrap()))
    });

    group.bench_function("full_case", |b| {
        b.iter(|| black_box(reconstruct(&case).unwrap()))
    });
}

criterion_group!(benches, radix_benchmark, interpolation_benchmark);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tuvi_calendar::{
    VIETNAM_TZ_OFFSET_HOURS, day_can_chi, leap_month, lunar_to_solar, solar_to_lunar,
};

fn conversion_bench(c: &mut Criterion) {
    let tz = VIETNAM_TZ_OFFSET_HOURS;

    let mut group = c.benchmark_group("lunar_conversion");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(black_box(2), black_box(3), black_box(1995), tz))
    });
    group.bench_function("lunar_to_solar", |b| {
        b.iter(|| lunar_to_solar(black_box(13), black_box(10), black_box(2025), true, tz))
    });
    group.bench_function("leap_month", |b| {
        b.iter(|| leap_month(black_box(2025), tz))
    });
    group.finish();
}

fn can_chi_bench(c: &mut Criterion) {
    c.bench_function("day_can_chi", |b| {
        b.iter(|| day_can_chi(black_box(2), black_box(12), black_box(2025)))
    });
}

criterion_group!(benches, conversion_bench, can_chi_bench);
criterion_main!(benches);

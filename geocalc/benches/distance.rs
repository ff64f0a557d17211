use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geocalc::{distance::distance, GeoContext, Point};

fn bench_distance(c: &mut Criterion) {
    let warsaw = Point::new(52.2296756, 21.0122287).unwrap();
    let poznan = Point::new(52.406374, 16.9251681).unwrap();

    c.bench_function("distance_points", |b| {
        b.iter(|| black_box(distance(black_box(&warsaw), black_box(&poznan), 1)));
    });
}

fn bench_distance_from_strings(c: &mut Criterion) {
    let ctx = GeoContext::new(100);

    c.bench_function("distance_from_decimal_strings", |b| {
        b.iter(|| {
            black_box(
                ctx.distance_from_strings(
                    black_box("52.2296756,21.0122287"),
                    black_box("52.406374,16.9251681"),
                    None,
                )
                .unwrap(),
            );
        });
    });

    // Warm the cache
    let from = "52° 13' 46.83\" N,21° 0' 44.02\" E";
    let to = "52° 24' 22.95\" N,16° 55' 30.61\" E";
    let _ = ctx.distance_from_strings(from, to, None);

    c.bench_function("distance_from_sexagesimal_strings_cached", |b| {
        b.iter(|| {
            black_box(
                ctx.distance_from_strings(black_box(from), black_box(to), None)
                    .unwrap(),
            );
        });
    });
}

fn bench_parse_sexagesimal(c: &mut Criterion) {
    c.bench_function("sexagesimal_to_decimal_uncached", |b| {
        b.iter(|| {
            black_box(geocalc::sexagesimal_to_decimal(black_box("51° 30' 11.86\" N")).unwrap());
        });
    });

    c.bench_function("decimal_to_sexagesimal_uncached", |b| {
        b.iter(|| black_box(geocalc::decimal_to_sexagesimal(black_box(51.503293))));
    });
}

criterion_group!(
    benches,
    bench_distance,
    bench_distance_from_strings,
    bench_parse_sexagesimal,
);
criterion_main!(benches);

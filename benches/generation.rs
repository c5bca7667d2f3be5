use criterion::{criterion_group, criterion_main, Criterion, black_box};
use chrono::{TimeZone, Utc};

use seedscape::generation::axial_id;
use seedscape::noise::{ChannelTable, KeyMaterial, LatticeHash, Noise, NoiseChannel};
use seedscape::{CategoryDomains, GenerationConfig, HexCoord, HexGenerator};

fn test_generator() -> HexGenerator {
    let domains = CategoryDomains::new(
        ["forest", "desert", "mountain", "plains", "swamp"],
        ["ruins", "village", "tower", "river crossing"],
        ["none", "bandits", "wolves", "travelers"],
    );
    HexGenerator::new(&GenerationConfig::new("bench-seed", domains)).unwrap()
}

fn bench_key_derive(c: &mut Criterion) {
    c.bench_function("key_derive", |b| {
        b.iter(|| KeyMaterial::derive(black_box("a reasonably long campaign seed")));
    });
}

fn bench_lattice_hash(c: &mut Criterion) {
    let channels = ChannelTable::standard().unwrap();
    let lattice = LatticeHash::new(
        &KeyMaterial::derive("bench-seed"),
        channels.get(NoiseChannel::Altitude),
    );

    c.bench_function("lattice_hash_unit", |b| {
        let mut q = 0i64;
        b.iter(|| {
            q += 1;
            lattice.hash_unit(black_box(q), black_box(-q))
        });
    });
}

fn bench_fractal_noise(c: &mut Criterion) {
    let noise = Noise::from_seed("bench-seed").unwrap();

    c.bench_function("fractal_noise_4_octaves", |b| {
        let mut q = 0i64;
        b.iter(|| {
            q += 1;
            noise.noise(NoiseChannel::Altitude, black_box(HexCoord::new(q, 3)))
        });
    });
}

fn bench_generate_tile(c: &mut Criterion) {
    let generator = test_generator();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    c.bench_function("generate_located_tile", |b| {
        let mut q = 0i64;
        b.iter(|| {
            q += 1;
            let coord = HexCoord::new(q, -2);
            generator.generate_with(&axial_id(coord), Some(coord), now).unwrap()
        });
    });
}

fn bench_generate_area(c: &mut Criterion) {
    let generator = test_generator();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    c.bench_function("generate_area_radius_10", |b| {
        b.iter(|| generator.generate_area(HexCoord::ORIGIN, black_box(10), now, axial_id).unwrap());
    });
}

criterion_group!(
    benches,
    bench_key_derive,
    bench_lattice_hash,
    bench_fractal_noise,
    bench_generate_tile,
    bench_generate_area,
);
criterion_main!(benches);

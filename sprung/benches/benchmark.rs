use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration};

use rand::prelude::*;
use sprung::prelude::*;

type Scalar = f32;
type Vector = glam::Vec3A;

fn gen_range_vector(rng: &mut StdRng, range: std::ops::Range<Scalar>) -> Vector {
    Vector::from([0.0; 3].map(|_: Scalar| rng.gen_range(range.clone())))
}

/// A chain of parts along which extra links are added between random parts.
pub fn random_system(rng: &mut StdRng, parts: usize, extra_links: usize) -> System<Vector, Scalar> {
    let mut system = System::with_capacity(parts, parts + extra_links);

    for _ in 0..parts {
        let position = gen_range_vector(rng, -5e2..5e2);
        let velocity = gen_range_vector(rng, -1.0..1.0);
        system.create_part_with(position, velocity, 1.0);
    }

    for i in 1..parts as PartId {
        system.create_link(i - 1, i).unwrap();
    }

    while system.link_count() < parts - 1 + extra_links {
        let i = rng.gen_range(0..parts as PartId);
        let j = rng.gen_range(0..parts as PartId);

        if i != j {
            system.create_link(i, j).unwrap();
        }
    }

    system
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sprung");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .measurement_time(std::time::Duration::from_secs(1))
        .sample_size(15);

    let mut rng = StdRng::seed_from_u64(1808);

    for len in (4..17).map(|i| 2usize.pow(i)) {
        let system = random_system(&mut rng, len, len);
        let mut forces = Vec::with_capacity(len);

        group.bench_with_input(
            BenchmarkId::new("sequential::Accumulate", len),
            &system,
            |bencher, system| {
                let mut cm = sprung::sequential::Accumulate(SpringDamper::checked());
                bencher.iter(|| cm.compute_into(system, &mut forces).len())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sequential::Accumulate<unchecked>", len),
            &system,
            |bencher, system| {
                let mut cm = sprung::sequential::Accumulate(SpringDamper::unchecked());
                bencher.iter(|| cm.compute_into(system, &mut forces).len())
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel::Accumulate", len),
            &system,
            |bencher, system| {
                let mut cm = sprung::parallel::Accumulate(SpringDamper::checked());
                bencher.iter(|| cm.compute_into(system, &mut forces).len())
            },
        );
    }

    group.finish();
}

criterion::criterion_group!(benches, criterion_benchmark);
criterion::criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use powerlab::dashboard::{MosfetParameters, ThermalSweep};
use powerlab::materials::Material;
use powerlab::sweep::SweepConfig;
use powerlab::wiring::{select_gauge, SelectionRequest};

fn build_requests() -> Vec<SelectionRequest> {
    Material::ALL
        .into_iter()
        .flat_map(|m| {
            (1..=40).map(move |k| {
                SelectionRequest::new(m, 5.0 * k as f64, 240.0, 25.0 * k as f64).continuous(k % 2 == 0)
            })
        })
        .collect()
}

fn bench_gauge_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauge_selection");
    group.bench_function(BenchmarkId::new("mixed_requests", 80), |b| {
        b.iter_batched(
            build_requests,
            |requests| {
                for r in &requests {
                    let _ = select_gauge(r);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_thermal_sweep(c: &mut Criterion) {
    let params = MosfetParameters::default();
    let config = SweepConfig::default();
    c.bench_function("thermal_sweep_100", |b| {
        b.iter(|| ThermalSweep::run(&params, &config))
    });
}

criterion_group!(benches, bench_gauge_selection, bench_thermal_sweep);
criterion_main!(benches);

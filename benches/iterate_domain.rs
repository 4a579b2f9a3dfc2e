use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fractal_engine::{
    ComplexRect, MandelbrotAlgorithm, NeverCancel, SampleGrid, iterate_domain_cancelable,
    iterate_domain_serial, newton_basins,
};
use num_complex::Complex64;

fn grid(width: usize, height: usize) -> SampleGrid {
    let region = ComplexRect::new(Complex64::new(-2.5, -1.0), Complex64::new(1.0, 1.0))
        .expect("bench region is valid");
    SampleGrid::new(region, width, height).expect("bench grid is valid")
}

fn bench_mandelbrot_workers(c: &mut Criterion) {
    let domain = grid(350, 200);
    let available = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    let mut group = c.benchmark_group("mandelbrot_350x200");

    group.bench_function("serial", |b| {
        b.iter(|| {
            let mut algorithm = MandelbrotAlgorithm::new(2.0);
            black_box(iterate_domain_serial(&domain, &mut algorithm, 256).expect("serial run"))
        })
    });

    for workers in [1, 2, available] {
        let workers = NonZeroUsize::new(workers).expect("worker count is non-zero");
        group.bench_with_input(BenchmarkId::new("workers", workers), &workers, |b, &workers| {
            b.iter(|| {
                let mut algorithm = MandelbrotAlgorithm::new(2.0);
                black_box(
                    iterate_domain_cancelable(&domain, &mut algorithm, 256, workers, &NeverCancel)
                        .expect("parallel run"),
                )
            })
        });
    }

    group.finish();
}

fn bench_newton(c: &mut Criterion) {
    let domain = grid(350, 200);
    let workers = NonZeroUsize::new(std::thread::available_parallelism().map_or(1, NonZeroUsize::get))
        .expect("worker count is non-zero");

    c.bench_function("newton_cubic_350x200", |b| {
        b.iter(|| {
            let mut algorithm = newton_basins(3, 1e-6);
            black_box(
                iterate_domain_cancelable(&domain, &mut algorithm, 64, workers, &NeverCancel)
                    .expect("newton run"),
            )
        })
    });
}

criterion_group!(benches, bench_mandelbrot_workers, bench_newton);
criterion_main!(benches);

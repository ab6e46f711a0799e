use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use termbrot::{
    Complex, FractalSpec, RenderConfig, Viewport, render_cells, render_cells_parallel_rayon,
};

fn viewport(grid_height: u32, grid_width: u32) -> Viewport {
    Viewport::new(
        Complex::new(-2.0, 2.0),
        Complex::new(2.0, -2.0),
        grid_height,
        grid_width,
    )
    .unwrap()
}

/// Typical terminal sizes, serial against rayon.
fn bench_render_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_cells");
    let spec = FractalSpec::Mandelbrot;
    let config = RenderConfig::default();

    for (grid_height, grid_width) in [(23, 80), (49, 160)] {
        let viewport = viewport(grid_height, grid_width);
        let label = format!("{}x{}", grid_height, grid_width);

        group.bench_with_input(BenchmarkId::new("serial", &label), &viewport, |b, v| {
            b.iter(|| render_cells(black_box(v), &spec, config))
        });
        group.bench_with_input(BenchmarkId::new("rayon", &label), &viewport, |b, v| {
            b.iter(|| render_cells_parallel_rayon(black_box(v), &spec, config))
        });
    }

    group.finish();
}

fn bench_multibrot_exponents(c: &mut Criterion) {
    let mut group = c.benchmark_group("multibrot");
    let viewport = viewport(23, 80);
    let config = RenderConfig::default();

    for exponent in [2.0, 3.5, -2.0] {
        let spec = termbrot::StartupConfig::from_tokens(Some("multibrot"), &[exponent.to_string()])
            .unwrap()
            .spec;

        group.bench_with_input(BenchmarkId::from_parameter(exponent), &spec, |b, spec| {
            b.iter(|| render_cells_parallel_rayon(black_box(&viewport), spec, config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_cells, bench_multibrot_exponents);
criterion_main!(benches);

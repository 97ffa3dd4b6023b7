#[path = "../util/mod.rs"]
mod util;

use criterion::{
    Bencher, BenchmarkId, Criterion, SamplingMode, criterion_group, criterion_main,
    measurement::WallTime,
};
use main_colors::{Detail, GridBuf, MainColors, PaletteSize};
use palette::Srgb;
use std::time::Duration;
use util::benchmark_grids;

fn bench(
    c: &mut Criterion,
    group: &str,
    grids: &[(String, GridBuf<Srgb<u8>>)],
    mut f: impl FnMut(&mut Bencher<'_, WallTime>, &GridBuf<Srgb<u8>>),
) {
    let mut group = c.benchmark_group(group);
    group
        .sample_size(30)
        .noise_threshold(0.05)
        .sampling_mode(SamplingMode::Flat)
        .warm_up_time(Duration::from_millis(500));

    for (name, grid) in grids {
        group.bench_with_input(BenchmarkId::from_parameter(name), grid, &mut f);
    }
}

fn extract_low_single(c: &mut Criterion) {
    bench(c, "extract_low_single", benchmark_grids(), |b, grid| {
        b.iter(|| {
            MainColors::run_grid(grid.as_ref(), Detail::LOW)
                .unwrap()
                .color_weights()
        })
    })
}

fn extract_max_single(c: &mut Criterion) {
    bench(c, "extract_max_single", benchmark_grids(), |b, grid| {
        b.iter(|| {
            MainColors::run_grid(grid.as_ref(), Detail::MAX)
                .unwrap()
                .color_weights()
        })
    })
}

fn extract_low_par(c: &mut Criterion) {
    bench(c, "extract_low_par", benchmark_grids(), |b, grid| {
        b.iter(|| {
            MainColors::run_grid_par(grid.as_ref(), Detail::LOW)
                .unwrap()
                .color_weights()
        })
    })
}

fn extract_max_par(c: &mut Criterion) {
    bench(c, "extract_max_par", benchmark_grids(), |b, grid| {
        b.iter(|| {
            MainColors::run_grid_par(grid.as_ref(), Detail::MAX)
                .unwrap()
                .color_weights()
        })
    })
}

fn extract_top_colors(c: &mut Criterion) {
    bench(c, "extract_top_colors", benchmark_grids(), |b, grid| {
        let extracted = MainColors::run_grid(grid.as_ref(), Detail::MAX).unwrap();
        b.iter(|| extracted.top_colors(PaletteSize::MAX))
    })
}

criterion_group!(
    benches,
    extract_low_single,
    extract_max_single,
    extract_low_par,
    extract_max_par,
    extract_top_colors,
);
criterion_main!(benches);

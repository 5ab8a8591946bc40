use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridblur_core::{blur, blur_rgb, ColorSample, PixelGrid};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn gradient_grid(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let r = ((x as f64 / width as f64) * 255.0) as u8;
        let g = ((y as f64 / height as f64) * 255.0) as u8;
        ColorSample::new(r, g, 128)
    })
    .expect("gradient grid")
}

// ---------------------------------------------------------------------------
// Grid benchmarks
// ---------------------------------------------------------------------------

fn bench_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur");

    // 50x40 is the paint canvas size.
    for &(w, h) in &[(50usize, 40usize), (128, 128), (512, 512), (1920, 1080)] {
        let grid = gradient_grid(w, h);
        let label = format!("{w}x{h}");
        group.throughput(Throughput::Elements((w as u64) * (h as u64)));
        group.bench_with_input(BenchmarkId::new("grid", &label), &grid, |b, grid| {
            b.iter(|| blur(grid, w as i64, h as i64).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Flat buffer benchmarks
// ---------------------------------------------------------------------------

fn bench_blur_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur_rgb");

    for &(w, h) in &[(128usize, 128usize), (512, 512)] {
        let bytes = gradient_grid(w, h).to_rgb_bytes();
        let label = format!("{w}x{h}");
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("bytes", &label), &bytes, |b, bytes| {
            b.iter(|| blur_rgb(bytes, w as i64, h as i64).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_blur, bench_blur_rgb);
criterion_main!(benches);

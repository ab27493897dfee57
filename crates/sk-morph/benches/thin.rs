use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sk_core::BitGrid;
use sk_morph::thin_zhang_suen;

/// Thick strokes: horizontal bars every 40 rows, vertical bars every 64 cols.
fn synthetic_strokes(rows: usize, cols: usize, thickness: usize) -> BitGrid {
    let mut data = vec![0_u8; rows * cols];

    for r0 in (16..rows.saturating_sub(16)).step_by(40) {
        for r in r0..(r0 + thickness).min(rows - 1) {
            for c in 8..cols - 8 {
                data[r * cols + c] = 1;
            }
        }
    }

    for c0 in (32..cols.saturating_sub(32)).step_by(64) {
        for r in 8..rows - 8 {
            for c in c0..(c0 + thickness).min(cols - 1) {
                data[r * cols + c] = 1;
            }
        }
    }

    BitGrid::from_u8(rows, cols, data).expect("valid synthetic grid")
}

fn bench_thin(c: &mut Criterion) {
    let grid = synthetic_strokes(480, 640, 7);

    c.bench_function("sk_morph_thin_zhang_suen_640x480", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            let stats = thin_zhang_suen(black_box(&mut g));
            black_box(stats.removed);
        });
    });
}

criterion_group!(benches, bench_thin);
criterion_main!(benches);

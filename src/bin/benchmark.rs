//! Serial vs rayon generation step on growing boards

use std::time::Instant;
use life_loop::domain::{Grid, advance, advance_parallel};

fn time_per_generation(size: usize, iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let mut grid = Grid::seeded(size, size, 0.2, 42);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life step benchmark ===\n");

    let sizes = [40, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = time_per_generation(size, iterations, advance);
        let parallel_ms = time_per_generation(size, iterations, advance_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    let cells = 2000 * 2000;
    let parallel_ms = time_per_generation(2000, iterations, advance_parallel);
    println!(
        "\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}

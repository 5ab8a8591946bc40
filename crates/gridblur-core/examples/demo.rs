//! Blur Demo - paint a few dots on a canvas and blur it
//!
//! Run with: RUST_LOG=debug cargo run --example demo

use gridblur_core::{blur, ColorSample, PixelGrid};

fn print_grid(grid: &PixelGrid) {
    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|c| format!("({:3},{:3},{:3})", c.r, c.g, c.b))
            .collect();
        println!("   {}", cells.join(" "));
    }
}

fn main() {
    env_logger::init();

    println!("=== Blur Demo ===\n");

    // A small white canvas with a red dot and a blue dot.
    let width = 5;
    let height = 4;
    let mut canvas = PixelGrid::new(width, height, ColorSample::WHITE).expect("Failed to create canvas");
    canvas.set(1, 1, ColorSample::RED);
    canvas.set(3, 2, ColorSample::BLUE);

    println!("1. Painted a {}x{} canvas:", width, height);
    print_grid(&canvas);

    let blurred = blur(&canvas, width as i64, height as i64).expect("Failed to blur");
    println!("\n2. Blurred:");
    print_grid(&blurred);

    println!("\n3. Blurring with a bad size leaves the canvas untouched:");
    match blur(&canvas, 0, height as i64) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   error: {e}"),
    }

    println!("\n=== Demo Complete ===");
}

//! Greedy row-extension decomposition of a solidity grid into rectangles.
//!
//! Every unvisited solid cell seeds a rectangle: the widest horizontal run
//! from the seed becomes the footprint, then the footprint is extended
//! downward one row at a time for as long as the next row reproduces the
//! run width exactly. The result is a deterministic partition of the solid
//! cells; it makes no attempt at a minimum-count cover.

use crate::grid::Grid;
use crate::types::Rect;

/// Decompose a grid into non-overlapping rectangles that exactly cover its
/// solid cells, in row-major seed discovery order.
///
/// Consumes the grid: the visited state is spent after the pass.
pub fn decompose(mut grid: Grid) -> Vec<Rect> {
    let mut rects = Vec::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_solid(row, col) && !grid.is_visited(row, col) {
                rects.push(grow_rectangle(&mut grid, row, col));
            }
        }
    }
    log::debug!(
        "decomposed {}x{} grid into {} rectangles",
        grid.width(),
        grid.height(),
        rects.len()
    );
    rects
}

/// Measure the run of solid, unvisited cells starting at `(row, col)`.
fn run_width(grid: &Grid, row: u32, start_col: u32) -> u32 {
    let mut col = start_col;
    while grid.is_solid(row, col) && !grid.is_visited(row, col) {
        col += 1;
    }
    col - start_col
}

/// Grow one rectangle from a seed cell, marking every consumed cell
/// visited. The seed must be solid and unvisited.
fn grow_rectangle(grid: &mut Grid, start_row: u32, start_col: u32) -> Rect {
    debug_assert!(
        grid.is_solid(start_row, start_col) && !grid.is_visited(start_row, start_col),
        "seed ({start_row}, {start_col}) must be solid and unvisited"
    );

    // Horizontal seed run, consumed as it is measured.
    let seed_width = run_width(grid, start_row, start_col);
    for col in start_col..start_col + seed_width {
        grid.mark_visited(start_row, col);
    }

    // Vertical growth: a row is consumed only on an exact width match.
    // Measuring first keeps rejected rows fully available for later seeds.
    let mut height = 1;
    for row in start_row + 1..grid.height() {
        if run_width(grid, row, start_col) != seed_width {
            break;
        }
        for col in start_col..start_col + seed_width {
            grid.mark_visited(row, col);
        }
        height += 1;
    }

    Rect::new(start_col, start_row, seed_width, height)
}

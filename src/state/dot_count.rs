//! Dot-count recomputation.
//!
//! Every excluded cell shows how many maze cells carry design lines to its
//! right and below it, up to the next excluded cell (or the grid edge).
//! The grid is swept backwards, bottom row first and right to left within a
//! row, so that by the time an excluded cell is reached the running counts
//! describe exactly the cells after it.
//!
//! A direction with no included cells at all before the next excluded cell
//! gets no count. A direction with included cells but no design lines among
//! them gets a count of zero.

use super::cell::{Cell, CellType, DotCount};

/// Re-derive the dot counts of every excluded cell from design lines.
///
/// Idempotent: only excluded cells are written and their new value depends
/// on included cells alone.
pub fn recompute(cells: &mut [Vec<Cell>]) {
    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);

    let mut column_counts = vec![0usize; columns];
    let mut column_steps = vec![0usize; columns];

    for row in cells.iter_mut().rev() {
        let mut row_count = 0usize;
        let mut row_steps = 0usize;

        for (column, cell) in row.iter_mut().enumerate().rev() {
            match &mut cell.cell_type {
                CellType::Excluded(dot_count) => {
                    *dot_count = DotCount::new(
                        (row_steps > 0).then_some(row_count),
                        (column_steps[column] > 0).then_some(column_counts[column]),
                    );

                    row_count = 0;
                    row_steps = 0;
                    column_counts[column] = 0;
                    column_steps[column] = 0;
                }
                CellType::Included(included) => {
                    if !included.design_lines.is_empty() {
                        row_count += 1;
                        column_counts[column] += 1;
                    }
                    row_steps += 1;
                    column_steps[column] += 1;
                }
            }
        }
    }
}

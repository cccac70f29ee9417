use tracing::{debug, trace};

use crate::disks::{DiskRow, SortResult};
use crate::DiskSorter;

/// Repeated left-to-right bubble passes, each starting one disk later
pub struct AdjacentSorter;

impl DiskSorter for AdjacentSorter {
    fn sort(&self, row: &mut DiskRow) -> SortResult {
        sort_adjacent(row)
    }
}

/// Left-to-right pass followed by a right-to-left pass, per round
pub struct LawnmowerSorter;

impl DiskSorter for LawnmowerSorter {
    fn sort(&self, row: &mut DiskRow) -> SortResult {
        sort_lawnmower(row)
    }
}

/// Sort an alternating row in place with one bubble pass per light disk.
///
/// Round `i` scans `i..total-1` and swaps any light disk sitting directly
/// before a dark one. The row is expected to be alternating; this is not
/// checked.
pub fn sort_adjacent(row: &mut DiskRow) -> SortResult {
    let light_count = row.light_count();
    let mut swaps = 0;

    for round in 0..light_count {
        swaps += forward_pass(row, round);
        trace!(round, swaps, "adjacent round");
    }

    debug!(light_count, swaps, "adjacent sort finished");
    SortResult::new(row.clone(), swaps)
}

/// Sort an alternating row in place, mowing back and forth.
///
/// Each round runs the same forward pass as [`sort_adjacent`], then sweeps
/// from the last disk down to index 1 moving dark disks left.
pub fn sort_lawnmower(row: &mut DiskRow) -> SortResult {
    let light_count = row.light_count();
    let mut swaps = 0;

    for round in 0..light_count {
        swaps += forward_pass(row, round);
        swaps += backward_pass(row);
        trace!(round, swaps, "lawnmower round");
    }

    debug!(light_count, swaps, "lawnmower sort finished");
    SortResult::new(row.clone(), swaps)
}

#[inline]
fn forward_pass(row: &mut DiskRow, start: usize) -> usize {
    let mut swaps = 0;
    for j in start..row.total_count() - 1 {
        if row.get(j) > row.get(j + 1) {
            row.swap_adjacent(j);
            swaps += 1;
        }
    }
    swaps
}

#[inline]
fn backward_pass(row: &mut DiskRow) -> usize {
    let mut swaps = 0;
    for j in (1..row.total_count()).rev() {
        if row.get(j) < row.get(j - 1) {
            row.swap_adjacent(j - 1);
            swaps += 1;
        }
    }
    swaps
}

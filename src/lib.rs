//! Alternating Disks
//!
//! A row of `2n` disks starts out alternating dark and light, dark first.
//! The sorters here move every dark disk to the left half and every light
//! disk to the right half using only adjacent swaps, and count the swaps.

pub mod disks;
pub mod error;
pub mod sorters;

pub use disks::{check_light_count, expected_swaps, DiskColor, DiskRow, RowSummary, SortResult};
pub use error::{DiskError, Result};
pub use sorters::{sort_adjacent, sort_lawnmower, AdjacentSorter, LawnmowerSorter};

/// Trait for disk sorting implementations
pub trait DiskSorter {
    /// Sort the row in place and report the final state with its swap count
    fn sort(&self, row: &mut DiskRow) -> SortResult;
}

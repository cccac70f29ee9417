use std::fmt;

use serde::Serialize;

use crate::error::{DiskError, Result};

/// Color of a single disk. Dark orders before Light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiskColor {
    Dark,
    Light,
}

impl DiskColor {
    /// Single-letter code used when rendering a row
    pub fn code(self) -> char {
        match self {
            DiskColor::Dark => 'D',
            DiskColor::Light => 'L',
        }
    }
}

impl fmt::Display for DiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A fixed-length row of disks. The length is set at construction and only
/// adjacent swaps change the contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DiskRow {
    colors: Vec<DiskColor>,
}

impl DiskRow {
    /// Build the alternating row `D L D L ...` holding `light_count` light
    /// disks and as many dark ones.
    ///
    /// Panics if `light_count` is zero or the row length overflows.
    pub fn new(light_count: usize) -> Self {
        assert!(light_count > 0, "a disk row needs at least one light disk");
        let total = light_count
            .checked_mul(2)
            .unwrap_or_else(|| panic!("{} light disks is too many for one row", light_count));

        let colors = (0..total)
            .map(|i| if i % 2 == 0 { DiskColor::Dark } else { DiskColor::Light })
            .collect();

        Self { colors }
    }

    /// Checked version of [`DiskRow::new`] for counts supplied by users.
    pub fn try_new(light_count: usize) -> Result<Self> {
        check_light_count(light_count)?;
        Ok(Self::new(light_count))
    }

    pub fn total_count(&self) -> usize {
        self.colors.len()
    }

    pub fn light_count(&self) -> usize {
        self.total_count() / 2
    }

    pub fn dark_count(&self) -> usize {
        self.light_count()
    }

    #[inline]
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Color at `index`. Panics when the index is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> DiskColor {
        assert!(
            self.is_index(index),
            "disk index {} out of range for a row of {} disks",
            index,
            self.total_count()
        );
        self.colors[index]
    }

    /// Exchange the disks at `left_index` and `left_index + 1`.
    ///
    /// Panics unless both positions are inside the row.
    #[inline]
    pub fn swap_adjacent(&mut self, left_index: usize) {
        let right_index = left_index + 1;
        assert!(
            self.is_index(right_index),
            "cannot swap disks {} and {} in a row of {} disks",
            left_index,
            right_index,
            self.total_count()
        );
        self.colors.swap(left_index, right_index);
    }

    pub fn colors(&self) -> &[DiskColor] {
        &self.colors
    }

    /// Number of disks of the given color currently in the row
    pub fn count(&self, color: DiskColor) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }

    /// True when even positions hold dark disks and odd positions light ones.
    pub fn is_alternating(&self) -> bool {
        self.colors.iter().enumerate().all(|(i, &color)| {
            let expected = if i % 2 == 0 { DiskColor::Dark } else { DiskColor::Light };
            color == expected
        })
    }

    /// True when every dark disk sits in the left half and every light disk
    /// in the right half.
    pub fn is_sorted(&self) -> bool {
        let half = self.total_count() / 2;
        let (left, right) = self.colors.split_at(half);
        left.iter().all(|&c| c == DiskColor::Dark) && right.iter().all(|&c| c == DiskColor::Light)
    }

    /// Space separated color codes, e.g. `D L D L`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn summary(&self) -> RowSummary {
        RowSummary {
            total_count: self.total_count(),
            light_count: self.light_count(),
            dark_count: self.dark_count(),
            first_color: self.get(0),
            rendered: self.render(),
        }
    }
}

impl fmt::Display for DiskRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

/// Check that a row with `light_count` light disks can be built, without
/// building it. Returns the total disk count.
pub fn check_light_count(light_count: usize) -> Result<usize> {
    if light_count == 0 {
        return Err(DiskError::EmptyRow);
    }
    light_count
        .checked_mul(2)
        .ok_or(DiskError::TooManyDisks { light_count })
}

/// Diagnostic snapshot of a row. Carries nothing beyond what the query
/// methods already report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowSummary {
    pub total_count: usize,
    pub light_count: usize,
    pub dark_count: usize,
    pub first_color: DiskColor,
    pub rendered: String,
}

impl fmt::Display for RowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.total_count)?;
        writeln!(f, "{}", self.light_count)?;
        writeln!(f, "{}", self.dark_count)?;
        writeln!(f, "{}", self.first_color)?;
        write!(f, "{}", self.rendered)
    }
}

/// Outcome of a sort: the final row and how many adjacent swaps it took.
///
/// Owns its own copy of the row, so it outlives the row that was sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortResult {
    after: DiskRow,
    swap_count: usize,
}

impl SortResult {
    pub fn new(after: DiskRow, swap_count: usize) -> Self {
        Self { after, swap_count }
    }

    pub fn after(&self) -> &DiskRow {
        &self.after
    }

    pub fn swap_count(&self) -> usize {
        self.swap_count
    }

    pub fn into_parts(self) -> (DiskRow, usize) {
        (self.after, self.swap_count)
    }
}

/// Swaps needed to sort the alternating row with `light_count` light disks.
///
/// Each adjacent swap of an out-of-order pair removes exactly one inversion,
/// and the alternating row has `k(k-1)/2` light-before-dark pairs.
pub fn expected_swaps(light_count: usize) -> usize {
    light_count * light_count.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn new_row_alternates() {
        for k in 1..=50 {
            let row = DiskRow::new(k);
            assert_eq!(row.total_count(), 2 * k);
            assert_eq!(row.light_count(), k);
            assert_eq!(row.dark_count(), k);
            assert!(row.is_alternating());
            assert_eq!(row.get(0), DiskColor::Dark);
            assert_eq!(row.get(1), DiskColor::Light);
        }
    }

    #[test]
    fn alternating_is_not_sorted_beyond_one() {
        assert!(DiskRow::new(1).is_sorted());
        for k in 2..=50 {
            let row = DiskRow::new(k);
            assert!(!row.is_sorted(), "k = {}", k);
        }
    }

    #[test]
    #[should_panic(expected = "at least one light disk")]
    fn zero_lights_panics() {
        DiskRow::new(0);
    }

    #[test]
    fn try_new_rejects_zero() {
        assert!(matches!(DiskRow::try_new(0), Err(DiskError::EmptyRow)));
        assert_eq!(DiskRow::try_new(3).unwrap(), DiskRow::new(3));
    }

    #[test]
    fn try_new_rejects_overflowing_length() {
        let huge = usize::MAX / 2 + 1;
        assert!(matches!(
            DiskRow::try_new(huge),
            Err(DiskError::TooManyDisks { light_count }) if light_count == huge
        ));
        assert!(matches!(
            check_light_count(usize::MAX),
            Err(DiskError::TooManyDisks { .. })
        ));
        assert_eq!(check_light_count(usize::MAX / 2).unwrap(), usize::MAX - 1);
    }

    #[test]
    #[should_panic(expected = "too many for one row")]
    fn new_panics_on_overflowing_length() {
        DiskRow::new(usize::MAX / 2 + 1);
    }

    #[test]
    fn index_bounds() {
        let row = DiskRow::new(2);
        assert!(row.is_index(0));
        assert!(row.is_index(3));
        assert!(!row.is_index(4));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        DiskRow::new(2).get(4);
    }

    #[test]
    #[should_panic(expected = "cannot swap")]
    fn swap_at_last_index_panics() {
        let mut row = DiskRow::new(2);
        row.swap_adjacent(3);
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        for _ in 0..200 {
            let k = rng.gen_range(1..40);
            let original = DiskRow::new(k);
            let mut row = original.clone();
            let index = rng.gen_range(0..row.total_count() - 1);

            row.swap_adjacent(index);
            row.swap_adjacent(index);
            assert_eq!(row, original);
        }
    }

    #[test]
    fn swap_exchanges_neighbours() {
        let mut row = DiskRow::new(2);
        row.swap_adjacent(1);
        assert_eq!(row.render(), "D D L L");
        assert!(row.is_sorted());
        assert!(!row.is_alternating());
    }

    #[test]
    fn rows_of_different_content_differ() {
        let mut row = DiskRow::new(3);
        assert_eq!(row, DiskRow::new(3));
        row.swap_adjacent(0);
        assert_ne!(row, DiskRow::new(3));
    }

    #[test]
    fn render_tokens_match_counts() {
        for k in [1, 2, 5, 17] {
            let row = DiskRow::new(k);
            let text = row.render();
            let darks = text.split(' ').filter(|t| *t == "D").count();
            let lights = text.split(' ').filter(|t| *t == "L").count();
            assert_eq!(darks, row.dark_count());
            assert_eq!(lights, row.light_count());
            assert_eq!(text.split(' ').count(), row.total_count());
        }
        assert_eq!(DiskRow::new(3).to_string(), "D L D L D L");
    }

    #[test]
    fn color_order() {
        assert!(DiskColor::Dark < DiskColor::Light);
        assert_eq!(DiskColor::Light.to_string(), "L");
    }

    #[test]
    fn summary_lists_counts() {
        let summary = DiskRow::new(2).summary();
        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.first_color, DiskColor::Dark);
        assert_eq!(summary.to_string(), "4\n2\n2\nD\nD L D L");
    }

    #[test]
    fn serializes_as_color_list() {
        let json = serde_json::to_string(&DiskRow::new(1)).unwrap();
        assert_eq!(json, r#"["Dark","Light"]"#);
    }

    #[test]
    fn expected_swap_counts() {
        assert_eq!(expected_swaps(1), 0);
        assert_eq!(expected_swaps(3), 3);
        assert_eq!(expected_swaps(4), 6);
        assert_eq!(expected_swaps(10), 45);
    }
}

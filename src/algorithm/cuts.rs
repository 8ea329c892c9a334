use crate::algorithm::rows::Row;
use bitvec::prelude::*;
use std::fmt;

/// Internal cut points of a row, stored as a fixed-size bitset
///
/// Bit `p` is set when a brick ends at position `p`, with `0 < p < width`.
/// The two outer edges of the wall are never cut points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutSet {
    bits: BitVec,
}

impl CutSet {
    /// Create a cut set with no cut points over a row of `width` units
    pub fn new(width: usize) -> Self {
        Self {
            bits: bitvec![0; width],
        }
    }

    /// Collect the cut points of a row
    pub fn from_row(row: &Row) -> Self {
        let mut cuts = Self::new(row.width());
        for point in cut_points(row) {
            cuts.insert(point);
        }
        cuts
    }

    /// Insert a cut point
    ///
    /// Points outside the row are ignored
    pub fn insert(&mut self, point: usize) {
        if point > 0 && point < self.bits.len() {
            self.bits.set(point, true);
        }
    }

    /// Test cut point membership
    pub fn contains(&self, point: usize) -> bool {
        self.bits.get(point).as_deref() == Some(&true)
    }

    /// Test if no cut point is shared with another cut set
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.bits.iter_ones().any(|point| other.contains(point))
    }

    /// Test if the row has no internal cut point
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cut points in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all cut points in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CutSet({} cuts: {:?})", self.count(), self.to_vec())
    }
}

/// Running prefix sums of every brick except the last
///
/// A row with fewer than two bricks has no internal cut points.
pub fn cut_points(row: &Row) -> Vec<usize> {
    let bricks = row.bricks();
    let Some((_, leading)) = bricks.split_last() else {
        return Vec::new();
    };

    leading
        .iter()
        .scan(0usize, |position, &brick| {
            *position += usize::from(brick);
            Some(*position)
        })
        .collect()
}

/// Test if two rows can be stacked without a continuous vertical seam
///
/// Symmetric in its arguments.
pub fn is_compatible(first: &Row, second: &Row) -> bool {
    CutSet::from_row(first).is_disjoint(&CutSet::from_row(second))
}

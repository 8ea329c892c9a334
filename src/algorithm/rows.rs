//! Row generation as ordered compositions of a width into brick sizes

use crate::io::configuration::BRICK_SIZES;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One course of bricks, left to right
///
/// Brick order is significant: `[1, 2]` and `[2, 1]` are different rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Row {
    bricks: Vec<u8>,
}

impl Row {
    /// Create a row from brick widths
    ///
    /// # Errors
    ///
    /// Returns an error if any brick width is outside `1..=4`
    pub fn new(bricks: Vec<u8>) -> Result<Self> {
        if let Some(&brick) = bricks.iter().find(|brick| !BRICK_SIZES.contains(brick)) {
            return Err(invalid_parameter(
                "brick",
                &brick,
                &"brick widths must be between 1 and 4",
            ));
        }
        Ok(Self { bricks })
    }

    /// The row with no bricks, the only row of width zero
    pub const fn empty() -> Self {
        Self { bricks: Vec::new() }
    }

    /// Brick widths in left-to-right order
    pub fn bricks(&self) -> &[u8] {
        &self.bricks
    }

    /// Total width covered by the bricks
    pub fn width(&self) -> usize {
        self.bricks.iter().map(|&brick| usize::from(brick)).sum()
    }

    /// Number of bricks in the row
    pub const fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Test if the row has no bricks
    pub const fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }
}

impl TryFrom<Vec<u8>> for Row {
    type Error = AlgorithmError;

    fn try_from(bricks: Vec<u8>) -> Result<Self> {
        Self::new(bricks)
    }
}

impl From<Row> for Vec<u8> {
    fn from(row: Row) -> Self {
        row.bricks
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, brick) in self.bricks.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{brick}")?;
        }
        Ok(())
    }
}

/// Generate every row of the given width
///
/// Rows are grouped by first brick ascending, and within a group ordered as the
/// rows of the remaining width. A negative width has no rows; width zero has
/// exactly the empty row.
///
/// The table is filled bottom-up from width zero, so no recursion depth is tied
/// to the width.
pub fn generate_rows(width: i64) -> Vec<Row> {
    let Ok(width) = usize::try_from(width) else {
        return Vec::new();
    };

    let mut table: Vec<Vec<Vec<u8>>> = Vec::with_capacity(width + 1);
    table.push(vec![Vec::new()]);

    for target in 1..=width {
        let mut rows = Vec::new();
        for brick in BRICK_SIZES {
            let Some(remaining) = target.checked_sub(usize::from(brick)) else {
                continue;
            };
            let Some(tails) = table.get(remaining) else {
                continue;
            };
            for tail in tails {
                let mut bricks = Vec::with_capacity(tail.len() + 1);
                bricks.push(brick);
                bricks.extend_from_slice(tail);
                rows.push(bricks);
            }
        }
        table.push(rows);
    }

    let rows = table.pop().unwrap_or_default();
    tracing::debug!(width, rows = rows.len(), "generated rows");
    rows.into_iter().map(|bricks| Row { bricks }).collect()
}

/// Count the rows of a width without generating them
///
/// Returns `None` if the count does not fit in a `u128`, which happens well
/// before width 140.
pub fn count_rows(width: i64) -> Option<u128> {
    let Ok(width) = usize::try_from(width) else {
        return Some(0);
    };

    // Counts for the four widths below the current one, nearest first; the
    // window is as long as the widest brick
    let mut window: [u128; 4] = [1, 0, 0, 0];
    for _ in 0..width {
        let next = window
            .iter()
            .try_fold(0_u128, |total, &count| total.checked_add(count))?;
        let [nearest, second, third, _] = window;
        window = [next, nearest, second, third];
    }

    let [count, ..] = window;
    Some(count)
}

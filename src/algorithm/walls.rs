//! Wall enumeration by stacking mutually compatible rows
//!
//! Two strategies are provided and return identical walls in identical order:
//! a depth-first search over an explicit worklist and a level-indexed dynamic
//! programme that prepends rows to the walls of the level below. Walls are
//! ordered lexicographically by the generation index of their rows.
//!
//! Counting uses the same level recurrence over numbers instead of walls, which
//! allows size checks, uniform sampling and random access without materialising
//! the full collection.

use crate::algorithm::compatibility::CompatibilityRelation;
use crate::algorithm::cuts::is_compatible;
use crate::algorithm::rows::Row;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use ndarray::Array2;
use num_traits::{CheckedAdd, One, Zero};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::ControlFlow;

/// A stack of rows, top first, with no seam shared between neighbours
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Row>", into = "Vec<Row>")]
pub struct Wall {
    rows: Vec<Row>,
}

impl Wall {
    /// Create a wall from rows, checking widths and adjacency
    ///
    /// # Errors
    ///
    /// Returns an error if the rows differ in width or two adjacent rows share a cut point
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        for (index, pair) in rows.windows(2).enumerate() {
            let [upper, lower] = pair else {
                continue;
            };
            if upper.width() != lower.width() {
                return Err(invalid_parameter(
                    "wall",
                    &format!("rows {index} and {}", index + 1),
                    &format!("widths {} and {} differ", upper.width(), lower.width()),
                ));
            }
            if !is_compatible(upper, lower) {
                return Err(invalid_parameter(
                    "wall",
                    &format!("rows {index} and {}", index + 1),
                    &"adjacent rows share a cut point",
                ));
            }
        }
        Ok(Self { rows })
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width shared by every row, or `None` for a wall without rows
    pub fn width(&self) -> Option<usize> {
        self.rows.first().map(Row::width)
    }

    /// Test if the wall has no rows
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain nested brick widths, top row first
    pub fn to_vecs(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(|row| row.bricks().to_vec()).collect()
    }
}

impl TryFrom<Vec<Row>> for Wall {
    type Error = AlgorithmError;

    fn try_from(rows: Vec<Row>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Wall> for Vec<Row> {
    fn from(wall: Wall) -> Self {
        wall.rows
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// How walls are built from the compatibility relation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Extend partial walls one row at a time from an explicit worklist
    DepthFirst,
    /// Build every wall of each height from the walls one row shorter
    #[default]
    Levels,
}

/// Units of enumeration work completed so far
///
/// Levels for [`Strategy::Levels`], top-row branches for [`Strategy::DepthFirst`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Units finished
    pub completed: usize,
    /// Units in the whole enumeration
    pub total: usize,
}

/// Enumerates walls over a fixed compatibility relation
#[derive(Clone, Debug)]
pub struct WallBuilder {
    relation: CompatibilityRelation,
}

impl WallBuilder {
    /// Create a builder over an existing relation
    pub const fn new(relation: CompatibilityRelation) -> Self {
        Self { relation }
    }

    /// Create a builder for every row of a width
    pub fn for_width(width: i64) -> Self {
        Self::new(CompatibilityRelation::for_width(width))
    }

    /// The relation walls are built from
    pub const fn relation(&self) -> &CompatibilityRelation {
        &self.relation
    }

    /// Enumerate every wall of `height` rows
    ///
    /// A height of zero yields a single wall with no rows.
    pub fn enumerate(&self, height: usize, strategy: Strategy) -> Vec<Wall> {
        let mut observer = |_: Progress| -> ControlFlow<()> { ControlFlow::Continue(()) };
        let paths = match strategy {
            Strategy::DepthFirst => self.depth_first(height, &mut observer),
            Strategy::Levels => self.levels(height, &mut observer),
        };
        self.materialize(paths.unwrap_or_default())
    }

    /// Enumerate every wall of `height` rows, reporting progress after each unit of work
    ///
    /// The observer may stop the enumeration by returning [`ControlFlow::Break`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Cancelled`] if the observer breaks
    pub fn enumerate_with<F>(
        &self,
        height: usize,
        strategy: Strategy,
        mut observer: F,
    ) -> Result<Vec<Wall>>
    where
        F: FnMut(Progress) -> ControlFlow<()>,
    {
        let paths = match strategy {
            Strategy::DepthFirst => self.depth_first(height, &mut observer),
            Strategy::Levels => self.levels(height, &mut observer),
        }
        .ok_or(AlgorithmError::Cancelled)?;

        let walls = self.materialize(paths);
        tracing::info!(height, ?strategy, walls = walls.len(), "enumerated walls");
        Ok(walls)
    }

    fn depth_first<F>(&self, height: usize, observer: &mut F) -> Option<Vec<Vec<usize>>>
    where
        F: FnMut(Progress) -> ControlFlow<()>,
    {
        if height == 0 {
            return Some(vec![Vec::new()]);
        }

        let row_count = self.relation.len();
        let mut walls = Vec::new();

        for top in 0..row_count {
            let mut path = vec![top];
            // Position of the next neighbour to try for each row on the path
            let mut cursors = vec![0usize];

            while let Some(&last) = path.last() {
                if path.len() == height {
                    walls.push(path.clone());
                    path.pop();
                    cursors.pop();
                    continue;
                }

                let Some(cursor) = cursors.last_mut() else {
                    break;
                };
                if let Some(&next) = self.relation.compatible_with(last).get(*cursor) {
                    *cursor += 1;
                    path.push(next);
                    cursors.push(0);
                } else {
                    path.pop();
                    cursors.pop();
                }
            }

            report(observer, top + 1, row_count)?;
        }

        Some(walls)
    }

    fn levels<F>(&self, height: usize, observer: &mut F) -> Option<Vec<Vec<usize>>>
    where
        F: FnMut(Progress) -> ControlFlow<()>,
    {
        if height == 0 {
            return Some(vec![Vec::new()]);
        }

        let row_count = self.relation.len();

        // walls_by_top[r] holds every wall of the current level whose top row is r
        let mut walls_by_top: Vec<Vec<Vec<usize>>> =
            (0..row_count).map(|index| vec![vec![index]]).collect();
        report(observer, 1, height)?;

        for level in 2..=height {
            let below = walls_by_top;
            walls_by_top = (0..row_count)
                .map(|top| {
                    self.relation
                        .compatible_with(top)
                        .iter()
                        .filter_map(|&next| below.get(next))
                        .flat_map(|walls| {
                            walls.iter().map(move |wall| {
                                let mut extended = Vec::with_capacity(level);
                                extended.push(top);
                                extended.extend_from_slice(wall);
                                extended
                            })
                        })
                        .collect()
                })
                .collect();
            report(observer, level, height)?;
        }

        Some(walls_by_top.into_iter().flatten().collect())
    }

    fn materialize(&self, paths: Vec<Vec<usize>>) -> Vec<Wall> {
        paths
            .into_iter()
            .map(|path| Wall {
                rows: path
                    .iter()
                    .filter_map(|&index| self.relation.row(index).cloned())
                    .collect(),
            })
            .collect()
    }
}

fn report<F>(observer: &mut F, completed: usize, total: usize) -> Option<()>
where
    F: FnMut(Progress) -> ControlFlow<()>,
{
    match observer(Progress { completed, total }) {
        ControlFlow::Continue(()) => Some(()),
        ControlFlow::Break(()) => None,
    }
}

/// Every wall of the given width and height
///
/// Uses the level-indexed strategy. A negative width has no walls; width zero has
/// one wall of empty rows; height zero has one wall with no rows.
pub fn generate_walls(width: i64, height: usize) -> Vec<Wall> {
    WallBuilder::for_width(width).enumerate(height, Strategy::Levels)
}

/// Every wall of the given width and height
///
/// Identical to [`generate_walls`]; suitable for calling from any thread.
pub fn enumerate_walls(width: i64, height: usize) -> Vec<Wall> {
    generate_walls(width, height)
}

/// Count walls per level and top row
///
/// Entry `[level, r]` is the number of walls with `level + 1` rows whose top row
/// is `r`. Returns `None` if any count overflows `T`.
pub fn count_table<T>(relation: &CompatibilityRelation, height: usize) -> Option<Array2<T>>
where
    T: Copy + Zero + One + CheckedAdd,
{
    let row_count = relation.len();
    let mut table = Array2::<T>::zeros((height, row_count));

    for level in 0..height {
        for top in 0..row_count {
            let value = if level == 0 {
                T::one()
            } else {
                let mut total = T::zero();
                for &below in relation.compatible_with(top) {
                    let walls = table
                        .get([level - 1, below])
                        .copied()
                        .unwrap_or_else(T::zero);
                    total = total.checked_add(&walls)?;
                }
                total
            };
            if let Some(cell) = table.get_mut([level, top]) {
                *cell = value;
            }
        }
    }

    Some(table)
}

/// Wall counts for one height, with sampling and random access
pub struct WallCounts<'a> {
    relation: &'a CompatibilityRelation,
    table: Array2<u128>,
    height: usize,
    total: u128,
}

impl<'a> WallCounts<'a> {
    /// Count the walls of `height` rows over a relation
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::CountOverflow`] if the count does not fit in a `u128`
    pub fn new(relation: &'a CompatibilityRelation, height: usize) -> Result<Self> {
        let overflow = || AlgorithmError::CountOverflow {
            rows: relation.len(),
            height,
        };

        let table = count_table::<u128>(relation, height).ok_or_else(overflow)?;

        let total = match height.checked_sub(1) {
            None => 1,
            Some(top_level) => {
                let mut total: u128 = 0;
                for top in 0..relation.len() {
                    let walls = table.get([top_level, top]).copied().unwrap_or(0);
                    total = total.checked_add(walls).ok_or_else(overflow)?;
                }
                total
            }
        };

        tracing::debug!(height, total, "counted walls");
        Ok(Self {
            relation,
            table,
            height,
            total,
        })
    }

    /// Number of walls of the requested height
    pub const fn total(&self) -> u128 {
        self.total
    }

    /// Number of walls whose top row is `row`
    pub fn with_top_row(&self, row: usize) -> u128 {
        self.height
            .checked_sub(1)
            .and_then(|top_level| self.table.get([top_level, row]).copied())
            .unwrap_or(0)
    }

    /// The wall at a position of the enumeration order, without enumerating
    pub fn nth(&self, index: u128) -> Option<Wall> {
        if index >= self.total {
            return None;
        }

        let all_rows: Vec<usize> = (0..self.relation.len()).collect();
        let mut candidates: &[usize] = &all_rows;
        let mut remaining = index;
        let mut path = Vec::with_capacity(self.height);

        for level in (0..self.height).rev() {
            let mut chosen = None;
            for &candidate in candidates {
                let walls = self.table.get([level, candidate]).copied().unwrap_or(0);
                if remaining < walls {
                    chosen = Some(candidate);
                    break;
                }
                remaining -= walls;
            }
            let row = chosen?;
            path.push(row);
            candidates = self.relation.compatible_with(row);
        }

        Some(Wall {
            rows: path
                .iter()
                .filter_map(|&index| self.relation.row(index).cloned())
                .collect(),
        })
    }

    /// Draw a wall uniformly at random, or `None` if there are no walls
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<Wall> {
        if self.total == 0 {
            return None;
        }
        self.nth(rng.random_range(0..self.total))
    }
}

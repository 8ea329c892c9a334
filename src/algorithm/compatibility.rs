use crate::algorithm::cuts::CutSet;
use crate::algorithm::rows::{Row, generate_rows};

/// Which rows may sit directly above or below each other
///
/// Rows are addressed by their index in the generated row list. Built once per
/// width and shared by every height level.
#[derive(Clone, Debug)]
pub struct CompatibilityRelation {
    rows: Vec<Row>,
    compatible: Vec<Vec<usize>>,
}

impl CompatibilityRelation {
    /// Build the relation for an explicit row list
    ///
    /// Each row's cut set is computed once; every ordered pair is then tested
    /// for disjointness. Neighbour lists are in ascending index order.
    pub fn build(rows: Vec<Row>) -> Self {
        let cut_sets: Vec<CutSet> = rows.iter().map(CutSet::from_row).collect();

        let compatible: Vec<Vec<usize>> = cut_sets
            .iter()
            .map(|cuts| {
                cut_sets
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| cuts.is_disjoint(other))
                    .map(|(index, _)| index)
                    .collect()
            })
            .collect();

        let relation = Self { rows, compatible };
        tracing::debug!(
            rows = relation.len(),
            pairs = relation.pair_count(),
            "built compatibility relation"
        );
        relation
    }

    /// Build the relation for every row of a width
    pub fn for_width(width: i64) -> Self {
        Self::build(generate_rows(width))
    }

    /// All rows in generation order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at an index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Indices of the rows that can be stacked next to row `index`
    pub fn compatible_with(&self, index: usize) -> &[usize] {
        self.compatible
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Test if two rows, given by index, can be stacked
    pub fn are_compatible(&self, first: usize, second: usize) -> bool {
        self.compatible_with(first).binary_search(&second).is_ok()
    }

    /// Number of rows
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Test if the width has no rows at all
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of ordered compatible pairs, which is also the wall count at height two
    pub fn pair_count(&self) -> usize {
        self.compatible.iter().map(Vec::len).sum()
    }

    /// Check that every pair is compatible in both directions
    pub fn is_symmetric(&self) -> bool {
        self.compatible.iter().enumerate().all(|(index, neighbours)| {
            neighbours
                .iter()
                .all(|&neighbour| self.are_compatible(neighbour, index))
        })
    }
}

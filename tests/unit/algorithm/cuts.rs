//! Tests for cut point extraction, cut sets and the compatibility test

#[cfg(test)]
mod tests {
    use brickwall::algorithm::cuts::{CutSet, cut_points, is_compatible};
    use brickwall::algorithm::rows::{Row, generate_rows};

    fn row(bricks: &[u8]) -> Row {
        Row::new(bricks.to_vec()).unwrap_or_default()
    }

    // Tests cut points are the prefix sums before the last brick
    // Verified by including the final brick in the running sum
    #[test]
    fn test_cut_points_prefix_sums() {
        assert_eq!(cut_points(&row(&[1, 2, 1])), vec![1, 3]);
        assert_eq!(cut_points(&row(&[2, 2])), vec![2]);
        assert_eq!(cut_points(&row(&[1, 1, 1, 1])), vec![1, 2, 3]);
    }

    // Tests single brick and empty rows have no internal cuts
    // Verified by emitting the row width as a cut point
    #[test]
    fn test_cut_points_without_internal_boundaries() {
        assert!(cut_points(&row(&[4])).is_empty());
        assert!(cut_points(&Row::empty()).is_empty());
    }

    // Tests the concrete compatible and incompatible width four pairs
    // Verified by treating any cut overlap as compatible
    #[test]
    fn test_is_compatible_examples() {
        assert!(is_compatible(&row(&[1, 3]), &row(&[2, 2])));
        assert!(!is_compatible(&row(&[2, 2]), &row(&[1, 1, 2])));
        assert!(is_compatible(&row(&[1, 1]), &row(&[2])));
        assert!(!is_compatible(&row(&[1, 2, 1]), &row(&[1, 2, 1])));
    }

    // Tests a row without cuts is compatible with every row including itself
    // Verified by rejecting pairs where one cut set is empty
    #[test]
    fn test_single_brick_row_compatible_with_all() {
        let full = row(&[4]);
        for other in generate_rows(4) {
            assert!(is_compatible(&full, &other));
        }
    }

    // Tests symmetry over every ordered pair of width five rows
    // Verified by comparing only the first row's cuts against the second's bricks
    #[test]
    fn test_is_compatible_symmetric() {
        let rows = generate_rows(5);
        for first in &rows {
            for second in &rows {
                assert_eq!(
                    is_compatible(first, second),
                    is_compatible(second, first),
                    "{first} vs {second}"
                );
            }
        }
    }

    // Tests cut set membership and conversion
    // Verified by storing cut points shifted by one
    #[test]
    fn test_cut_set_from_row() {
        let cuts = CutSet::from_row(&row(&[1, 2, 1]));
        assert_eq!(cuts.to_vec(), vec![1, 3]);
        assert!(cuts.contains(1));
        assert!(cuts.contains(3));
        assert!(!cuts.contains(0));
        assert!(!cuts.contains(2));
        assert_eq!(cuts.count(), 2);
        assert!(!cuts.is_empty());
    }

    // Tests the wall edges can never be inserted as cut points
    // Verified by removing the bounds check in insert
    #[test]
    fn test_cut_set_ignores_edges() {
        let mut cuts = CutSet::new(4);
        cuts.insert(0);
        cuts.insert(4);
        cuts.insert(9);
        assert!(cuts.is_empty());

        cuts.insert(2);
        assert_eq!(cuts.to_vec(), vec![2]);
    }

    // Tests disjointness of bitsets
    // Verified by changing the overlap test to a subset test
    #[test]
    fn test_cut_set_disjoint() {
        let left = CutSet::from_row(&row(&[1, 3]));
        let right = CutSet::from_row(&row(&[2, 2]));
        let overlapping = CutSet::from_row(&row(&[1, 1, 2]));

        assert!(left.is_disjoint(&right));
        assert!(!right.is_disjoint(&overlapping));
        assert!(!overlapping.is_disjoint(&left));
        assert_eq!(right.to_string(), "CutSet(1 cuts: [2])");
    }
}

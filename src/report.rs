//! Side-by-side comparisons of two tree kinds built from the same keys.
//!
//! A [`Comparison`] names the pair of trees, [`Comparison::measure`] builds both, measures them
//! and tears them down again. The resulting [`ComparisonRow`]s render as a plain text table
//! beneath a [`TableHeader`].

use std::fmt;

use crate::avl::build_avl_tree;
use crate::balanced::build_perfectly_balanced_tree;
use crate::btree::build_db_tree;
use crate::error::Error;
use crate::properties::{calculate_levels_db, TreeProperties};
use crate::random::build_random_search_tree;
use crate::theory;

/// Traversals longer than this are abbreviated by [`compact_traversal`].
const COMPACT_LIMIT: usize = 15;
/// How many keys [`compact_traversal`] shows from each end and from the middle.
const COMPACT_SAMPLE: usize = 5;

/// Which two kinds of tree to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Perfectly-balanced tree against a BST grown in random order.
    BalancedVsRandom,
    /// AVL tree against a perfectly-balanced tree.
    AvlVsBalanced,
    /// AVL tree against a B-tree.
    AvlVsBTree,
}

impl Comparison {
    /// Every comparison, in the order they are usually run.
    pub const ALL: [Self; 3] = [Self::BalancedVsRandom, Self::AvlVsBalanced, Self::AvlVsBTree];

    /// Short names of the two trees, in column order.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::BalancedVsRandom => ("Balanced", "Random"),
            Self::AvlVsBalanced => ("AVL", "Balanced"),
            Self::AvlVsBTree => ("AVL", "B-tree"),
        }
    }

    /// Builds both trees from `keys`, measures them and releases them.
    ///
    /// The perfectly-balanced tree is built from a sorted copy of `keys`; every other tree
    /// gets `keys` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinDegree`] when a B-tree is involved and `min_degree` is below 2.
    pub fn measure(self, keys: &[i32], min_degree: usize) -> Result<Measurement, Error> {
        let mut sorted = keys.to_vec();
        sorted.sort_unstable();
        let n = keys.len();

        let (first, second) = match self {
            Self::BalancedVsRandom => {
                let balanced = build_perfectly_balanced_tree(&sorted);
                let random = build_random_search_tree(keys);
                let first = Observed::of(&balanced, theory::theoretical_average_height_balanced(n));
                let second = Observed::of(&random, theory::theoretical_average_height_random_bst(n));
                release(balanced.teardown(), random.teardown());
                (first, second)
            }
            Self::AvlVsBalanced => {
                let avl = build_avl_tree(keys);
                let balanced = build_perfectly_balanced_tree(&sorted);
                let first = Observed::of(&avl, theory::theoretical_average_height_balanced(n));
                let second = Observed::of(&balanced, theory::theoretical_average_height_balanced(n));
                release(avl.teardown(), balanced.teardown());
                (first, second)
            }
            Self::AvlVsBTree => {
                let avl = build_avl_tree(keys);
                let db = build_db_tree(keys, min_degree)?;
                let first = Observed::of(&avl, theory::theoretical_average_height_balanced(n));
                let mut second =
                    Observed::of(&db, theory::theoretical_db_height(n, min_degree) as f64);
                second.summary.level_sum = Some(calculate_levels_db(db.root()));
                release(avl.teardown(), db.teardown());
                (first, second)
            }
        };

        Ok(Measurement {
            row: ComparisonRow {
                size: n,
                first: first.summary,
                second: second.summary,
            },
            first_in_order: first.in_order,
            second_in_order: second.in_order,
        })
    }
}

fn release(first: usize, second: usize) {
    tracing::debug!(first, second, "released compared trees");
}

/// What one tree looked like before it was released.
struct Observed {
    summary: TreeSummary,
    in_order: Vec<i32>,
}

impl Observed {
    fn of(tree: &impl TreeProperties, estimate: f64) -> Self {
        Self {
            summary: TreeSummary::measure(tree, estimate),
            in_order: tree.in_order(),
        }
    }
}

/// The outcome of [`Comparison::measure`].
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Measurements of both trees.
    pub row: ComparisonRow,
    /// In-order traversal of the first tree.
    pub first_in_order: Vec<i32>,
    /// In-order traversal of the second tree.
    pub second_in_order: Vec<i32>,
}

/// Measurements of a single tree.
///
/// Levels are counted from 1 at the root throughout, the same base the estimates in [`theory`]
/// use for mean levels, so `average_level` and `estimate` can be read side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeSummary {
    /// Sum of all keys.
    pub check_sum: i64,
    /// Number of levels.
    pub height: usize,
    /// Mean level of the leaves, the root being level 1. 0 for an empty tree.
    pub average_level: f64,
    /// For a B-tree, the sum over all keys of the depth of the node holding them
    /// (see [`calculate_levels_db`]). `None` for binary trees.
    pub level_sum: Option<usize>,
    /// Closed-form estimate from [`theory`] for this kind of tree.
    pub estimate: f64,
}

impl TreeSummary {
    /// Measures `tree`, pairing it with the given closed-form `estimate`.
    pub fn measure(tree: &impl TreeProperties, estimate: f64) -> Self {
        let height = tree.height();
        // Depths start at 0 at the root; levels start at 1.
        let average_level = if height == 0 {
            0.0
        } else {
            tree.average_height() + 1.0
        };

        Self {
            check_sum: tree.check_sum(),
            height,
            average_level,
            level_sum: None,
            estimate,
        }
    }
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_sum = self
            .level_sum
            .map_or_else(|| "-".to_string(), |sum| sum.to_string());
        write!(
            f,
            "{:>12} {:>8} {:>10.2} {:>8} {:>10.2}",
            self.check_sum, self.height, self.average_level, level_sum, self.estimate
        )
    }
}

/// One table row: the same key set measured as two different trees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    /// Number of keys both trees were built from.
    pub size: usize,
    /// The first tree of the comparison.
    pub first: TreeSummary,
    /// The second tree of the comparison.
    pub second: TreeSummary,
}

impl fmt::Display for ComparisonRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6} | {} | {}", self.size, self.first, self.second)
    }
}

/// Column titles for a table of [`ComparisonRow`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    /// Name of the first tree.
    pub first: &'static str,
    /// Name of the second tree.
    pub second: &'static str,
}

impl From<Comparison> for TableHeader {
    fn from(comparison: Comparison) -> Self {
        let (first, second) = comparison.labels();
        Self { first, second }
    }
}

impl fmt::Display for TableHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = format!(
            "{:>12} {:>8} {:>10} {:>8} {:>10}",
            "checksum", "height", "avg level", "levels", "estimate"
        );
        writeln!(f, "{:>6} | {:^52} | {:^52}", "", self.first, self.second)?;
        writeln!(f, "{:>6} | {columns} | {columns}", "size")?;
        write!(f, "{}", "-".repeat(6 + 3 + 52 + 3 + 52))
    }
}

/// Closed-form heights from [`theory`] for one tree size, balanced and random BSTs side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheoreticalEstimates {
    /// Number of keys.
    pub size: usize,
    /// [`theory::theoretical_height_balanced`].
    pub balanced_height: f64,
    /// [`theory::theoretical_average_height_balanced`].
    pub balanced_average: f64,
    /// [`theory::theoretical_height_random_bst`].
    pub random_height: f64,
    /// [`theory::theoretical_average_height_random_bst`].
    pub random_average: f64,
}

impl TheoreticalEstimates {
    /// Column titles, rule included, for a table of estimates.
    pub const HEADER: &'static str = concat!(
        "  size | balanced height | balanced avg | random height |   random avg\n",
        "----------------------------------------------------------------------",
    );

    /// The estimates for a tree of `size` keys.
    pub fn for_size(size: usize) -> Self {
        Self {
            size,
            balanced_height: theory::theoretical_height_balanced(size),
            balanced_average: theory::theoretical_average_height_balanced(size),
            random_height: theory::theoretical_height_random_bst(size),
            random_average: theory::theoretical_average_height_random_bst(size),
        }
    }
}

impl fmt::Display for TheoreticalEstimates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} | {:>15.2} | {:>12.2} | {:>13.2} | {:>12.2}",
            self.size,
            self.balanced_height,
            self.balanced_average,
            self.random_height,
            self.random_average
        )
    }
}

/// Renders `keys` separated by spaces. Past fifteen keys only the first five, five evenly spaced
/// keys from the middle and the last five are shown, with `...` marking the gaps.
pub fn compact_traversal(keys: &[i32]) -> String {
    if keys.len() <= COMPACT_LIMIT {
        return join(keys.iter().map(i32::to_string));
    }

    let step = keys.len() / (COMPACT_SAMPLE + 1);
    let head = keys[..COMPACT_SAMPLE].iter().map(i32::to_string);
    let middle = (1..=COMPACT_SAMPLE).map(|i| keys[i * step].to_string());
    let tail = keys[keys.len() - COMPACT_SAMPLE..].iter().map(i32::to_string);

    let mut parts: Vec<String> = head.collect();
    for sample in middle {
        parts.push("...".to_string());
        parts.push(sample);
    }
    parts.push("...".to_string());
    parts.extend(tail);
    join(parts.into_iter())
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_traversals_are_printed_in_full() {
        assert_eq!(compact_traversal(&[]), "");
        assert_eq!(compact_traversal(&[1, 3, 4, 5, 8, 9]), "1 3 4 5 8 9");
    }

    #[test]
    fn long_traversals_are_sampled() {
        let keys: Vec<i32> = (0..30).collect();
        assert_eq!(
            compact_traversal(&keys),
            "0 1 2 3 4 ... 5 ... 10 ... 15 ... 20 ... 25 ... 25 26 27 28 29"
        );
    }

    #[test]
    fn row_lines_up_with_header() {
        let summary = TreeSummary {
            check_sum: 55,
            height: 4,
            average_level: 2.5,
            level_sum: None,
            estimate: 2.9,
        };
        let row = ComparisonRow {
            size: 10,
            first: summary,
            second: summary,
        };
        let rendered = row.to_string();
        let tokens: Vec<&str> = rendered.split_whitespace().collect();
        assert_eq!(
            tokens,
            ["10", "|", "55", "4", "2.50", "-", "2.90", "|", "55", "4", "2.50", "-", "2.90"]
        );

        let header = TableHeader::from(Comparison::AvlVsBTree).to_string();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("AVL") && lines[0].contains("B-tree"));
        assert_eq!(lines[1].len(), rendered.len());
        assert_eq!(lines[2].len(), rendered.len());
    }

    #[test]
    fn measuring_compares_the_same_keys() {
        let keys = [7, 2, 9, 1, 5, 8, 3, 6, 4, 10];
        for comparison in Comparison::ALL {
            let measurement = comparison.measure(&keys, 2).unwrap();
            let row = measurement.row;

            assert_eq!(row.size, 10);
            assert_eq!(row.first.check_sum, 55);
            assert_eq!(row.second.check_sum, 55);
            assert_eq!(measurement.first_in_order, (1..=10).collect::<Vec<_>>());
            assert_eq!(measurement.second_in_order, measurement.first_in_order);
        }
    }

    #[test]
    fn balanced_against_random_heights() {
        let keys = [7, 2, 9, 1, 5, 8, 3, 6, 4, 10];
        let row = Comparison::BalancedVsRandom.measure(&keys, 2).unwrap().row;
        assert_eq!(row.first.height, 4);
        assert_eq!(row.second.height, 5);
    }

    #[test]
    fn b_tree_comparison_rejects_bad_min_degree() {
        let result = Comparison::AvlVsBTree.measure(&[1, 2, 3], 1);
        assert_eq!(result.unwrap_err(), Error::InvalidMinDegree(1));
        // Binary-only comparisons never look at the degree.
        assert!(Comparison::AvlVsBalanced.measure(&[1, 2, 3], 1).is_ok());
    }

    #[test]
    fn b_tree_side_reports_level_sum() {
        let keys: Vec<i32> = (1..=10).collect();
        let row = Comparison::AvlVsBTree.measure(&keys, 2).unwrap().row;

        assert_eq!(row.first.level_sum, None);
        // Root [3, 6, 9] over four leaves holding seven keys.
        assert_eq!(row.second.level_sum, Some(7));
        assert_eq!(row.second.height, 2);
        assert_eq!(row.second.average_level, 2.0);
        assert!(row.to_string().split_whitespace().any(|token| token == "7"));
    }

    #[test]
    fn average_level_shares_the_estimate_base() {
        let row = Comparison::AvlVsBalanced.measure(&[42], 2).unwrap().row;
        assert_eq!(row.first.average_level, 1.0);
        assert_eq!(row.first.estimate, 1.0);

        let empty = Comparison::AvlVsBalanced.measure(&[], 2).unwrap().row;
        assert_eq!(empty.first.average_level, 0.0);
        assert_eq!(empty.first.estimate, 0.0);
    }

    #[test]
    fn theoretical_estimates_line_up_with_header() {
        let estimates = TheoreticalEstimates::for_size(1024);
        assert_eq!(estimates.balanced_height, 10.0);
        assert!((estimates.random_height - 29.9).abs() < 1e-9);

        let rendered = estimates.to_string();
        for line in TheoreticalEstimates::HEADER.lines() {
            assert_eq!(line.len(), rendered.len());
        }
    }
}

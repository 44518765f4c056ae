//! Closed-form height estimates to compare measured trees against.
//!
//! Sizes of zero (or one, where the formula needs a logarithm of something larger) estimate as 0.

/// `⌊log2 n⌋`, the height of a perfectly-balanced tree counted in edges.
pub fn theoretical_height_balanced(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    f64::from(n.ilog2())
}

/// Mean level of a node in a perfectly-balanced tree of `n` nodes, counting the root as level 1.
/// Levels are filled top-down: level `L` holds up to `2^(L-1)` nodes.
pub fn theoretical_average_height_balanced(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }

    let mut remaining = n;
    let mut level = 1usize;
    let mut sum = 0.0;
    while remaining > 0 {
        let capacity = 1usize.checked_shl((level - 1) as u32).unwrap_or(usize::MAX);
        let used = capacity.min(remaining);
        sum += level as f64 * used as f64;
        remaining -= used;
        level += 1;
    }

    sum / n as f64
}

/// Expected height of a BST grown from a random insertion order, `≈ 2.99 * log2 n`.
pub fn theoretical_height_random_bst(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    2.99 * (n as f64).log2()
}

/// Expected mean depth in a BST grown from a random insertion order, `≈ 2 * ln n`.
pub fn theoretical_average_height_random_bst(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    2.0 * (n as f64).ln()
}

/// `⌈ln(n + 1) / ln t⌉`, an upper estimate for the levels of a B-tree of minimum degree `t`.
pub fn theoretical_db_height(n: usize, min_degree: usize) -> usize {
    if n == 0 || min_degree < 2 {
        return 0;
    }
    ((n as f64 + 1.0).ln() / (min_degree as f64).ln()).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_height() {
        assert_eq!(theoretical_height_balanced(0), 0.0);
        assert_eq!(theoretical_height_balanced(1), 0.0);
        assert_eq!(theoretical_height_balanced(10), 3.0);
        assert_eq!(theoretical_height_balanced(16), 4.0);
    }

    #[test]
    fn balanced_average_height() {
        assert_eq!(theoretical_average_height_balanced(0), 0.0);
        assert_eq!(theoretical_average_height_balanced(1), 1.0);
        // 1 * 1 + 2 * 2 + 3 * 4 = 17 over 7 nodes.
        assert!((theoretical_average_height_balanced(7) - 17.0 / 7.0).abs() < 1e-12);
        // 1 + 4 + 12 + 4 * 3 = 29 over 10 nodes.
        assert!((theoretical_average_height_balanced(10) - 2.9).abs() < 1e-12);
    }

    #[test]
    fn random_bst_estimates() {
        assert_eq!(theoretical_height_random_bst(1), 0.0);
        assert!((theoretical_height_random_bst(8) - 8.97).abs() < 1e-9);
        assert_eq!(theoretical_average_height_random_bst(0), 0.0);
        assert!((theoretical_average_height_random_bst(100) - 2.0 * 100f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn db_height() {
        assert_eq!(theoretical_db_height(0, 2), 0);
        assert_eq!(theoretical_db_height(7, 2), 3);
        assert_eq!(theoretical_db_height(8, 2), 4);
        assert_eq!(theoretical_db_height(100, 3), 5);
        assert_eq!(theoretical_db_height(100, 1), 0);
    }
}

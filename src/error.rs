//! Errors returned by fallible tree construction.

use std::fmt;

/// Error returned when a tree cannot be constructed with the requested parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A B-tree needs a minimum degree of at least 2. Carries the rejected value.
    InvalidMinDegree(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinDegree(t) => {
                write!(f, "minimum degree must be at least {}, got {t}", crate::btree::MIN_DEGREE)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_min_degree_display() {
        assert_eq!(
            Error::InvalidMinDegree(1).to_string(),
            "minimum degree must be at least 2, got 1"
        );
    }
}

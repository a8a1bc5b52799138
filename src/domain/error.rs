use thiserror::Error;

/// Errors raised by grid construction and direct cell access.
///
/// The taxonomy is narrow on purpose: the simulation is closed and
/// deterministic, so everything else either cannot fail or degrades
/// gracefully (unknown pattern names stamp nothing).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Grid creation or resize was asked for a zero side length.
    /// Rejected before any state is touched, so there is no partial resize.
    #[error("grid size must be positive")]
    InvalidSize,

    /// A single-cell toggle addressed a cell outside the grid. The UI
    /// clamps pixel coordinates before calling in, so hitting this means a
    /// caller broke that contract.
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_names_the_offender() {
        let err = GridError::OutOfBounds { x: 7, y: 40, size: 40 };
        assert_eq!(err.to_string(), "cell (7, 40) is outside the 40x40 grid");
    }

    #[test]
    fn test_invalid_size_display() {
        assert_eq!(GridError::InvalidSize.to_string(), "grid size must be positive");
    }
}

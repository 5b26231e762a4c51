use thiserror::Error;

/// Errors reported before layout begins. Degenerate layout inputs (zero
/// totals, needle-thin rectangles, depth exhaustion) are not errors: they
/// produce partial output instead, and callers must tolerate receiving
/// fewer cells than categories.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreemapError {
    /// A weight was NaN, infinite, or negative.
    #[error("invalid weight {value} at index {index}: weights must be finite and non-negative")]
    InvalidWeight { index: usize, value: f64 },

    /// No usable observations were left after grouping (empty input, or
    /// every observation had an empty label).
    #[error("no valid data: no observations with a non-empty label")]
    EmptyDataset,

    /// More distinct categories than the configured cap.
    #[error("too many unique categories ({count} > {limit}); reduce the number of distinct labels")]
    TooManyCategories { count: usize, limit: usize },
}

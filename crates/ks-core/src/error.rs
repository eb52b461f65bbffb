/// Alias for `Result<T, KsError>`.
pub type KsResult<T> = Result<T, KsError>;

/// Errors that can occur when accessing an inventory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KsError {
    /// The row or column lies outside the grid (per-row for jagged grids).
    #[error("inventory index out of range: ({row}, {col})")]
    OutOfRange {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}

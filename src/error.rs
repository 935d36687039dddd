use thiserror::Error;

/// Errors returned by the clustering engine and its loaders.
#[derive(Debug, Error)]
pub enum Error {
    /// No points were supplied.
    #[error("empty input")]
    EmptyInput,

    /// Requested cluster count is incompatible with the dataset (needs `1 < k < N`).
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} points")]
    InvalidClusterCount { requested: usize, n_items: usize },

    /// Feature vectors (or centroids) disagree on dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A scalar parameter is out of its valid range.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: &'static str,
    },

    /// A feature value is NaN or infinite.
    #[error("non-finite value at row {row}, column {col}")]
    NonFiniteValue { row: usize, col: usize },

    /// Two points share an identifier.
    #[error("duplicate point id at index {index}")]
    DuplicateId { index: usize },

    /// Every remaining candidate coincides with an already chosen center.
    #[error("degenerate seeding: all sampling weights are zero after {chosen} of {requested} centers")]
    DegenerateSeeding { chosen: usize, requested: usize },

    /// An internal numerical invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A text field could not be read as the expected scalar.
    #[error("cannot parse {field} from {value:?}")]
    Parse { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

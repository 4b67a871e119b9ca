use thiserror::Error;

/// Top-level error type for the geokern kernel.
///
/// Every variant is an invalid-argument failure: the caller handed in data the
/// kernel refuses to work with. Legitimate "no result" outcomes (parallel
/// lines, singular matrices, zero vectors) are reported through `Option`.
#[derive(Debug, Error)]
pub enum GeokernError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl GeokernError {
    /// Returns `true` for every error the kernel produces.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Geometry(_) | Self::Matrix(_) | Self::Model(_) => true,
        }
    }
}

/// Errors related to geometric construction and queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("coordinate or scalar is NaN")]
    NotANumber,

    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon needs at least 3 distinct, non-collinear vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon vertices span {rank} dimensions, expected at most 2")]
    NonPlanar { rank: usize },

    #[error("{0} are parallel")]
    Parallel(&'static str),

    #[error("{0} coincide")]
    Coincident(&'static str),

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to matrix construction and arithmetic.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix entry or scalar is NaN")]
    NotANumber,

    #[error("entry ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{op}: incompatible dimensions {left:?} and {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// Errors related to scene access.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("polygon index {index} is out of range ({len} polygons)")]
    PolygonIndexOutOfRange { index: usize, len: usize },

    #[error("camera index {index} is out of range ({len} cameras)")]
    CameraIndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`GeokernError`].
pub type Result<T> = std::result::Result<T, GeokernError>;

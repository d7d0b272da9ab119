/// Errors raised by the tessellation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A polyline or polygon was given fewer points than it needs.
    InsufficientPoints { required: usize, provided: usize },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InsufficientPoints { required, provided } => write!(
                f,
                "Insufficient points: at least {} required, {} provided",
                required, provided
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for tessellation.
pub type GeometryResult<T> = Result<T, GeometryError>;

pub(crate) fn require_points(provided: usize, required: usize) -> GeometryResult<()> {
    if provided < required {
        return Err(GeometryError::InsufficientPoints { required, provided });
    }
    Ok(())
}

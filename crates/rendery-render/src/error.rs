use rendery_geometry::GeometryError;
use rendery_text::TextError;

use crate::texture::BackendKind;

/// Errors raised while dispatching draws.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A texture created by a different backend was handed to this one.
    InvalidTextureBinding {
        expected: BackendKind,
        found: BackendKind,
    },

    /// The backend failed to create or update a GPU resource.
    Backend(String),

    /// Text layout failed (e.g. the glyph atlas is full).
    Text(TextError),

    /// Shape tessellation failed.
    Geometry(GeometryError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidTextureBinding { expected, found } => write!(
                f,
                "Invalid texture type: expected a {:?} texture and got a {:?} texture",
                expected, found
            ),
            RenderError::Backend(msg) => write!(f, "Backend error: {}", msg),
            RenderError::Text(err) => write!(f, "Text error: {}", err),
            RenderError::Geometry(err) => write!(f, "Geometry error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Text(err) => Some(err),
            RenderError::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TextError> for RenderError {
    fn from(err: TextError) -> Self {
        RenderError::Text(err)
    }
}

impl From<GeometryError> for RenderError {
    fn from(err: GeometryError) -> Self {
        RenderError::Geometry(err)
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

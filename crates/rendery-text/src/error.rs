/// Errors that can occur in the text system.
#[derive(Debug, Clone, PartialEq)]
pub enum TextError {
    /// Font file not found.
    FontFileNotFound(std::path::PathBuf),

    /// The font data could not be parsed.
    InvalidFontData(String),

    /// The glyph atlas has no room left for the requested bitmap.
    ///
    /// The atlas never evicts entries, so this is permanent for the font that
    /// raised it; recreate the font with a larger atlas.
    AtlasFull {
        requested_width: u32,
        requested_height: u32,
        atlas_width: u32,
        atlas_height: u32,
    },

    /// Generic IO error.
    IoError(String),
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::FontFileNotFound(path) => {
                write!(f, "Font file not found: {}", path.display())
            }
            TextError::InvalidFontData(msg) => write!(f, "Invalid font data: {}", msg),
            TextError::AtlasFull {
                requested_width,
                requested_height,
                atlas_width,
                atlas_height,
            } => write!(
                f,
                "Texture atlas is full: requested {}x{} but atlas is {}x{}",
                requested_width, requested_height, atlas_width, atlas_height
            ),
            TextError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for TextError {}

impl From<std::io::Error> for TextError {
    fn from(err: std::io::Error) -> Self {
        TextError::IoError(err.to_string())
    }
}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;

use thiserror::Error;

/// Errors raised inside the render pipeline.
///
/// Nothing here is fatal to the process: out-of-range parameters are clamped
/// before they can error, unknown algorithm names resolve to defaults, and
/// the session catches transform failures at the render boundary and falls
/// back to the unprocessed source.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("No source image loaded")]
    NoSource,

    #[error("A render is already in progress")]
    Busy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

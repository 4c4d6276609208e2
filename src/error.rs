use thiserror::Error;

/// Top-level error type for the girandola screensaver.
#[derive(Debug, Error)]
pub enum GirandolaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to geometric configuration.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to rasterization parameters.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("invalid segment style: {0}")]
    InvalidStyle(String),
}

/// Errors surfaced by the windowing and framebuffer backend.
///
/// These are not recoverable at this layer; the process terminates with a
/// nonzero status when one propagates out of the event loop.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("framebuffer failed: {0}")]
    Framebuffer(#[from] pixels::Error),
}

/// Convenience type alias for results using [`GirandolaError`].
pub type Result<T> = std::result::Result<T, GirandolaError>;

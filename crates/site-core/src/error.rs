use thiserror::Error;

/// Failures surfaced by the scene, panel and renderer.
///
/// The page itself treats none of these as recoverable: front-ends log them
/// and skip the affected component.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid hex color {0:?}")]
    InvalidHexColor(String),

    #[error("unknown panel control {0:?}")]
    UnknownControl(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter")]
    NoAdapter,

    #[error("surface reports no usable texture format")]
    UnsupportedSurface,

    #[error("GPU device request failed: {0}")]
    Device(String),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod follow;
pub mod frame;
pub mod gfx;
pub mod input;
pub mod panel;
pub mod particles;
pub mod preloader;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod typewriter;
pub mod water;

pub use camera::Camera;
pub use color::Color;
pub use config::{SceneVariant, SiteConfig};
pub use error::SiteError;
pub use frame::{CancelToken, FrameTick, RenderLoop};
pub use input::Viewport;
pub use scene::SceneGraph;

// Shaders bundled as string constants
pub static WATER_WGSL: &str = include_str!("../shaders/water.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

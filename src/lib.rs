//! A CPU-based software renderer for flat-shaded triangle meshes.
//!
//! This crate provides a small 3D rendering pipeline: meshes are transformed,
//! backface-culled, projected, depth-sorted (painter's algorithm) and scanline
//! filled into a 32-bit ARGB pixel buffer. SDL2 is used only for window
//! management and display, behind the `window` feature.
//!
//! # Quick Start
//!
//! ```no_run
//! use flatrast::prelude::*;
//!
//! let mut engine = Engine::new(800, 600);
//! engine.load_cube_mesh();
//! engine.update()?;
//! engine.render();
//! let frame: &[u8] = engine.frame_buffer();
//! # Ok::<(), flatrast::mesh::FaceIndexError>(())
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod input;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod sorting;
pub mod transform;
pub mod triangle;
#[cfg(feature = "window")]
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use engine::{CullMode, Engine, RenderMode};
pub use input::{Command, Key};
pub use mesh::{FaceIndexError, LoadError, Mesh};
pub use projection::Projection;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use flatrast::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::Config;
    pub use crate::engine::{CullMode, Engine, RenderMode};
    pub use crate::input::{Command, Key};
    pub use crate::light::Light;

    // Geometry
    pub use crate::mesh::{Face, Mesh};
    pub use crate::projection::Projection;
    pub use crate::transform::Transform;
    pub use crate::triangle::ProjectedTriangle;

    // Math
    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};

    // Window
    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{FrameBuffer, ScanlineRasterizer};
}

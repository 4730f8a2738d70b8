//! Vector and matrix types used by the pipeline.
//!
//! All types are plain `f32` value types. Matrices use column vectors on the
//! right (`m * v`), see [`mat4`] for the full convention.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::engine::{CullMode, RenderMode};
use crate::math::Vec3;

/// Largest accepted window width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Spinning flat-shaded mesh viewer rendered entirely on the CPU.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "flatrast", version)]
pub struct Config {
    /// OBJ file to render. The built-in cube is used when omitted.
    #[arg(value_name = "OBJ")]
    pub mesh: Option<PathBuf>,

    /// Window width in pixels
    #[arg(
        long,
        default_value_t = 800,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64)
    )]
    pub width: u32,

    /// Window height in pixels
    #[arg(
        long,
        default_value_t = 600,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64)
    )]
    pub height: u32,

    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Near clipping plane distance
    #[arg(long, default_value_t = 0.1)]
    pub z_near: f32,

    /// Far clipping plane distance
    #[arg(long, default_value_t = 100.0)]
    pub z_far: f32,

    /// Distance from the camera to the mesh along +z
    #[arg(long, default_value_t = 5.0)]
    pub distance: f32,

    /// Rotation added to the mesh every frame, in radians, as `x,y,z`
    #[arg(
        long,
        value_parser = parse_vec3,
        default_value = "0.005,0,0",
        allow_hyphen_values = true
    )]
    pub rotation_step: Vec3,

    /// Initial render mode
    #[arg(long, value_enum, default_value_t = RenderMode::Wireframe)]
    pub render_mode: RenderMode,

    /// Initial culling mode
    #[arg(long, value_enum, default_value_t = CullMode::Backface)]
    pub cull: CullMode,

    /// Don't draw the background grid
    #[arg(long)]
    pub no_grid: bool,
}

impl Config {
    /// Time budget for one frame at the configured FPS.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from([env!("CARGO_PKG_NAME")])
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("`{c}`: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match components[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected three comma-separated numbers, got {}", components.len())),
    }
}

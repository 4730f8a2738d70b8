//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns the
//! mesh, the pixel buffer and every per-run setting, and drives one frame at a
//! time: [`Engine::update`] builds the depth-sorted triangle list and
//! [`Engine::render`] rasterizes it.

use std::path::Path;

use clap::ValueEnum;
use log::{debug, info};

use crate::colors;
use crate::config::Config;
use crate::input::Command;
use crate::light::Light;
use crate::math::Vec3;
use crate::mesh::{FaceIndexError, LoadError, Mesh};
use crate::pipeline::{self, FrameSettings};
use crate::projection::Projection;
use crate::render::{
    draw_triangle_wireframe, draw_vertex_markers, Renderer, ScanlineRasterizer,
};
use crate::sorting::sort_by_depth;
use crate::triangle::ProjectedTriangle;

const GRID_SPACING: u32 = 50;
const VERTEX_MARKER_SIZE: i32 = 4;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderMode {
    /// Wireframe + vertices (key: 1)
    WireframeVertices,
    /// Wireframe only (key: 2)
    #[default]
    Wireframe,
    /// Filled only (key: 3)
    Filled,
    /// Filled + wireframe (key: 4)
    FilledWireframe,
    /// Filled with flat lighting (key: 5)
    FlatShaded,
    /// Filled with flat lighting + wireframe (key: 6)
    FlatShadedWireframe,
}

impl RenderMode {
    /// Whether triangle colors are resolved through the light.
    pub fn is_flat_shaded(self) -> bool {
        matches!(self, RenderMode::FlatShaded | RenderMode::FlatShadedWireframe)
    }

    fn draws_fill(self) -> bool {
        !matches!(self, RenderMode::Wireframe | RenderMode::WireframeVertices)
    }

    fn draws_wireframe(self) -> bool {
        !matches!(self, RenderMode::Filled | RenderMode::FlatShaded)
    }

    fn draws_vertices(self) -> bool {
        self == RenderMode::WireframeVertices
    }
}

/// Which faces the pipeline drops before projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CullMode {
    /// Keep every face.
    None,
    /// Drop faces pointing away from the camera (key: C)
    #[default]
    Backface,
}

pub struct Engine {
    renderer: Renderer,
    rasterizer: ScanlineRasterizer,
    triangles_to_render: Vec<ProjectedTriangle>,
    mesh: Mesh,
    camera_position: Vec3,
    projection: Projection,
    light: Light,
    render_mode: RenderMode,
    cull_mode: CullMode,
    rotation_step: Vec3,
    mesh_distance: f32,
    pub draw_grid: bool,
}

impl Engine {
    /// An engine with the default camera, light and modes and an empty mesh.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(&Config {
            width,
            height,
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Self {
        let aspect_ratio = Projection::aspect_for(config.width, config.height);

        Self {
            renderer: Renderer::new(config.width, config.height),
            rasterizer: ScanlineRasterizer::new(),
            triangles_to_render: Vec::new(),
            mesh: Mesh::default(),
            camera_position: Vec3::ZERO,
            projection: Projection::from_degrees(
                config.fov,
                aspect_ratio,
                config.z_near,
                config.z_far,
            ),
            light: Light::default(),
            render_mode: config.render_mode,
            cull_mode: config.cull,
            rotation_step: config.rotation_step,
            mesh_distance: config.distance,
            draw_grid: !config.no_grid,
        }
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    pub fn set_light(&mut self, light: Light) {
        self.light = light;
    }

    pub fn light(&self) -> Light {
        self.light
    }

    pub fn set_rotation_step(&mut self, step: Vec3) {
        self.rotation_step = step;
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Applies a user command. Returns `false` when the command asks to quit.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => {
                info!("quit requested");
                return false;
            }
            Command::SetCullMode(mode) => {
                info!("cull mode: {:?}", mode);
                self.cull_mode = mode;
            }
            Command::SetRenderMode(mode) => {
                info!("render mode: {:?}", mode);
                self.render_mode = mode;
            }
        }
        true
    }

    pub fn load_cube_mesh(&mut self) {
        self.set_mesh(Mesh::cube());
    }

    pub fn load_mesh(&mut self, file_path: impl AsRef<Path>) -> Result<(), LoadError> {
        self.set_mesh(Mesh::from_obj(file_path)?);
        Ok(())
    }

    /// Replaces the mesh and pushes it `mesh_distance` units in front of the
    /// camera.
    pub fn set_mesh(&mut self, mut mesh: Mesh) {
        mesh.transform_mut()
            .set_translation_xyz(0.0, 0.0, self.mesh_distance);
        self.mesh = mesh;
        self.triangles_to_render.clear();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        debug!("resizing frame buffer to {}x{}", width, height);
        self.renderer.resize(width, height);
        self.projection
            .set_aspect_ratio(Projection::aspect_for(width, height));
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Triangles produced by the last [`update`](Self::update), back to front.
    pub fn triangles(&self) -> &[ProjectedTriangle] {
        &self.triangles_to_render
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Returns the rendered frame as packed ARGB8888 pixels.
    pub fn pixels(&self) -> &[u32] {
        self.renderer.pixels()
    }

    fn frame_settings(&self) -> FrameSettings {
        FrameSettings {
            render_mode: self.render_mode,
            cull_mode: self.cull_mode,
            camera_position: self.camera_position,
            light: self.light,
            projection: self.projection,
            viewport_width: self.renderer.width(),
            viewport_height: self.renderer.height(),
        }
    }

    /// Advances the mesh rotation and rebuilds the triangle list for the frame.
    ///
    /// On error the previous frame's triangles are left untouched.
    pub fn update(&mut self) -> Result<(), FaceIndexError> {
        self.mesh.transform_mut().rotate(self.rotation_step);

        let mut triangles = pipeline::project_mesh(&self.mesh, &self.frame_settings())?;

        // Painter's algorithm: farther triangles are drawn first.
        sort_by_depth(&mut triangles);

        self.triangles_to_render = triangles;
        Ok(())
    }

    /// Render the current frame
    pub fn render(&mut self) {
        self.renderer.clear(colors::BACKGROUND);

        if self.draw_grid {
            self.renderer.draw_grid(GRID_SPACING, colors::GRID);
        }

        let mode = self.render_mode;
        let mut fb = self.renderer.as_framebuffer();

        for triangle in &self.triangles_to_render {
            if mode.draws_fill() {
                self.rasterizer.fill_triangle(triangle, &mut fb);
            }
            if mode.draws_wireframe() {
                draw_triangle_wireframe(&mut fb, triangle, colors::WIREFRAME);
            }
            if mode.draws_vertices() {
                draw_vertex_markers(&mut fb, triangle, VERTEX_MARKER_SIZE, colors::VERTEX);
            }
        }
    }
}

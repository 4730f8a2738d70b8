//! Per-frame geometry pipeline.
//!
//! Turns a [`Mesh`] into the screen-space [`ProjectedTriangle`]s for one frame:
//!
//! 1. Model space → world space with the mesh's world matrix
//! 2. Face normal from the transformed vertices
//! 3. Backface culling against the camera position
//! 4. Perspective projection and mapping to pixel coordinates
//! 5. Average depth and flat-shaded color
//!
//! Camera space is left-handed: the camera sits at the origin looking down +z,
//! so larger z is farther away. Faces are visible when their vertices appear
//! clockwise on screen.

use log::trace;

use crate::colors;
use crate::engine::{CullMode, RenderMode};
use crate::light::{apply_intensity, Light};
use crate::math::{Mat4, Vec2, Vec3, Vec4};
use crate::mesh::{FaceIndexError, Mesh};
use crate::projection::Projection;
use crate::triangle::ProjectedTriangle;

/// Everything the pipeline reads besides the mesh itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSettings {
    pub render_mode: RenderMode,
    pub cull_mode: CullMode,
    pub camera_position: Vec3,
    pub light: Light,
    pub projection: Projection,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl FrameSettings {
    /// Settings for a viewport with the camera at the origin, default light,
    /// default modes.
    pub fn new(projection: Projection, viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            render_mode: RenderMode::default(),
            cull_mode: CullMode::default(),
            camera_position: Vec3::ZERO,
            light: Light::default(),
            projection,
            viewport_width,
            viewport_height,
        }
    }
}

/// Maps camera-space vertices to pixel coordinates.
struct Viewport {
    projection_matrix: Mat4,
    z_near: f32,
    half_width: f32,
    half_height: f32,
}

impl Viewport {
    fn new(settings: &FrameSettings) -> Self {
        Self {
            projection_matrix: settings.projection.matrix(),
            z_near: settings.projection.z_near(),
            half_width: settings.viewport_width as f32 / 2.0,
            half_height: settings.viewport_height as f32 / 2.0,
        }
    }

    /// Projects one vertex, or `None` if it sits in front of the near plane
    /// or the projection degenerates.
    fn to_screen(&self, vertex: Vec3) -> Option<Vec2> {
        if vertex.z < self.z_near {
            return None;
        }
        let ndc = self.projection_matrix.project(Vec4::from(vertex))?;

        // Scale to the viewport, flip y (screen y grows downward) and move
        // the origin to the middle of the screen.
        let screen = Vec2::new(
            ndc.x * self.half_width + self.half_width,
            -ndc.y * self.half_height + self.half_height,
        );
        screen.is_finite().then_some(screen)
    }
}

/// Runs the geometry pipeline over every face of `mesh`.
///
/// Triangles come back in face order; sort them with
/// [`sort_by_depth`](crate::sorting::sort_by_depth) before drawing.
///
/// # Errors
///
/// A face referencing a vertex outside the mesh aborts the whole frame with a
/// [`FaceIndexError`]. Triangles that cannot be projected (a vertex in front of
/// the near plane or a degenerate perspective divide) are skipped silently.
pub fn project_mesh(
    mesh: &Mesh,
    settings: &FrameSettings,
) -> Result<Vec<ProjectedTriangle>, FaceIndexError> {
    let vertices = mesh.vertices();
    let world_matrix = mesh.transform().to_matrix();
    let viewport = Viewport::new(settings);
    let flat_shaded = settings.render_mode.is_flat_shaded();

    let mut triangles = Vec::with_capacity(mesh.faces().len());
    let mut culled = 0usize;
    let mut skipped = 0usize;

    for (face_index, face) in mesh.faces().iter().enumerate() {
        let offsets = face
            .vertex_offsets(vertices.len())
            .map_err(|index| FaceIndexError {
                face: face_index,
                index,
                vertex_count: vertices.len(),
            })?;

        // Model Space --> World Space
        let transformed = offsets.map(|i| (world_matrix * Vec4::from(vertices[i])).to_vec3());
        let [a, b, c] = transformed;

        let vec_ab = (b - a).normalize();
        let vec_ac = (c - a).normalize();
        let normal = vec_ab.cross(vec_ac).normalize();

        if settings.cull_mode == CullMode::Backface {
            let camera_ray = settings.camera_position - a;
            if normal.dot(camera_ray) < 0.0 {
                culled += 1;
                continue;
            }
        }

        let [Some(p0), Some(p1), Some(p2)] = transformed.map(|v| viewport.to_screen(v)) else {
            skipped += 1;
            continue;
        };

        let avg_depth = (a.z + b.z + c.z) / 3.0;

        // Flat shading lights a white surface; face colors are for unshaded modes.
        let color = if flat_shaded {
            apply_intensity(colors::WHITE, settings.light.intensity(normal))
        } else {
            face.color
        };

        triangles.push(ProjectedTriangle::new([p0, p1, p2], color, avg_depth));
    }

    trace!(
        "projected {} triangles ({} culled, {} skipped)",
        triangles.len(),
        culled,
        skipped
    );

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Face;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;

    fn settings() -> FrameSettings {
        let projection = Projection::new(FRAC_PI_3, Projection::aspect_for(WIDTH, HEIGHT), 0.1, 100.0);
        FrameSettings::new(projection, WIDTH, HEIGHT)
    }

    /// One triangle at z = 5, wound clockwise as seen from the camera.
    fn facing_triangle(faces: Vec<Face>) -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 5.0),
                Vec3::new(0.0, 1.0, 5.0),
                Vec3::new(1.0, 1.0, 5.0),
            ],
            faces,
        )
    }

    fn cube_at(rotation: Vec3) -> Mesh {
        let mut cube = Mesh::cube();
        cube.transform_mut()
            .set_rotation(rotation)
            .set_translation_xyz(0.0, 0.0, 5.0);
        cube
    }

    #[test]
    fn backface_culling_follows_winding() {
        let settings = settings();

        let front = facing_triangle(vec![Face::new(1, 2, 3, colors::WHITE)]);
        assert_eq!(project_mesh(&front, &settings).unwrap().len(), 1);

        let back = facing_triangle(vec![Face::new(1, 3, 2, colors::WHITE)]);
        assert!(project_mesh(&back, &settings).unwrap().is_empty());
    }

    #[test]
    fn no_culling_keeps_back_faces() {
        let mut settings = settings();
        settings.cull_mode = CullMode::None;
        let back = facing_triangle(vec![Face::new(1, 3, 2, colors::WHITE)]);
        assert_eq!(project_mesh(&back, &settings).unwrap().len(), 1);
    }

    #[test]
    fn maps_to_pixels_with_y_down() {
        let mesh = facing_triangle(vec![Face::new(1, 2, 3, colors::WHITE)]);
        let triangles = project_mesh(&mesh, &settings()).unwrap();
        let [origin, up, up_right] = triangles[0].points;

        // The view axis lands on the middle of the screen.
        assert_relative_eq!(origin.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(origin.y, 300.0, epsilon = 1e-3);

        // +y in the world is up on screen, i.e. smaller pixel y.
        let f = 1.0 / (FRAC_PI_3 / 2.0).tan();
        assert_relative_eq!(up.y, 300.0 - f / 5.0 * 300.0, epsilon = 1e-3);
        assert_relative_eq!(up_right.x, 400.0 + 0.75 * f / 5.0 * 400.0, epsilon = 1e-3);
    }

    #[test]
    fn average_depth_is_mean_camera_z() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 3.0),
                Vec3::new(0.0, 1.0, 6.0),
                Vec3::new(1.0, 1.0, 9.0),
            ],
            vec![Face::new(1, 2, 3, colors::WHITE)],
        );
        let mut settings = settings();
        settings.cull_mode = CullMode::None;
        let triangles = project_mesh(&mesh, &settings).unwrap();
        assert_relative_eq!(triangles[0].avg_depth, 6.0);
    }

    #[test]
    fn flat_shading_resolves_color_from_light() {
        let mesh = facing_triangle(vec![Face::new(1, 2, 3, 0xFF808080)]);
        let mut settings = settings();

        // Unshaded modes keep the face color.
        settings.render_mode = RenderMode::Filled;
        settings.light = Light::new(Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(project_mesh(&mesh, &settings).unwrap()[0].color, 0xFF808080);

        // Facing straight into the light: full white, whatever the face color.
        settings.render_mode = RenderMode::FlatShaded;
        settings.light = Light::new(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(project_mesh(&mesh, &settings).unwrap()[0].color, 0xFFFFFFFF);

        // Half intensity: normal at 60 degrees to the light.
        settings.light = Light {
            direction: Vec3::new(0.0, 3f32.sqrt() / 2.0, 0.5),
        };
        let color = project_mesh(&mesh, &settings).unwrap()[0].color;
        let [a, r, g, b] = colors::unpack_argb(color);
        assert_eq!(a, 0xFF);
        assert!(r == g && g == b && (0x7E..=0x80).contains(&r), "{color:08x}");

        // Light coming from behind the face: black, alpha kept.
        settings.render_mode = RenderMode::FlatShadedWireframe;
        settings.light = Light::new(Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(project_mesh(&mesh, &settings).unwrap()[0].color, 0xFF000000);
    }

    #[test]
    fn flat_shaded_cube_is_grey_not_per_side() {
        let mut settings = settings();
        settings.render_mode = RenderMode::FlatShaded;
        let triangles = project_mesh(&cube_at(Vec3::ZERO), &settings).unwrap();
        assert_eq!(triangles.len(), 2);
        assert!(triangles.iter().all(|t| t.color == colors::WHITE));
    }

    #[test]
    fn out_of_range_index_aborts_frame() {
        let mesh = facing_triangle(vec![
            Face::new(1, 2, 3, colors::WHITE),
            Face::new(1, 2, 4, colors::WHITE),
        ]);
        let err = project_mesh(&mesh, &settings()).unwrap_err();
        assert_eq!(
            err,
            FaceIndexError {
                face: 1,
                index: 4,
                vertex_count: 3
            }
        );

        let zero = facing_triangle(vec![Face::new(0, 1, 2, colors::WHITE)]);
        assert_eq!(project_mesh(&zero, &settings()).unwrap_err().index, 0);
    }

    #[test]
    fn geometry_behind_the_camera_is_skipped() {
        let mut mesh = facing_triangle(vec![Face::new(1, 2, 3, colors::WHITE)]);
        mesh.transform_mut().set_translation_xyz(0.0, 0.0, -10.0);
        let mut settings = settings();
        settings.cull_mode = CullMode::None;
        assert!(project_mesh(&mesh, &settings).unwrap().is_empty());
    }

    #[test]
    fn cube_facing_camera_shows_one_side() {
        let triangles = project_mesh(&cube_at(Vec3::ZERO), &settings()).unwrap();
        assert_eq!(triangles.len(), 2);
        assert!(triangles.iter().all(|t| t.color == colors::RED));
    }

    #[test]
    fn cube_turned_about_y_shows_two_sides() {
        let triangles =
            project_mesh(&cube_at(Vec3::new(0.0, FRAC_PI_4, 0.0)), &settings()).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_eq!(triangles.iter().filter(|t| t.color == colors::RED).count(), 2);
        assert_eq!(triangles.iter().filter(|t| t.color == colors::GREEN).count(), 2);
    }

    #[test]
    fn cube_seen_from_a_corner_shows_three_sides() {
        let triangles =
            project_mesh(&cube_at(Vec3::new(FRAC_PI_4, FRAC_PI_4, 0.0)), &settings()).unwrap();
        assert_eq!(triangles.len(), 6);
        for side in [colors::RED, colors::GREEN, colors::CYAN] {
            assert_eq!(triangles.iter().filter(|t| t.color == side).count(), 2);
        }
    }

    #[test]
    fn cube_without_culling_emits_every_face() {
        let mut settings = settings();
        settings.cull_mode = CullMode::None;
        let triangles =
            project_mesh(&cube_at(Vec3::new(0.3, 1.1, -0.4)), &settings).unwrap();
        assert_eq!(triangles.len(), 12);
    }
}

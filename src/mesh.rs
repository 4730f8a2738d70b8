//! Mesh storage and loading.
//!
//! A [`Mesh`] holds vertex positions, triangular [`Face`]s indexing into them
//! and the [`Transform`] that places the mesh in the world. Meshes come either
//! from the built-in cube data or from an OBJ file.

use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::colors;
use crate::math::Vec3;
use crate::transform::Transform;

/// A face that references vertex indices that don't exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices (indices are 1-based)")]
pub struct FaceIndexError {
    /// Position of the face in the face list.
    pub face: usize,
    /// The offending 1-based index.
    pub index: u32,
    pub vertex_count: usize,
}

/// Errors produced while loading a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ file `{}`", path.display())]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
    #[error("OBJ file `{}` contains no triangles", .0.display())]
    Empty(PathBuf),
    #[error(transparent)]
    InvalidFace(#[from] FaceIndexError),
}

/// A triangle defined by three vertices.
///
/// The members `a`, `b` and `c` are 1-based indices into the vertex array
/// of the mesh, in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    /// Base color in ARGB8888 format.
    pub color: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32, color: u32) -> Self {
        Self { a, b, c, color }
    }

    /// Converts the 1-based indices to 0-based offsets into a vertex list of
    /// `vertex_count` entries.
    pub fn vertex_offsets(&self, vertex_count: usize) -> Result<[usize; 3], u32> {
        let offset = |index: u32| match (index as usize).checked_sub(1) {
            Some(offset) if offset < vertex_count => Ok(offset),
            _ => Err(index),
        };
        Ok([offset(self.a)?, offset(self.b)?, offset(self.c)?])
    }
}

pub const N_CUBE_VERTICES: usize = 8;
pub const N_CUBE_FACES: usize = 12;

pub const CUBE_VERTICES: [Vec3; N_CUBE_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0), // 1
    Vec3::new(-1.0, 1.0, -1.0),  // 2
    Vec3::new(1.0, 1.0, -1.0),   // 3
    Vec3::new(1.0, -1.0, -1.0),  // 4
    Vec3::new(1.0, 1.0, 1.0),    // 5
    Vec3::new(1.0, -1.0, 1.0),   // 6
    Vec3::new(-1.0, 1.0, 1.0),   // 7
    Vec3::new(-1.0, -1.0, 1.0),  // 8
];

/// Two triangles per side, wound clockwise as seen from outside the cube.
pub const CUBE_FACES: [Face; N_CUBE_FACES] = [
    // Front face
    Face::new(1, 2, 3, colors::RED),
    Face::new(1, 3, 4, colors::RED),
    // Right face
    Face::new(4, 3, 5, colors::GREEN),
    Face::new(4, 5, 6, colors::GREEN),
    // Back face
    Face::new(6, 5, 7, colors::BLUE),
    Face::new(6, 7, 8, colors::BLUE),
    // Left face
    Face::new(8, 7, 2, colors::YELLOW),
    Face::new(8, 2, 1, colors::YELLOW),
    // Top face
    Face::new(2, 7, 5, colors::MAGENTA),
    Face::new(2, 5, 3, colors::MAGENTA),
    // Bottom face
    Face::new(6, 8, 1, colors::CYAN),
    Face::new(6, 1, 4, colors::CYAN),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    transform: Transform,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            transform: Transform::default(),
        }
    }

    /// The built-in unit cube (8 vertices, 12 faces).
    pub fn cube() -> Self {
        Self::new(CUBE_VERTICES.to_vec(), CUBE_FACES.to_vec())
    }

    /// Loads every object in an OBJ file into a single mesh.
    ///
    /// Polygons are triangulated and all faces get a white base color. Objects
    /// are concatenated in file order.
    pub fn from_obj(file_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = file_path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        };
        let (models, _materials) =
            tobj::load_obj(path, &options).map_err(|source| LoadError::Obj {
                path: path.to_path_buf(),
                source,
            })?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in &models {
            // tobj indices are 0-based and local to each model.
            let base = vertices.len() as u32 + 1;
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(model.mesh.indices.chunks_exact(3).map(|tri| {
                Face::new(base + tri[0], base + tri[1], base + tri[2], colors::WHITE)
            }));
        }

        if faces.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()));
        }

        let mesh = Self::new(vertices, faces);
        mesh.validate()?;
        info!(
            "loaded {} ({} objects, {} vertices, {} faces)",
            path.display(),
            models.len(),
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Checks that every face references an existing vertex.
    pub fn validate(&self) -> Result<(), FaceIndexError> {
        for (face_index, face) in self.faces.iter().enumerate() {
            face.vertex_offsets(self.vertices.len())
                .map_err(|index| FaceIndexError {
                    face: face_index,
                    index,
                    vertex_count: self.vertices.len(),
                })?;
        }
        Ok(())
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

//! Triangle meshes and Wavefront OBJ loading.
//!
//! A [`Mesh`] is a flat list of model-space vertices plus triangular faces
//! indexing into it. Every face index is checked against the vertex list on
//! construction, so downstream code can index without further checks.

use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::math::vec3::Vec3;

/// Errors produced while building or loading a [`Mesh`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ file {path}")]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
    #[error("{path} contains no triangle geometry")]
    Empty { path: PathBuf },
    #[error("face {face} references vertex {index}, but the mesh only has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

// A triangle defined by three indices into the mesh's vertex list (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// The vertex indices in winding order.
    pub fn indices(&self) -> [usize; 3] {
        [self.a as usize, self.b as usize, self.c as usize]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, rejecting faces that reference missing vertices.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self, LoadError> {
        let vertex_count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face.indices().iter().find(|&&i| i >= vertex_count) {
                return Err(LoadError::FaceIndexOutOfRange {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Load every object in an OBJ file into a single mesh.
    ///
    /// Polygons are triangulated; points and lines are skipped. Materials and
    /// texture coordinates are ignored.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
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
            let base = vertices.len() as u32;
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .filter_map(Vec3::from_slice),
            );
            faces.extend(
                model
                    .mesh
                    .indices
                    .chunks_exact(3)
                    .map(|tri| Face::new(base + tri[0], base + tri[1], base + tri[2])),
            );
            debug!(
                "object '{}': {} vertices, {} faces",
                model.name,
                model.mesh.positions.len() / 3,
                model.mesh.indices.len() / 3
            );
        }

        if faces.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        let mesh = Self::new(vertices, faces)?;
        info!(
            "loaded {}: {} vertices, {} faces",
            path.display(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn face(&self, index: usize) -> Option<Face> {
        self.faces.get(index).copied()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The three vertices of `face`.
    ///
    /// Faces obtained from this mesh always resolve; indices are validated on
    /// construction.
    pub fn face_vertices(&self, face: &Face) -> Option<[Vec3; 3]> {
        let [a, b, c] = face.indices();
        Some([self.vertex(a)?, self.vertex(b)?, self.vertex(c)?])
    }
}

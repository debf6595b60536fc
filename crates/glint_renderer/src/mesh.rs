//! Triangle mesh primitive.
//!
//! A mesh is a vertex list plus faces indexing into it. The faces are
//! expanded into owned [`Triangle`]s once, when the mesh is created, and the
//! mesh material is copied onto each of them.

use crate::{
    error::{Result, SceneError},
    hittable::{Hit, Object3D},
    Material, Ray, Triangle,
};
use glint_math::Vec3;

/// A mesh of triangles sharing one material.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<[usize; 3]>,
    triangles: Vec<Triangle>,
    material: Material,
}

impl Mesh {
    /// Create a mesh from vertex positions and triangle faces.
    ///
    /// Each face is a triplet of indices into `vertices`. A mesh needs at
    /// least one face.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>, material: Material) -> Result<Self> {
        if faces.is_empty() {
            return Err(SceneError::EmptyMesh);
        }
        let vertex_count = vertices.len();
        let mut triangles = Vec::with_capacity(faces.len());

        for (face_index, face) in faces.iter().enumerate() {
            let mut corners = [Vec3::ZERO; 3];
            for (corner, &index) in corners.iter_mut().zip(face) {
                *corner = *vertices.get(index).ok_or(SceneError::MeshFaceOutOfRange {
                    face: face_index,
                    index,
                    vertex_count,
                })?;
            }

            let [a, b, c] = corners;
            let triangle = Triangle::new(a, b, c, material).map_err(|err| match err {
                SceneError::DegenerateTriangle => SceneError::DegenerateMeshFace(face_index),
                other => other,
            })?;
            triangles.push(triangle);
        }

        log::debug!(
            "Built mesh with {} vertices and {} triangles",
            vertex_count,
            triangles.len()
        );

        Ok(Self {
            vertices,
            faces,
            triangles,
            material,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Triangles derived from the faces, in face order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

impl Object3D for Mesh {
    /// Normal of the triangle whose supporting plane lies closest to `point`.
    ///
    /// On an edge or vertex shared by several faces the first of them in
    /// face order wins. Shading uses the triangle returned by [`Mesh::intersect`] directly, so
    /// this is only needed when the mesh is queried as a whole.
    fn compute_normal(&self, point: Vec3) -> Vec3 {
        self.triangles
            .iter()
            .map(|tri| {
                let offset = tri.normal().dot(point - tri.vertices()[0]).abs();
                (offset, tri.normal())
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map_or(Vec3::ZERO, |(_, normal)| normal)
    }

    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        ray.nearest_intersection(&self.triangles)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

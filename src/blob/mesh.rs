//! Icosphere rest geometry and per-frame normal recomputation.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex data for the blob mesh (position + normal + color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Golden ratio, the long edge of the icosahedron's orthogonal rectangles
const PHI: f32 = 1.618_034;

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

/// Counter-clockwise (outward-facing) triangles of the icosahedron
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Immutable rest pose of the blob.
///
/// A non-indexed triangle list: every three consecutive positions form one
/// triangle, so normals recomputed per triangle give the faceted look.
#[derive(Debug, Clone)]
pub struct BaseGeometry {
    positions: Vec<[f32; 3]>,
}

impl BaseGeometry {
    /// Subdivided icosahedron projected onto a sphere.
    ///
    /// Each of the 20 faces is split into `(detail + 1)^2` triangles, giving
    /// `60 * (detail + 1)^2` vertices.
    pub fn icosphere(radius: f32, detail: u32) -> Self {
        let cols = detail as usize + 1;
        let mut positions = Vec::with_capacity(60 * cols * cols);

        for face in ICOSAHEDRON_FACES {
            let a = Vec3::from_array(ICOSAHEDRON_VERTICES[face[0]]);
            let b = Vec3::from_array(ICOSAHEDRON_VERTICES[face[1]]);
            let c = Vec3::from_array(ICOSAHEDRON_VERTICES[face[2]]);
            subdivide_face(a, b, c, cols, &mut positions);
        }

        for p in &mut positions {
            *p = (Vec3::from_array(*p).normalize() * radius).to_array();
        }

        Self { positions }
    }

    /// Build from explicit rest positions (a triangle list).
    pub fn from_positions(positions: Vec<[f32; 3]>) -> Self {
        Self { positions }
    }

    /// Original, undisplaced positions
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Split triangle (a, b, c) into a `cols x cols` grid of smaller triangles.
fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, cols: usize, out: &mut Vec<[f32; 3]>) {
    // rows[i][j]: points along the line between the a-c and b-c edges at height i
    let rows: Vec<Vec<Vec3>> = (0..=cols)
        .map(|i| {
            let start = a.lerp(c, i as f32 / cols as f32);
            let end = b.lerp(c, i as f32 / cols as f32);
            let span = cols - i;
            (0..=span)
                .map(|j| {
                    if span == 0 {
                        start
                    } else {
                        start.lerp(end, j as f32 / span as f32)
                    }
                })
                .collect()
        })
        .collect();

    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            let tri = if j % 2 == 0 {
                [rows[i][k + 1], rows[i + 1][k], rows[i][k]]
            } else {
                [rows[i][k + 1], rows[i + 1][k + 1], rows[i + 1][k]]
            };
            out.extend(tri.iter().map(|v| v.to_array()));
        }
    }
}

/// Flat normals for a non-indexed triangle list, written into `normals`.
///
/// Degenerate triangles get the normalized position of their first vertex, or
/// +Z when that is zero too.
pub fn compute_flat_normals(positions: &[[f32; 3]], normals: &mut Vec<[f32; 3]>) {
    normals.clear();
    normals.reserve(positions.len());

    for tri in positions.chunks(3) {
        let normal = if let [p0, p1, p2] = tri {
            let v0 = Vec3::from_array(*p0);
            let v1 = Vec3::from_array(*p1);
            let v2 = Vec3::from_array(*p2);
            (v1 - v0)
                .cross(v2 - v0)
                .try_normalize()
                .or_else(|| v0.try_normalize())
                .unwrap_or(Vec3::Z)
        } else {
            Vec3::Z
        };
        normals.extend(std::iter::repeat(normal.to_array()).take(tri.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosphere_vertex_count() {
        assert_eq!(BaseGeometry::icosphere(1.0, 0).vertex_count(), 60);
        assert_eq!(BaseGeometry::icosphere(1.0, 1).vertex_count(), 240);
        assert_eq!(BaseGeometry::icosphere(1.0, 8).vertex_count(), 4860);
    }

    #[test]
    fn test_icosphere_vertices_on_sphere() {
        let geometry = BaseGeometry::icosphere(2.0, 3);
        for p in geometry.positions() {
            let len = Vec3::from_array(*p).length();
            assert!((len - 2.0).abs() < 1e-5, "vertex {:?} at radius {}", p, len);
        }
    }

    #[test]
    fn test_icosphere_faces_point_outward() {
        let geometry = BaseGeometry::icosphere(1.0, 2);
        let mut normals = Vec::new();
        compute_flat_normals(geometry.positions(), &mut normals);

        for (p, n) in geometry.positions().iter().zip(&normals) {
            let outward = Vec3::from_array(*p).dot(Vec3::from_array(*n));
            assert!(outward > 0.0, "inward normal {:?} at {:?}", n, p);
        }
    }

    #[test]
    fn test_flat_normals_unit_length() {
        let geometry = BaseGeometry::icosphere(1.0, 1);
        let mut normals = Vec::new();
        compute_flat_normals(geometry.positions(), &mut normals);
        assert_eq!(normals.len(), geometry.vertex_count());
        for n in &normals {
            assert!((Vec3::from_array(*n).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_triangle_normal_is_finite() {
        let positions = vec![[0.0, 0.0, 0.0]; 3];
        let mut normals = Vec::new();
        compute_flat_normals(&positions, &mut normals);
        assert_eq!(normals, vec![[0.0, 0.0, 1.0]; 3]);
    }
}

//! Unit cube centered on the origin.

use super::MeshVertex;

const R: f32 = 0.5;

/// Face order: +Z, +X, -Z, -X, +Y, -Y; four corners per face.
const POSITIONS: [[f32; 3]; 24] = [
    // pos-z face
    [-R, -R, R],
    [R, -R, R],
    [-R, R, R],
    [R, R, R],
    // pos-x face
    [R, -R, R],
    [R, -R, -R],
    [R, R, R],
    [R, R, -R],
    // neg-z face
    [R, -R, -R],
    [-R, -R, -R],
    [R, R, -R],
    [-R, R, -R],
    // neg-x face
    [-R, -R, -R],
    [-R, -R, R],
    [-R, R, -R],
    [-R, R, R],
    // pos-y face
    [-R, R, R],
    [R, R, R],
    [-R, R, -R],
    [R, R, -R],
    // neg-y face
    [-R, -R, -R],
    [R, -R, -R],
    [-R, -R, R],
    [R, -R, R],
];

const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, -1.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
];

const FACE_TEX_COORDS: [[f32; 2]; 4] =
    [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// Two counter-clockwise triangles per face, relative to the face's first
/// vertex.
const FACE_INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];

/// Static cube geometry: positions, normals, texture coordinates and
/// triangle indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u16>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Build the 24-vertex, 36-index cube.
    #[must_use]
    pub fn new() -> Self {
        let normals = FACE_NORMALS
            .iter()
            .flat_map(|n| std::iter::repeat_n(*n, 4))
            .collect();
        let tex_coords = (0..6).flat_map(|_| FACE_TEX_COORDS).collect();
        let indices = (0..6u16)
            .flat_map(|face| FACE_INDICES.map(|i| face * 4 + i))
            .collect();

        Self {
            positions: POSITIONS.to_vec(),
            normals,
            tex_coords,
            indices,
        }
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Per-vertex unit normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Per-vertex texture coordinates.
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Triangle list indices.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Size of the position data in bytes.
    pub fn position_bytes(&self) -> usize {
        size_of_val(self.positions.as_slice())
    }

    /// Size of the normal data in bytes.
    pub fn normal_bytes(&self) -> usize {
        size_of_val(self.normals.as_slice())
    }

    /// Size of the texture coordinate data in bytes.
    pub fn tex_coord_bytes(&self) -> usize {
        size_of_val(self.tex_coords.as_slice())
    }

    /// Interleaved vertices ready for a single vertex buffer.
    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .map(|((position, normal), tex_coord)| MeshVertex {
                position: *position,
                normal: *normal,
                tex_coord: *tex_coord,
            })
            .collect()
    }
}

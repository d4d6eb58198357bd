//! Subdivided cube mesh generation
//!
//! Each of the six faces is split into a `2^S x 2^S` grid of quads with its
//! own block of `(2^S + 1)^2` vertices, so every vertex carries the flat
//! normal of its face. Everything is written straight into a [`MeshData`]
//! arena sized up front from the subdivision level.

use glam::Vec3;

use crate::constants::{COMPONENTS_PER_VERTEX, CUBE_FACE_COUNT, INDICES_PER_TRIANGLE};

use super::MeshError;
use super::face::{Face, basis_for};
use super::mesh_data::{MeshData, MeshLayout};

/// Quad cells along one edge of a face (`2^S`)
///
/// Returns `None` if the level does not fit in 32 bits.
pub fn cells_per_edge(subdivisions: u32) -> Option<u32> {
    1u32.checked_shl(subdivisions)
}

/// Exact vertex and triangle counts of a cube at the given level.
///
/// `vertex_count = 6 * (2^S + 1)^2` and `triangle_count = 2 * 6 * 4^S`.
/// Levels whose index count does not fit in `u32` fail with
/// [`MeshError::AllocationFailure`].
pub fn cube_layout(subdivisions: u32) -> Result<MeshLayout, MeshError> {
    cube_grid(subdivisions).map(|(_, layout)| layout)
}

/// Cells per edge together with the layout they produce
fn cube_grid(subdivisions: u32) -> Result<(u32, MeshLayout), MeshError> {
    let too_large = || MeshError::AllocationFailure {
        subdivisions,
        reason: "vertex or index count exceeds the u32 index range".to_string(),
    };

    let cells = cells_per_edge(subdivisions).ok_or_else(too_large)?;
    let faces = CUBE_FACE_COUNT as u32;
    let row = cells.checked_add(1).ok_or_else(too_large)?;
    let vertex_count = row
        .checked_mul(row)
        .and_then(|n| n.checked_mul(faces))
        .ok_or_else(too_large)?;
    let triangle_count = cells
        .checked_mul(cells)
        .and_then(|n| n.checked_mul(2 * faces))
        .ok_or_else(too_large)?;
    triangle_count
        .checked_mul(INDICES_PER_TRIANGLE as u32)
        .ok_or_else(too_large)?;

    Ok((
        cells,
        MeshLayout {
            vertex_count,
            triangle_count,
        },
    ))
}

/// Validate a signed subdivision level from user input.
///
/// Negative levels are rejected with [`MeshError::InvalidParameter`].
pub fn subdivision_level(level: i64) -> Result<u32, MeshError> {
    u32::try_from(level).map_err(|_| MeshError::InvalidParameter {
        name: "subdivisions",
        reason: format!("must be a non-negative integer, got {level}"),
    })
}

pub(crate) fn validate_size(size: f32) -> Result<(), MeshError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            name: "size",
            reason: format!("must be a finite positive number, got {size}"),
        })
    }
}

/// Build a subdivided cube mesh
///
/// # Arguments
/// * `center` - Center of the cube
/// * `size` - Edge length (must be positive and finite)
/// * `subdivisions` - Subdivision level `S`; each face gets `2^S` cells per edge
///
/// # Returns
/// A [`MeshData`] with `6 * (2^S + 1)^2` vertices and `12 * 4^S` triangles,
/// wound counter-clockwise when seen from outside the cube.
pub fn build_cube_mesh(
    center: Vec3,
    size: f32,
    subdivisions: u32,
) -> Result<MeshData, MeshError> {
    validate_size(size)?;
    let (cells, layout) = cube_grid(subdivisions)?;
    let mut mesh = MeshData::allocate(layout, subdivisions)?;

    let row = cells + 1;
    let step = (cells as f32).recip();

    let (indices, positions, normals) = mesh.regions_mut();
    let mut vertex_cursor = 0usize;
    let mut index_cursor = 0usize;

    for face in Face::ALL {
        let normal = face.normal();
        let (dir1, dir2) = basis_for(face);
        let eps1 = dir1 * step;
        let eps2 = dir2 * step;
        let p0 = (normal - dir1 - dir2) / 2.0;
        let face_start = vertex_cursor as u32;

        for i in 0..=cells {
            for j in 0..=cells {
                let p = center + (p0 + eps1 * i as f32 + eps2 * j as f32) * size;
                let at = vertex_cursor * COMPONENTS_PER_VERTEX;
                positions[at..at + COMPONENTS_PER_VERTEX]
                    .copy_from_slice(&p.extend(1.0).to_array());
                normals[at..at + COMPONENTS_PER_VERTEX]
                    .copy_from_slice(&normal.extend(0.0).to_array());
                vertex_cursor += 1;
            }
        }

        // Two triangles per cell, always split along the same diagonal
        for i in 0..cells {
            for j in 0..cells {
                let cur = face_start + i * row + j;
                let quad = [cur, cur + row, cur + 1, cur + 1, cur + row, cur + row + 1];
                indices[index_cursor..index_cursor + quad.len()].copy_from_slice(&quad);
                index_cursor += quad.len();
            }
        }
    }

    debug_assert_eq!(vertex_cursor, layout.vertex_count as usize);
    debug_assert_eq!(index_cursor, layout.index_len());

    tracing::debug!(
        "Built cube mesh: subdivisions={}, size={}, {} vertices, {} triangles, {} bytes",
        subdivisions,
        size,
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.as_bytes().len()
    );

    Ok(mesh)
}

/// A subdivided cube and, once built, its mesh data.
///
/// Construction only records the parameters; [`CubeMesh::create`] allocates
/// and fills the arena. Changing parameters goes through
/// [`CubeMesh::rebuild`], which swaps in a complete new mesh or leaves the
/// cube untouched on error.
#[derive(Debug, Clone)]
pub struct CubeMesh {
    center: Vec3,
    size: f32,
    subdivisions: u32,
    data: Option<MeshData>,
}

impl CubeMesh {
    /// Create an unbuilt cube
    pub fn new(center: Vec3, size: f32, subdivisions: u32) -> Self {
        Self {
            center,
            size,
            subdivisions,
            data: None,
        }
    }

    /// Build the mesh for the current parameters
    pub fn create(&mut self) -> Result<&MeshData, MeshError> {
        let data = build_cube_mesh(self.center, self.size, self.subdivisions)?;
        Ok(self.data.insert(data))
    }

    /// Replace the parameters and build a new mesh
    pub fn rebuild(
        &mut self,
        center: Vec3,
        size: f32,
        subdivisions: u32,
    ) -> Result<&MeshData, MeshError> {
        let data = build_cube_mesh(center, size, subdivisions)?;
        self.center = center;
        self.size = size;
        self.subdivisions = subdivisions;
        Ok(self.data.insert(data))
    }

    /// Built mesh data, if [`CubeMesh::create`] has succeeded
    pub fn data(&self) -> Option<&MeshData> {
        self.data.as_ref()
    }

    /// Whether the mesh has been built
    pub fn is_built(&self) -> bool {
        self.data.is_some()
    }

    /// Center of the cube
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Edge length
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Subdivision level
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }
}

//! Arena-backed mesh storage
//!
//! A [`MeshData`] owns one contiguous block of 32-bit words, carved into
//! three regions in a fixed order: triangle indices, vertex positions and
//! vertex normals. Indices are read as `u32`, positions and normals are
//! reinterpreted as `f32` through `bytemuck`.

use std::ops::Range;

use crate::constants::{COMPONENTS_PER_VERTEX, INDICES_PER_TRIANGLE};

use super::MeshError;

/// Element counts that fix the size and region offsets of a mesh arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshLayout {
    /// Number of vertices
    pub vertex_count: u32,
    /// Number of triangles
    pub triangle_count: u32,
}

impl MeshLayout {
    /// Length of the index region (in `u32`s)
    pub fn index_len(&self) -> usize {
        self.triangle_count as usize * INDICES_PER_TRIANGLE
    }

    /// Length of the position region and of the normal region (in `f32`s)
    pub fn attribute_len(&self) -> usize {
        self.vertex_count as usize * COMPONENTS_PER_VERTEX
    }

    /// Word range of the index region
    pub fn index_range(&self) -> Range<usize> {
        0..self.index_len()
    }

    /// Word range of the position region
    pub fn position_range(&self) -> Range<usize> {
        let start = self.index_len();
        start..start + self.attribute_len()
    }

    /// Word range of the normal region
    pub fn normal_range(&self) -> Range<usize> {
        let start = self.position_range().end;
        start..start + self.attribute_len()
    }

    /// Total number of 32-bit words in the arena, or `None` on overflow
    pub fn checked_word_len(&self) -> Option<usize> {
        let attributes = (self.vertex_count as usize).checked_mul(COMPONENTS_PER_VERTEX)?;
        (self.triangle_count as usize)
            .checked_mul(INDICES_PER_TRIANGLE)?
            .checked_add(attributes.checked_mul(2)?)
    }

    /// Total arena size in bytes, or `None` on overflow
    pub fn checked_byte_len(&self) -> Option<usize> {
        self.checked_word_len()?
            .checked_mul(std::mem::size_of::<u32>())
    }
}

/// Mesh geometry: triangle indices, homogeneous positions and normals,
/// all stored in a single allocation
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    block: Box<[u32]>,
    layout: MeshLayout,
}

impl MeshData {
    /// Allocate a zeroed arena for `layout`.
    ///
    /// Fails atomically with [`MeshError::AllocationFailure`] if the block
    /// cannot be reserved.
    pub fn allocate(layout: MeshLayout, subdivisions: u32) -> Result<Self, MeshError> {
        let word_len = layout
            .checked_word_len()
            .ok_or_else(|| MeshError::AllocationFailure {
                subdivisions,
                reason: "arena size overflows the address space".to_string(),
            })?;

        let mut block: Vec<u32> = Vec::new();
        block
            .try_reserve_exact(word_len)
            .map_err(|e| MeshError::AllocationFailure {
                subdivisions,
                reason: e.to_string(),
            })?;
        block.resize(word_len, 0);

        Ok(Self {
            block: block.into_boxed_slice(),
            layout,
        })
    }

    /// Region layout of this mesh
    pub fn layout(&self) -> MeshLayout {
        self.layout
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> u32 {
        self.layout.vertex_count
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> u32 {
        self.layout.triangle_count
    }

    /// Number of indices to draw as a triangle list
    pub fn index_count(&self) -> u32 {
        self.layout.triangle_count * INDICES_PER_TRIANGLE as u32
    }

    /// Triangle indices, three per triangle
    pub fn indices(&self) -> &[u32] {
        &self.block[self.layout.index_range()]
    }

    /// Vertex positions, `[x, y, z, 1]` per vertex
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.block[self.layout.position_range()])
    }

    /// Vertex normals, `[x, y, z, 0]` per vertex
    pub fn normals(&self) -> &[f32] {
        bytemuck::cast_slice(&self.block[self.layout.normal_range()])
    }

    /// Triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices()
            .chunks_exact(INDICES_PER_TRIANGLE)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Position of vertex `index` as `[x, y, z, w]`
    pub fn position(&self, index: usize) -> Option<[f32; 4]> {
        attribute_at(self.positions(), index)
    }

    /// Normal of vertex `index` as `[x, y, z, w]`
    pub fn normal(&self, index: usize) -> Option<[f32; 4]> {
        attribute_at(self.normals(), index)
    }

    /// Index region as raw bytes (for index buffer upload)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices())
    }

    /// Position region as raw bytes (for vertex buffer upload)
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions())
    }

    /// Normal region as raw bytes (for vertex buffer upload)
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.normals())
    }

    /// The whole arena as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.block[..])
    }

    /// Axis-aligned bounds of all positions as (min, max)
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for p in self.positions().chunks_exact(COMPONENTS_PER_VERTEX) {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        (min, max)
    }

    /// Mutable typed views of the three regions, for filling
    pub(crate) fn regions_mut(&mut self) -> (&mut [u32], &mut [f32], &mut [f32]) {
        let (indices, attributes) = self.block.split_at_mut(self.layout.index_len());
        let (positions, normals) = attributes.split_at_mut(self.layout.attribute_len());
        (
            indices,
            bytemuck::cast_slice_mut(positions),
            bytemuck::cast_slice_mut(normals),
        )
    }
}

fn attribute_at(values: &[f32], index: usize) -> Option<[f32; 4]> {
    let start = index.checked_mul(COMPONENTS_PER_VERTEX)?;
    let v = values.get(start..start.checked_add(COMPONENTS_PER_VERTEX)?)?;
    Some([v[0], v[1], v[2], v[3]])
}

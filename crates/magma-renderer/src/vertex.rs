//! Vertex attribute utilities
//!
//! Cube meshes are uploaded as two separate vertex streams straight from the
//! mesh arena: homogeneous positions and homogeneous normals, one
//! `Float32x4` per vertex each.

/// Shader location of the position stream.
pub const POSITION_LOCATION: u32 = 0;

/// Shader location of the normal stream.
pub const NORMAL_LOCATION: u32 = 1;

/// A homogeneous `[x, y, z, w]` attribute as stored in the mesh arena.
pub type Homogeneous = [f32; 4];

/// Creates a `Float32x4` attribute at offset 0 for the given shader location.
pub const fn homogeneous_attribute(shader_location: u32) -> wgpu::VertexAttribute {
    wgpu::VertexAttribute {
        offset: 0,
        shader_location,
        format: wgpu::VertexFormat::Float32x4,
    }
}

/// Attribute descriptors of the position stream.
pub const POSITION_ATTRIBUTES: &[wgpu::VertexAttribute] =
    &[homogeneous_attribute(POSITION_LOCATION)];

/// Attribute descriptors of the normal stream.
pub const NORMAL_ATTRIBUTES: &[wgpu::VertexAttribute] = &[homogeneous_attribute(NORMAL_LOCATION)];

/// Creates a vertex buffer layout from attributes.
///
/// # Type Parameters
///
/// * `T` - The per-vertex element type, used to calculate the array stride.
///
/// # Arguments
///
/// * `attributes` - Slice of vertex attributes.
/// * `step_mode` - Whether this buffer is per-vertex or per-instance.
pub fn vertex_buffer_layout<T>(
    attributes: &[wgpu::VertexAttribute],
    step_mode: wgpu::VertexStepMode,
) -> wgpu::VertexBufferLayout<'_> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<T>() as u64,
        step_mode,
        attributes,
    }
}

/// Buffer layouts for a cube draw: slot 0 positions, slot 1 normals.
pub fn cube_vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        vertex_buffer_layout::<Homogeneous>(POSITION_ATTRIBUTES, wgpu::VertexStepMode::Vertex),
        vertex_buffer_layout::<Homogeneous>(NORMAL_ATTRIBUTES, wgpu::VertexStepMode::Vertex),
    ]
}

//! GPU upload of cube meshes
//!
//! The uploader takes the device explicitly and copies the three regions of
//! a [`MeshData`] arena into their own buffers. Nothing here reaches for a
//! global graphics context.

use wgpu::util::DeviceExt;

use magma_core::{CubeMesh, MagmaScene, MeshData};

/// GPU buffers for one cube mesh
pub struct GpuCubeMesh {
    /// Index buffer (`u32` triangle list).
    pub index_buffer: wgpu::Buffer,
    /// Homogeneous positions, bound at vertex slot 0.
    pub position_buffer: wgpu::Buffer,
    /// Homogeneous normals, bound at vertex slot 1.
    pub normal_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
    /// Number of vertices.
    pub vertex_count: u32,
}

impl GpuCubeMesh {
    /// Upload mesh data to new GPU buffers
    pub fn upload(device: &wgpu::Device, mesh: &MeshData, label: &str) -> Self {
        tracing::info!(
            "Uploading {}: {} vertices, {} triangles, {} bytes",
            label,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.as_bytes().len()
        );

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Position Buffer")),
            contents: mesh.position_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let normal_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Normal Buffer")),
            contents: mesh.normal_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            index_buffer,
            position_buffer,
            normal_buffer,
            index_count: mesh.index_count(),
            vertex_count: mesh.vertex_count(),
        }
    }

    /// Bind the vertex and index buffers
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.normal_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    }

    /// Bind the buffers and draw every triangle
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        self.bind(render_pass);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// GPU copies of the magma ball and fire shell
pub struct GpuMagmaScene {
    /// The magma ball.
    pub ball: GpuCubeMesh,
    /// The fire shell.
    pub shell: GpuCubeMesh,
}

impl GpuMagmaScene {
    /// Upload both scene meshes.
    ///
    /// Returns `None` if either cube has not been built.
    pub fn upload(device: &wgpu::Device, scene: &MagmaScene) -> Option<Self> {
        Some(Self {
            ball: upload_cube(device, scene.ball(), "Magma Ball")?,
            shell: upload_cube(device, scene.shell(), "Fire Shell")?,
        })
    }
}

fn upload_cube(device: &wgpu::Device, cube: &CubeMesh, label: &str) -> Option<GpuCubeMesh> {
    let Some(data) = cube.data() else {
        tracing::warn!("{label} has no mesh data to upload");
        return None;
    };
    Some(GpuCubeMesh::upload(device, data, label))
}

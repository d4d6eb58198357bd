//! Magma Renderer
//!
//! WGPU-based drawing of the magma ball and its fire shell.
//!
//! # Architecture
//!
//! - [`mesh::GpuCubeMesh`] - GPU copies of a cube mesh arena
//! - [`pipeline::CubeRenderer`] - Pipeline for one effect (magma or fire)
//! - [`uniforms::EffectUniforms`] - Uniform block shared by both effects
//! - [`config::RendererConfig`] - Camera and viewport defaults
//!
//! # Module Structure
//!
//! ```text
//! magma-renderer/
//! ├── config.rs        # Camera and viewport configuration
//! ├── mesh.rs          # Buffer upload of cube meshes
//! ├── pipeline.rs      # Render pipelines
//! ├── uniforms.rs      # Uniform block layout
//! ├── vertex.rs        # Vertex stream layouts
//! └── shaders/         # WGSL sources
//! ```

pub mod config;
pub mod mesh;
pub mod pipeline;
pub mod uniforms;
pub mod vertex;

// Re-exports for convenience
pub use config::{CameraConfig, RendererConfig, ViewportConfig};
pub use mesh::{GpuCubeMesh, GpuMagmaScene};
pub use pipeline::{CubeRenderer, EffectBinding, EffectKind};
pub use uniforms::{EffectUniforms, FrameInputs};
pub use vertex::cube_vertex_layouts;

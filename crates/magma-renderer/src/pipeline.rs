//! Render pipelines for the magma ball and fire shell

use crate::mesh::GpuCubeMesh;
use crate::uniforms::EffectUniforms;
use crate::vertex::cube_vertex_layouts;

/// Which effect a [`CubeRenderer`] draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Opaque magma surface
    Magma,
    /// Alpha-blended fire shell
    Fire,
}

impl EffectKind {
    fn fragment_entry_point(self) -> &'static str {
        match self {
            EffectKind::Magma => "fs_magma",
            EffectKind::Fire => "fs_fire",
        }
    }

    fn blend(self) -> Option<wgpu::BlendState> {
        match self {
            EffectKind::Magma => None,
            EffectKind::Fire => Some(wgpu::BlendState::ALPHA_BLENDING),
        }
    }

    fn label(self) -> &'static str {
        match self {
            EffectKind::Magma => "Magma",
            EffectKind::Fire => "Fire",
        }
    }
}

/// Uniform buffer and bind group for one drawn cube
pub struct EffectBinding {
    /// GPU buffer holding an [`EffectUniforms`] block.
    pub buffer: wgpu::Buffer,
    /// Bind group exposing the buffer at group 0, binding 0.
    pub bind_group: wgpu::BindGroup,
}

/// Cube renderer for a single effect
pub struct CubeRenderer {
    kind: EffectKind,
    pipeline: wgpu::RenderPipeline,
    uniform_bind_group_layout: wgpu::BindGroupLayout,
}

impl CubeRenderer {
    /// Creates a new cube renderer for `kind`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
        kind: EffectKind,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Effect Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cube Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_layouts = cube_vertex_layouts();

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} Pipeline", kind.label())),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(kind.fragment_entry_point()),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: kind.blend(),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                // The translucent shell is tested against the ball but never occludes it
                depth_write_enabled: kind == EffectKind::Magma,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            kind,
            pipeline,
            uniform_bind_group_layout,
        }
    }

    /// Effect drawn by this renderer
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Get the uniform bind group layout
    pub fn uniform_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.uniform_bind_group_layout
    }

    /// Create a uniform buffer and bind group initialized with `uniforms`
    pub fn create_binding(
        &self,
        device: &wgpu::Device,
        uniforms: &EffectUniforms,
    ) -> EffectBinding {
        use wgpu::util::DeviceExt;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Uniform Buffer", self.kind.label())),
            contents: bytemuck::cast_slice(&[*uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", self.kind.label())),
            layout: &self.uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        EffectBinding { buffer, bind_group }
    }

    /// Write new uniform values
    pub fn update(&self, queue: &wgpu::Queue, binding: &EffectBinding, uniforms: &EffectUniforms) {
        queue.write_buffer(&binding.buffer, 0, bytemuck::cast_slice(&[*uniforms]));
    }

    /// Draw a cube with this effect
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        mesh: &'a GpuCubeMesh,
        binding: &'a EffectBinding,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &binding.bind_group, &[]);
        mesh.draw(render_pass);
    }
}

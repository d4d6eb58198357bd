//! Effect uniforms shared by the magma and fire shaders

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use magma_core::{DemoSettings, SettingsError};

/// Per-frame values that do not come from the settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    /// Model transformation matrix.
    pub model: Mat4,
    /// Camera view-projection matrix.
    pub view_proj: Mat4,
    /// Seconds since start.
    pub time: f32,
    /// Current bass level in `0.0..=1.0`.
    pub bass_level: f32,
    /// Viewport size in pixels.
    pub resolution: [f32; 2],
}

impl Default for FrameInputs {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
            time: 0.0,
            bass_level: 0.0,
            resolution: [1.0, 1.0],
        }
    }
}

/// Uniform block layout, mirrored by `Effect` in `cube.wgsl`.
///
/// Scalars are packed into `vec4`s to keep WGSL uniform alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct EffectUniforms {
    /// Model transformation matrix.
    pub model: [[f32; 4]; 4],
    /// Inverse of the transposed model matrix (for normals).
    pub model_inv_tr: [[f32; 4]; 4],
    /// Camera view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Magma base color (RGBA).
    pub color: [f32; 4],
    /// Inner flame color (RGBA).
    pub fire_color1: [f32; 4],
    /// Outer flame color (RGBA).
    pub fire_color2: [f32; 4],
    /// x: time, y: bass level, z: size, w: flame intensity.
    pub params: [f32; 4],
    /// x: flame alpha, y: w0, z: mix weight, w: exponent.
    pub fbm: [f32; 4],
    /// Gradient rotation.
    pub grad_rot: [f32; 4],
    /// xy: flow speed.
    pub flow_speed: [f32; 4],
    /// xyz: gradient displacement.
    pub grad_disp: [f32; 4],
    /// xyz: iteration range (start, end, step).
    pub i_range: [f32; 4],
    /// xyz: octave weights.
    pub octs: [f32; 4],
    /// xyz: per-axis noise scaling.
    pub scaling: [f32; 4],
    /// xy: viewport size in pixels.
    pub resolution: [f32; 4],
}

impl Default for EffectUniforms {
    fn default() -> Self {
        Self::from_frame(&FrameInputs::default())
    }
}

impl EffectUniforms {
    /// Uniforms with only the frame values set.
    pub fn from_frame(frame: &FrameInputs) -> Self {
        Self {
            model: frame.model.to_cols_array_2d(),
            model_inv_tr: frame.model.transpose().inverse().to_cols_array_2d(),
            view_proj: frame.view_proj.to_cols_array_2d(),
            params: [frame.time, frame.bass_level, 0.0, 0.0],
            resolution: [frame.resolution[0], frame.resolution[1], 0.0, 0.0],
            ..Zeroable::zeroed()
        }
    }

    /// Full uniform block from the demo settings and the current frame.
    pub fn from_settings(
        settings: &DemoSettings,
        frame: &FrameInputs,
    ) -> Result<Self, SettingsError> {
        let color = settings.base_color()?;
        let (fire_color1, fire_color2) = settings.fire_colors()?;
        let flow = settings.flow.resolve()?;
        let extend3 = |v: [f32; 3]| [v[0], v[1], v[2], 0.0];

        Ok(Self {
            color,
            fire_color1,
            fire_color2,
            params: [
                frame.time,
                frame.bass_level,
                settings.magma.size,
                settings.fire.intensity,
            ],
            fbm: [settings.fire.alpha, flow.w0, flow.mix_w, flow.expo],
            grad_rot: flow.grad_rot,
            flow_speed: [flow.flow_speed[0], flow.flow_speed[1], 0.0, 0.0],
            grad_disp: extend3(flow.grad_disp),
            i_range: extend3(flow.i_range),
            octs: extend3(flow.octs),
            scaling: extend3(flow.scaling),
            ..Self::from_frame(frame)
        })
    }

    /// Update the per-frame time and bass level, leaving everything else.
    pub fn set_frame_scalars(&mut self, time: f32, bass_level: f32) {
        self.params[0] = time;
        self.params[1] = bass_level;
    }
}

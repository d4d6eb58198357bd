//! Renderer configuration structures
//!
//! This module provides configurable settings for the renderer that can be
//! serialized and loaded alongside the demo settings.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
    /// MSAA sample count (1 = disabled, 2, 4, 8)
    pub msaa_sample_count: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            background_color: [0.2, 0.2, 0.2, 1.0],
            msaa_sample_count: 4,
        }
    }
}

impl ViewportConfig {
    /// Background color as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background_color;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Eye position
    pub eye: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 1000.0,
        }
    }
}

impl CameraConfig {
    /// View matrix (right-handed, +Y up)
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::from(self.eye), Vec3::from(self.target), Vec3::Y)
    }

    /// Projection matrix for the given aspect ratio
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            aspect,
            self.near_plane,
            self.far_plane,
        )
    }

    /// Combined view-projection matrix
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
}

impl RendererConfig {
    /// Create a new renderer configuration with default values
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::Vec4;

    use super::*;

    #[test]
    fn test_target_projects_to_center() {
        let camera = CameraConfig::default();
        let clip = camera.view_proj(16.0 / 9.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_clear_color() {
        let color = ViewportConfig::default().clear_color();
        assert_abs_diff_eq!(color.r, 0.2, epsilon = 1e-6);
        assert_eq!(color.a, 1.0);
    }
}

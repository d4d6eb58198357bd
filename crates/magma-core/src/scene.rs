//! Magma scene geometry
//!
//! The demo draws two cubes around the same center: the magma ball and a
//! slightly larger fire shell. Both follow the size and tessellation
//! settings and are rebuilt together when either changes.

use glam::Vec3;

use crate::constants::FIRE_SHELL_SCALE;
use crate::primitive::{CubeMesh, MeshError};
use crate::settings::DemoSettings;

/// Ball and fire shell meshes built from [`DemoSettings`]
#[derive(Debug, Clone)]
pub struct MagmaScene {
    ball: CubeMesh,
    shell: CubeMesh,
}

impl MagmaScene {
    /// Build both meshes for the given settings
    pub fn from_settings(center: Vec3, settings: &DemoSettings) -> Result<Self, MeshError> {
        let subdivisions = settings.subdivisions()?;
        let size = settings.magma.size;

        let mut ball = CubeMesh::new(center, size, subdivisions);
        ball.create()?;
        let mut shell = CubeMesh::new(center, size * FIRE_SHELL_SCALE, subdivisions);
        shell.create()?;

        Ok(Self { ball, shell })
    }

    /// Rebuild both meshes if the size or tessellation changed.
    ///
    /// Returns `Ok(true)` if the meshes were replaced. On error the current
    /// meshes are kept.
    pub fn sync(&mut self, settings: &DemoSettings) -> Result<bool, MeshError> {
        let subdivisions = settings.subdivisions()?;
        if settings.magma.size == self.ball.size() && subdivisions == self.ball.subdivisions() {
            return Ok(false);
        }

        *self = Self::from_settings(self.ball.center(), settings)?;
        tracing::debug!(
            "Rebuilt magma scene: size={}, subdivisions={}",
            self.ball.size(),
            subdivisions
        );
        Ok(true)
    }

    /// The magma ball
    pub fn ball(&self) -> &CubeMesh {
        &self.ball
    }

    /// The fire shell around the ball
    pub fn shell(&self) -> &CubeMesh {
        &self.shell
    }

    /// Shared center of both meshes
    pub fn center(&self) -> Vec3 {
        self.ball.center()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn settings(size: f32, tessellations: i32) -> DemoSettings {
        let mut settings = DemoSettings::default();
        settings.magma.size = size;
        settings.tessellations = tessellations;
        settings
    }

    #[test]
    fn test_shell_wraps_ball() {
        let scene = MagmaScene::from_settings(Vec3::ZERO, &settings(1.0, 2)).unwrap();
        assert!(scene.ball().is_built());
        assert!(scene.shell().is_built());
        assert_relative_eq!(scene.shell().size(), 1.01);

        let (_, ball_max) = scene.ball().data().unwrap().bounds();
        let (_, shell_max) = scene.shell().data().unwrap().bounds();
        assert!(shell_max[0] > ball_max[0]);
        assert_eq!(
            scene.ball().data().unwrap().vertex_count(),
            scene.shell().data().unwrap().vertex_count()
        );
    }

    #[test]
    fn test_sync_only_rebuilds_on_change() {
        let mut scene = MagmaScene::from_settings(Vec3::ONE, &settings(1.0, 1)).unwrap();
        assert!(!scene.sync(&settings(1.0, 1)).unwrap());

        assert!(scene.sync(&settings(2.0, 1)).unwrap());
        assert_eq!(scene.ball().size(), 2.0);
        assert_eq!(scene.center(), Vec3::ONE);

        assert!(scene.sync(&settings(2.0, 2)).unwrap());
        assert_eq!(scene.ball().data().unwrap().vertex_count(), 150);
    }

    #[test]
    fn test_failed_sync_keeps_meshes() {
        let mut scene = MagmaScene::from_settings(Vec3::ZERO, &settings(1.0, 1)).unwrap();
        assert!(scene.sync(&settings(-1.0, 1)).is_err());
        assert!(scene.sync(&settings(1.0, -1)).is_err());
        assert_eq!(scene.ball().size(), 1.0);
        assert_eq!(scene.ball().data().unwrap().vertex_count(), 54);
    }
}

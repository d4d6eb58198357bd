//! Magma Demo Core
//!
//! This crate contains everything the magma demo computes on the CPU:
//! - Primitive: subdivided cube mesh generation into a single arena
//! - Scene: the magma ball and fire shell meshes, rebuilt on size changes
//! - Settings: serializable demo parameters (RON)
//! - Color: hex color parsing for shader uniforms
//! - Audio: bass level extraction from analyser frequency bins

pub mod audio;
pub mod color;
pub mod constants;
pub mod primitive;
pub mod scene;
pub mod settings;

pub use audio::*;
pub use color::*;
pub use constants::*;
pub use primitive::*;
pub use scene::*;
pub use settings::*;

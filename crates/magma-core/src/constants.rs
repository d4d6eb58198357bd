//! Global constants for magma-core

/// Number of faces on a cube
pub const CUBE_FACE_COUNT: usize = 6;

/// Components per homogeneous vertex attribute (x, y, z, w)
pub const COMPONENTS_PER_VERTEX: usize = 4;

/// Indices per triangle
pub const INDICES_PER_TRIANGLE: usize = 3;

/// Default subdivision level for the magma ball
pub const DEFAULT_SUBDIVISIONS: i32 = 6;

/// Scale of the fire shell relative to the magma ball
pub const FIRE_SHELL_SCALE: f32 = 1.01;

/// FFT size of the audio analyser
pub const ANALYSER_FFT_SIZE: usize = 256;

/// Fraction of the lowest frequency bins treated as bass
pub const BASS_BIN_FRACTION: f32 = 0.1;

/// Default magma base color
pub const DEFAULT_BASE_COLOR: &str = "#331203";

/// Default inner fire color
pub const DEFAULT_FIRE_COLOR_1: &str = "#9D4120";

/// Default outer fire color
pub const DEFAULT_FIRE_COLOR_2: &str = "#CB8D3D";

/// Allowed range of the ball size slider
pub const SIZE_RANGE: (f32, f32) = (0.2, 5.0);

/// Allowed range of the flame intensity slider
pub const FIRE_INTENSITY_RANGE: (f32, f32) = (0.1, 3.5);

/// Allowed range of the flame alpha slider
pub const FIRE_ALPHA_RANGE: (f32, f32) = (0.0, 1.0);

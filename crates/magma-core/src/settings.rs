//! Demo settings
//!
//! All user-tunable parameters of the magma demo, serialized as RON. The
//! flow-fbm vectors are kept as editable text such as `"(1.0, 7.0, 1.0)"`
//! and parsed into fixed-size arrays by [`FlowSettings::resolve`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::parse_hex_color;
use crate::constants::{
    DEFAULT_BASE_COLOR, DEFAULT_FIRE_COLOR_1, DEFAULT_FIRE_COLOR_2, DEFAULT_SUBDIVISIONS,
    FIRE_ALPHA_RANGE, FIRE_INTENSITY_RANGE, SIZE_RANGE,
};
use crate::primitive::{MeshError, subdivision_level, validate_size};

/// Magma ball parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MagmaSettings {
    /// Base color of the ball (`#RRGGBB`)
    pub base_color: String,
    /// Edge length of the ball mesh
    pub size: f32,
    /// Edge length of the 3D noise texture, in texels
    pub noise_size_3d: u32,
}

impl Default for MagmaSettings {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR.to_string(),
            size: 1.0,
            noise_size_3d: 128,
        }
    }
}

/// Fire shell parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FireSettings {
    /// Inner flame color (`#RRGGBB`)
    pub color1: String,
    /// Outer flame color (`#RRGGBB`)
    pub color2: String,
    /// Flame intensity multiplier
    pub intensity: f32,
    /// Flame opacity
    pub alpha: f32,
}

impl Default for FireSettings {
    fn default() -> Self {
        Self {
            color1: DEFAULT_FIRE_COLOR_1.to_string(),
            color2: DEFAULT_FIRE_COLOR_2.to_string(),
            intensity: 1.0,
            alpha: 0.7,
        }
    }
}

/// Flow fbm parameters as entered by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowSettings {
    pub w0: f32,
    pub i_range: String,
    pub flow_speed: String,
    pub grad_disp: String,
    pub grad_rot: String,
    pub octs: String,
    pub mix_w: f32,
    pub scaling: String,
    pub expo: f32,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            w0: 0.5,
            i_range: "(1.0, 7.0, 1.0)".to_string(),
            flow_speed: "(0.002, 0.0007)".to_string(),
            grad_disp: "(0.34, 0.01, 0.005)".to_string(),
            grad_rot: "(-1.5, -2.0, -2.5, 0.006)".to_string(),
            octs: "(0.5, 7.0, 0.5)".to_string(),
            mix_w: 0.5,
            scaling: "(1.7, 1.6, 0.75)".to_string(),
            expo: 1.3,
        }
    }
}

/// Flow fbm parameters with every vector parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParams {
    pub w0: f32,
    pub i_range: [f32; 3],
    pub flow_speed: [f32; 2],
    pub grad_disp: [f32; 3],
    pub grad_rot: [f32; 4],
    pub octs: [f32; 3],
    pub mix_w: f32,
    pub scaling: [f32; 3],
    pub expo: f32,
}

impl FlowSettings {
    /// Parse every vector field
    pub fn resolve(&self) -> Result<FlowParams, SettingsError> {
        Ok(FlowParams {
            w0: self.w0,
            i_range: parse_vector("i_range", &self.i_range)?,
            flow_speed: parse_vector("flow_speed", &self.flow_speed)?,
            grad_disp: parse_vector("grad_disp", &self.grad_disp)?,
            grad_rot: parse_vector("grad_rot", &self.grad_rot)?,
            octs: parse_vector("octs", &self.octs)?,
            mix_w: self.mix_w,
            scaling: parse_vector("scaling", &self.scaling)?,
            expo: self.expo,
        })
    }
}

/// Complete demo settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoSettings {
    /// Magma ball settings
    #[serde(default)]
    pub magma: MagmaSettings,
    /// Fire shell settings
    #[serde(default)]
    pub fire: FireSettings,
    /// Flow fbm settings
    #[serde(default)]
    pub flow: FlowSettings,
    /// Subdivision level of the ball and shell meshes (not shown in the panel)
    #[serde(default = "default_tessellations")]
    pub tessellations: i32,
}

fn default_tessellations() -> i32 {
    DEFAULT_SUBDIVISIONS
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            magma: MagmaSettings::default(),
            fire: FireSettings::default(),
            flow: FlowSettings::default(),
            tessellations: DEFAULT_SUBDIVISIONS,
        }
    }
}

impl DemoSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every panel parameter to its default, keeping the hidden
    /// tessellation level
    pub fn restore_defaults(&mut self) {
        *self = Self {
            tessellations: self.tessellations,
            ..Self::default()
        };
    }

    /// Clamp slider-backed values into their panel ranges.
    ///
    /// A size that is not a positive finite number is left as is so that
    /// mesh generation rejects it.
    pub fn clamp_to_ranges(&mut self) {
        let before = self.clone();
        if self.mesh_size().is_ok() {
            self.magma.size = self.magma.size.clamp(SIZE_RANGE.0, SIZE_RANGE.1);
        }
        self.fire.intensity = self
            .fire
            .intensity
            .clamp(FIRE_INTENSITY_RANGE.0, FIRE_INTENSITY_RANGE.1);
        self.fire.alpha = self.fire.alpha.clamp(FIRE_ALPHA_RANGE.0, FIRE_ALPHA_RANGE.1);
        if *self != before {
            tracing::warn!(
                "Clamped settings into range: size={}, fire intensity={}, fire alpha={}",
                self.magma.size,
                self.fire.intensity,
                self.fire.alpha
            );
        }
    }

    /// Validated mesh subdivision level
    pub fn subdivisions(&self) -> Result<u32, MeshError> {
        subdivision_level(i64::from(self.tessellations))
    }

    /// Validated mesh edge length
    pub fn mesh_size(&self) -> Result<f32, MeshError> {
        validate_size(self.magma.size)?;
        Ok(self.magma.size)
    }

    /// Check that the mesh parameters can be built
    pub fn validate_mesh(&self) -> Result<(), MeshError> {
        self.mesh_size()?;
        self.subdivisions()?;
        Ok(())
    }

    /// Magma base color as RGBA
    pub fn base_color(&self) -> Result<[f32; 4], SettingsError> {
        parse_hex_color(&self.magma.base_color)
    }

    /// Both flame colors as RGBA
    pub fn fire_colors(&self) -> Result<([f32; 4], [f32; 4]), SettingsError> {
        Ok((
            parse_hex_color(&self.fire.color1)?,
            parse_hex_color(&self.fire.color2)?,
        ))
    }

    /// Check that every color and vector field parses
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.base_color()?;
        self.fire_colors()?;
        self.flow.resolve()?;
        Ok(())
    }

    /// Save settings to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Serialize settings to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, SettingsError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SettingsError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load settings from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings: DemoSettings =
            ron::from_str(&content).map_err(|e| SettingsError::Deserialize(e.to_string()))?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, SettingsError> {
        let content =
            std::str::from_utf8(data).map_err(|e| SettingsError::Deserialize(e.to_string()))?;
        let settings: DemoSettings =
            ron::from_str(content).map_err(|e| SettingsError::Deserialize(e.to_string()))?;
        Ok(settings)
    }
}

/// Parse a parenthesized, comma-separated list of numbers such as
/// `"(0.5, 7.0, 0.5)"`. The parentheses are optional.
pub fn parse_tuple(field: &'static str, text: &str) -> Result<Vec<f32>, SettingsError> {
    let invalid = || SettingsError::InvalidTuple {
        field,
        value: text.to_string(),
    };

    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    if inner.trim().is_empty() {
        return Err(invalid());
    }

    inner
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|_| invalid()))
        .collect()
}

/// Parse a tuple with exactly `N` components
pub fn parse_vector<const N: usize>(
    field: &'static str,
    text: &str,
) -> Result<[f32; N], SettingsError> {
    let values = parse_tuple(field, text)?;
    values
        .try_into()
        .map_err(|values: Vec<f32>| SettingsError::Arity {
            field,
            expected: N,
            found: values.len(),
        })
}

/// Settings-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),
    #[error("Invalid tuple for {field}: {value:?}")]
    InvalidTuple { field: &'static str, value: String },
    #[error("Wrong number of components for {field}: expected {expected}, found {found}")]
    Arity {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

//! Hex color parsing for shader uniforms

use crate::settings::SettingsError;

/// Parse a `#RRGGBB` color into normalized RGBA with alpha 1.
///
/// The leading `#` is optional.
pub fn parse_hex_color(text: &str) -> Result<[f32; 4], SettingsError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SettingsError::InvalidColor(text.to_string()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| SettingsError::InvalidColor(text.to_string()))?;

    Ok([
        ((value >> 16) & 0xFF) as f32 / 255.0,
        ((value >> 8) & 0xFF) as f32 / 255.0,
        (value & 0xFF) as f32 / 255.0,
        1.0,
    ])
}

/// Format a normalized RGB(A) color as `#RRGGBB`, ignoring alpha
pub fn to_hex_color(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_parse_base_color() {
        let color = parse_hex_color("#331203").unwrap();
        assert_relative_eq!(color[0], 0x33 as f32 / 255.0);
        assert_relative_eq!(color[1], 0x12 as f32 / 255.0);
        assert_relative_eq!(color[2], 0x03 as f32 / 255.0);
        assert_eq!(color[3], 1.0);
    }

    #[test]
    fn test_parse_without_hash_and_lowercase() {
        assert_eq!(
            parse_hex_color("cb8d3d").unwrap(),
            parse_hex_color("#CB8D3D").unwrap()
        );
        assert_eq!(parse_hex_color("#ffffff").unwrap(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(parse_hex_color("#000000").unwrap(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "#", "#12345", "#1234567", "#GG0000", "red", "#+12345"] {
            assert!(
                matches!(parse_hex_color(text), Err(SettingsError::InvalidColor(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_round_trip() {
        for text in ["#331203", "#9D4120", "#CB8D3D"] {
            assert_eq!(to_hex_color(parse_hex_color(text).unwrap()), text);
        }
    }
}

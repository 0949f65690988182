//! Color and vector value types used by config entries

use crate::error::HitScoreError;
use serde::{Deserialize, Serialize};

/// RGBA color with components in the 0-1 range
///
/// Stored in documents as a 4-element array `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation toward `other`, `t` clamped to [0, 1]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl TryFrom<Vec<f32>> for Color {
    type Error = HitScoreError;

    fn try_from(raw: Vec<f32>) -> Result<Self, Self::Error> {
        match raw.as_slice() {
            &[r, g, b, a] => Ok(Color { r, g, b, a }),
            _ => Err(HitScoreError::ConfigFormat(format!(
                "invalid color array length: expected 4, found {}",
                raw.len()
            ))),
        }
    }
}

impl From<Color> for Vec<f32> {
    fn from(color: Color) -> Self {
        color.to_array().to_vec()
    }
}

/// Three-component vector used for positions and offsets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

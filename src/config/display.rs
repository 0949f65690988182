//! Bad cut and miss display entries

use crate::config::color::Color;
use crate::template::Template;
use serde::{Deserialize, Serialize};

/// Failure kind a bad cut display applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BadCutType {
    /// Shown for every kind of bad cut
    #[default]
    All,
    WrongDirection,
    WrongColor,
    Bomb,
}

impl BadCutType {
    /// Whether a display of this type belongs in the `bucket` pool
    pub fn applies_to(self, bucket: BadCutType) -> bool {
        self == BadCutType::All || self == bucket
    }
}

/// Feedback shown when a cut fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadCutDisplay {
    pub text: Template,
    #[serde(default, rename = "type")]
    pub kind: BadCutType,
    pub color: Color,
}

impl BadCutDisplay {
    pub fn new(text: &str, kind: BadCutType, color: Color) -> Self {
        Self {
            text: Template::parse(text),
            kind,
            color,
        }
    }
}

/// Feedback shown when a note is missed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDisplay {
    pub text: Template,
    pub color: Color,
}

impl MissDisplay {
    pub fn new(text: &str, color: Color) -> Self {
        Self {
            text: Template::parse(text),
            color,
        }
    }
}

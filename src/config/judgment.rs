//! Judgment tier and segment table entries

use crate::config::color::Color;
use crate::template::Template;
use serde::{Deserialize, Serialize};

/// Judgment tier: minimum total score mapped to feedback text and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    /// Minimum total for this tier
    #[serde(default)]
    pub threshold: i32,
    /// Feedback template, parsed at load
    pub text: Template,
    pub color: Color,
    /// Blend toward the next higher tier's color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade: Option<bool>,
}

impl Judgment {
    pub fn new(threshold: i32, text: &str, color: Color) -> Self {
        Self {
            threshold,
            text: Template::parse(text),
            color,
            fade: None,
        }
    }

    pub fn with_fade(mut self, fade: bool) -> Self {
        self.fade = Some(fade);
        self
    }

    pub fn fades(&self) -> bool {
        self.fade.unwrap_or(false)
    }
}

/// Sub-score range entry with an integer threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub threshold: i32,
    pub text: String,
}

impl Segment {
    pub fn new(threshold: i32, text: &str) -> Self {
        Self {
            threshold,
            text: text.to_string(),
        }
    }
}

/// Time dependence range entry with a fractional threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSegment {
    #[serde(default)]
    pub threshold: f32,
    pub text: String,
}

impl TimeSegment {
    pub fn new(threshold: f32, text: &str) -> Self {
        Self {
            threshold,
            text: text.to_string(),
        }
    }
}

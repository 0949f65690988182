//! Configuration module for judgment tables and display settings
//!
//! This module handles deserialization of the config document and the
//! derived fields computed right after the raw fields are populated.

mod color;
mod default;
mod display;
pub mod handle;
mod judgment;
pub mod store;


pub use color::*;
pub use default::*;
pub use display::*;
pub use handle::*;
pub use judgment::*;
pub use store::*;

use crate::error::{HitScoreError, Result};
use serde::{Deserialize, Serialize};

fn default_decimal_precision() -> i32 {
    1
}

fn default_decimal_offset() -> i32 {
    2
}

fn default_true() -> bool {
    true
}

/// Root config: judgment tables, segment tables, and display settings
///
/// Derived fields (resolved positions, bad cut buckets) are skipped by serde
/// and filled in by [`Config::from_json`] / [`Config::from_value`]. After
/// editing raw fields in place, call [`Config::refresh_derived`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub judgments: Vec<Judgment>,
    #[serde(rename = "chainHeadJudgments", default)]
    pub chain_head_judgments: Vec<Judgment>,
    #[serde(rename = "chainLinkDisplay", default, skip_serializing_if = "Option::is_none")]
    pub chain_link_display: Option<Judgment>,
    #[serde(rename = "beforeCutAngleJudgments", default)]
    pub before_cut_angle_judgments: Vec<Segment>,
    #[serde(rename = "accuracyJudgments", default)]
    pub accuracy_judgments: Vec<Segment>,
    #[serde(rename = "afterCutAngleJudgments", default)]
    pub after_cut_angle_judgments: Vec<Segment>,
    #[serde(rename = "timeDependencyJudgments", default)]
    pub time_dependency_judgments: Vec<TimeSegment>,

    #[serde(rename = "fixedPosX", default, skip_serializing_if = "Option::is_none")]
    pub fixed_pos_x: Option<f32>,
    #[serde(rename = "fixedPosY", default, skip_serializing_if = "Option::is_none")]
    pub fixed_pos_y: Option<f32>,
    #[serde(rename = "fixedPosZ", default, skip_serializing_if = "Option::is_none")]
    pub fixed_pos_z: Option<f32>,
    #[serde(rename = "useFixedPos", default, skip_serializing_if = "Option::is_none")]
    pub use_fixed_pos: Option<bool>,
    #[serde(rename = "fixedPosition", default, skip_serializing_if = "Option::is_none")]
    pub fixed_position: Option<Vector3>,
    #[serde(rename = "targetPositionOffset", default, skip_serializing_if = "Option::is_none")]
    pub target_position_offset: Option<Vector3>,

    #[serde(rename = "timeDependencyDecimalPrecision", default = "default_decimal_precision")]
    pub time_dependency_decimal_precision: i32,
    #[serde(rename = "timeDependencyDecimalOffset", default = "default_decimal_offset")]
    pub time_dependency_decimal_offset: i32,

    #[serde(rename = "badCutDisplays", default)]
    pub bad_cut_displays: Vec<BadCutDisplay>,
    #[serde(rename = "randomizeBadCutDisplays", default = "default_true")]
    pub randomize_bad_cut_displays: bool,
    #[serde(rename = "missDisplays", default)]
    pub miss_displays: Vec<MissDisplay>,
    #[serde(rename = "randomizeMissDisplays", default = "default_true")]
    pub randomize_miss_displays: bool,

    #[serde(skip)]
    resolved_fixed_pos: Option<Vector3>,
    #[serde(skip)]
    resolved_pos_offset: Option<Vector3>,
    #[serde(skip)]
    wrong_directions: Vec<BadCutDisplay>,
    #[serde(skip)]
    wrong_colors: Vec<BadCutDisplay>,
    #[serde(skip)]
    bombs: Vec<BadCutDisplay>,
}

impl Config {
    /// Parse a JSON document and compute derived fields
    pub fn from_json(document: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(document)?;
        config.finish_load()
    }

    /// Build from an already-parsed JSON value and compute derived fields
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: Config = serde_json::from_value(value)?;
        config.finish_load()
    }

    /// Serialize the raw fields back into a document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HitScoreError::Serialization(e.to_string()))
    }

    /// Post-processing, in load order
    fn finish_load(mut self) -> Result<Self> {
        self.validate_judgments()?;
        self.refresh_derived();
        Ok(self)
    }

    /// Recompute resolved positions and bad cut buckets from the raw fields
    pub fn refresh_derived(&mut self) {
        self.resolve_positions();
        self.categorize_bad_cuts();
    }

    fn validate_judgments(&self) -> Result<()> {
        if self.judgments.is_empty() {
            return Err(HitScoreError::ConfigFormat(
                "no judgments found in config".to_string(),
            ));
        }
        Ok(())
    }

    /// Unify the legacy X/Y/Z fields and the vector field into one position
    fn resolve_positions(&mut self) {
        self.resolved_fixed_pos = if self.use_fixed_pos == Some(true) {
            Some(Vector3::new(
                self.fixed_pos_x.unwrap_or(0.0),
                self.fixed_pos_y.unwrap_or(0.0),
                self.fixed_pos_z.unwrap_or(0.0),
            ))
        } else {
            self.fixed_position
        };
        self.resolved_pos_offset = self.target_position_offset;
    }

    fn categorize_bad_cuts(&mut self) {
        let bucket = |kind: BadCutType| -> Vec<BadCutDisplay> {
            self.bad_cut_displays
                .iter()
                .filter(|display| display.kind.applies_to(kind))
                .cloned()
                .collect()
        };
        let wrong_directions = bucket(BadCutType::WrongDirection);
        let wrong_colors = bucket(BadCutType::WrongColor);
        let bombs = bucket(BadCutType::Bomb);

        self.wrong_directions = wrong_directions;
        self.wrong_colors = wrong_colors;
        self.bombs = bombs;
    }

    /// Resolved fixed position, if any
    pub fn fixed_pos(&self) -> Option<Vector3> {
        self.resolved_fixed_pos
    }

    /// Resolved target position offset, if any
    pub fn pos_offset(&self) -> Option<Vector3> {
        self.resolved_pos_offset
    }

    pub fn wrong_directions(&self) -> &[BadCutDisplay] {
        &self.wrong_directions
    }

    pub fn wrong_colors(&self) -> &[BadCutDisplay] {
        &self.wrong_colors
    }

    pub fn bombs(&self) -> &[BadCutDisplay] {
        &self.bombs
    }

    /// Display pool for a bad cut kind; `All` yields every display
    pub fn bad_cut_pool(&self, kind: BadCutType) -> &[BadCutDisplay] {
        match kind {
            BadCutType::All => &self.bad_cut_displays,
            BadCutType::WrongDirection => &self.wrong_directions,
            BadCutType::WrongColor => &self.wrong_colors,
            BadCutType::Bomb => &self.bombs,
        }
    }

    pub fn has_chain_head(&self) -> bool {
        !self.chain_head_judgments.is_empty()
    }

    pub fn has_chain_link(&self) -> bool {
        self.chain_link_display.is_some()
    }
}

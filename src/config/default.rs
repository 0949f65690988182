//! Built-in default config, used on first run and for recovery

use crate::config::{Color, Config, Judgment, Segment};
use once_cell::sync::Lazy;

/// Process-wide built-in default config
pub static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(built_in);

fn built_in() -> Config {
    let mut config = Config {
        judgments: vec![
            Judgment::new(115, "%BFantastic%A%n%s", Color::rgba(1.0, 1.0, 1.0, 1.0)),
            Judgment::new(
                101,
                "<size=80%>%BExcellent%A</size>%n%s",
                Color::rgba(0.0, 1.0, 0.0, 1.0),
            ),
            Judgment::new(
                90,
                "<size=80%>%BGreat%A</size>%n%s",
                Color::rgba(1.0, 0.980_392_16, 0.0, 1.0),
            ),
            Judgment::new(
                80,
                "<size=80%>%BGood%A</size>%n%s",
                Color::rgba(1.0, 0.6, 0.0, 1.0),
            )
            .with_fade(true),
            Judgment::new(
                60,
                "<size=80%>%BDecent%A</size>%n%s",
                Color::rgba(1.0, 0.0, 0.0, 1.0),
            )
            .with_fade(true),
            Judgment::new(
                0,
                "<size=80%>%BWay Off%A</size>%n%s",
                Color::rgba(0.5, 0.0, 0.0, 1.0),
            )
            .with_fade(true),
        ],
        chain_head_judgments: Vec::new(),
        chain_link_display: None,
        before_cut_angle_judgments: vec![Segment::new(70, "+"), Segment::new(0, " ")],
        accuracy_judgments: Vec::new(),
        after_cut_angle_judgments: vec![Segment::new(30, " +"), Segment::new(0, " ")],
        time_dependency_judgments: Vec::new(),
        fixed_pos_x: None,
        fixed_pos_y: None,
        fixed_pos_z: None,
        use_fixed_pos: None,
        fixed_position: None,
        target_position_offset: None,
        time_dependency_decimal_precision: 1,
        time_dependency_decimal_offset: 2,
        bad_cut_displays: Vec::new(),
        randomize_bad_cut_displays: true,
        miss_displays: Vec::new(),
        randomize_miss_displays: true,
        resolved_fixed_pos: None,
        resolved_pos_offset: None,
        wrong_directions: Vec::new(),
        wrong_colors: Vec::new(),
        bombs: Vec::new(),
    };
    config.resolve_positions();
    config.categorize_bad_cuts();
    config
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl Config {
    /// Whether this config matches the built-in default
    pub fn is_default(&self) -> bool {
        *self == *DEFAULT_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_and_descending() {
        let config = Config::default();
        assert!(!config.judgments.is_empty());
        assert!(config
            .judgments
            .windows(2)
            .all(|pair| pair[0].threshold > pair[1].threshold));
        assert!(config.is_default());
    }

    #[test]
    fn test_default_survives_round_trip() {
        let document = Config::default().to_json().unwrap();
        let reloaded = Config::from_json(&document).unwrap();
        assert!(reloaded.is_default());
    }
}

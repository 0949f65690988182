//! Score judging: tier selection plus template expansion

use crate::config::{BadCutType, Color, Config, Judgment};
use crate::judge::display::DisplayPicker;
use crate::score::CutScore;
use crate::selector::select_judgment;
use crate::template::RenderContext;
use std::sync::Arc;

/// Formatted feedback for one judged event
#[derive(Debug, Clone, PartialEq)]
pub struct JudgedText {
    pub text: String,
    pub color: Color,
}

/// Judge bound to one config snapshot
///
/// A judge without a config (nothing loaded, or the last load failed)
/// produces no output for any event.
#[derive(Debug, Clone, Default)]
pub struct ScoreJudge {
    config: Option<Arc<Config>>,
}

impl ScoreJudge {
    pub fn new(config: Option<Arc<Config>>) -> Self {
        Self { config }
    }

    pub fn with_config(config: Config) -> Self {
        Self::new(Some(Arc::new(config)))
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_deref()
    }

    /// Judge a cut from its raw components
    pub fn judge(
        &self,
        total: i32,
        before: i32,
        after: i32,
        accuracy: i32,
        time_dependence: f32,
    ) -> Option<JudgedText> {
        self.judge_cut(&CutScore::new(total, before, after, accuracy, time_dependence))
    }

    /// Judge a normal note cut against the judgment table
    pub fn judge_cut(&self, score: &CutScore) -> Option<JudgedText> {
        let config = self.config()?;
        judge_with_table(config, &config.judgments, score)
    }

    /// Judge a chain head, falling back to the normal table when no chain
    /// head table is configured
    pub fn judge_chain_head(&self, score: &CutScore) -> Option<JudgedText> {
        let config = self.config()?;
        let table = if config.has_chain_head() {
            &config.chain_head_judgments
        } else {
            &config.judgments
        };
        judge_with_table(config, table, score)
    }

    /// Chain link display, when one is configured
    pub fn judge_chain_link(&self, score: &CutScore) -> Option<JudgedText> {
        let config = self.config()?;
        let display = config.chain_link_display.as_ref()?;
        Some(render_judgment(config, display, score))
    }

    /// Color a fade-enabled tier would show for `total`
    pub fn faded_color(&self, total: i32) -> Option<Color> {
        let config = self.config()?;
        let index = select_judgment(&config.judgments, total)?;
        Some(fade_color(&config.judgments, index, total))
    }

    /// Feedback for a bad cut of the given kind
    pub fn bad_cut(&self, kind: BadCutType, picker: &DisplayPicker) -> Option<JudgedText> {
        let config = self.config()?;
        let pool = config.bad_cut_pool(kind);
        let display = picker.pick(pool, config.randomize_bad_cut_displays)?;
        Some(JudgedText {
            text: display.text.render_static(),
            color: display.color,
        })
    }

    /// Feedback for a missed note
    pub fn miss(&self, picker: &DisplayPicker) -> Option<JudgedText> {
        let config = self.config()?;
        let display = picker.pick(&config.miss_displays, config.randomize_miss_displays)?;
        Some(JudgedText {
            text: display.text.render_static(),
            color: display.color,
        })
    }
}

fn judge_with_table(config: &Config, table: &[Judgment], score: &CutScore) -> Option<JudgedText> {
    let index = select_judgment(table, score.total)?;
    Some(render_judgment(config, &table[index], score))
}

fn render_judgment(config: &Config, judgment: &Judgment, score: &CutScore) -> JudgedText {
    let ctx = RenderContext::new(score, config);
    JudgedText {
        text: judgment.text.render(&ctx),
        color: judgment.color,
    }
}

/// Blend a fading tier's color toward the tier above it by how far `total`
/// sits between the two thresholds
pub fn fade_color(table: &[Judgment], index: usize, total: i32) -> Color {
    let judgment = &table[index];
    if !judgment.fades() || index == 0 {
        return judgment.color;
    }

    let above = &table[index - 1];
    let t = inverse_lerp(judgment.threshold, above.threshold, total);
    judgment.color.lerp(above.color, t)
}

fn inverse_lerp(from: i32, to: i32, value: i32) -> f32 {
    if from == to {
        return 0.0;
    }
    let span = i64::from(to) - i64::from(from);
    let offset = i64::from(value) - i64::from(from);
    (offset as f64 / span as f64).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BadCutDisplay, MissDisplay, Segment};

    fn custom_config() -> Config {
        Config::from_json(
            r#"{
                "judgments": [
                    {"threshold": 115, "text": "%s pts", "color": [1, 1, 1, 1]},
                    {"threshold": 100, "text": "%BGood%A", "color": [0, 1, 0, 1]},
                    {"threshold": 50, "text": "Fading", "color": [0, 0, 0, 1], "fade": true}
                ],
                "chainHeadJudgments": [
                    {"threshold": 0, "text": "head %s", "color": [0, 0, 1, 1]}
                ],
                "chainLinkDisplay": {"text": "link %s", "color": [1, 0, 1, 1]},
                "beforeCutAngleJudgments": [
                    {"threshold": 70, "text": "+"},
                    {"threshold": 0, "text": "-"}
                ],
                "badCutDisplays": [
                    {"text": "BOMB", "type": "Bomb", "color": [1, 0, 0, 1]}
                ],
                "missDisplays": [
                    {"text": "MISS", "color": [0.5, 0.5, 0.5, 1]}
                ],
                "randomizeMissDisplays": false
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_judge_without_config_is_noop() {
        let judge = ScoreJudge::default();
        assert!(judge.judge(115, 70, 30, 15, 0.0).is_none());
        assert!(judge.judge_chain_head(&CutScore::default()).is_none());
        assert!(judge.judge_chain_link(&CutScore::default()).is_none());
        assert!(judge.faded_color(100).is_none());
        assert!(judge.miss(&DisplayPicker::new()).is_none());
        assert!(judge
            .bad_cut(BadCutType::Bomb, &DisplayPicker::new())
            .is_none());
    }

    #[test]
    fn test_judge_top_tier() {
        let judge = ScoreJudge::with_config(custom_config());
        let result = judge.judge(115, 70, 30, 15, 0.0).unwrap();
        assert_eq!(result.text, "115 pts");
        assert_eq!(result.color, Color::WHITE);
    }

    #[test]
    fn test_judge_expands_segments() {
        let judge = ScoreJudge::with_config(custom_config());
        let result = judge.judge(105, 60, 30, 15, 0.0).unwrap();
        assert_eq!(result.text, "-Good");
        assert_eq!(result.color, Color::rgba(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_judge_returns_configured_color_even_when_fading() {
        let judge = ScoreJudge::with_config(custom_config());
        let result = judge.judge(75, 40, 20, 15, 0.0).unwrap();
        assert_eq!(result.text, "Fading");
        assert_eq!(result.color, Color::rgba(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_judge_below_all_uses_last_tier() {
        let judge = ScoreJudge::with_config(custom_config());
        let result = judge.judge(10, 0, 0, 10, 0.0).unwrap();
        assert_eq!(result.text, "Fading");
    }

    #[test]
    fn test_default_config_output() {
        let judge = ScoreJudge::with_config(Config::default());
        let result = judge.judge_cut(&CutScore::from_parts(70, 30, 15, 0.0)).unwrap();
        assert_eq!(result.text, "+Fantastic +\n115");

        let result = judge.judge_cut(&CutScore::from_parts(65, 30, 15, 0.0)).unwrap();
        assert_eq!(result.text, "<size=80%> Excellent +</size>\n110");
    }

    #[test]
    fn test_chain_head_table() {
        let judge = ScoreJudge::with_config(custom_config());
        let cut = CutScore::from_parts(70, 0, 15, 0.0);
        assert_eq!(judge.judge_chain_head(&cut).unwrap().text, "head 85");

        let fallback = ScoreJudge::with_config(Config::default());
        assert!(fallback
            .judge_chain_head(&cut)
            .unwrap()
            .text
            .ends_with("85"));
    }

    #[test]
    fn test_chain_link_display() {
        let judge = ScoreJudge::with_config(custom_config());
        let link = judge.judge_chain_link(&CutScore::new(20, 0, 0, 20, 0.0)).unwrap();
        assert_eq!(link.text, "link 20");
        assert_eq!(link.color, Color::rgba(1.0, 0.0, 1.0, 1.0));

        let without = ScoreJudge::with_config(Config::default());
        assert!(without.judge_chain_link(&CutScore::default()).is_none());
    }

    #[test]
    fn test_fade_color_interpolates() {
        let judge = ScoreJudge::with_config(custom_config());
        // halfway between 50 (black) and 100 (green)
        assert_eq!(judge.faded_color(75), Some(Color::rgba(0.0, 0.5, 0.0, 1.0)));
        // at the tier's own threshold the color is unchanged
        assert_eq!(judge.faded_color(50), Some(Color::rgba(0.0, 0.0, 0.0, 1.0)));
        // non-fading tiers keep their color
        assert_eq!(judge.faded_color(105), Some(Color::rgba(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_fade_below_threshold_clamps() {
        let judge = ScoreJudge::with_config(custom_config());
        assert_eq!(judge.faded_color(10), Some(Color::rgba(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_fade_extreme_totals_clamp() {
        let black = Color::rgba(0.0, 0.0, 0.0, 1.0);
        let table = vec![
            Judgment::new(100, "plain", Color::WHITE),
            Judgment::new(50, "fade", black).with_fade(true),
        ];
        assert_eq!(fade_color(&table, 1, i32::MIN), black);
        assert_eq!(fade_color(&table, 1, i32::MAX), Color::WHITE);

        let wide = vec![
            Judgment::new(i32::MAX, "top", Color::WHITE),
            Judgment::new(i32::MIN, "floor", black).with_fade(true),
        ];
        assert_eq!(fade_color(&wide, 1, i32::MIN), black);
        assert_eq!(fade_color(&wide, 1, i32::MAX), Color::WHITE);
    }

    #[test]
    fn test_fade_on_first_tier_is_plain() {
        let table = vec![Judgment::new(100, "x", Color::WHITE).with_fade(true)];
        assert_eq!(fade_color(&table, 0, 120), Color::WHITE);
    }

    #[test]
    fn test_bad_cut_pools() {
        let judge = ScoreJudge::with_config(custom_config());
        let picker = DisplayPicker::new();

        let bomb = judge.bad_cut(BadCutType::Bomb, &picker).unwrap();
        assert_eq!(bomb.text, "BOMB");
        assert!(judge.bad_cut(BadCutType::WrongColor, &picker).is_none());
    }

    #[test]
    fn test_miss_display() {
        let judge = ScoreJudge::with_config(custom_config());
        let miss = judge.miss(&DisplayPicker::new()).unwrap();
        assert_eq!(miss.text, "MISS");
        assert_eq!(miss.color, Color::rgba(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_miss_display_cycles_in_order() {
        let mut config = Config::default();
        config.miss_displays = vec![
            MissDisplay::new("one", Color::WHITE),
            MissDisplay::new("two", Color::WHITE),
        ];
        config.randomize_miss_displays = false;
        let judge = ScoreJudge::with_config(config);
        let picker = DisplayPicker::new();

        let texts: Vec<String> = (0..3)
            .filter_map(|_| judge.miss(&picker))
            .map(|shown| shown.text)
            .collect();
        assert_eq!(texts, vec!["one", "two", "one"]);
    }

    #[test]
    fn test_bad_cut_text_keeps_score_directives() {
        let mut config = Config::default();
        config.bad_cut_displays = vec![BadCutDisplay::new(
            "%s?%n!",
            BadCutType::All,
            Color::WHITE,
        )];
        config.refresh_derived();
        let judge = ScoreJudge::with_config(config);
        let shown = judge
            .bad_cut(BadCutType::WrongDirection, &DisplayPicker::new())
            .unwrap();
        assert_eq!(shown.text, "%s?\n!");
    }

    #[test]
    fn test_segment_edit_visible_to_judge() {
        let mut config = custom_config();
        config.before_cut_angle_judgments = vec![Segment::new(0, "*")];
        let judge = ScoreJudge::with_config(config);
        assert_eq!(judge.judge(105, 60, 30, 15, 0.0).unwrap().text, "*Good");
    }
}

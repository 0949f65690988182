//! Template rendering against a judged cut

use crate::config::Config;
use crate::score::{CutScore, MAX_CUT_SCORE};
use crate::selector::{select_segment, select_time_segment};
use crate::template::parser::MARKER;
use crate::template::token::{Directive, Token};

/// Everything a template may reference while rendering one cut
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub score: &'a CutScore,
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    pub fn new(score: &'a CutScore, config: &'a Config) -> Self {
        Self { score, config }
    }
}

/// Render a token sequence for one cut
pub fn render(tokens: &[Token], ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Directive(directive) => push_directive(&mut out, *directive, ctx),
        }
    }
    out
}

/// Render a token sequence with no cut attached
///
/// Score-bearing directives have nothing to substitute and are written back
/// as their two-character source form.
pub fn render_static(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Directive(directive) => {
                out.push(MARKER);
                out.push(directive.specifier());
            }
        }
    }
    out
}

fn push_directive(out: &mut String, directive: Directive, ctx: &RenderContext<'_>) {
    let score = ctx.score;
    let config = ctx.config;

    match directive {
        Directive::BeforeScore => out.push_str(&score.before.to_string()),
        Directive::AccuracyScore => out.push_str(&score.accuracy.to_string()),
        Directive::AfterScore => out.push_str(&score.after.to_string()),
        Directive::TotalScore => out.push_str(&score.total.to_string()),
        Directive::TimeDependence => out.push_str(&format_time_dependence(
            score.time_dependence,
            config.time_dependency_decimal_offset,
            config.time_dependency_decimal_precision,
        )),
        Directive::BeforeSegment => {
            if let Some(segment) = select_segment(&config.before_cut_angle_judgments, score.before) {
                out.push_str(&segment.text);
            }
        }
        Directive::AccuracySegment => {
            if let Some(segment) = select_segment(&config.accuracy_judgments, score.accuracy) {
                out.push_str(&segment.text);
            }
        }
        Directive::AfterSegment => {
            if let Some(segment) = select_segment(&config.after_cut_angle_judgments, score.after) {
                out.push_str(&segment.text);
            }
        }
        Directive::TimeSegment => {
            if let Some(segment) =
                select_time_segment(&config.time_dependency_judgments, score.time_dependence)
            {
                out.push_str(&segment.text);
            }
        }
        Directive::Percentage => out.push_str(&format_percentage(score.total)),
    }
}

/// Scale time dependence by `10^decimal_offset` and print it with
/// `decimal_precision` fractional digits
pub fn format_time_dependence(
    time_dependence: f32,
    decimal_offset: i32,
    decimal_precision: i32,
) -> String {
    let multiplier = 10f32.powi(decimal_offset);
    let precision = decimal_precision.max(0) as usize;
    format!("{:.*}", precision, time_dependence * multiplier)
}

/// Total score as a percentage of the maximum cut score, rounded to a whole
/// number and printed in fixed-point with six fractional digits
pub fn format_percentage(total: i32) -> String {
    let percent = (f64::from(total) / f64::from(MAX_CUT_SCORE) * 100.0).round();
    format!("{:.6}", percent)
}

//! Token types for parsed feedback templates

/// Score-bearing directive, substituted per judged cut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Before-cut swing score (%b)
    BeforeScore,
    /// Accuracy score (%c)
    AccuracyScore,
    /// After-cut swing score (%a)
    AfterScore,
    /// Total score (%s)
    TotalScore,
    /// Scaled time dependence (%t)
    TimeDependence,
    /// Before-cut segment text (%B)
    BeforeSegment,
    /// Accuracy segment text (%C)
    AccuracySegment,
    /// After-cut segment text (%A)
    AfterSegment,
    /// Time dependence segment text (%T)
    TimeSegment,
    /// Total score as a percentage of the maximum (%p)
    Percentage,
}

impl Directive {
    /// Map a specifier character to its directive, if it carries a score
    pub fn from_specifier(specifier: char) -> Option<Self> {
        match specifier {
            'b' => Some(Directive::BeforeScore),
            'c' => Some(Directive::AccuracyScore),
            'a' => Some(Directive::AfterScore),
            's' => Some(Directive::TotalScore),
            't' => Some(Directive::TimeDependence),
            'B' => Some(Directive::BeforeSegment),
            'C' => Some(Directive::AccuracySegment),
            'A' => Some(Directive::AfterSegment),
            'T' => Some(Directive::TimeSegment),
            'p' => Some(Directive::Percentage),
            _ => None,
        }
    }

    pub fn specifier(self) -> char {
        match self {
            Directive::BeforeScore => 'b',
            Directive::AccuracyScore => 'c',
            Directive::AfterScore => 'a',
            Directive::TotalScore => 's',
            Directive::TimeDependence => 't',
            Directive::BeforeSegment => 'B',
            Directive::AccuracySegment => 'C',
            Directive::AfterSegment => 'A',
            Directive::TimeSegment => 'T',
            Directive::Percentage => 'p',
        }
    }
}

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Text emitted as-is (formatting directives are already folded in)
    Literal(String),
    Directive(Directive),
}

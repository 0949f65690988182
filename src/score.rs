//! Score inputs for a single judged cut

/// Highest total a single cut can score (70 before + 30 after + 15 accuracy)
pub const MAX_CUT_SCORE: i32 = 115;

/// Raw score components of one cut
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CutScore {
    pub total: i32,
    /// Before-cut swing rating score
    pub before: i32,
    /// After-cut swing rating score
    pub after: i32,
    /// Distance-to-center accuracy score
    pub accuracy: i32,
    /// Normalized cut timing deviation
    pub time_dependence: f32,
}

impl CutScore {
    pub fn new(total: i32, before: i32, after: i32, accuracy: i32, time_dependence: f32) -> Self {
        Self {
            total,
            before,
            after,
            accuracy,
            time_dependence,
        }
    }

    /// Build a cut whose total is the sum of its components
    pub fn from_parts(before: i32, after: i32, accuracy: i32, time_dependence: f32) -> Self {
        Self::new(
            before + after + accuracy,
            before,
            after,
            accuracy,
            time_dependence,
        )
    }
}

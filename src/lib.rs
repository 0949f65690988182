//! Hit Score Core - judgment tables and feedback text for cut scores
//!
//! This crate picks a judgment tier for a cut score from a configured
//! threshold table and renders its feedback template, with optional Python
//! bindings via PyO3 (feature `python`).

pub mod config;
pub mod error;
pub mod judge;
pub mod score;
pub mod selector;
pub mod template;

pub use config::{Config, ConfigHandle, LoadOutcome};
pub use error::{HitScoreError, Result};
pub use judge::{JudgedText, ScoreJudge};
pub use score::CutScore;

#[cfg(feature = "python")]
mod python {
    use crate::config::{ConfigHandle, FileStore, LoadOutcome};
    use crate::score::CutScore;
    use once_cell::sync::Lazy;
    use pyo3::prelude::*;

    // ========================================================================
    // Shared Configuration
    // ========================================================================

    /// Process-wide config handle shared by every judged cut
    static HANDLE: Lazy<ConfigHandle> = Lazy::new(ConfigHandle::new);

    type PyColor = (f32, f32, f32, f32);

    fn outcome_name(outcome: LoadOutcome) -> &'static str {
        match outcome {
            LoadOutcome::Loaded => "loaded",
            LoadOutcome::RecoveredDefault => "recovered_default",
            LoadOutcome::Invalid => "invalid",
        }
    }

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Load a config document from a JSON string
    ///
    /// # Raises
    /// ValueError if the document is malformed or fails validation
    #[pyfunction]
    fn load_config(document: &str) -> PyResult<()> {
        HANDLE.load_str(document)?;
        Ok(())
    }

    /// Load the config file at `path`, recovering to the built-in default
    /// (and writing it back) on first-run failures
    ///
    /// # Returns
    /// One of "loaded", "recovered_default", "invalid"
    #[pyfunction]
    fn load_config_file(path: String) -> &'static str {
        outcome_name(HANDLE.load_from(&FileStore::new(path)))
    }

    /// Load the config file on a blocking thread
    ///
    /// # Returns
    /// A Python awaitable resolving to the same outcome as `load_config_file`
    #[pyfunction]
    fn load_config_file_async(py: Python<'_>, path: String) -> PyResult<Bound<'_, PyAny>> {
        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let outcome =
                tokio::task::spawn_blocking(move || HANDLE.load_from(&FileStore::new(path)))
                    .await
                    .map_err(|e| {
                        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                            "Config load task panicked: {}",
                            e
                        ))
                    })?;
            Ok(outcome_name(outcome))
        })
    }

    /// Check if a valid config is loaded
    #[pyfunction]
    fn is_config_valid() -> bool {
        HANDLE.is_valid()
    }

    /// Judge a cut
    ///
    /// # Returns
    /// `(text, (r, g, b, a))`, or None while no valid config is loaded
    #[pyfunction]
    fn judge(
        total: i32,
        before: i32,
        after: i32,
        accuracy: i32,
        time_dependence: f32,
    ) -> Option<(String, PyColor)> {
        let score = CutScore::new(total, before, after, accuracy, time_dependence);
        HANDLE.scorer().judge_cut(&score).map(|judged| {
            let [r, g, b, a] = judged.color.to_array();
            (judged.text, (r, g, b, a))
        })
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    /// Python module definition
    #[pymodule]
    fn hit_score_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(load_config, m)?)?;
        m.add_function(wrap_pyfunction!(load_config_file, m)?)?;
        m.add_function(wrap_pyfunction!(load_config_file_async, m)?)?;
        m.add_function(wrap_pyfunction!(is_config_valid, m)?)?;
        m.add_function(wrap_pyfunction!(judge, m)?)?;
        Ok(())
    }
}

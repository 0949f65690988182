//! Display pool selection for bad cuts and misses

use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Picks one display out of a pool
///
/// Random picks are uniform; ordered picks walk the pool and wrap around.
#[derive(Debug, Default)]
pub struct DisplayPicker {
    cursor: AtomicUsize,
}

impl DisplayPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick from `pool`, `None` if it is empty
    pub fn pick<'a, T>(&self, pool: &'a [T], randomize: bool) -> Option<&'a T> {
        if pool.is_empty() {
            return None;
        }

        if randomize {
            let mut rng = rand::thread_rng();
            return pool.choose(&mut rng);
        }

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % pool.len();
        pool.get(index)
    }

    /// Restart ordered picks from the first entry
    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Relaxed);
    }
}

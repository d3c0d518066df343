//! Difficulty progression
//!
//! Every `score_interval` points of score tightens the spawn interval by one
//! decrement and widens the number range by one increment, both clamped.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current spawn pacing and value range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    /// Milliseconds between spawns
    pub spawn_interval_ms: u32,
    /// Upper bound (inclusive) for spawned values
    pub max_number: u32,
    /// Score at which the last step was applied
    pub last_threshold: u64,
    initial_spawn_delay_ms: u32,
    min_spawn_delay_ms: u32,
    spawn_delay_decrement_ms: u32,
    initial_max_number: u32,
    max_number_cap: u32,
    max_number_increment: u32,
    score_interval: u64,
}

impl DifficultyCurve {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_interval_ms: tuning.initial_spawn_delay_ms,
            max_number: tuning.initial_max_number,
            last_threshold: 0,
            initial_spawn_delay_ms: tuning.initial_spawn_delay_ms,
            min_spawn_delay_ms: tuning.min_spawn_delay_ms,
            spawn_delay_decrement_ms: tuning.spawn_delay_decrement_ms,
            initial_max_number: tuning.initial_max_number,
            max_number_cap: tuning.max_number_cap,
            max_number_increment: tuning.max_number_increment,
            score_interval: tuning.score_interval,
        }
    }

    /// Re-evaluate after a score change
    ///
    /// Applies one step per whole `score_interval` gained since the last
    /// threshold, then moves the threshold to `score` itself. Returns the new
    /// spawn interval if it changed.
    pub fn on_score_changed(&mut self, score: u64) -> Option<u32> {
        let steps = score.saturating_sub(self.last_threshold) / self.score_interval;
        if steps == 0 {
            return None;
        }

        let previous = self.spawn_interval_ms;
        for _ in 0..steps {
            self.spawn_interval_ms = self
                .spawn_interval_ms
                .saturating_sub(self.spawn_delay_decrement_ms)
                .max(self.min_spawn_delay_ms);
            self.max_number = self
                .max_number
                .saturating_add(self.max_number_increment)
                .min(self.max_number_cap);
        }
        self.last_threshold = score;

        log::debug!(
            "Difficulty +{} at score {}: interval {}ms, max number {}",
            steps,
            score,
            self.spawn_interval_ms,
            self.max_number
        );

        (self.spawn_interval_ms != previous).then_some(self.spawn_interval_ms)
    }

    pub fn reset(&mut self) {
        self.spawn_interval_ms = self.initial_spawn_delay_ms;
        self.max_number = self.initial_max_number;
        self.last_threshold = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_values() {
        let tuning = Tuning::default();
        let curve = DifficultyCurve::new(&tuning);
        assert_eq!(curve.spawn_interval_ms, 1700);
        assert_eq!(curve.max_number, tuning.initial_max_number);
        assert_eq!(curve.last_threshold, 0);
    }

    #[test]
    fn test_below_interval_does_nothing() {
        let tuning = Tuning::default();
        let mut curve = DifficultyCurve::new(&tuning);
        assert_eq!(curve.on_score_changed(199), None);
        assert_eq!(curve.spawn_interval_ms, 1700);
        assert_eq!(curve.last_threshold, 0);
    }

    #[test]
    fn test_threshold_moves_to_score() {
        let tuning = Tuning::default();
        let mut curve = DifficultyCurve::new(&tuning);
        assert_eq!(curve.on_score_changed(190), None);

        // 190 -> 210 crosses the first threshold
        let new_interval = curve.on_score_changed(210);
        assert_eq!(new_interval, Some(1700 - tuning.spawn_delay_decrement_ms));
        assert_eq!(curve.last_threshold, 210);
        assert_eq!(
            curve.max_number,
            tuning.initial_max_number + tuning.max_number_increment
        );

        // Next step needs another full interval from 210
        assert_eq!(curve.on_score_changed(400), None);
        assert!(curve.on_score_changed(410).is_some());
        assert_eq!(curve.last_threshold, 410);
    }

    #[test]
    fn test_large_jump_applies_multiple_steps() {
        let tuning = Tuning::default();
        let mut curve = DifficultyCurve::new(&tuning);
        curve.on_score_changed(650);
        assert_eq!(
            curve.spawn_interval_ms,
            1700 - 3 * tuning.spawn_delay_decrement_ms
        );
        assert_eq!(
            curve.max_number,
            tuning.initial_max_number + 3 * tuning.max_number_increment
        );
        assert_eq!(curve.last_threshold, 650);
    }

    #[test]
    fn test_clamps_at_floor_and_cap() {
        let tuning = Tuning::default();
        let mut curve = DifficultyCurve::new(&tuning);
        curve.on_score_changed(1_000_000);
        assert_eq!(curve.spawn_interval_ms, tuning.min_spawn_delay_ms);
        assert_eq!(curve.max_number, tuning.max_number_cap);

        // Already at the floor: no reschedule needed
        assert_eq!(curve.on_score_changed(2_000_000), None);
    }

    #[test]
    fn test_reset() {
        let tuning = Tuning::default();
        let mut curve = DifficultyCurve::new(&tuning);
        curve.on_score_changed(5000);
        curve.reset();
        assert_eq!(curve, DifficultyCurve::new(&tuning));
    }

    proptest! {
        #[test]
        fn prop_monotone_and_clamped(gains in proptest::collection::vec(0u64..700, 1..60)) {
            let tuning = Tuning::default();
            let mut curve = DifficultyCurve::new(&tuning);
            let mut score = 0u64;
            for gain in gains {
                let interval = curve.spawn_interval_ms;
                let max = curve.max_number;
                score += gain;
                curve.on_score_changed(score);
                prop_assert!(curve.spawn_interval_ms <= interval);
                prop_assert!(curve.spawn_interval_ms >= tuning.min_spawn_delay_ms);
                prop_assert!(curve.max_number >= max);
                prop_assert!(curve.max_number <= tuning.max_number_cap);
                prop_assert!(curve.last_threshold <= score);
            }
        }
    }
}

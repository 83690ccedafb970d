//! Search configuration and size targets.

use serde::{Deserialize, Serialize};

use super::SearchError;

/// Quality values are snapped to this grid so the progression is exact.
pub const QUALITY_RESOLUTION: f64 = 1e-6;

/// Bytes per kilobyte as the UI counts them.
pub const BYTES_PER_KB: u64 = 1024;

/// Upper bound on the encoded size the search tries to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Maximum acceptable encoded size in bytes.
    pub target_bytes: u64,
}

impl TargetSpec {
    pub fn from_bytes(target_bytes: u64) -> Self {
        Self { target_bytes }
    }

    /// Target of `kb` kilobytes (1 KB = 1024 bytes).
    pub fn from_kb(kb: u32) -> Self {
        Self {
            target_bytes: u64::from(kb) * BYTES_PER_KB,
        }
    }

    /// Whether an encoded size satisfies this target.
    #[inline]
    pub fn is_met_by(&self, size_bytes: u64) -> bool {
        size_bytes <= self.target_bytes
    }
}

/// Quality progression for a search.
///
/// Qualities are normalized to `[0, 1]`. The search tries
/// `start_quality`, `start_quality - step`, ... down to `min_quality`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// First quality tried (default 0.9)
    pub start_quality: f32,
    /// Decrement between attempts (default 0.05)
    pub step: f32,
    /// Quality floor, always the last value tried (default 0.05)
    pub min_quality: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start_quality: 0.9,
            step: 0.05,
            min_quality: 0.05,
        }
    }
}

impl SearchConfig {
    /// Create a config with the default progression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the progression is well formed.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidInput` when a value is not finite, the
    /// qualities fall outside `[0, 1]` or are inverted, or the step is not
    /// positive (or smaller than the quality resolution).
    pub fn validate(&self) -> Result<(), SearchError> {
        let Self {
            start_quality,
            step,
            min_quality,
        } = *self;

        if !(start_quality.is_finite() && step.is_finite() && min_quality.is_finite()) {
            return Err(SearchError::InvalidInput(
                "search config values must be finite".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&start_quality) || !(0.0..=1.0).contains(&min_quality) {
            return Err(SearchError::InvalidInput(format!(
                "qualities must be within [0, 1] (start {start_quality}, min {min_quality})"
            )));
        }
        if min_quality > start_quality {
            return Err(SearchError::InvalidInput(format!(
                "min quality {min_quality} exceeds start quality {start_quality}"
            )));
        }
        if f64::from(step) < QUALITY_RESOLUTION {
            return Err(SearchError::InvalidInput(format!(
                "step must be at least {QUALITY_RESOLUTION}, got {step}"
            )));
        }
        Ok(())
    }

    /// Quality of the attempt with the given zero-based index.
    ///
    /// Computed from the index rather than by repeated subtraction, snapped to
    /// [`QUALITY_RESOLUTION`] and kept within `[min_quality, start_quality]`.
    /// Index 0 is exactly `start_quality` and the last index of the
    /// progression is exactly `min_quality`.
    pub fn quality_at(&self, index: u32) -> f32 {
        if index == 0 {
            return self.start_quality;
        }
        if index.saturating_add(1) >= self.max_attempts() {
            return self.min_quality;
        }
        let raw = f64::from(self.start_quality) - f64::from(index) * f64::from(self.step);
        let snapped = (raw / QUALITY_RESOLUTION).round() * QUALITY_RESOLUTION;
        // max/min so an unvalidated config cannot panic
        (snapped as f32).max(self.min_quality).min(self.start_quality)
    }

    /// Largest number of attempts a search with this config can make.
    pub fn max_attempts(&self) -> u32 {
        let span = f64::from(self.start_quality) - f64::from(self.min_quality);
        let steps = (span / f64::from(self.step) - QUALITY_RESOLUTION).ceil().max(0.0);
        steps as u32 + 1
    }

    /// The full progression from `start_quality` down to `min_quality`.
    pub fn qualities(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.max_attempts()).map(move |i| self.quality_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.start_quality, 0.9);
        assert_eq!(config.step, 0.05);
        assert_eq!(config.min_quality, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_from_kb() {
        assert_eq!(TargetSpec::from_kb(50).target_bytes, 51200);
        assert_eq!(TargetSpec::from_kb(0).target_bytes, 0);
        assert!(TargetSpec::from_kb(1).is_met_by(1024));
        assert!(!TargetSpec::from_kb(1).is_met_by(1025));
    }

    #[test]
    fn test_quality_progression_is_exact() {
        let config = SearchConfig::default();

        assert_eq!(config.quality_at(0), 0.9);
        assert_eq!(config.quality_at(13), 0.25);
        assert_eq!(config.quality_at(17), 0.05);
        // clamped below the floor
        assert_eq!(config.quality_at(18), 0.05);
        assert_eq!(config.quality_at(100), 0.05);
    }

    #[test]
    fn test_off_grid_start_is_never_exceeded() {
        let config = SearchConfig {
            start_quality: 0.1234567,
            step: 0.05,
            min_quality: 0.0,
        };

        assert_eq!(config.quality_at(0), 0.1234567);
        for q in config.qualities() {
            assert!(q <= config.start_quality, "{q} exceeds start");
            assert!(q >= config.min_quality, "{q} below floor");
        }
        assert_eq!(config.qualities().last(), Some(0.0));

        // off-grid start that snapping would round up
        let config = SearchConfig {
            start_quality: 0.6591089,
            ..Default::default()
        };
        assert_eq!(config.quality_at(0), 0.6591089);
        assert!(config.qualities().all(|q| q <= 0.6591089));
    }

    #[test]
    fn test_max_attempts() {
        assert_eq!(SearchConfig::default().max_attempts(), 18);

        let single = SearchConfig {
            start_quality: 0.5,
            step: 0.1,
            min_quality: 0.5,
        };
        assert_eq!(single.max_attempts(), 1);

        // 0.9 -> 0.6 -> 0.3 -> 0.2 (clamped)
        let uneven = SearchConfig {
            start_quality: 0.9,
            step: 0.3,
            min_quality: 0.2,
        };
        assert_eq!(uneven.max_attempts(), 4);
        let q: Vec<f32> = uneven.qualities().collect();
        assert!(approx(q[0], 0.9) && approx(q[1], 0.6) && approx(q[2], 0.3));
        assert_eq!(q[3], 0.2);
    }

    #[test]
    fn test_qualities_end_at_min() {
        let config = SearchConfig::default();
        let q: Vec<f32> = config.qualities().collect();

        assert_eq!(q.len(), 18);
        assert_eq!(q.first(), Some(&0.9));
        assert_eq!(q.last(), Some(&0.05));
        assert!(q.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let bad = [
            SearchConfig { step: 0.0, ..Default::default() },
            SearchConfig { step: -0.1, ..Default::default() },
            SearchConfig { step: f32::NAN, ..Default::default() },
            SearchConfig { start_quality: 1.5, ..Default::default() },
            SearchConfig { min_quality: -0.1, ..Default::default() },
            SearchConfig { start_quality: 0.1, min_quality: 0.5, ..Default::default() },
            SearchConfig { start_quality: f32::INFINITY, ..Default::default() },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(SearchError::InvalidInput(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_config_deserializes_partial_camel_case() {
        use serde::de::value::{Error, MapDeserializer};

        let fields = vec![("startQuality", 0.8f32), ("minQuality", 0.1f32)];
        let de = MapDeserializer::<_, Error>::new(fields.into_iter());
        let config = SearchConfig::deserialize(de).unwrap();

        assert_eq!(config.start_quality, 0.8);
        assert_eq!(config.step, 0.05);
        assert_eq!(config.min_quality, 0.1);
    }
}

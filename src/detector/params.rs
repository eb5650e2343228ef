//! Parameter types configuring the detector, and their persisted form.
//!
//! `CannyParams` is the in-memory configuration; `CannyConfigRecord` is the
//! tagged record written to and restored from JSON. Restoring validates the
//! tag before anything else, so records produced by other algorithms are
//! rejected outright.

use crate::error::CannyError;
use serde::{Deserialize, Serialize};

/// Tag identifying persisted configuration records of this detector.
pub const CONFIG_TAG: &str = "canny-edge-detector";

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CannyParams {
    /// Lower hysteresis threshold; magnitudes below it never become edges.
    pub low_threshold: f64,
    /// Upper hysteresis threshold; magnitudes at or above it seed edges.
    pub high_threshold: f64,
    /// Derivative aperture. 3 is served by the built-in Sobel stencil;
    /// 5 and 7 need an external `DerivFilter`.
    pub aperture_size: u32,
    /// Euclidean magnitude `sqrt(dx² + dy²)` instead of `|dx| + |dy|`.
    pub l2_gradient: bool,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 100.0,
            aperture_size: 3,
            l2_gradient: false,
        }
    }
}

impl CannyParams {
    /// Thresholds in effective order (`low <= high`), as the pipeline
    /// applies them. Reversed inputs are swapped, not rejected.
    pub fn effective_thresholds(&self) -> (f64, f64) {
        let mut low = self.low_threshold;
        let mut high = self.high_threshold;
        if high < low {
            std::mem::swap(&mut high, &mut low);
        }
        (low, high)
    }

    /// Persistable record carrying the configuration tag.
    pub fn to_record(&self) -> CannyConfigRecord {
        CannyConfigRecord {
            name: CONFIG_TAG.to_string(),
            low_thresh: self.low_threshold,
            high_thresh: self.high_threshold,
            aperture_size: self.aperture_size,
            l2gradient: self.l2_gradient,
        }
    }

    /// Restore parameters from a record, validating the tag first.
    pub fn from_record(record: &CannyConfigRecord) -> Result<Self, CannyError> {
        if record.name != CONFIG_TAG {
            return Err(CannyError::ConfigTagMismatch {
                found: record.name.clone(),
            });
        }
        Ok(Self {
            low_threshold: record.low_thresh,
            high_threshold: record.high_thresh,
            aperture_size: record.aperture_size,
            l2_gradient: record.l2gradient,
        })
    }
}

/// Persisted form of [`CannyParams`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CannyConfigRecord {
    pub name: String,
    pub low_thresh: f64,
    pub high_thresh: f64,
    pub aperture_size: u32,
    #[serde(rename = "L2gradient")]
    pub l2gradient: bool,
}

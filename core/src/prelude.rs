use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Candidate;

/// Filter variant selecting which policy chain drives a hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Galactic-mask filter; an empty result is reported as-is, no fallback.
    Strict,
    /// Unmasked filter with a relaxed correlation-only fallback.
    Elite,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Strict => "strict",
            Variant::Elite => "elite",
        })
    }
}

/// Threshold configuration consumed by the filter policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterThresholds {
    /// Exclusion half-band around the galactic plane, degrees.
    pub galactic_cut: Option<f64>,
    /// Minimum fractal score to retain.
    pub hurst_min: f64,
    /// Minimum correlation to retain.
    pub corr_min: f64,
    /// Relaxed correlation-only floor, tried when the primary pass is empty.
    pub corr_fallback: Option<f64>,
}

impl FilterThresholds {
    /// Rejects non-finite thresholds and variant/threshold mismatches before
    /// any record is touched.
    pub fn validate_for(&self, variant: Variant) -> HuntResult<()> {
        let named = [
            ("hurst_min", Some(self.hurst_min)),
            ("corr_min", Some(self.corr_min)),
            ("galactic_cut", self.galactic_cut),
            ("corr_fallback", self.corr_fallback),
        ];
        for (name, value) in named {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(HuntError::Config(format!(
                        "threshold {} is not finite",
                        name
                    )));
                }
            }
        }
        if variant == Variant::Strict && self.galactic_cut.is_none() {
            return Err(HuntError::Config(
                "strict variant requires a galactic cut".into(),
            ));
        }
        Ok(())
    }
}

/// Result of one filtering pass: ranked survivors plus the run summary.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub survivors: Vec<Candidate>,
    pub summary: FilterSummary,
}

/// Counts reported alongside the survivor list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterSummary {
    pub total: usize,
    pub excluded_by_mask: usize,
    pub excluded_by_hurst: usize,
    pub excluded_by_corr: usize,
    pub candidates: usize,
    pub applied_policy: String,
    pub fallback_applied: bool,
}

/// Common error type for the hunt pipeline.
#[derive(thiserror::Error, Debug)]
pub enum HuntError {
    #[error("load error: {0}")]
    Load(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("write error: {0}")]
    Write(String),
}

pub type HuntResult<T> = Result<T, HuntError>;

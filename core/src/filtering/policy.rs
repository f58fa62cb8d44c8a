use crate::catalog::RingRecord;
use crate::prelude::{FilterThresholds, Variant};

/// One named set of retention conditions.
///
/// A record survives only if every configured condition holds; `None`
/// conditions do not participate. Conditions are checked mask, then hurst,
/// then correlation, and a record is tallied against the first one it fails.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    label: &'static str,
    galactic_cut: Option<f64>,
    hurst_min: Option<f64>,
    corr_min: f64,
}

/// Per-condition exclusion tally for one policy evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExclusionTally {
    pub by_mask: usize,
    pub by_hurst: usize,
    pub by_corr: usize,
}

impl FilterPolicy {
    /// Policy with the galactic band masked out.
    pub fn masked(
        label: &'static str,
        galactic_cut: f64,
        hurst_min: f64,
        corr_min: f64,
    ) -> Self {
        Self {
            label,
            galactic_cut: Some(galactic_cut),
            hurst_min: Some(hurst_min),
            corr_min,
        }
    }

    /// Full-sky policy on both score thresholds.
    pub fn unmasked(label: &'static str, hurst_min: f64, corr_min: f64) -> Self {
        Self {
            label,
            galactic_cut: None,
            hurst_min: Some(hurst_min),
            corr_min,
        }
    }

    /// Degraded policy keeping only the correlation floor.
    pub fn correlation_only(label: &'static str, corr_min: f64) -> Self {
        Self {
            label,
            galactic_cut: None,
            hurst_min: None,
            corr_min,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Applies the policy to the full record set, keeping input order.
    pub fn evaluate(&self, records: &[RingRecord]) -> (Vec<usize>, ExclusionTally) {
        let mut kept = Vec::new();
        let mut tally = ExclusionTally::default();

        for (index, record) in records.iter().enumerate() {
            if let Some(cut) = self.galactic_cut {
                if record.coord().in_plane(cut) {
                    tally.by_mask += 1;
                    continue;
                }
            }
            if let Some(floor) = self.hurst_min {
                if record.hurst_i <= floor {
                    tally.by_hurst += 1;
                    continue;
                }
            }
            if record.corr_ip <= self.corr_min {
                tally.by_corr += 1;
                continue;
            }
            kept.push(index);
        }

        (kept, tally)
    }
}

/// Outcome of a chain evaluation: indices kept, the exclusion tally of the
/// policy that produced them, and whether a fallback was needed.
#[derive(Debug, Clone)]
pub struct ChainOutcome {
    pub kept: Vec<usize>,
    pub tally: ExclusionTally,
    pub policy_label: &'static str,
    pub fallback_applied: bool,
}

impl ChainOutcome {
    fn empty() -> Self {
        Self {
            kept: Vec::new(),
            tally: ExclusionTally::default(),
            policy_label: "unfiltered",
            fallback_applied: false,
        }
    }
}

/// Ordered policy list tried until one yields a non-empty candidate set.
///
/// When every policy comes up empty, the last policy's (empty) outcome is
/// reported so the summary reflects the final relaxation attempted.
#[derive(Debug, Clone)]
pub struct PolicyChain {
    policies: Vec<FilterPolicy>,
}

impl PolicyChain {
    pub fn new(policies: Vec<FilterPolicy>) -> Self {
        Self { policies }
    }

    /// Builds the chain for `variant` from validated thresholds.
    pub fn for_variant(variant: Variant, thresholds: &FilterThresholds) -> Self {
        let mut policies = Vec::new();
        match variant {
            Variant::Strict => {
                let cut = thresholds.galactic_cut.unwrap_or(0.0);
                policies.push(FilterPolicy::masked(
                    "galactic-mask",
                    cut,
                    thresholds.hurst_min,
                    thresholds.corr_min,
                ));
            }
            Variant::Elite => {
                policies.push(FilterPolicy::unmasked(
                    "dual-threshold",
                    thresholds.hurst_min,
                    thresholds.corr_min,
                ));
                if let Some(fallback) = thresholds.corr_fallback {
                    policies.push(FilterPolicy::correlation_only(
                        "relaxed-correlation",
                        fallback,
                    ));
                }
            }
        }
        Self::new(policies)
    }

    pub fn evaluate(&self, records: &[RingRecord]) -> ChainOutcome {
        let mut last = ChainOutcome::empty();
        for (position, policy) in self.policies.iter().enumerate() {
            let (kept, tally) = policy.evaluate(records);
            last = ChainOutcome {
                kept,
                tally,
                policy_label: policy.label(),
                fallback_applied: position > 0,
            };
            if !last.kept.is_empty() {
                break;
            }
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(id: &str, lat_deg: f64, hurst: f64, corr: f64) -> RingRecord {
        RingRecord {
            id: id.to_string(),
            theta: (90.0 - lat_deg).to_radians(),
            phi: std::f64::consts::PI,
            hurst_i: hurst,
            corr_ip: corr,
        }
    }

    #[test]
    fn masked_policy_tallies_first_failed_condition() {
        let records = vec![
            ring("in-plane", 5.0, 0.9, 0.9),
            ring("low-hurst", 45.0, 0.5, 0.9),
            ring("low-corr", 45.0, 0.9, 0.05),
            ring("keeper", 45.0, 0.9, 0.4),
        ];
        let policy = FilterPolicy::masked("galactic-mask", 20.0, 0.8, 0.2);
        let (kept, tally) = policy.evaluate(&records);

        assert_eq!(kept, vec![3]);
        assert_eq!(
            tally,
            ExclusionTally {
                by_mask: 1,
                by_hurst: 1,
                by_corr: 1,
            }
        );
    }

    #[test]
    fn thresholds_are_strict_inequalities() {
        let records = vec![ring("edge", 45.0, 0.8, 0.2)];
        let policy = FilterPolicy::unmasked("dual-threshold", 0.8, 0.2);
        let (kept, tally) = policy.evaluate(&records);
        assert!(kept.is_empty());
        assert_eq!(tally.by_hurst, 1);
    }

    #[test]
    fn chain_stops_at_first_non_empty_policy() {
        let records = vec![ring("strong", 45.0, 0.9, 0.5)];
        let chain = PolicyChain::new(vec![
            FilterPolicy::unmasked("dual-threshold", 0.8, 0.2),
            FilterPolicy::correlation_only("relaxed-correlation", 0.1),
        ]);
        let outcome = chain.evaluate(&records);
        assert_eq!(outcome.policy_label, "dual-threshold");
        assert!(!outcome.fallback_applied);
    }

    #[test]
    fn chain_falls_back_when_primary_is_empty() {
        let records = vec![
            ring("faint-a", 45.0, 0.3, 0.18),
            ring("faint-b", -50.0, 0.2, 0.16),
        ];
        let chain = PolicyChain::new(vec![
            FilterPolicy::unmasked("dual-threshold", 0.8, 0.25),
            FilterPolicy::correlation_only("relaxed-correlation", 0.15),
        ]);
        let outcome = chain.evaluate(&records);
        assert_eq!(outcome.kept.len(), 2);
        assert_eq!(outcome.policy_label, "relaxed-correlation");
        assert!(outcome.fallback_applied);
    }

    #[test]
    fn exhausted_chain_reports_last_policy() {
        let records = vec![ring("noise", 45.0, 0.1, 0.01)];
        let chain = PolicyChain::new(vec![
            FilterPolicy::unmasked("dual-threshold", 0.8, 0.25),
            FilterPolicy::correlation_only("relaxed-correlation", 0.15),
        ]);
        let outcome = chain.evaluate(&records);
        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.policy_label, "relaxed-correlation");
        assert!(outcome.fallback_applied);
        assert_eq!(outcome.tally.by_corr, 1);
    }
}

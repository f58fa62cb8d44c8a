use std::cmp::Ordering;

use crate::catalog::{Candidate, RingRecord};
use crate::filtering::policy::PolicyChain;
use crate::math::StatsHelper;
use crate::prelude::{
    FilterOutcome, FilterSummary, FilterThresholds, HuntResult, Variant,
};
use crate::telemetry::LogManager;

/// Threshold filter that isolates anomalous rings and ranks them by
/// correlation strength.
pub struct AnomalyFilter {
    chain: PolicyChain,
    logger: LogManager,
}

impl AnomalyFilter {
    /// Builds the filter for `variant`; fails if the thresholds are not
    /// finite or are incomplete for the variant.
    pub fn new(variant: Variant, thresholds: &FilterThresholds) -> HuntResult<Self> {
        thresholds.validate_for(variant)?;
        Ok(Self {
            chain: PolicyChain::for_variant(variant, thresholds),
            logger: LogManager::new(),
        })
    }

    /// Runs the policy chain over `records` and returns the ranked survivors
    /// plus the run summary. The input set is never mutated; an empty
    /// survivor set is a valid outcome.
    pub fn execute(&self, records: &[RingRecord]) -> FilterOutcome {
        let outcome = self.chain.evaluate(records);

        let mut survivors: Vec<Candidate> = outcome
            .kept
            .iter()
            .map(|&index| records[index].to_candidate())
            .collect();
        // Stable sort: equal correlations keep their input order.
        survivors.sort_by(|a, b| {
            b.corr_ip
                .partial_cmp(&a.corr_ip)
                .unwrap_or(Ordering::Equal)
        });

        let corrs: Vec<f64> = survivors.iter().map(|c| c.corr_ip).collect();
        self.logger.record(&format!(
            "{}: kept {} of {} rings (corr mean {:.3}, peak {:.3})",
            outcome.policy_label,
            survivors.len(),
            records.len(),
            StatsHelper::mean(&corrs),
            StatsHelper::max_abs(&corrs),
        ));

        let summary = FilterSummary {
            total: records.len(),
            excluded_by_mask: outcome.tally.by_mask,
            excluded_by_hurst: outcome.tally.by_hurst,
            excluded_by_corr: outcome.tally.by_corr,
            candidates: survivors.len(),
            applied_policy: outcome.policy_label.to_string(),
            fallback_applied: outcome.fallback_applied,
        };

        FilterOutcome { survivors, summary }
    }
}

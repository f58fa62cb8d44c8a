use anyhow::Context;
use huntcore::catalog::RingRecord;
use huntcore::filtering::AnomalyFilter;
use huntcore::prelude::FilterOutcome;

use crate::workflow::config::HuntConfig;

/// Drives one synchronous load → filter → sort pass.
#[derive(Clone)]
pub struct Runner {
    config: HuntConfig,
}

impl Runner {
    pub fn new(config: HuntConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, records: &[RingRecord]) -> anyhow::Result<FilterOutcome> {
        let filter = AnomalyFilter::new(self.config.variant, &self.config.to_thresholds())
            .context("building anomaly filter")?;
        Ok(filter.execute(records))
    }
}

use anyhow::Context;
use huntcore::catalog::Candidate;
use huntcore::prelude::{FilterSummary, Variant};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

const TOP_CANDIDATES: usize = 5;

/// Machine-readable record of one hunt, written alongside the chart.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub variant: Variant,
    #[serde(flatten)]
    pub summary: FilterSummary,
    pub top_candidates: Vec<Candidate>,
}

impl RunSummary {
    pub fn new(variant: Variant, summary: &FilterSummary, survivors: &[Candidate]) -> Self {
        Self {
            variant,
            summary: summary.clone(),
            top_candidates: survivors.iter().take(TOP_CANDIDATES).cloned().collect(),
        }
    }
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating summary {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary)
        .with_context(|| format!("writing summary {}", path.display()))?;
    Ok(())
}

use huntcore::catalog::Candidate;
use huntcore::prelude::{FilterSummary, Variant};

const TOP_LINES: usize = 5;

/// Prints the terminal report: totals, per-condition exclusions, and the
/// strongest candidates.
pub fn print_report(variant: Variant, summary: &FilterSummary, survivors: &[Candidate]) {
    println!("--- HUNT REPORT ({}) ---", variant);
    println!("Total rings scanned: {}", summary.total);
    if variant == Variant::Strict {
        println!("Excluded by galactic mask: {}", summary.excluded_by_mask);
    }
    if !summary.fallback_applied {
        println!("Excluded by hurst threshold: {}", summary.excluded_by_hurst);
    }
    println!(
        "Excluded by correlation threshold: {}",
        summary.excluded_by_corr
    );
    println!(
        "Candidates: {} (policy: {})",
        summary.candidates, summary.applied_policy
    );
    if summary.fallback_applied {
        println!("Relaxed correlation threshold was applied.");
    }

    if survivors.is_empty() {
        match variant {
            Variant::Strict => {
                println!("No candidates above threshold; signal was purely in-plane.")
            }
            Variant::Elite => {
                println!("No candidates survived, even after threshold relaxation.")
            }
        }
        return;
    }

    println!("Top candidates by corr_IP:");
    for candidate in survivors.iter().take(TOP_LINES) {
        println!(
            "  {:<12} lat {:>7.2}  lon {:>7.2}  hurst_I {:>6.3}  corr_IP {:>6.3}",
            candidate.id, candidate.lat, candidate.lon, candidate.hurst_i, candidate.corr_ip
        );
    }
}

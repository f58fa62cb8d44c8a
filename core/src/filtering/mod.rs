pub mod filter;
pub mod policy;

pub use filter::AnomalyFilter;
pub use policy::{ChainOutcome, ExclusionTally, FilterPolicy, PolicyChain};

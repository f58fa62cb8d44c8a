pub mod record;
pub mod table;

pub use record::{Candidate, RingRecord};
pub use table::{load_rings, write_candidates};

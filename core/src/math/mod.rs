pub mod coords;
pub mod projection;
pub mod stats;

pub use coords::SkyCoord;
pub use projection::{mollweide, MapPoint};
pub use stats::StatsHelper;

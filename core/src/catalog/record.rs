use serde::{Deserialize, Serialize};

use crate::math::coords::SkyCoord;

/// One scanned region ("ring") from the survey metrics table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingRecord {
    pub id: String,
    /// Colatitude, radians, 0 at the north pole.
    pub theta: f64,
    /// Azimuth, radians, 0..2pi.
    pub phi: f64,
    #[serde(rename = "hurst_I")]
    pub hurst_i: f64,
    #[serde(rename = "corr_IP")]
    pub corr_ip: f64,
}

impl RingRecord {
    /// Derived sky position; deterministic in `theta`/`phi`.
    pub fn coord(&self) -> SkyCoord {
        SkyCoord::from_angles(self.theta, self.phi)
    }

    /// Survivor view of this ring with the derived coordinates attached.
    pub fn to_candidate(&self) -> Candidate {
        let coord = self.coord();
        Candidate {
            id: self.id.clone(),
            lat: coord.lat,
            lon: coord.lon,
            hurst_i: self.hurst_i,
            corr_ip: self.corr_ip,
        }
    }
}

/// Ring that passed every active filter condition, ranked by correlation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "hurst_I")]
    pub hurst_i: f64,
    #[serde(rename = "corr_IP")]
    pub corr_ip: f64,
}

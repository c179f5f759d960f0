use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinates attached to a punch record when available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a `"lat,long"` pair (e.g. `"-23.5505,-46.6333"`).
    pub fn parse(s: &str) -> Option<Self> {
        let (lat, long) = s.split_once(',')?;
        let latitude = lat.trim().parse::<f64>().ok()?;
        let longitude = long.trim().parse::<f64>().ok()?;
        Some(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

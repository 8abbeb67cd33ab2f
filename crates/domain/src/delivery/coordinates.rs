use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for latitude/longitude.
pub const COORDINATE_SCALE: i32 = 7;

/// GPS position where a package was handed over.
///
/// Both components are normalized to [`COORDINATE_SCALE`] decimal places
/// on construction, so a stored value always compares equal to the value
/// that was submitted after rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::Validation(format!(
                "Latitude out of range: {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::Validation(format!(
                "Longitude out of range: {longitude}"
            )));
        }

        Ok(Self {
            latitude: round_to_scale(latitude),
            longitude: round_to_scale(longitude),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn round_to_scale(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_SCALE);
    (value * factor).round() / factor
}

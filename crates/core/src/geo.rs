//! Geographic value types.
//!
//! The map widget has two modes. Browsing sends an explicit [`BoundingBox`]
//! for the visible area; picking a spot produces explicit [`Coordinates`].
//! Nothing here is inferred from which optional fields happen to be set.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A validated point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build from a picker selection that may be missing.
    pub fn from_selection(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, CoreError> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Self::new(lat, lng),
            _ => Err(CoreError::Validation(
                "Please select a location on the map".into(),
            )),
        }
    }
}

/// The visible map area for a browse query.
///
/// `min_longitude > max_longitude` means the box crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self, CoreError> {
        validate_latitude(min_latitude)?;
        validate_latitude(max_latitude)?;
        validate_longitude(min_longitude)?;
        validate_longitude(max_longitude)?;
        if min_latitude > max_latitude {
            return Err(CoreError::Validation(
                "min_lat must not exceed max_lat".into(),
            ));
        }
        Ok(Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        })
    }

    /// The whole world.
    pub fn world() -> Self {
        Self {
            min_latitude: MIN_LATITUDE,
            max_latitude: MAX_LATITUDE,
            min_longitude: MIN_LONGITUDE,
            max_longitude: MAX_LONGITUDE,
        }
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.min_longitude > self.max_longitude
    }

    pub fn contains(&self, point: &Coordinates) -> bool {
        let lat_ok = point.latitude >= self.min_latitude && point.latitude <= self.max_latitude;
        let lng_ok = if self.crosses_antimeridian() {
            point.longitude >= self.min_longitude || point.longitude <= self.max_longitude
        } else {
            point.longitude >= self.min_longitude && point.longitude <= self.max_longitude
        };
        lat_ok && lng_ok
    }
}

fn validate_latitude(value: f64) -> Result<(), CoreError> {
    if value.is_finite() && (MIN_LATITUDE..=MAX_LATITUDE).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Latitude {value} is out of range [-90, 90]"
        )))
    }
}

fn validate_longitude(value: f64) -> Result<(), CoreError> {
    if value.is_finite() && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Longitude {value} is out of range [-180, 180]"
        )))
    }
}

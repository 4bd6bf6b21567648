//! Observer and target coordinates
use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ObserverSite] describes the geodetic location of the telescope.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverSite {
    /// Geodetic latitude (in degrees, positive north)
    pub latitude_deg: f64,
    /// Geodetic longitude (in degrees, positive east)
    pub longitude_deg: f64,
    /// Elevation above sea level (in meters)
    pub elevation_m: f64,
    /// Local time zone identifier (IANA name). This is a label only,
    /// all instants are expressed in UTC.
    pub timezone: String,
}

impl ObserverSite {
    /// Builds new [ObserverSite] from geodetic coordinates
    /// - latitude [deg] within [-90, 90]
    /// - longitude [deg] within [-180, 360[
    /// - elevation [m]
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Result<Self, Error> {
        let valid = latitude_deg.is_finite()
            && longitude_deg.is_finite()
            && elevation_m.is_finite()
            && (-90.0..=90.0).contains(&latitude_deg)
            && (-180.0..360.0).contains(&longitude_deg);

        if !valid {
            return Err(Error::InvalidSite);
        }

        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            timezone: "UTC".to_string(),
        })
    }

    /// Copies and returns [ObserverSite] with local time zone label.
    pub fn with_timezone(&self, timezone: &str) -> Self {
        let mut s = self.clone();
        s.timezone = timezone.to_string();
        s
    }
}

/// Equatorial [TargetCoordinates] of the observed field.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetCoordinates {
    /// Right ascension (in degrees)
    pub ra_deg: f64,
    /// Declination (in degrees)
    pub dec_deg: f64,
}

impl TargetCoordinates {
    /// Builds new [TargetCoordinates]. Declination must lie within [-90, 90].
    pub fn new(ra_deg: f64, dec_deg: f64) -> Result<Self, Error> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(Error::InvalidTarget);
        }
        Ok(Self { ra_deg, dec_deg })
    }
}

/// Local [HorizontalCoordinates] of a target, as returned by the [crate::prelude::Ephemeris].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinates {
    /// Elevation above the local horizon (in degrees)
    pub altitude_deg: f64,
    /// Bearing around the local horizon (in degrees)
    pub azimuth_deg: f64,
}

impl HorizontalCoordinates {
    /// Returns the angle matching this [AngleKind], in degrees.
    pub fn angle(&self, kind: AngleKind) -> f64 {
        match kind {
            AngleKind::Altitude => self.altitude_deg,
            AngleKind::Azimuth => self.azimuth_deg,
        }
    }
}

/// [AngleKind] selects which mount angle is the source of truth.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleKind {
    /// Resolve from the reported altitude (elevation) angle.
    #[default]
    Altitude,
    /// Resolve from the reported azimuth angle.
    /// :warning: near transit the azimuth trajectory is usually not monotonic
    /// and the grid-fit inversion is unstable.
    Azimuth,
}

impl std::fmt::Display for AngleKind {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Altitude => write!(fmt, "ALT"),
            Self::Azimuth => write!(fmt, "AZ"),
        }
    }
}

impl std::str::FromStr for AngleKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alt" | "altitude" | "el" | "elevation" => Ok(Self::Altitude),
            "az" | "azimuth" => Ok(Self::Azimuth),
            _ => Err(Error::UnknownAngleKind),
        }
    }
}

//! Exposure metadata, as extracted from image headers
use std::collections::{BTreeMap, HashMap};

use crate::{
    constants::T80S_TIMEZONE,
    error::Error,
    prelude::{parse_reference_instant, AngleKind, Epoch, ObserverSite, TargetCoordinates},
};

/// [ExposureMetadata] gathers all inputs of one resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureMetadata {
    /// [ObserverSite]
    pub site: ObserverSite,
    /// Observed field [TargetCoordinates]
    pub target: TargetCoordinates,
    /// Reference (nominal) instant to correct, UTC
    pub reference: Epoch,
    /// Altitude reported by the mount (in degrees)
    pub altitude_deg: Option<f64>,
    /// Azimuth reported by the mount (in degrees)
    pub azimuth_deg: Option<f64>,
    /// Target name
    pub object: Option<String>,
    /// Filter / band
    pub filter: Option<String>,
}

impl ExposureMetadata {
    /// Builds new [ExposureMetadata], without reported angles.
    pub fn new(site: ObserverSite, target: TargetCoordinates, reference: Epoch) -> Self {
        Self {
            site,
            target,
            reference,
            altitude_deg: None,
            azimuth_deg: None,
            object: None,
            filter: None,
        }
    }

    /// Copies and returns [ExposureMetadata] with reported altitude (in degrees).
    pub fn with_altitude(&self, altitude_deg: f64) -> Self {
        let mut s = self.clone();
        s.altitude_deg = Some(altitude_deg);
        s
    }

    /// Copies and returns [ExposureMetadata] with reported azimuth (in degrees).
    pub fn with_azimuth(&self, azimuth_deg: f64) -> Self {
        let mut s = self.clone();
        s.azimuth_deg = Some(azimuth_deg);
        s
    }

    /// Copies and returns [ExposureMetadata] with target name.
    pub fn with_object(&self, object: &str) -> Self {
        let mut s = self.clone();
        s.object = Some(object.to_string());
        s
    }

    /// Copies and returns [ExposureMetadata] with filter name.
    pub fn with_filter(&self, filter: &str) -> Self {
        let mut s = self.clone();
        s.filter = Some(filter.to_string());
        s
    }

    /// Returns the reported angle of this [AngleKind], if any.
    pub fn angle(&self, kind: AngleKind) -> Option<f64> {
        match kind {
            AngleKind::Altitude => self.altitude_deg,
            AngleKind::Azimuth => self.azimuth_deg,
        }
    }

    /// Builds [ExposureMetadata] from [HeaderCards], using the
    /// keywords defined in [CardNames].
    pub fn from_cards<H: HeaderCards + ?Sized>(cards: &H, names: &CardNames) -> Result<Self, Error> {
        let latitude_deg = numeric_card(cards, &names.latitude)?;
        let longitude_deg = numeric_card(cards, &names.longitude)?;
        let elevation_m = numeric_card(cards, &names.elevation)?;

        let site = ObserverSite::new(latitude_deg, longitude_deg, elevation_m)?
            .with_timezone(&names.timezone);

        let ra_deg = numeric_card(cards, &names.ra)?;
        let dec_deg = numeric_card(cards, &names.dec)?;
        let target = TargetCoordinates::new(ra_deg, dec_deg)?;

        let date = text_card(cards, &names.date).ok_or(Error::MissingCard(names.date.clone()))?;
        let reference = parse_reference_instant(&date)?;

        Ok(Self {
            site,
            target,
            reference,
            altitude_deg: optional_numeric_card(cards, &names.altitude)?,
            azimuth_deg: optional_numeric_card(cards, &names.azimuth)?,
            object: text_card(cards, &names.object),
            filter: text_card(cards, &names.filter),
        })
    }
}

/// Any image header should implement [HeaderCards] to hand its
/// keyword values over to [ExposureMetadata::from_cards].
pub trait HeaderCards {
    /// Raw value of this keyword, if present.
    fn card(&self, key: &str) -> Option<&str>;
}

impl HeaderCards for HashMap<String, String> {
    fn card(&self, key: &str) -> Option<&str> {
        self.get(key).map(|s| s.as_str())
    }
}

impl HeaderCards for BTreeMap<String, String> {
    fn card(&self, key: &str) -> Option<&str> {
        self.get(key).map(|s| s.as_str())
    }
}

/// [CardNames] maps each [ExposureMetadata] field to a header keyword.
/// The default mapping is the one of the T80-South telescope.
#[derive(Debug, Clone, PartialEq)]
pub struct CardNames {
    pub latitude: String,
    pub longitude: String,
    pub elevation: String,
    /// Reference instant keyword
    pub date: String,
    pub ra: String,
    pub dec: String,
    /// Altitude keywords, by order of preference
    pub altitude: Vec<String>,
    /// Azimuth keywords, by order of preference
    pub azimuth: Vec<String>,
    pub object: String,
    pub filter: String,
    /// Site time zone label
    pub timezone: String,
}

impl Default for CardNames {
    fn default() -> Self {
        Self {
            latitude: "HIERARCH T80S TEL GEOLAT".to_string(),
            longitude: "HIERARCH T80S TEL GEOLON".to_string(),
            elevation: "HIERARCH T80S TEL GEOELEV".to_string(),
            date: "DATE-OBS".to_string(),
            ra: "CRVAL1".to_string(),
            dec: "CRVAL2".to_string(),
            altitude: vec!["HIERARCH T80S TEL EL START".to_string(), "ALT".to_string()],
            azimuth: vec!["HIERARCH T80S TEL AZ START".to_string(), "AZ".to_string()],
            object: "OBJECT".to_string(),
            filter: "FILTER".to_string(),
            timezone: T80S_TIMEZONE.to_string(),
        }
    }
}

impl CardNames {
    /// Copies and returns [CardNames] reading the reference instant from another keyword.
    pub fn with_date_card(&self, card: &str) -> Self {
        let mut s = self.clone();
        s.date = card.to_string();
        s
    }
}

/// Card value, stripped from quotes and blanks. Empty values are absent.
fn text_card<H: HeaderCards + ?Sized>(cards: &H, key: &str) -> Option<String> {
    let value = cards.card(key)?.trim().trim_matches('\'').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses the leading number of a card, tolerating a unit
/// (`-30.1678638889 degrees`).
fn parse_numeric(key: &str, value: &str) -> Result<f64, Error> {
    value
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|x| x.is_finite())
        .ok_or(Error::InvalidCard(key.to_string()))
}

fn numeric_card<H: HeaderCards + ?Sized>(cards: &H, key: &str) -> Result<f64, Error> {
    let value = text_card(cards, key).ok_or(Error::MissingCard(key.to_string()))?;
    parse_numeric(key, &value)
}

/// First present card of the list, if any.
fn optional_numeric_card<H: HeaderCards + ?Sized>(
    cards: &H,
    keys: &[String],
) -> Result<Option<f64>, Error> {
    for key in keys {
        if let Some(value) = text_card(cards, key) {
            return parse_numeric(key, &value).map(Some);
        }
    }
    Ok(None)
}

#[cfg(test)]
mod test {
    use super::{CardNames, ExposureMetadata};
    use crate::prelude::{AngleKind, Epoch, Error};
    use std::collections::HashMap;

    fn t80s_cards() -> HashMap<String, String> {
        [
            ("HIERARCH T80S TEL GEOLAT", "-30.1678638889 degrees"),
            ("HIERARCH T80S TEL GEOLON", "-70.8056888889 degrees"),
            ("HIERARCH T80S TEL GEOELEV", "2187"),
            ("DATE-OBS", "2024-03-01T02:30:00.000"),
            ("CRVAL1", "150.1191"),
            ("CRVAL2", "2.2058"),
            ("HIERARCH T80S TEL EL START", "45.0"),
            ("OBJECT", "'COSMOS'"),
            ("FILTER", "R"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn t80s_header() {
        let cards = t80s_cards();
        let meta = ExposureMetadata::from_cards(&cards, &CardNames::default()).unwrap();

        assert_eq!(meta.site.latitude_deg, -30.1678638889);
        assert_eq!(meta.site.longitude_deg, -70.8056888889);
        assert_eq!(meta.site.elevation_m, 2187.0);
        assert_eq!(meta.site.timezone, "America/Santiago");
        assert_eq!(meta.target.ra_deg, 150.1191);
        assert_eq!(meta.target.dec_deg, 2.2058);
        assert_eq!(
            meta.reference,
            Epoch::from_gregorian_utc_hms(2024, 3, 1, 2, 30, 0)
        );
        assert_eq!(meta.angle(AngleKind::Altitude), Some(45.0));
        assert_eq!(meta.angle(AngleKind::Azimuth), None);
        assert_eq!(meta.object.as_deref(), Some("COSMOS"));
        assert_eq!(meta.filter.as_deref(), Some("R"));
    }

    #[test]
    fn fallback_angle_cards() {
        let mut cards = t80s_cards();
        cards.remove("HIERARCH T80S TEL EL START");
        cards.insert("ALT".to_string(), "41.5".to_string());
        cards.insert("AZ".to_string(), "123.25".to_string());

        let meta = ExposureMetadata::from_cards(&cards, &CardNames::default()).unwrap();
        assert_eq!(meta.altitude_deg, Some(41.5));
        assert_eq!(meta.azimuth_deg, Some(123.25));
    }

    #[test]
    fn custom_date_card() {
        let mut cards = t80s_cards();
        cards.insert("DATE-END".to_string(), "2024-03-01T02:31:00".to_string());

        let names = CardNames::default().with_date_card("DATE-END");
        let meta = ExposureMetadata::from_cards(&cards, &names).unwrap();
        assert_eq!(
            meta.reference,
            Epoch::from_gregorian_utc_hms(2024, 3, 1, 2, 31, 0)
        );
    }

    #[test]
    fn missing_and_invalid_cards() {
        let mut cards = t80s_cards();
        cards.remove("CRVAL2");
        assert_eq!(
            ExposureMetadata::from_cards(&cards, &CardNames::default()),
            Err(Error::MissingCard("CRVAL2".to_string()))
        );

        let mut cards = t80s_cards();
        cards.insert("HIERARCH T80S TEL EL START".to_string(), "high".to_string());
        assert_eq!(
            ExposureMetadata::from_cards(&cards, &CardNames::default()),
            Err(Error::InvalidCard("HIERARCH T80S TEL EL START".to_string()))
        );
    }
}

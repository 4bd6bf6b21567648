mod cfg;
mod timeline;

pub use ephemeris::*;

use log::LevelFilter;
use std::sync::Once;

use crate::prelude::{Epoch, ExposureMetadata, ObserverSite, TargetCoordinates};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// 2024-03-01T02:30:00 UTC
pub fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2024, 3, 1, 2, 30, 0)
}

/// T80-South, Cerro Tololo
pub fn t80s_site() -> ObserverSite {
    ObserverSite::new(-30.1678638889, -70.8056888889, 2187.0)
        .unwrap_or_else(|e| panic!("invalid test site: {}", e))
        .with_timezone("America/Santiago")
}

pub fn cosmos_target() -> TargetCoordinates {
    TargetCoordinates::new(150.1191, 2.2058)
        .unwrap_or_else(|e| panic!("invalid test target: {}", e))
}

/// [ExposureMetadata] without any reported angle
pub fn bare_metadata() -> ExposureMetadata {
    ExposureMetadata::new(t80s_site(), cosmos_target(), reference_epoch())
        .with_object("COSMOS")
        .with_filter("R")
}

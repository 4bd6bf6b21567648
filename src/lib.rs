#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod constants;
mod ephemeris;
mod error;
mod horizon;
mod locator;
mod metadata;
mod report;
mod resolver;
mod site;
mod time;
mod timeline;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{BracketOpts, Config, GridFitOpts, Strategy};
    pub use crate::ephemeris::Ephemeris;
    pub use crate::error::Error;
    pub use crate::horizon::{GridHorizonSearch, HorizonCrossing};
    pub use crate::locator::{BracketedRootLocator, Crossing, FittedPolynomial, GridFitLocator};
    pub use crate::metadata::{CardNames, ExposureMetadata, HeaderCards};
    pub use crate::report::{ResolutionResult, Resolved};
    pub use crate::resolver::{AngleFit, GridFitDiagnostics, Resolver};
    pub use crate::site::{AngleKind, HorizontalCoordinates, ObserverSite, TargetCoordinates};
    pub use crate::time::parse_reference_instant;
    pub use crate::timeline::Timeline;
    // re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}

// pub export
pub use error::Error;

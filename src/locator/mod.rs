use crate::prelude::{AngleKind, Epoch};

mod bracketed;
mod grid_fit;

pub use bracketed::BracketedRootLocator;
pub use grid_fit::{FittedPolynomial, GridFitLocator};

/// [Crossing] is the resolved instant at which the target trajectory
/// matched the observed angle.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing {
    /// Resolved instant (UTC)
    pub instant: Epoch,
    /// Angle the [Crossing] was resolved from
    pub kind: AngleKind,
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{AngleKind, Error};

mod strategy;
pub use strategy::{BracketOpts, GridFitOpts, Strategy};

/// [Config] selects exactly one angle and exactly one [Strategy]
/// for the entire resolution: they are never mixed.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Angle used as the source of truth.
    /// [AngleKind::Altitude] is the default value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle: AngleKind,
    /// Resolution [Strategy]
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: Strategy,
}

impl Config {
    /// Returns [Config] for grid fit resolution, with desired [AngleKind].
    /// You can then customize [Self] as you will.
    pub fn grid_fit_preset(angle: AngleKind, opts: GridFitOpts) -> Self {
        Self {
            angle,
            strategy: Strategy::GridFit(opts),
        }
    }

    /// Returns [Config] for bracketed root resolution (altitude only).
    pub fn bracketed_root_preset() -> Self {
        Self {
            angle: AngleKind::Altitude,
            strategy: Strategy::BracketedRoot(BracketOpts::default()),
        }
    }

    /// Verifies this [Config] is consistent.
    pub fn validate(&self) -> Result<(), Error> {
        match &self.strategy {
            Strategy::GridFit(opts) => opts.validate(),
            Strategy::BracketedRoot(opts) => {
                if self.angle != AngleKind::Altitude {
                    return Err(Error::InvalidStrategy);
                }
                opts.validate()
            },
        }
    }
}

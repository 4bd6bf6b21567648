use crate::{
    constants::{
        ANCHOR_SPACING_MIN, HORIZON_GRID_POINTS, NARROW_DEGREE, NARROW_HALF_WINDOW_S, WIDE_DEGREE,
        WIDE_HALF_WINDOW_MIN, WIDE_SAMPLES,
    },
    prelude::{Duration, Error},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn default_time_range() -> (Duration, Duration) {
    (
        Duration::from_seconds(-NARROW_HALF_WINDOW_S as f64),
        Duration::from_seconds(NARROW_HALF_WINDOW_S as f64),
    )
}

fn default_samples() -> usize {
    (2 * NARROW_HALF_WINDOW_S + 1) as usize
}

fn default_degree() -> usize {
    NARROW_DEGREE
}

fn default_anchor_spacing() -> Duration {
    Duration::from_seconds(ANCHOR_SPACING_MIN * 60.0)
}

fn default_grid_points() -> usize {
    HORIZON_GRID_POINTS
}

/// [GridFitOpts] define the local [crate::prelude::Timeline] and the polynomial
/// used by the grid fit strategy.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridFitOpts {
    /// Window (lower, upper bound) relative to the reference instant
    #[cfg_attr(feature = "serde", serde(default = "default_time_range"))]
    pub time_range: (Duration, Duration),
    /// Number of samples over the window (both ends included)
    #[cfg_attr(feature = "serde", serde(default = "default_samples"))]
    pub samples: usize,
    /// Polynomial degree
    #[cfg_attr(feature = "serde", serde(default = "default_degree"))]
    pub degree: usize,
}

impl Default for GridFitOpts {
    fn default() -> Self {
        Self::narrow()
    }
}

impl GridFitOpts {
    /// Narrow window: ±100 s sampled every second, 2nd order fit.
    pub fn narrow() -> Self {
        Self {
            time_range: default_time_range(),
            samples: default_samples(),
            degree: default_degree(),
        }
    }

    /// Wide window: ±30 min sampled with 1800 points, 3rd order fit.
    pub fn wide() -> Self {
        let half = Duration::from_seconds(WIDE_HALF_WINDOW_MIN * 60.0);
        Self {
            time_range: (-half, half),
            samples: WIDE_SAMPLES,
            degree: WIDE_DEGREE,
        }
    }

    /// Window of `[t_min_s, t_max_s]` seconds, sampled every second,
    /// keeping the current degree.
    pub fn per_second(&self, t_min_s: i64, t_max_s: i64) -> Self {
        let mut s = *self;
        s.time_range = (
            Duration::from_seconds(t_min_s as f64),
            Duration::from_seconds(t_max_s as f64),
        );
        s.samples = (t_max_s - t_min_s + 1).max(0) as usize;
        s
    }

    /// Copies and returns [GridFitOpts] with desired degree.
    pub fn with_degree(&self, degree: usize) -> Self {
        let mut s = *self;
        s.degree = degree;
        s
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        let (t_min, t_max) = self.time_range;
        if self.samples < 2 || t_min >= t_max {
            return Err(Error::InvalidWindow);
        }
        if self.degree == 0 || self.degree >= self.samples {
            return Err(Error::InvalidDegree);
        }
        Ok(())
    }
}

/// [BracketOpts] define the anchors and root finder resolution
/// used by the bracketed root strategy.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BracketOpts {
    /// Spacing between the reference instant and the outer anchors
    #[cfg_attr(feature = "serde", serde(default = "default_anchor_spacing"))]
    pub anchor_spacing: Duration,
    /// Grid points of the default root finder.
    /// Has no effect when you provide your own [crate::prelude::HorizonCrossing].
    #[cfg_attr(feature = "serde", serde(default = "default_grid_points"))]
    pub n_grid_points: usize,
}

impl Default for BracketOpts {
    fn default() -> Self {
        Self {
            anchor_spacing: default_anchor_spacing(),
            n_grid_points: default_grid_points(),
        }
    }
}

impl BracketOpts {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.n_grid_points < 2 || self.anchor_spacing <= Duration::ZERO {
            return Err(Error::InvalidWindow);
        }
        Ok(())
    }
}

/// Resolution [Strategy]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Samples the trajectory on a local grid and inverts a polynomial
    /// fit of the grid index versus the angle. Accuracy is limited to
    /// the grid spacing.
    GridFit(GridFitOpts),

    /// Resolves exact rise / set crossings of the observed altitude,
    /// around the reference instant. Only applies to the altitude.
    BracketedRoot(BracketOpts),
}

impl Default for Strategy {
    fn default() -> Self {
        Self::GridFit(GridFitOpts::default())
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::GridFit(opts) => write!(fmt, "grid-fit (degree={})", opts.degree),
            Self::BracketedRoot(_) => write!(fmt, "bracketed-root"),
        }
    }
}

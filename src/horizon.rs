//! Rise / set horizon crossings
use itertools::Itertools;
use log::trace;

use crate::{
    constants::{HORIZON_GRID_POINTS, HORIZON_SEARCH_SPAN_DAYS},
    error::Error,
    prelude::{Duration, Ephemeris, Epoch, ObserverSite, TargetCoordinates, Timeline},
};

/// Any rise / set root finder should implement the [HorizonCrossing] trait
/// to contribute to the bracketed root resolution.
///
/// The horizon is an altitude threshold (in degrees). Both methods return
/// the crossing that is closest in time to the anchor [Epoch], looking
/// both before and after it, or `None` when the target does not cross
/// that horizon around the anchor (circumpolar, or never reaching it).
pub trait HorizonCrossing {
    /// Nearest upward crossing of the horizon, around the anchor [Epoch].
    fn nearest_rise(
        &self,
        site: &ObserverSite,
        anchor: Epoch,
        target: &TargetCoordinates,
        horizon_deg: f64,
    ) -> Result<Option<Epoch>, Error>;

    /// Nearest downward crossing of the horizon, around the anchor [Epoch].
    fn nearest_set(
        &self,
        site: &ObserverSite,
        anchor: Epoch,
        target: &TargetCoordinates,
        horizon_deg: f64,
    ) -> Result<Option<Epoch>, Error>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Direction {
    Rising,
    Setting,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Which {
    Next,
    Previous,
}

/// [GridHorizonSearch] is the default [HorizonCrossing] implementation,
/// built on top of any [Ephemeris]. The altitude is sampled on a grid
/// spanning one day after (next) or before (previous) the anchor,
/// the crossing is bracketed by a sign change and linearly interpolated.
/// Its resolution is therefore driven by the number of grid points.
#[derive(Debug, Clone)]
pub struct GridHorizonSearch<E: Ephemeris> {
    ephemeris: E,
    n_grid_points: usize,
}

impl<E: Ephemeris> GridHorizonSearch<E> {
    /// Builds a new [GridHorizonSearch] with default resolution.
    pub fn new(ephemeris: E) -> Self {
        Self {
            ephemeris,
            n_grid_points: HORIZON_GRID_POINTS,
        }
    }

    /// Copies and returns [GridHorizonSearch] with desired number of grid points
    /// (per search direction).
    pub fn with_grid_points(mut self, n_grid_points: usize) -> Self {
        self.n_grid_points = n_grid_points;
        self
    }

    pub fn grid_points(&self) -> usize {
        self.n_grid_points
    }

    fn search(
        &self,
        site: &ObserverSite,
        anchor: Epoch,
        target: &TargetCoordinates,
        horizon_deg: f64,
        direction: Direction,
        which: Which,
    ) -> Result<Option<Epoch>, Error> {
        let span = Duration::from_days(HORIZON_SEARCH_SPAN_DAYS);

        let (t_min, t_max) = match which {
            Which::Next => (Duration::ZERO, span),
            Which::Previous => (-span, Duration::ZERO),
        };

        let timeline = Timeline::build(
            &self.ephemeris,
            site,
            target,
            anchor,
            t_min,
            t_max,
            self.n_grid_points,
        )?;

        let mut brackets = timeline
            .instants()
            .iter()
            .zip(timeline.samples().iter())
            .map(|(t, s)| (*t, s.altitude_deg - horizon_deg))
            .tuple_windows()
            .filter(|((_, d0), (_, d1))| match direction {
                Direction::Rising => *d0 < 0.0 && *d1 >= 0.0,
                Direction::Setting => *d0 > 0.0 && *d1 <= 0.0,
            });

        let bracket = match which {
            Which::Next => brackets.next(),
            Which::Previous => brackets.last(),
        };

        let crossing = bracket.map(|((t0, d0), (t1, d1))| {
            let frac = d0 / (d0 - d1);
            let dt_ns = ((t1 - t0).total_nanoseconds() as f64 * frac).round() as i128;
            t0 + Duration::from_total_nanoseconds(dt_ns)
        });

        trace!(
            "{:?} {:?} crossing of {}° from {}: {:?}",
            which,
            direction,
            horizon_deg,
            anchor,
            crossing
        );

        Ok(crossing)
    }

    fn nearest(
        &self,
        site: &ObserverSite,
        anchor: Epoch,
        target: &TargetCoordinates,
        horizon_deg: f64,
        direction: Direction,
    ) -> Result<Option<Epoch>, Error> {
        let next = self.search(site, anchor, target, horizon_deg, direction, Which::Next)?;
        let prev = self.search(site, anchor, target, horizon_deg, direction, Which::Previous)?;

        let nearest = match (prev, next) {
            (Some(prev), Some(next)) => {
                if (anchor - prev).abs() < (next - anchor).abs() {
                    Some(prev)
                } else {
                    Some(next)
                }
            },
            (Some(prev), None) => Some(prev),
            (None, next) => next,
        };

        Ok(nearest)
    }
}

impl<E: Ephemeris> HorizonCrossing for GridHorizonSearch<E> {
    fn nearest_rise(
        &self,
        site: &ObserverSite,
        anchor: Epoch,
        target: &TargetCoordinates,
        horizon_deg: f64,
    ) -> Result<Option<Epoch>, Error> {
        self.nearest(site, anchor, target, horizon_deg, Direction::Rising)
    }

    fn nearest_set(
        &self,
        site: &ObserverSite,
        anchor: Epoch,
        target: &TargetCoordinates,
        horizon_deg: f64,
    ) -> Result<Option<Epoch>, Error> {
        self.nearest(site, anchor, target, horizon_deg, Direction::Setting)
    }
}

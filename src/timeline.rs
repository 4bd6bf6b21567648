//! Evaluation grid
use log::debug;

use crate::{
    error::Error,
    prelude::{
        AngleKind, Duration, Ephemeris, Epoch, HorizontalCoordinates, ObserverSite,
        TargetCoordinates,
    },
};

/// [Timeline] is the target trajectory sampled on an evenly spaced grid.
/// The instants are strictly increasing and the samples are
/// index-aligned with the instants.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    instants: Vec<Epoch>,
    samples: Vec<HorizontalCoordinates>,
}

impl Timeline {
    /// Returns `n` evenly spaced [Epoch]s over `[center + t_min, center + t_max]`,
    /// both ends included.
    pub fn linspace(
        center: Epoch,
        t_min: Duration,
        t_max: Duration,
        n: usize,
    ) -> Result<Vec<Epoch>, Error> {
        if n < 2 || t_min >= t_max {
            return Err(Error::InvalidWindow);
        }

        let t_min_ns = t_min.total_nanoseconds();
        let span_ns = t_max.total_nanoseconds() - t_min_ns;
        let intervals = (n - 1) as i128;

        // strictly increasing at nanosecond resolution
        if span_ns < intervals {
            return Err(Error::InvalidWindow);
        }

        let instants = (0..n)
            .map(|i| {
                let offset_ns = t_min_ns + span_ns * i as i128 / intervals;
                center + Duration::from_total_nanoseconds(offset_ns)
            })
            .collect();

        Ok(instants)
    }

    /// Builds the [Timeline] of the [TargetCoordinates] as seen from [ObserverSite],
    /// with `n` samples over `[center + t_min, center + t_max]`.
    /// The [Ephemeris] is evaluated once, in a single batch.
    pub fn build<E: Ephemeris + ?Sized>(
        ephemeris: &E,
        site: &ObserverSite,
        target: &TargetCoordinates,
        center: Epoch,
        t_min: Duration,
        t_max: Duration,
        n: usize,
    ) -> Result<Self, Error> {
        let instants = Self::linspace(center, t_min, t_max, n)?;
        let samples = ephemeris.altaz_batch(site, &instants, target)?;

        if samples.len() != instants.len() {
            return Err(Error::EphemerisFailure(format!(
                "{} samples returned for {} instants",
                samples.len(),
                instants.len()
            )));
        }

        debug!(
            "timeline {} -> {} ({} samples)",
            instants[0],
            instants[n - 1],
            n
        );

        Ok(Self { instants, samples })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// A [Timeline] always has at least two samples.
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn instants(&self) -> &[Epoch] {
        &self.instants
    }

    pub fn samples(&self) -> &[HorizontalCoordinates] {
        &self.samples
    }

    /// Returns the [Epoch] at grid index, if it exists.
    pub fn instant(&self, index: usize) -> Option<Epoch> {
        self.instants.get(index).copied()
    }

    /// Returns the sampled angle series of this [AngleKind], in degrees.
    pub fn angles(&self, kind: AngleKind) -> Vec<f64> {
        self.samples.iter().map(|s| s.angle(kind)).collect()
    }

    /// Grid spacing
    pub fn spacing(&self) -> Duration {
        let n = self.instants.len();
        let span_ns = (self.instants[n - 1] - self.instants[0]).total_nanoseconds();
        Duration::from_total_nanoseconds(span_ns / (n - 1) as i128)
    }
}

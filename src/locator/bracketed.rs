//! Rise / set bracketing around the reference instant
use log::{debug, warn};

use crate::{
    error::Error,
    locator::Crossing,
    prelude::{AngleKind, Duration, Epoch, HorizonCrossing, ObserverSite, TargetCoordinates},
};

/// [BracketedRootLocator] resolves the altitude [Crossing] from rise / set
/// crossings of the observed altitude (used as horizon), computed at three
/// anchors: one before, at, and one after the reference instant.
///
/// A root finder anchored at a single instant may pick a crossing from the
/// wrong cycle when the reference is itself very close to a crossing.
/// Out of the (up to six) candidates, we retain the one closest to the reference.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BracketedRootLocator {
    anchor_spacing: Duration,
}

impl BracketedRootLocator {
    /// Builds new [BracketedRootLocator], anchors being separated by `anchor_spacing`.
    pub fn new(anchor_spacing: Duration) -> Self {
        Self {
            anchor_spacing: anchor_spacing.abs(),
        }
    }

    /// Returns the three anchors, in chronological order.
    pub fn anchors(&self, reference: Epoch) -> [Epoch; 3] {
        [
            reference - self.anchor_spacing,
            reference,
            reference + self.anchor_spacing,
        ]
    }

    /// Collects all candidates: rise then set for each anchor,
    /// in chronological anchor order. Missing crossings are skipped.
    pub fn candidates<H: HorizonCrossing + ?Sized>(
        &self,
        finder: &H,
        site: &ObserverSite,
        target: &TargetCoordinates,
        horizon_deg: f64,
        reference: Epoch,
    ) -> Result<Vec<Epoch>, Error> {
        let mut candidates = Vec::with_capacity(6);

        for anchor in self.anchors(reference) {
            if let Some(rise) = finder.nearest_rise(site, anchor, target, horizon_deg)? {
                candidates.push(rise);
            }
            if let Some(set) = finder.nearest_set(site, anchor, target, horizon_deg)? {
                candidates.push(set);
            }
        }

        Ok(candidates)
    }

    /// Resolves the altitude [Crossing] closest to the reference instant.
    /// Returns `None` when no anchor could produce any candidate.
    pub fn locate<H: HorizonCrossing + ?Sized>(
        &self,
        finder: &H,
        site: &ObserverSite,
        target: &TargetCoordinates,
        horizon_deg: f64,
        reference: Epoch,
    ) -> Result<Option<Crossing>, Error> {
        let candidates = self.candidates(finder, site, target, horizon_deg, reference)?;

        let closest = select_closest(&candidates, reference);

        match closest {
            Some(instant) => {
                debug!(
                    "{}° crossing: {} ({} candidates)",
                    horizon_deg,
                    instant,
                    candidates.len()
                );
                Ok(Some(Crossing {
                    instant,
                    kind: AngleKind::Altitude,
                }))
            },
            None => {
                warn!(
                    "target never crosses {}° around {}: no candidate",
                    horizon_deg, reference
                );
                Ok(None)
            },
        }
    }
}

/// Returns the candidate with smallest absolute offset to the reference.
/// Ties resolve to the first candidate.
fn select_closest(candidates: &[Epoch], reference: Epoch) -> Option<Epoch> {
    candidates
        .iter()
        .min_by_key(|t| (**t - reference).total_nanoseconds().abs())
        .copied()
}

#[cfg(test)]
mod test {
    use super::select_closest;
    use crate::prelude::{Duration, Epoch};

    #[test]
    fn closest_candidate() {
        let t0 = Epoch::from_gregorian_utc_hms(2024, 3, 1, 2, 30, 0);
        let candidates = [
            t0 - Duration::from_seconds(30.0),
            t0 + Duration::from_seconds(12.0),
            t0 - Duration::from_seconds(12.0),
            t0 + Duration::from_hours(11.0),
        ];
        assert_eq!(
            select_closest(&candidates, t0),
            Some(t0 + Duration::from_seconds(12.0))
        );
        assert_eq!(select_closest(&[], t0), None);
    }
}

//! Polynomial inversion of a sampled trajectory
use itertools::{Itertools, MinMaxResult};
use log::{debug, warn};
use polyfit_rs::polyfit_rs::polyfit;

use crate::{
    error::Error,
    locator::Crossing,
    prelude::{AngleKind, Timeline},
};

/// [FittedPolynomial] maps an angle (in degrees) to a fractional grid index.
/// The angle is normalized (centered and scaled) prior evaluation,
/// with the same transform that was used when fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedPolynomial {
    /// Coefficients, lowest order first
    pub coefficients: Vec<f64>,
    /// Mean of the fitted angles
    pub center: f64,
    /// Standard deviation of the fitted angles
    pub scale: f64,
}

impl FittedPolynomial {
    /// Evaluates the fractional grid index at this angle (in degrees).
    pub fn eval(&self, angle_deg: f64) -> f64 {
        let x = (angle_deg - self.center) / self.scale;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c)
    }

    /// Polynomial degree
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// [GridFitLocator] resolves a [Crossing] by fitting the grid index
/// as a polynomial function of the sampled angle, then evaluating
/// that polynomial at the observed angle.
///
/// The inversion only holds if the sampled angle is monotonic over the
/// [Timeline]. :warning: close to transit, the azimuth trajectory
/// (and the altitude trajectory, to a lesser extent) is not monotonic:
/// the resolution is unstable and may be arbitrarily wrong.
/// We only report this situation, it is up to you to reduce the window
/// or select another strategy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridFitLocator {
    degree: usize,
}

impl GridFitLocator {
    /// Builds a new [GridFitLocator] of desired polynomial degree (at least 1).
    pub fn new(degree: usize) -> Result<Self, Error> {
        if degree == 0 {
            return Err(Error::InvalidDegree);
        }
        Ok(Self { degree })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Fits the grid index as a function of the sampled angle of this [AngleKind].
    pub fn fit(&self, timeline: &Timeline, kind: AngleKind) -> Result<FittedPolynomial, Error> {
        let angles = timeline.angles(kind);
        let n = angles.len();

        if self.degree >= n {
            return Err(Error::InvalidDegree);
        }

        if !is_monotonic(&angles) {
            warn!(
                "{} trajectory is not monotonic over the window: grid fit is unstable",
                kind
            );
        }

        let center = angles.iter().sum::<f64>() / n as f64;
        let variance = angles.iter().map(|a| (a - center).powi(2)).sum::<f64>() / n as f64;
        let scale = variance.sqrt();

        if !scale.is_normal() {
            return Err(Error::DegenerateTrajectory);
        }

        let x = angles
            .iter()
            .map(|a| (a - center) / scale)
            .collect::<Vec<_>>();

        let y = (0..n).map(|i| i as f64).collect::<Vec<_>>();

        let coefficients = polyfit(&x, &y, self.degree).map_err(Error::PolynomialFit)?;

        Ok(FittedPolynomial {
            coefficients,
            center,
            scale,
        })
    }

    /// Resolves the [Crossing] of the observed angle, from a previously [FittedPolynomial].
    /// The fractional index is truncated toward zero.
    pub fn invert(
        &self,
        polynomial: &FittedPolynomial,
        timeline: &Timeline,
        kind: AngleKind,
        angle_deg: f64,
    ) -> Result<Crossing, Error> {
        let n = timeline.len();
        let fractional = polynomial.eval(angle_deg);

        if !fractional.is_finite() {
            return Err(Error::IndexOutOfRange {
                index: i64::MAX,
                samples: n,
            });
        }

        let index = fractional.trunc() as i64;

        if index < 0 || index >= n as i64 {
            if let MinMaxResult::MinMax(min, max) = timeline.angles(kind).into_iter().minmax() {
                debug!(
                    "{} {:.4}° is out of sampled range [{:.4}°, {:.4}°]",
                    kind, angle_deg, min, max
                );
            }
            return Err(Error::IndexOutOfRange { index, samples: n });
        }

        let instant = timeline
            .instant(index as usize)
            .ok_or(Error::IndexOutOfRange { index, samples: n })?;

        debug!(
            "{} {:.4}° resolved at index {:.3} ({})",
            kind, angle_deg, fractional, instant
        );

        Ok(Crossing { instant, kind })
    }

    /// Fits the [Timeline] and resolves the [Crossing] of the observed angle.
    pub fn locate(
        &self,
        timeline: &Timeline,
        kind: AngleKind,
        angle_deg: f64,
    ) -> Result<Crossing, Error> {
        let polynomial = self.fit(timeline, kind)?;
        self.invert(&polynomial, timeline, kind, angle_deg)
    }
}

/// True if the series never changes direction
fn is_monotonic(series: &[f64]) -> bool {
    let (mut rising, mut falling) = (false, false);
    for (a, b) in series.iter().tuple_windows() {
        if b > a {
            rising = true;
        } else if b < a {
            falling = true;
        }
    }
    !(rising && falling)
}

#[cfg(test)]
mod test {
    use super::{is_monotonic, FittedPolynomial};

    #[test]
    fn monotonic_series() {
        assert!(is_monotonic(&[1.0, 2.0, 2.0, 3.0]));
        assert!(is_monotonic(&[3.0, 2.0, 1.0]));
        assert!(!is_monotonic(&[1.0, 2.0, 1.5]));
        // azimuth wrapping through north
        assert!(!is_monotonic(&[358.0, 359.0, 0.5, 1.5]));
    }

    #[test]
    fn polynomial_evaluation() {
        let poly = FittedPolynomial {
            coefficients: vec![1.0, 2.0, 3.0],
            center: 10.0,
            scale: 2.0,
        };
        // x = 1
        assert_eq!(poly.eval(12.0), 6.0);
        // x = -1
        assert_eq!(poly.eval(8.0), 2.0);
        assert_eq!(poly.degree(), 2);
    }
}

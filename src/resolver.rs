//! Pointing time resolver
use log::{debug, error, info, warn};

use crate::{
    cfg::{BracketOpts, Config, GridFitOpts, Strategy},
    error::Error,
    horizon::{GridHorizonSearch, HorizonCrossing},
    locator::{BracketedRootLocator, Crossing, FittedPolynomial, GridFitLocator},
    metadata::ExposureMetadata,
    prelude::{AngleKind, Ephemeris, ResolutionResult, Timeline},
};

/// [AngleFit] is the grid fit of one angle, kept for diagnostics (plotting).
#[derive(Debug, Clone, PartialEq)]
pub struct AngleFit {
    /// Angle reported by the mount (in degrees)
    pub observed_deg: f64,
    /// Grid index versus angle polynomial
    pub polynomial: FittedPolynomial,
    /// Inversion at the observed angle
    pub crossing: Result<Crossing, Error>,
}

/// [GridFitDiagnostics] exposes the intermediate grid fit products
/// of both angles. Exactly one of them is [GridFitDiagnostics::selected].
#[derive(Debug, Clone, PartialEq)]
pub struct GridFitDiagnostics {
    /// Sampled [Timeline]
    pub timeline: Timeline,
    /// Altitude fit, when altitude was reported
    pub altitude: Option<Result<AngleFit, Error>>,
    /// Azimuth fit, when azimuth was reported
    pub azimuth: Option<Result<AngleFit, Error>>,
    angle: AngleKind,
}

impl GridFitDiagnostics {
    /// Returns the fit that the resolution relies on.
    pub fn selected(&self) -> Option<&Result<AngleFit, Error>> {
        match self.angle {
            AngleKind::Altitude => self.altitude.as_ref(),
            AngleKind::Azimuth => self.azimuth.as_ref(),
        }
    }
}

/// [Resolver] recovers the instant at which the target trajectory
/// matched the angle reported by the mount, and its offset to the
/// reference instant.
pub struct Resolver<E: Ephemeris> {
    /// Resolver parametrization
    cfg: Config,
    /// [Ephemeris] provider
    ephemeris: E,
    /// Root finder, for the bracketed root strategy.
    /// When not provided, we deploy a [GridHorizonSearch] on top of the [Ephemeris].
    horizon: Option<Box<dyn HorizonCrossing>>,
}

impl<E: Ephemeris> Resolver<E> {
    /// Creates a new [Resolver].
    /// ## Inputs
    /// - cfg: [Config] that is verified here
    /// - ephemeris: [Ephemeris] provider
    pub fn new(cfg: &Config, ephemeris: E) -> Result<Self, Error> {
        cfg.validate()?;

        if matches!(cfg.strategy, Strategy::GridFit(_)) && cfg.angle == AngleKind::Azimuth {
            warn!("azimuth grid fit is unstable near transit");
        }

        info!("{} resolver ({})", cfg.angle, cfg.strategy);

        Ok(Self {
            ephemeris,
            cfg: cfg.clone(),
            horizon: None,
        })
    }

    /// Creates a new [Resolver] with your own [HorizonCrossing] root finder,
    /// that the bracketed root strategy will use.
    pub fn with_horizon_crossing(
        cfg: &Config,
        ephemeris: E,
        horizon: Box<dyn HorizonCrossing>,
    ) -> Result<Self, Error> {
        let mut s = Self::new(cfg, ephemeris)?;
        s.horizon = Some(horizon);
        Ok(s)
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Resolves one exposure.
    /// When the metadata lacks the selected angle, the
    /// returned [ResolutionResult] is not resolved: this is not an error.
    pub fn resolve(&self, meta: &ExposureMetadata) -> Result<ResolutionResult, Error> {
        let observed_deg = match meta.angle(self.cfg.angle) {
            Some(angle) => angle,
            None => {
                debug!(
                    "{:?} missing {} angle: cannot resolve",
                    meta.object, self.cfg.angle
                );
                return Ok(ResolutionResult::not_found(
                    meta.object.clone(),
                    meta.filter.clone(),
                ));
            },
        };

        let crossing = match &self.cfg.strategy {
            Strategy::GridFit(opts) => Some(self.grid_fit(meta, opts, observed_deg)?),
            Strategy::BracketedRoot(opts) => self.bracketed_root(meta, opts, observed_deg)?,
        };

        let result = ResolutionResult::from_crossing(
            meta.object.clone(),
            meta.filter.clone(),
            crossing,
            meta.reference,
        );

        if let Some(offset) = result.offset() {
            debug!("{:?} {} offset: {}", meta.object, self.cfg.angle, offset);
        }

        Ok(result)
    }

    /// Resolves a batch of independent exposures.
    /// One failure never interrupts the batch.
    pub fn resolve_batch(
        &self,
        batch: &[ExposureMetadata],
    ) -> Vec<Result<ResolutionResult, Error>> {
        batch
            .iter()
            .map(|meta| {
                let result = self.resolve(meta);
                if let Err(e) = &result {
                    error!("{:?} ({}): resolution failed: {}", meta.object, meta.reference, e);
                }
                result
            })
            .collect()
    }

    /// Runs the grid fit over both reported angles and returns all
    /// intermediate products. Only applies to the grid fit [Strategy].
    pub fn grid_fit_diagnostics(
        &self,
        meta: &ExposureMetadata,
    ) -> Result<GridFitDiagnostics, Error> {
        let opts = match &self.cfg.strategy {
            Strategy::GridFit(opts) => opts,
            Strategy::BracketedRoot(_) => return Err(Error::InvalidStrategy),
        };

        let locator = GridFitLocator::new(opts.degree)?;
        let timeline = self.timeline(meta, opts)?;

        let fit = |kind: AngleKind| {
            meta.angle(kind).map(|observed_deg| -> Result<AngleFit, Error> {
                let polynomial = locator.fit(&timeline, kind)?;
                let crossing = locator.invert(&polynomial, &timeline, kind, observed_deg);
                Ok(AngleFit {
                    observed_deg,
                    polynomial,
                    crossing,
                })
            })
        };

        let altitude = fit(AngleKind::Altitude);
        let azimuth = fit(AngleKind::Azimuth);

        Ok(GridFitDiagnostics {
            timeline,
            altitude,
            azimuth,
            angle: self.cfg.angle,
        })
    }

    fn timeline(&self, meta: &ExposureMetadata, opts: &GridFitOpts) -> Result<Timeline, Error> {
        let (t_min, t_max) = opts.time_range;
        Timeline::build(
            &self.ephemeris,
            &meta.site,
            &meta.target,
            meta.reference,
            t_min,
            t_max,
            opts.samples,
        )
    }

    fn grid_fit(
        &self,
        meta: &ExposureMetadata,
        opts: &GridFitOpts,
        observed_deg: f64,
    ) -> Result<Crossing, Error> {
        let locator = GridFitLocator::new(opts.degree)?;
        let timeline = self.timeline(meta, opts)?;
        locator.locate(&timeline, self.cfg.angle, observed_deg)
    }

    fn bracketed_root(
        &self,
        meta: &ExposureMetadata,
        opts: &BracketOpts,
        observed_deg: f64,
    ) -> Result<Option<Crossing>, Error> {
        let locator = BracketedRootLocator::new(opts.anchor_spacing);
        match &self.horizon {
            Some(finder) => locator.locate(
                finder.as_ref(),
                &meta.site,
                &meta.target,
                observed_deg,
                meta.reference,
            ),
            None => {
                let finder =
                    GridHorizonSearch::new(&self.ephemeris).with_grid_points(opts.n_grid_points);
                locator.locate(
                    &finder,
                    &meta.site,
                    &meta.target,
                    observed_deg,
                    meta.reference,
                )
            },
        }
    }
}

use crate::{
    error::Error,
    prelude::{Epoch, HorizontalCoordinates, ObserverSite, TargetCoordinates},
};

/// Any astronomical position provider should implement the [Ephemeris] trait
/// to contribute to the resolution process.
///
/// `altaz-dt` never computes positions itself: it only samples the
/// trajectory that your [Ephemeris] describes. The provider is expected to
/// be synchronous and free of side effects: it may be slow, it is
/// only called from the resolution that needs it. Any refraction
/// correction is the responsibility of the provider.
pub trait Ephemeris {
    /// Provide the [HorizontalCoordinates] of the [TargetCoordinates],
    /// as seen from [ObserverSite] at requested [Epoch] (UTC).
    /// Report any failure (like a position that cannot be evaluated)
    /// as [Error::EphemerisFailure].
    fn altaz(
        &self,
        site: &ObserverSite,
        t: Epoch,
        target: &TargetCoordinates,
    ) -> Result<HorizontalCoordinates, Error>;

    /// Evaluate the trajectory over a sequence of [Epoch]s, in order.
    /// The default implementation evaluates each [Epoch] sequentially;
    /// override it if your provider supports vectorized evaluation.
    /// The returned samples must be index-aligned with the requested instants.
    fn altaz_batch(
        &self,
        site: &ObserverSite,
        instants: &[Epoch],
        target: &TargetCoordinates,
    ) -> Result<Vec<HorizontalCoordinates>, Error> {
        instants
            .iter()
            .map(|t| self.altaz(site, *t, target))
            .collect()
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn altaz(
        &self,
        site: &ObserverSite,
        t: Epoch,
        target: &TargetCoordinates,
    ) -> Result<HorizontalCoordinates, Error> {
        (**self).altaz(site, t, target)
    }

    fn altaz_batch(
        &self,
        site: &ObserverSite,
        instants: &[Epoch],
        target: &TargetCoordinates,
    ) -> Result<Vec<HorizontalCoordinates>, Error> {
        (**self).altaz_batch(site, instants, target)
    }
}

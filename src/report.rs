//! Resolution results
use crate::prelude::{AngleKind, Crossing, Duration, Epoch};

/// [Resolved] crossing, with its offset to the reference instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolved {
    /// Resolved [Crossing]
    pub crossing: Crossing,
    /// Signed offset: crossing instant - reference instant.
    /// Positive when the crossing occurs after the reference instant.
    pub offset: Duration,
}

/// [ResolutionResult] is the outcome of one resolution.
/// When the crossing could not be determined (for example, the
/// metadata lacked the observed angle), both the instant and the offset
/// are absent: this is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolutionResult {
    /// Target name (passthrough)
    pub object: Option<String>,
    /// Filter / band (passthrough)
    pub filter: Option<String>,
    /// [Resolved] crossing, if any
    pub resolved: Option<Resolved>,
}

impl ResolutionResult {
    /// Builds the "not found" [ResolutionResult].
    pub fn not_found(object: Option<String>, filter: Option<String>) -> Self {
        Self {
            object,
            filter,
            resolved: None,
        }
    }

    /// Builds the [ResolutionResult] from a possibly resolved [Crossing],
    /// with respect to the reference instant.
    pub fn from_crossing(
        object: Option<String>,
        filter: Option<String>,
        crossing: Option<Crossing>,
        reference: Epoch,
    ) -> Self {
        Self {
            object,
            filter,
            resolved: crossing.map(|crossing| Resolved {
                crossing,
                offset: crossing.instant - reference,
            }),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Resolved instant (UTC)
    pub fn instant(&self) -> Option<Epoch> {
        self.resolved.map(|r| r.crossing.instant)
    }

    /// Signed offset to the reference instant
    pub fn offset(&self) -> Option<Duration> {
        self.resolved.map(|r| r.offset)
    }

    /// Signed offset to the reference instant, in seconds
    pub fn offset_seconds(&self) -> Option<f64> {
        self.resolved.map(|r| r.offset.to_seconds())
    }

    /// Angle the crossing was resolved from
    pub fn kind(&self) -> Option<AngleKind> {
        self.resolved.map(|r| r.crossing.kind)
    }
}

/// Formats as `object,filter,instant,offset_s`, absent values being `None`.
impl std::fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let object = self.object.as_deref().unwrap_or("None");
        let filter = self.filter.as_deref().unwrap_or("None");
        match &self.resolved {
            Some(resolved) => write!(
                f,
                "{},{},{},{}",
                object,
                filter,
                resolved.crossing.instant,
                resolved.offset.to_seconds()
            ),
            None => write!(f, "{},{},None,None", object, filter),
        }
    }
}

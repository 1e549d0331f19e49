//! Segmentation configuration.

use serde::{Deserialize, Serialize};

use crate::zones::BoundaryTracerKind;

/// What to do with a zone whose boundary does not reduce to a single
/// simple trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Keep the degraded trace silently.
    Accept,
    /// Keep the degraded trace and log a warning.
    #[default]
    Warn,
    /// Fail the whole segmentation call.
    Reject,
}

impl std::str::FromStr for BoundaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "warn" => Ok(Self::Warn),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown boundary policy: {other}")),
        }
    }
}

/// Segmentation configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Boundary ordering strategy (default: `Rings`).
    /// `Legacy` reproduces the single "don't backtrack" walk.
    pub tracer: BoundaryTracerKind,

    /// Handling of irreducible boundaries (default: `Warn`).
    pub boundary_policy: BoundaryPolicy,
}

impl SegmentConfig {
    /// Create a new config with the given tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: BoundaryTracerKind) -> Self {
        self.tracer = tracer;
        self
    }

    /// Create a new config with the given boundary policy.
    #[must_use]
    pub fn with_boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = policy;
        self
    }

    /// Legacy walk with degraded traces kept silently.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            tracer: BoundaryTracerKind::Legacy,
            boundary_policy: BoundaryPolicy::Accept,
        }
    }

    /// Ring tracing that fails on anything but one outer ring per zone.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            tracer: BoundaryTracerKind::Rings,
            boundary_policy: BoundaryPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SegmentConfig::default();
        assert_eq!(config.tracer, BoundaryTracerKind::Rings);
        assert_eq!(config.boundary_policy, BoundaryPolicy::Warn);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SegmentConfig::default()
            .with_tracer(BoundaryTracerKind::Legacy)
            .with_boundary_policy(BoundaryPolicy::Reject);

        assert_eq!(config.tracer, BoundaryTracerKind::Legacy);
        assert_eq!(config.boundary_policy, BoundaryPolicy::Reject);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Reject".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Reject));
        assert!("maybe".parse::<BoundaryPolicy>().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SegmentConfig::legacy();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SegmentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

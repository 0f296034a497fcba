//! Walk configuration.

use crate::error::{Error, Result};
use crate::geometry::GeometryKind;
use crate::walk::check_origin;
use crate::LandCoord;

/// Default origin component on both axes.
pub const DEFAULT_ORIGIN_AXIS: i64 = 500;

/// Environment variable holding the origin as `"x,y"`.
pub const ORIGIN_ENV: &str = "LANDGRID_ORIGIN";

/// Environment variable holding the geometry name (`even` or `odd`).
pub const GEOMETRY_ENV: &str = "LANDGRID_GEOMETRY";

/// Configuration for a spiral walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Centre of the spiral; token 1 lands here
    pub origin: LandCoord,
    /// Ring boundary rule
    pub geometry: GeometryKind,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            origin: LandCoord::new(DEFAULT_ORIGIN_AXIS, DEFAULT_ORIGIN_AXIS),
            geometry: GeometryKind::default(),
        }
    }
}

impl WalkConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Origins a walk
    /// cannot start from are rejected here rather than at first use.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(origin) = lookup(ORIGIN_ENV) {
            config.origin = origin
                .parse()
                .and_then(check_origin)
                .map_err(|e| Error::InvalidArgument(format!("{ORIGIN_ENV}: {e}")))?;
        }

        if let Some(geometry) = lookup(GEOMETRY_ENV) {
            config.geometry = geometry
                .parse()
                .map_err(|e| Error::InvalidArgument(format!("{GEOMETRY_ENV}: {e}")))?;
        }

        Ok(config)
    }

    /// Check that a walk can be built from this configuration.
    pub fn validate(&self) -> Result<()> {
        check_origin(self.origin).map(|_| ())
    }

    pub fn with_origin(mut self, origin: LandCoord) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_geometry(mut self, geometry: GeometryKind) -> Self {
        self.geometry = geometry;
        self
    }
}

/// Parse a batch size from text. Negative or non-numeric counts are
/// rejected as invalid arguments.
pub fn parse_batch_count(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        return Err(Error::InvalidArgument(format!(
            "batch count must not be negative, got {trimmed}"
        )));
    }
    trimmed
        .parse()
        .map_err(|e| Error::InvalidArgument(format!("bad batch count {trimmed:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_centre_on_five_hundred() {
        let config = WalkConfig::default();
        assert_eq!(config.origin, LandCoord::new(500, 500));
        assert_eq!(config.geometry, GeometryKind::EvenSquare);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = WalkConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, WalkConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = WalkConfig::from_lookup(lookup(&[
            (ORIGIN_ENV, "-4, 9"),
            (GEOMETRY_ENV, "odd"),
        ]))
        .unwrap();

        assert_eq!(config.origin, LandCoord::new(-4, 9));
        assert_eq!(config.geometry, GeometryKind::OddSquare);
    }

    #[test]
    fn malformed_environment_is_rejected() {
        let bad_origin = WalkConfig::from_lookup(lookup(&[(ORIGIN_ENV, "north")]));
        assert!(matches!(bad_origin, Err(Error::InvalidArgument(msg)) if msg.contains(ORIGIN_ENV)));

        let bad_geometry = WalkConfig::from_lookup(lookup(&[(GEOMETRY_ENV, "hex")]));
        assert!(matches!(bad_geometry, Err(Error::InvalidArgument(msg)) if msg.contains(GEOMETRY_ENV)));
    }

    #[test]
    fn origin_beyond_axis_limit_is_rejected() {
        let edge = format!("{},0", i64::MAX);
        let result = WalkConfig::from_lookup(lookup(&[(ORIGIN_ENV, edge.as_str())]));
        assert!(matches!(result, Err(Error::InvalidArgument(msg)) if msg.contains(ORIGIN_ENV)));

        let limit = format!("{0},-{0}", crate::MAX_ORIGIN_AXIS);
        let config = WalkConfig::from_lookup(lookup(&[(ORIGIN_ENV, limit.as_str())])).unwrap();
        assert_eq!(
            config.origin,
            LandCoord::new(crate::MAX_ORIGIN_AXIS, -crate::MAX_ORIGIN_AXIS)
        );
    }

    #[test]
    fn validate_checks_origin() {
        assert!(WalkConfig::default().validate().is_ok());

        let far = WalkConfig::default().with_origin(LandCoord::new(i64::MIN, 0));
        assert!(matches!(far.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn batch_count_parsing() {
        assert_eq!(parse_batch_count("0").unwrap(), 0);
        assert_eq!(parse_batch_count(" 42 ").unwrap(), 42);
        assert!(matches!(parse_batch_count("-1"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_batch_count("ten"), Err(Error::InvalidArgument(_))));
    }
}

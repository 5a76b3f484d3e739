use crate::error::LifelineError;

/// Radius bound for everyday "near me" searches: 50 km.
pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 50_000.0;

/// Radius bound for region-wide searches (rare blood groups, organ
/// matching): 250 km.
pub const WIDE_SEARCH_RADIUS_METERS: f64 = 250_000.0;

/// Configuration for one proximity search.
///
/// Every candidate in a result set satisfies `distance <= radius_meters`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum great-circle distance in meters a candidate may be from the
    /// query point
    pub radius_meters: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
        }
    }
}

impl SearchConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }
}

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder with sensible defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Create a builder for everyday nearby searches (50 km bound)
    #[must_use]
    pub fn nearby() -> Self {
        let mut builder = Self::new();
        builder.config.radius_meters = DEFAULT_SEARCH_RADIUS_METERS;
        builder
    }

    /// Create a builder for region-wide searches (250 km bound)
    #[must_use]
    pub fn wide() -> Self {
        let mut builder = Self::new();
        builder.config.radius_meters = WIDE_SEARCH_RADIUS_METERS;
        builder
    }

    /// Set the radius bound in meters (must be finite and positive)
    pub fn radius_meters(mut self, meters: f64) -> Result<Self, LifelineError> {
        if !meters.is_finite() || meters <= 0.0 {
            return Err(LifelineError::ConfigError(format!(
                "Search radius must be finite and positive, got {meters}"
            )));
        }
        self.config.radius_meters = meters;
        Ok(self)
    }

    /// Set the radius bound in kilometers (must be finite and positive)
    pub fn radius_km(self, km: f64) -> Result<Self, LifelineError> {
        self.radius_meters(km * 1000.0)
    }

    /// Build the final configuration
    #[must_use]
    pub fn build(self) -> SearchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder() {
        let config = SearchConfigBuilder::new().build();
        assert_eq!(config.radius_meters, DEFAULT_SEARCH_RADIUS_METERS);
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_presets() {
        let nearby = SearchConfigBuilder::nearby().build();
        assert_eq!(nearby.radius_meters, 50_000.0);

        let wide = SearchConfigBuilder::wide().build();
        assert_eq!(wide.radius_meters, 250_000.0);
    }

    #[test]
    fn test_method_chaining() {
        let config = SearchConfigBuilder::new()
            .radius_km(25.0)
            .unwrap()
            .build();
        assert_eq!(config.radius_meters, 25_000.0);

        // Presets can be overridden.
        let config = SearchConfigBuilder::wide()
            .radius_meters(10_000.0)
            .unwrap()
            .build();
        assert_eq!(config.radius_meters, 10_000.0);
    }

    #[test]
    fn test_radius_validation() {
        assert!(SearchConfigBuilder::new().radius_meters(0.0).is_err());
        assert!(SearchConfigBuilder::new().radius_meters(-5.0).is_err());
        assert!(SearchConfigBuilder::new().radius_meters(f64::NAN).is_err());
        assert!(
            SearchConfigBuilder::new()
                .radius_meters(f64::INFINITY)
                .is_err()
        );
        assert!(SearchConfigBuilder::new().radius_meters(1.0).is_ok());
    }
}

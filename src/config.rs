/// Two places closer than this (in map units) are directly connected
pub const DEFAULT_CONNECTION_THRESHOLD: f64 = 5.0;

/// Meters represented by one map unit
pub const DEFAULT_UNIT_METERS: f64 = 100.0;


/// Settings for building the graph and reporting route lengths
/// The unit scale is display-only and never changes what a search returns
#[derive(Clone, Debug, PartialEq)]
pub struct NavigatorConfig {
    pub connection_threshold: f64,
    pub unit_meters: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            connection_threshold: DEFAULT_CONNECTION_THRESHOLD,
            unit_meters: DEFAULT_UNIT_METERS,
        }
    }
}

impl NavigatorConfig {

    pub fn with_connection_threshold(mut self, connection_threshold: f64) -> Self {
        self.connection_threshold = connection_threshold;
        self
    }

    pub fn with_unit_meters(mut self, unit_meters: f64) -> Self {
        self.unit_meters = unit_meters;
        self
    }
}

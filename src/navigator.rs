use crate::campus::CAMPUS_PLACES;
use crate::config::NavigatorConfig;
use crate::errors::PathPlannerError;
use crate::graph::{Connection, Graph, PlaceId, PlaceRecord};
use crate::graph_algos::Algorithm;
use crate::route::{summarize, RouteSummary};

use log::{debug, info};


/// Route finder over a fixed map
/// The graph is built once in `new` and only read afterwards.
pub struct Navigator {
    graph: Graph,
    config: NavigatorConfig,
}

impl Navigator {

    pub fn new(records: &[PlaceRecord], config: NavigatorConfig) -> Result<Self, PathPlannerError> {
        let graph = Graph::build(records, config.connection_threshold)?;
        Ok(Self { graph, config })
    }

    /// The reference campus with the default configuration
    pub fn campus() -> Result<Self, PathPlannerError> {
        Self::new(&CAMPUS_PLACES, NavigatorConfig::default())
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Find a route and measure it
    /// Ok(None) when there is no route, including unknown places.
    /// start == goal gives a single-place route of 0 meters.
    /// Err only if the search returned a path that does not follow the graph's connections.
    pub fn find_route(&self, start: PlaceId, goal: PlaceId, algorithm: Algorithm) -> Result<Option<RouteSummary>, PathPlannerError> {

        let path = algorithm.search(&self.graph, start, goal);
        if path.is_empty() {
            info!("no route from {} to {} using {}", start, goal, algorithm);
            return Ok(None);
        }

        let summary = summarize(&self.graph, path, self.config.unit_meters)?;
        debug!(
            "{} route from {} to {}: {} hops, {}",
            algorithm,
            start,
            goal,
            summary.hops(),
            summary
        );
        Ok(Some(summary))
    }

    /// Same as find_route, with places given by their table keys
    pub fn find_route_by_key(&self, start: &str, goal: &str, algorithm: Algorithm) -> Result<Option<RouteSummary>, PathPlannerError> {
        let (Some(start_id), Some(goal_id)) = (self.graph.find(start), self.graph.find(goal)) else {
            info!("no route from {:?} to {:?}: unknown place key", start, goal);
            return Ok(None);
        };
        self.find_route(start_id, goal_id, algorithm)
    }

    /// Every connection with its length in meters, for labelling the map
    pub fn connection_labels(&self) -> Vec<(Connection, f64)> {
        self.graph
            .connections()
            .map(|connection| {
                let meters = connection.weight * self.config.unit_meters;
                (connection, meters)
            })
            .collect()
    }
}

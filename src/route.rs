use crate::errors::PathPlannerError;
use crate::graph::{Graph, PlaceId};

use std::fmt;
use log::error;


/// Total edge weight along a path, in map units
/// A step between two places that are not connected means a search produced a bad path
pub fn path_length(graph: &Graph, path: &[PlaceId]) -> Result<f64, PathPlannerError> {
    let mut total = 0.0;
    for step in path.windows(2) {
        let (from, to) = (step[0], step[1]);
        match graph.weight(from, to) {
            Some(weight) => total += weight,
            None => {
                error!("path steps from {} to {} without a connection", from, to);
                return Err(PathPlannerError::MissingConnection(from, to));
            }
        }
    }
    Ok(total)
}


/// A found route with its length
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary {
    pub path: Vec<PlaceId>,
    pub total_units: f64,
    pub total_meters: f64,
}

impl RouteSummary {

    /// Number of connections travelled
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn total_kilometers(&self) -> f64 {
        self.total_meters / 1000.0
    }

    /// Display names along the route
    pub fn place_names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.path
            .iter()
            .filter_map(|id| graph.place(*id))
            .map(|place| place.name.as_str())
            .collect()
    }

    /// e.g. "Engineering Faculty → Library"
    pub fn describe(&self, graph: &Graph) -> String {
        self.place_names(graph).join(" → ")
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} meters ({:.2} km)", self.total_meters, self.total_kilometers())
    }
}


/// Summarize a non-empty path, scaling the length by `unit_meters`
pub fn summarize(graph: &Graph, path: Vec<PlaceId>, unit_meters: f64) -> Result<RouteSummary, PathPlannerError> {
    if path.is_empty() {
        return Err(PathPlannerError::NoPathFound);
    }
    let total_units = path_length(graph, &path)?;
    Ok(RouteSummary {
        path,
        total_units,
        total_meters: total_units * unit_meters,
    })
}

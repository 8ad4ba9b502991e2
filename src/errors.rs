use crate::graph::PlaceId;


#[derive(Debug, PartialEq)]
pub enum PathPlannerError {
    NoPathFound, // Frontier exhausted without reaching the goal
    UnknownPlace(PlaceId), // Start or goal is not a place on the graph
    MissingConnection(PlaceId, PlaceId), // Consecutive path places are not connected
    DuplicatePlace(String), // Two records share the same key
    UnknownAlgorithm(String), // Unrecognised algorithm name
    KdTreeError(String),
}


impl From<kdtree::ErrorKind> for PathPlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        PathPlannerError::KdTreeError(error.to_string())
    }
}

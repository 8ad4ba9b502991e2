use crate::errors::PathPlannerError;
use crate::graph::{Graph, PlaceId};
use super::breadth_first::breadth_first;
use super::depth_first::depth_first;
use super::greedy::{best_first, nearest_neighbor};

use std::{fmt, str::FromStr};
use log::debug;


/// Search strategy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    GreedyNearestNeighbor, // cheapest-edge walk, no backtracking
    GreedyHeuristic, // best-first on straight-line distance to the goal
}

impl Algorithm {

    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::GreedyNearestNeighbor,
        Algorithm::GreedyHeuristic,
    ];

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
            Algorithm::GreedyNearestNeighbor => "Greedy Nearest Neighbor",
            Algorithm::GreedyHeuristic => "Greedy Best-First",
        }
    }

    /// Plan a path from start to goal on the graph
    /// Neighbors are always offered in ascending id order.
    /// start == goal yields the single-node path [start].
    pub fn plan(&self, graph: &Graph, start: PlaceId, goal: PlaceId) -> Result<Vec<PlaceId>, PathPlannerError> {

        for id in [start, goal] {
            if !graph.contains(id) {
                return Err(PathPlannerError::UnknownPlace(id));
            }
        }

        let goal_fn = |node: &PlaceId| *node == goal;

        match self {
            Algorithm::DepthFirst => {
                depth_first(start, |node: &PlaceId| graph.neighbor_ids(*node), goal_fn)
            }
            Algorithm::BreadthFirst => {
                breadth_first(start, |node: &PlaceId| graph.neighbor_ids(*node), goal_fn)
            }
            Algorithm::GreedyNearestNeighbor => {
                nearest_neighbor(start, |node: &PlaceId| graph.neighbors(*node), goal_fn)
            }
            Algorithm::GreedyHeuristic => {
                let target = graph
                    .place(goal)
                    .map(|place| place.position.clone())
                    .ok_or(PathPlannerError::UnknownPlace(goal))?;
                let heuristic_fn = |node: &PlaceId| {
                    graph
                        .place(*node)
                        .map_or(f64::INFINITY, |place| place.position.distance(&target))
                };
                best_first(start, |node: &PlaceId| graph.neighbor_ids(*node), heuristic_fn, goal_fn)
            }
        }
    }

    /// Like plan, but fails soft: any failure comes back as an empty path
    pub fn search(&self, graph: &Graph, start: PlaceId, goal: PlaceId) -> Vec<PlaceId> {
        match self.plan(graph, start, goal) {
            Ok(path) => path,
            Err(error) => {
                debug!("{} found no path from {} to {}: {:?}", self, start, goal, error);
                Vec::new()
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = PathPlannerError;

    /// Accepts the display names (any case) and a few short aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" | "breadth first" => Ok(Algorithm::BreadthFirst),
            "greedy" | "greedy nearest neighbor" | "nearest-neighbor" | "nearest neighbor" | "nn" => {
                Ok(Algorithm::GreedyNearestNeighbor)
            }
            "greedy best-first" | "best-first" | "best first" | "heuristic" => {
                Ok(Algorithm::GreedyHeuristic)
            }
            _ => Err(PathPlannerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

//! # campus_nav
//!
//! Route finding over a small, fixed campus map. Places are points on a plane; any two
//! places closer than a threshold are joined by a connection weighted with their
//! euclidean distance. A route is searched with one of four strategies:
//!
//! * depth-first search (first path found),
//! * breadth-first search (fewest connections),
//! * greedy nearest-neighbor walk (cheapest next connection, no backtracking),
//! * greedy best-first search (closest to the goal in a straight line first).
//!
//! None of them promises the shortest route by distance.
//!
//! ```
//! use campus_nav::{Algorithm, Navigator};
//!
//! let navigator = Navigator::campus().unwrap();
//! let route = navigator.find_route_by_key("A", "C", Algorithm::BreadthFirst).unwrap().unwrap();
//! assert_eq!(route.describe(navigator.graph()), "Engineering Faculty → Library");
//! assert_eq!(route.to_string(), "412 meters (0.41 km)");
//! ```
pub mod campus;
pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod navigator;
pub mod route;

pub use config::NavigatorConfig;
pub use errors::PathPlannerError;
pub use graph::{Connection, Graph, Place, PlaceId, PlaceRecord};
pub use graph_algos::Algorithm;
pub use navigator::Navigator;
pub use route::RouteSummary;

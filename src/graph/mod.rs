use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::geometry::Point;

use std::fmt;
use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;
use log::info;


/// Identifier of a place on the graph
/// Ids are handed out in record order, so ordering by id is ordering by table position
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaceId(pub usize);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// Input row used to build a graph: table key, display name, position
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceRecord<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub position: Point,
}

impl<'a> PlaceRecord<'a> {
    pub const fn new(key: &'a str, name: &'a str, position: Point) -> Self {
        Self { key, name, position }
    }
}


/// Node on the graph - immutable once built
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub key: String,
    pub name: String,
    pub position: Point,
}


/// Undirected edge, reported with `a < b`
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: PlaceId,
    pub b: PlaceId,
    pub weight: f64, // euclidean distance between the two places, map units
}


/// Undirected weighted graph of places
/// Two places are connected iff their euclidean distance is strictly below the threshold
#[derive(Clone, Debug)]
pub struct Graph {
    places: Vec<Place>,
    keys: FxIndexMap<String, PlaceId>,
    adjacency: Vec<FxIndexMap<PlaceId, f64>>, // neighbor -> weight, sorted by id
    threshold: f64,
}

impl Graph {

    /// Build the graph from a table of place records
    /// Candidate neighbors come from a kd-tree radius query, then the exact distance is checked
    pub fn build(records: &[PlaceRecord], threshold: f64) -> Result<Self, PathPlannerError> {

        let mut places: Vec<Place> = Vec::with_capacity(records.len());
        let mut keys: FxIndexMap<String, PlaceId> = FxIndexMap::default();

        // Tree is used to store points and find places within the threshold
        let mut tree: KdTree<f64, usize, [f64; 2]> = KdTree::new(2);

        for (idx, record) in records.iter().enumerate() {
            let id = PlaceId(idx);
            if keys.insert(record.key.to_string(), id).is_some() {
                return Err(PathPlannerError::DuplicatePlace(record.key.to_string()));
            }
            tree.add(record.position.as_array(), idx)?;
            places.push(Place {
                id,
                key: record.key.to_string(),
                name: record.name.to_string(),
                position: record.position.clone(),
            });
        }

        let mut adjacency: Vec<FxIndexMap<PlaceId, f64>> = (0..places.len())
            .map(|_| FxIndexMap::default())
            .collect();

        // tree uses squared euclidean distances, so we need to square the radius
        let radius = threshold.powi(2);
        for place in &places {
            for (_dist, &other) in tree.within(&place.position.as_array(), radius, &kt_squared_euclidean)? {

                // visit each unordered pair once, skips self as well
                if other <= place.id.0 {
                    continue;
                }

                // radius query is inclusive, the connection rule is strict
                let weight = place.position.distance(&places[other].position);
                if weight < threshold {
                    adjacency[place.id.0].insert(PlaceId(other), weight);
                    adjacency[other].insert(place.id, weight);
                }
            }
        }

        for neighbors in &mut adjacency {
            neighbors.sort_keys();
        }

        let graph = Self { places, keys, adjacency, threshold };
        info!(
            "built graph with {} places and {} connections (threshold {})",
            graph.len(),
            graph.connection_count(),
            threshold
        );
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn contains(&self, id: PlaceId) -> bool {
        id.0 < self.places.len()
    }

    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.0)
    }

    /// All places in id order
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by its table key
    pub fn find(&self, key: &str) -> Option<PlaceId> {
        self.keys.get(key).copied()
    }

    /// Directly connected places with edge weights, ascending by id
    /// Unknown ids have no neighbors
    pub fn neighbors(&self, id: PlaceId) -> impl Iterator<Item = (PlaceId, f64)> + '_ {
        self.adjacency
            .get(id.0)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(&other, &weight)| (other, weight)))
    }

    pub fn neighbor_ids(&self, id: PlaceId) -> impl Iterator<Item = PlaceId> + '_ {
        self.neighbors(id).map(|(other, _)| other)
    }

    /// Edge weight between two places, None if they are not connected
    pub fn weight(&self, a: PlaceId, b: PlaceId) -> Option<f64> {
        self.adjacency.get(a.0)?.get(&b).copied()
    }

    /// Every connection once, ordered by (a, b)
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(idx, neighbors)| {
            neighbors
                .iter()
                .filter(move |(other, _)| other.0 > idx)
                .map(move |(&other, &weight)| Connection { a: PlaceId(idx), b: other, weight })
        })
    }

    pub fn connection_count(&self) -> usize {
        self.adjacency.iter().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::CAMPUS_PLACES;

    fn campus() -> Graph {
        Graph::build(&CAMPUS_PLACES, 5.0).unwrap()
    }

    fn ids(graph: &Graph, keys: &[&str]) -> Vec<PlaceId> {
        keys.iter().map(|key| graph.find(key).unwrap()).collect()
    }

    #[test]
    fn test_build_campus() {
        let graph = campus();
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.connection_count(), 19);
        assert_eq!(graph.connections().count(), 19);
        assert_eq!(graph.threshold(), 5.0);
    }

    #[test]
    fn test_library_connection_weight() {
        let graph = campus();
        let a = graph.find("A").unwrap();
        let c = graph.find("C").unwrap();
        let weight = graph.weight(a, c).unwrap();
        assert!((weight - 17.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(graph.weight(c, a), Some(weight));
    }

    #[test]
    fn test_threshold_is_strict() {
        // B (2,3) and D (6,0) are exactly 5 units apart
        let graph = campus();
        let b = graph.find("B").unwrap();
        let d = graph.find("D").unwrap();
        assert_eq!(graph.place(b).unwrap().position.distance(&graph.place(d).unwrap().position), 5.0);
        assert_eq!(graph.weight(b, d), None);
    }

    #[test]
    fn test_neighbors_sorted_by_id() {
        let graph = campus();
        let c = graph.find("C").unwrap();
        let neighbors: Vec<PlaceId> = graph.neighbor_ids(c).collect();
        assert_eq!(neighbors, ids(&graph, &["A", "B", "D", "E", "G"]));

        let e = graph.find("E").unwrap();
        let neighbors: Vec<PlaceId> = graph.neighbor_ids(e).collect();
        assert_eq!(neighbors, ids(&graph, &["C", "D", "F", "G", "H", "I"]));
    }

    #[test]
    fn test_connections_are_undirected_without_self_loops() {
        let graph = campus();
        for connection in graph.connections() {
            assert!(connection.a < connection.b);
            assert_eq!(graph.weight(connection.a, connection.b), Some(connection.weight));
            assert_eq!(graph.weight(connection.b, connection.a), Some(connection.weight));
            assert!(connection.weight < graph.threshold());
        }
        for place in graph.places() {
            assert_eq!(graph.weight(place.id, place.id), None);
        }
    }

    #[test]
    fn test_lookup() {
        let graph = campus();
        let j = graph.find("J").unwrap();
        assert_eq!(j, PlaceId(9));
        assert_eq!(graph.place(j).unwrap().name, "Cafeteria");
        assert!(graph.contains(j));
        assert!(!graph.contains(PlaceId(10)));
        assert_eq!(graph.find("Z"), None);
        assert_eq!(graph.neighbors(PlaceId(42)).count(), 0);
    }

    #[test]
    fn test_isolated_place() {
        let records = [
            PlaceRecord::new("A", "Near", Point::new(0.0, 0.0)),
            PlaceRecord::new("B", "Also near", Point::new(1.0, 0.0)),
            PlaceRecord::new("C", "Far away", Point::new(50.0, 50.0)),
        ];
        let graph = Graph::build(&records, 5.0).unwrap();
        assert_eq!(graph.connection_count(), 1);
        assert_eq!(graph.neighbors(PlaceId(2)).count(), 0);
    }

    #[test]
    fn test_duplicate_key() {
        let records = [
            PlaceRecord::new("A", "First", Point::new(0.0, 0.0)),
            PlaceRecord::new("A", "Second", Point::new(1.0, 0.0)),
        ];
        let result = Graph::build(&records, 5.0);
        assert!(matches!(result, Err(PathPlannerError::DuplicatePlace(key)) if key == "A"));
    }

    #[test]
    fn test_non_finite_position() {
        let records = [PlaceRecord::new("A", "Nowhere", Point::new(f64::NAN, 0.0))];
        let result = Graph::build(&records, 5.0);
        assert!(matches!(result, Err(PathPlannerError::KdTreeError(_))));
    }

    #[test]
    fn test_empty_table() {
        let graph = Graph::build(&[], 5.0).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.connections().count(), 0);
    }
}

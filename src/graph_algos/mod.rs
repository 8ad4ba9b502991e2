pub mod depth_first;
pub mod breadth_first;
pub mod greedy;
mod algorithm;
mod search_tree;

pub use algorithm::Algorithm;

use crate::collections::FxIndexMap;

/// Type alias for the visited map used by the search algorithms
/// N: Node - space on a graph
/// The value is the index of the parent node in the map,
/// ROOT for the start node to indicate it has no parent
pub type SearchTree<N> = FxIndexMap<N, usize>;

/// Parent index of the start node
pub(crate) const ROOT: usize = usize::MAX;

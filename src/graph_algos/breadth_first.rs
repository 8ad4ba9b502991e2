use crate::errors::PathPlannerError;
use super::search_tree::trace_path;
use super::{SearchTree, ROOT};

use std::{collections::VecDeque, hash::Hash, fmt::Debug};
use indexmap::map::Entry::Vacant;


/// Breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Expands level by level, so the returned path has the fewest edges.
/// Edge weights are ignored.
/// Nodes are marked visited when enqueued and are never enqueued twice.
pub fn breadth_first<N, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, PathPlannerError>
where 
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Discovered nodes, node -> parent index
    // for the start node, the parent index is ROOT to indicate it has no parent
    let mut visited: SearchTree<N> = SearchTree::default();
    let start_index = visited.insert_full(start, ROOT).0;

    // Frontier - first in, first out, stores indices into `visited`
    let mut queue: VecDeque<usize> = VecDeque::from([start_index]);

    while let Some(index) = queue.pop_front() {

        let Some((node, _)) = visited.get_index(index) else {
            return Err(PathPlannerError::NoPathFound);
        };

        if goal(node) {
            return trace_path(&visited, index);
        }

        let node = node.clone();
        for neighbor in neighbors(&node) {
            if let Vacant(e) = visited.entry(neighbor) {
                queue.push_back(e.index());
                e.insert(index);
            }
        }
    }

    Err(PathPlannerError::NoPathFound)
}

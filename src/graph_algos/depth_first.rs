use crate::errors::PathPlannerError;
use super::search_tree::path_through;
use super::{SearchTree, ROOT};

use std::{hash::Hash, fmt::Debug};


/// Depth-first search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// Returns the first path that reaches the goal, not necessarily the shortest.
/// Neighbors are explored in the order `neighbors` yields them.
/// Nodes are marked visited when popped, so a node may sit on the stack several times;
/// copies popped after the first expansion are discarded.
pub fn depth_first<N, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, PathPlannerError>
where 
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Frontier - last in, first out
    // Each entry carries the index of the node it was reached from in `visited`
    let mut stack: Vec<(N, usize)> = vec![(start, ROOT)];

    // Expanded nodes, node -> parent index
    let mut visited: SearchTree<N> = SearchTree::default();

    while let Some((node, parent_index)) = stack.pop() {

        if goal(&node) {
            return path_through(&visited, parent_index, node);
        }

        if visited.contains_key(&node) {
            continue;
        }

        let successors: Vec<N> = neighbors(&node)
            .into_iter()
            .filter(|neighbor| !visited.contains_key(neighbor))
            .collect();
        let index = visited.insert_full(node, parent_index).0;

        // push in reverse so the first neighbor is popped first
        for successor in successors.into_iter().rev() {
            stack.push((successor, index));
        }
    }

    Err(PathPlannerError::NoPathFound)
}

use crate::errors::PathPlannerError;
use super::search_tree::path_through;
use super::{SearchTree, ROOT};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use rustc_hash::FxHashSet;


/// Nearest-neighbor walk
/// From the current node, step to the unvisited neighbor with the cheapest edge.
/// There is no frontier and no backtracking: reaching a node with no unvisited
/// neighbor ends the walk with NoPathFound, even if the goal is reachable another way.
/// On equal edge costs the neighbor yielded first wins.
pub fn nearest_neighbor<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, PathPlannerError>
where 
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: PartialOrd + Copy,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut path: Vec<N> = vec![start.clone()];
    let mut current = start;

    while !goal(&current) {
        visited.insert(current.clone());

        let mut nearest: Option<(N, C)> = None;
        for (neighbor, cost) in neighbors(&current) {
            if visited.contains(&neighbor) {
                continue;
            }
            let closer = match &nearest {
                Some((_, best)) => cost < *best,
                None => true,
            };
            if closer {
                nearest = Some((neighbor, cost));
            }
        }

        // dead end
        let Some((next, _)) = nearest else {
            return Err(PathPlannerError::NoPathFound);
        };
        path.push(next.clone());
        current = next;
    }

    Ok(path)
}


/// Entry on the best-first frontier
struct Candidate<N, H> {
    node: N,
    parent_index: usize, // index of the node this was reached from in the closed list
    h_cost: H, // estimated distance to the goal
    order: usize, // push order, breaks ties first-in-first-out
}

// BinaryHeap is a max-heap: lower h_cost, then earlier push, compares greater
impl<N, H: PartialOrd> Ord for Candidate<N, H> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.h_cost
            .partial_cmp(&self.h_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.order.cmp(&self.order))
    }
}
impl<N, H: PartialOrd> PartialOrd for Candidate<N, H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N, H: PartialOrd> PartialEq for Candidate<N, H> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<N, H: PartialOrd> Eq for Candidate<N, H> {}


/// Greedy best-first search
/// https://en.wikipedia.org/wiki/Best-first_search
/// The frontier is ordered purely by `heuristic_fn` (estimated distance to the goal),
/// accumulated cost plays no part, so the result is not guaranteed to be the cheapest path.
/// Nodes are marked visited when popped.
pub fn best_first<N, H, IT, NN, HF, G>(start: N, neighbors: NN, heuristic_fn: HF, goal: G) -> Result<Vec<N>, PathPlannerError>
where 
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    HF: Fn(&N) -> H, // heuristic function
    H: PartialOrd + Copy,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Open List - nodes waiting to be evaluated, lowest heuristic first
    let mut open_list: BinaryHeap<Candidate<N, H>> = BinaryHeap::new();

    // Evaluated nodes, node -> parent index
    let mut closed_list: SearchTree<N> = SearchTree::default();

    let mut order = 0;
    let h_cost = heuristic_fn(&start);
    open_list.push(Candidate {
        node: start,
        parent_index: ROOT,
        h_cost,
        order,
    });

    while let Some(Candidate { node, parent_index, .. }) = open_list.pop() {

        if goal(&node) {
            return path_through(&closed_list, parent_index, node);
        }

        if closed_list.contains_key(&node) {
            continue;
        }

        let successors: Vec<N> = neighbors(&node)
            .into_iter()
            .filter(|neighbor| !closed_list.contains_key(neighbor))
            .collect();
        let index = closed_list.insert_full(node, parent_index).0;

        for successor in successors {
            order += 1;
            let h_cost = heuristic_fn(&successor);
            open_list.push(Candidate {
                node: successor,
                parent_index: index,
                h_cost,
                order,
            });
        }
    }

    Err(PathPlannerError::NoPathFound)
}

use crate::errors::PathPlannerError;
use super::{SearchTree, ROOT};

/// Construct the path from the root of the search tree to the node at `index`
/// Returns the ordered path as a vector of nodes from start to that node
/// An index of ROOT yields an empty path
pub(crate) fn trace_path<N>(tree: &SearchTree<N>, index: usize) -> Result<Vec<N>, PathPlannerError>
where 
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = index;

    // Trace back to the start - parents always sit at a lower index
    while current_index != ROOT {
        if let Some((node, &parent_index)) = tree.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            return Err(PathPlannerError::NoPathFound);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}

/// Path to a node that was reached from `parent_index` but never added to the tree
pub(crate) fn path_through<N>(tree: &SearchTree<N>, parent_index: usize, node: N) -> Result<Vec<N>, PathPlannerError>
where 
    N: Clone,
{
    let mut path = trace_path(tree, parent_index)?;
    path.push(node);
    Ok(path)
}

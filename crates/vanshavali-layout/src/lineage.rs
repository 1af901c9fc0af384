use std::collections::HashSet;

use tracing::warn;

use crate::index::GraphIndex;
use crate::LineageError;

/// Ancestors (root first), the focus target, and its direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage {
    pub ancestors: Vec<String>,
    pub target: String,
    /// Dataset edge order.
    pub children: Vec<String>,
}

impl Lineage {
    /// Ancestors followed by the target.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.ancestors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.target.as_str()))
    }

    pub fn path_len(&self) -> usize {
        self.ancestors.len() + 1
    }

    pub fn contains(&self, id: &str) -> bool {
        self.target == id || self.is_ancestor(id) || self.is_child(id)
    }

    pub fn is_ancestor(&self, id: &str) -> bool {
        self.ancestors.iter().any(|ancestor| ancestor == id)
    }

    pub fn is_child(&self, id: &str) -> bool {
        self.children.iter().any(|child| child == id)
    }
}

pub fn resolve_ancestors(index: &GraphIndex, id: &str) -> Result<Vec<String>, LineageError> {
    let mut visited = HashSet::new();
    visited.insert(id);

    let mut ancestors = Vec::new();
    let mut current = id;
    while let Some(parent) = index.parent_of(current) {
        if !visited.insert(parent) {
            warn!(start = id, repeated = parent, "cycle in parent chain");
            return Err(LineageError::Cycle {
                start: id.to_string(),
                repeated: parent.to_string(),
            });
        }
        ancestors.push(parent.to_string());
        current = parent;
    }

    ancestors.reverse();
    Ok(ancestors)
}

pub fn resolve_children(index: &GraphIndex, id: &str) -> Vec<String> {
    index.children_of(id).to_vec()
}

pub fn resolve_lineage(index: &GraphIndex, id: &str) -> Result<Lineage, LineageError> {
    if index.is_decoration(id) || !index.contains(id) {
        return Err(LineageError::InvalidTarget(id.to_string()));
    }

    Ok(Lineage {
        ancestors: resolve_ancestors(index, id)?,
        target: id.to_string(),
        children: resolve_children(index, id),
    })
}

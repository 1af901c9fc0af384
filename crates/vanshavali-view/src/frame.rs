use serde::Serialize;
use vanshavali_data::Point;
use vanshavali_layout::{GraphIndex, Lineage, PositionMap};

use crate::ViewState;

/// Styling hints for the rendering surface. They carry no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoleTags {
    pub selected: bool,
    pub ancestor: bool,
    pub child: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub name: String,
    pub position: Point,
    pub hidden: bool,
    pub decoration: bool,
    pub roles: RoleTags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub id: String,
    pub parent: String,
    pub child: String,
    pub hidden: bool,
    pub highlighted: bool,
}

/// The person shown in the host's details card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub id: String,
    pub name: String,
}

/// Complete replacement node and edge lists for one view state. People come
/// in dataset order, the decoration last, edges in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub state: ViewState,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub selection: Option<Selection>,
}

impl Frame {
    pub fn overview(index: &GraphIndex, baseline: &PositionMap) -> Self {
        let nodes = node_views(index, baseline, |_| Some(RoleTags::default()));
        let edges = index
            .dataset()
            .edges
            .iter()
            .map(|edge| EdgeView {
                id: edge.id.clone(),
                parent: edge.parent.clone(),
                child: edge.child.clone(),
                hidden: false,
                highlighted: false,
            })
            .collect();

        Self {
            state: ViewState::Overview,
            nodes,
            edges,
            selection: None,
        }
    }

    /// Lineage members are shown at their lineage positions; everything
    /// else, the decoration included, is hidden at its baseline position.
    pub fn focused(
        index: &GraphIndex,
        lineage: &Lineage,
        positions: &PositionMap,
        baseline: &PositionMap,
    ) -> Self {
        let mut nodes = node_views(index, baseline, |id| {
            lineage.contains(id).then(|| RoleTags {
                selected: lineage.target == id,
                ancestor: lineage.is_ancestor(id),
                child: lineage.is_child(id),
            })
        });
        for node in &mut nodes {
            if let Some(at) = positions.get(&node.id) {
                node.position = *at;
            }
        }

        let edges = index
            .dataset()
            .edges
            .iter()
            .map(|edge| {
                let visible = lineage.contains(&edge.parent) && lineage.contains(&edge.child);
                EdgeView {
                    id: edge.id.clone(),
                    parent: edge.parent.clone(),
                    child: edge.child.clone(),
                    hidden: !visible,
                    highlighted: visible,
                }
            })
            .collect();

        let selection = index.person(&lineage.target).map(|person| Selection {
            id: person.id.clone(),
            name: person.name.clone(),
        });

        Self {
            state: ViewState::Focused(lineage.target.clone()),
            nodes,
            edges,
            selection,
        }
    }

    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeView> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &NodeView> {
        self.nodes.iter().filter(|node| !node.hidden)
    }

    pub fn visible_edges(&self) -> impl Iterator<Item = &EdgeView> {
        self.edges.iter().filter(|edge| !edge.hidden)
    }
}

/// `roles` returns `None` for nodes that should be hidden. The decoration
/// is only ever visible in the overview, where nothing is tagged.
fn node_views(
    index: &GraphIndex,
    baseline: &PositionMap,
    roles: impl Fn(&str) -> Option<RoleTags>,
) -> Vec<NodeView> {
    let dataset = index.dataset();
    let mut nodes: Vec<NodeView> = dataset
        .people
        .iter()
        .map(|person| {
            let tags = roles(&person.id);
            NodeView {
                id: person.id.clone(),
                name: person.name.clone(),
                position: baseline.get(&person.id).copied().unwrap_or(person.position),
                hidden: tags.is_none(),
                decoration: false,
                roles: tags.unwrap_or_default(),
            }
        })
        .collect();

    if let Some(decoration) = &dataset.decoration {
        let hidden = roles(&decoration.id).is_none();
        nodes.push(NodeView {
            id: decoration.id.clone(),
            name: decoration.name.clone(),
            position: baseline
                .get(&decoration.id)
                .copied()
                .unwrap_or(decoration.position),
            hidden,
            decoration: true,
            roles: RoleTags::default(),
        });
    }
    nodes
}

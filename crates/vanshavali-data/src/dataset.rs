use std::collections::HashSet;

use tracing::debug;

use crate::model::Dataset;
use crate::{DataError, Result};

const BUNDLED_DATASET_JSON: &str = include_str!("../data/family.json");

/// The family tree shipped with the application.
pub fn bundled_dataset() -> Result<Dataset> {
    parse_dataset(BUNDLED_DATASET_JSON)
}

pub fn parse_dataset(input: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(input)?;
    validate_dataset(&dataset)?;
    debug!(
        people = dataset.people.len(),
        edges = dataset.edges.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Checks id uniqueness and edge endpoints. Parent multiplicity and cycles
/// are left to the graph index and the lineage walk.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let mut people = HashSet::new();
    for person in &dataset.people {
        if !people.insert(person.id.as_str()) {
            return Err(DataError::DuplicatePerson(person.id.clone()));
        }
    }

    if let Some(decoration) = &dataset.decoration {
        if people.contains(decoration.id.as_str()) {
            return Err(DataError::DecorationCollision(decoration.id.clone()));
        }
    }

    let mut edges = HashSet::new();
    for edge in &dataset.edges {
        if !edges.insert(edge.id.as_str()) {
            return Err(DataError::DuplicateEdge(edge.id.clone()));
        }
        for endpoint in [&edge.parent, &edge.child] {
            if !people.contains(endpoint.as_str()) && !dataset.is_decoration(endpoint) {
                return Err(DataError::UnknownEndpoint {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
    }

    Ok(())
}

use std::collections::HashMap;

use tracing::debug;
use vanshavali_data::{validate_dataset, Dataset, Person};

use crate::IndexError;

/// Adjacency over the people of a dataset, built once.
///
/// Edges that touch the decoration node are display-only and take no part in
/// parent or child lookups.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    dataset: Dataset,
    people: HashMap<String, usize>,
    children: HashMap<String, Vec<String>>,
    parents: HashMap<String, String>,
}

impl GraphIndex {
    pub fn build(dataset: Dataset) -> Result<Self, IndexError> {
        validate_dataset(&dataset)?;

        let mut people = HashMap::with_capacity(dataset.people.len());
        for (idx, person) in dataset.people.iter().enumerate() {
            people.insert(person.id.clone(), idx);
        }

        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        let mut parents: HashMap<String, String> = HashMap::new();
        for edge in &dataset.edges {
            if dataset.is_decoration(&edge.parent) || dataset.is_decoration(&edge.child) {
                continue;
            }
            if let Some(existing) = parents.get(&edge.child) {
                return Err(IndexError::MultipleParents {
                    child: edge.child.clone(),
                    first: existing.clone(),
                    second: edge.parent.clone(),
                });
            }
            parents.insert(edge.child.clone(), edge.parent.clone());
            children
                .entry(edge.parent.clone())
                .or_default()
                .push(edge.child.clone());
        }

        debug!(
            people = people.len(),
            links = parents.len(),
            "graph index built"
        );

        Ok(Self {
            dataset,
            people,
            children,
            parents,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id).map(|&idx| &self.dataset.people[idx])
    }

    /// Position of a person in the dataset's people list.
    pub fn order_of(&self, id: &str) -> Option<usize> {
        self.people.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    pub fn is_decoration(&self, id: &str) -> bool {
        self.dataset.is_decoration(id)
    }

    /// Children in dataset edge order.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    /// People without a parent, in dataset order.
    pub fn roots(&self) -> impl Iterator<Item = &Person> {
        self.dataset
            .people
            .iter()
            .filter(|person| !self.parents.contains_key(&person.id))
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A named member of the family tree. `position` is the hand-authored
/// reference layout and is never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub position: Point,
}

/// Banner placeholder drawn above the tree. Its position is already in
/// layout space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: String,
    pub name: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parentage {
    pub id: String,
    pub parent: String,
    pub child: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub decoration: Option<Decoration>,
    pub people: Vec<Person>,
    pub edges: Vec<Parentage>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn is_decoration(&self, id: &str) -> bool {
        self.decoration
            .as_ref()
            .is_some_and(|decoration| decoration.id == id)
    }

    pub fn add_person(&mut self, id: &str, name: &str, x: f32, y: f32) -> &mut Self {
        self.people.push(Person {
            id: id.to_string(),
            name: name.to_string(),
            position: Point::new(x, y),
        });
        self
    }

    pub fn add_edge(&mut self, parent: &str, child: &str) -> &mut Self {
        self.edges.push(Parentage {
            id: format!("e{parent}-{child}"),
            parent: parent.to_string(),
            child: child.to_string(),
        });
        self
    }

    pub fn with_decoration(mut self, id: &str, name: &str, x: f32, y: f32) -> Self {
        self.decoration = Some(Decoration {
            id: id.to_string(),
            name: name.to_string(),
            position: Point::new(x, y),
        });
        self
    }
}

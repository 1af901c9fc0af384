mod dataset;
mod model;
pub mod translit;

pub use dataset::{bundled_dataset, parse_dataset, validate_dataset};
pub use model::{Dataset, Decoration, Parentage, Person, Point};
pub use translit::transliterate;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("person id `{0}` appears more than once")]
    DuplicatePerson(String),

    #[error("edge id `{0}` appears more than once")]
    DuplicateEdge(String),

    #[error("decoration id `{0}` is also used by a person")]
    DecorationCollision(String),

    #[error("edge `{edge}` refers to unknown node `{node}`")]
    UnknownEndpoint { edge: String, node: String },
}

mod controller;
mod frame;
mod search;
mod surface;

pub use controller::{Controller, ControllerOptions};
pub use frame::{EdgeView, Frame, NodeView, RoleTags, Selection};
pub use search::find_by_name;
pub use surface::{FitRequest, RecordingSurface, Surface};

use serde::Serialize;
use thiserror::Error;
use vanshavali_layout::{IndexError, LineageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "target", rename_all = "lowercase")]
pub enum ViewState {
    Overview,
    Focused(String),
}

impl ViewState {
    pub fn target(&self) -> Option<&str> {
        match self {
            ViewState::Overview => None,
            ViewState::Focused(id) => Some(id),
        }
    }
}

/// Input events from the host. `Back` and `Home` come from the step
/// navigation header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    NodeSelect(String),
    BackgroundSelect,
    SearchSubmit(String),
    Back,
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Transitioned,
    Ignored,
    Refused(FocusError),
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Index(#[from] IndexError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    #[error("`{0}` cannot be focused")]
    InvalidTarget(String),

    #[error("parent chain of `{start}` loops back through `{repeated}`")]
    Cycle { start: String, repeated: String },

    #[error("name \"{0}\" not found in family tree")]
    SearchNotFound(String),

    #[error("`{0}` is already in focus")]
    AlreadyFocused(String),

    #[error("this is {name}, end of lineage")]
    EndOfLineage { id: String, name: String },

    #[error("the family tree has no root")]
    EmptyTree,
}

impl FocusError {
    /// Errors the user caused and should hear about.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            FocusError::SearchNotFound(_) | FocusError::EndOfLineage { .. }
        )
    }

    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            FocusError::InvalidTarget(_) | FocusError::AlreadyFocused(_) | FocusError::EmptyTree
        )
    }
}

impl From<LineageError> for FocusError {
    fn from(err: LineageError) -> Self {
        match err {
            LineageError::InvalidTarget(id) => FocusError::InvalidTarget(id),
            LineageError::Cycle { start, repeated } => FocusError::Cycle { start, repeated },
        }
    }
}

use thiserror::Error;
use vanshavali_data::DataError;
use vanshavali_layout::LineageError;
use vanshavali_view::{FocusError, ViewError};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Lineage(#[from] LineageError),

    #[error(transparent)]
    Focus(#[from] FocusError),

    #[error("`{0}` is not a person in this tree")]
    NotAPerson(String),

    #[error("unrecognised session command: {0}")]
    BadCommand(String),
}

impl CliError {
    /// Refused interactions exit with 2, everything else with 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Focus(_) | Self::NotAPerson(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use vanshavali_view::FocusError;

    #[test]
    fn refused_focus_exits_with_two() {
        let error = CliError::from(FocusError::SearchNotFound("x".to_string()));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "name \"x\" not found in family tree");
    }

    #[test]
    fn bad_command_exits_with_one() {
        assert_eq!(CliError::BadCommand("jump".to_string()).exit_code(), 1);
    }
}

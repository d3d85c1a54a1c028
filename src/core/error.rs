use thiserror::Error;

/// Errors raised by team selection and report generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Project with ID {0} not found")]
    ProjectNotFound(String),
}

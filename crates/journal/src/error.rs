use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Inconsistent trade lifecycle: {0}")]
    InconsistentLifecycle(String),

    #[error("Invalid value for trade field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error(transparent)]
    Discipline(#[from] discipline::DisciplineError),
}

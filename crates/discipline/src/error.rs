use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisciplineError {
    #[error("Invalid discipline settings: {0}")]
    InvalidSettings(#[from] core_types::CoreError),
}

use thiserror::Error;

/// Ошибки операций над записью предприятия
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Name is required")]
    NameRequired,

    #[error("machine index {index} is out of range (len {len})")]
    MachineIndexOutOfRange { index: usize, len: usize },

    #[error("unknown field: {0}")]
    UnknownField(String),
}

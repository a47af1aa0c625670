#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("Unknown flag label: {0:?}")]
    UnknownLabel(String),
}

pub type Result<T> = std::result::Result<T, FlagError>;

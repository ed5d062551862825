use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JPathError {
    #[error("Field path is empty")]
    EmptyPath,

    #[error("Field path '{0}' contains an empty segment")]
    EmptySegment(String),
}

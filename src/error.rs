use thiserror::Error;

/// Returned when the smallest or largest value of an empty tree is requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("tree is empty")]
pub struct EmptyTreeError;

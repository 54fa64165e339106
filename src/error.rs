use thiserror::Error;

/// Errors raised by graph construction, queries, and the benchmark driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vertex not found in graph")]
    VertexNotFound,

    #[error("{solver} solver returned a set that does not dominate the graph")]
    NotDominating { solver: &'static str },
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

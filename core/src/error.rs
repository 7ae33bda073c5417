use thiserror::Error;

/// Errors raised by the graph, the strategies and the comparison runner.
///
/// An unreachable goal is not an error; it is reported through
/// [`SearchResult::is_found`](crate::SearchResult::is_found).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("city '{0}' not found in graph")]
    NodeNotFound(String),

    #[error("no road between '{from}' and '{to}'")]
    MissingEdge { from: String, to: String },

    #[error("invalid distance {distance} for road '{from}' - '{to}'")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("no valid algorithm selected")]
    NoValidAlgorithm,
}

pub type Result<T> = std::result::Result<T, SearchError>;

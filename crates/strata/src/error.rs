use crate::graphlib::EdgeKey;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains an edge with a missing endpoint: {edge}")]
    MissingEndpoint { edge: EdgeKey },

    #[error("invalid layout option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("invalid layout options document: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

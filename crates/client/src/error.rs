//! Outcomes of feed and submit operations.

use gratitude_shared::ApiError;

/// A form field that must be filled in before posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Author,
    Message,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingField::Author => f.write_str("author"),
            MissingField::Message => f.write_str("message"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("failed to load posts: {0}")]
    Api(#[from] ApiError),
    #[error("pages start at 1")]
    InvalidPage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Nothing was sent.
    #[error("{0} is required")]
    Incomplete(MissingField),
    /// Another post is still in flight; nothing was sent.
    #[error("a post is already being submitted")]
    InFlight,
    #[error("failed to submit post: {0}")]
    Api(#[from] ApiError),
}

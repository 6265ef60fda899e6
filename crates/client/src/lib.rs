//! Husky Gratitude Board client
//!
//! A Dioxus application where students post short gratitude notes to a
//! shared board. Runs in the browser (WASM) and on desktop.
//!
//! The UI-independent pieces live in [`feed`] and [`submit`]; the components
//! mirror their state through the context built in [`hooks`].

pub mod logging;

pub mod api_client;
pub mod config;
pub mod error;
pub mod feed;
pub mod palette;
pub mod submit;
pub mod timer;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

#[cfg(test)]
mod testing;

pub use api_client::{ApiClient, PostsApi};
pub use config::{AuthorPolicy, BoardConfig, Pagination};
pub use error::{FeedError, MissingField, SubmitError};
pub use feed::{keep_fresh, refresh_every, FeedController, FeedSnapshot, LoadOutcome, SkipReason};
pub use routes::Route;
pub use submit::{FormState, PostSubmitter, SubmitStatus, SuccessFlash};

//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::Board;

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Board {},
}

//! Gratitude board components.

pub mod post_card;
pub mod post_form;
pub mod post_grid;
pub mod success_banner;

pub use post_card::PostCard;
pub use post_form::PostForm;
pub use post_grid::PostGrid;
pub use success_banner::SuccessBanner;

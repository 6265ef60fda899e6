//! UI primitives (Button, Card, inputs, Select)

pub mod button;
pub mod card;
pub mod input;
pub mod select;

pub use button::*;
pub use card::*;
pub use input::*;
pub use select::*;

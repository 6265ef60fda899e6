//! Card colors and tilt.

use sha2::{Digest, Sha256};

/// Background classes cycled by card position.
pub const CARD_PALETTE: [&str; 5] = [
    "bg-red-200",
    "bg-yellow-200",
    "bg-green-200",
    "bg-blue-200",
    "bg-purple-200",
];

pub fn card_color(index: usize) -> &'static str {
    CARD_PALETTE[index % CARD_PALETTE.len()]
}

/// Slight rotation of a card, one of -1, 0 or 1 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tilt {
    Left,
    Level,
    Right,
}

impl Tilt {
    pub fn class(self) -> &'static str {
        match self {
            Tilt::Left => "-rotate-1",
            Tilt::Level => "rotate-0",
            Tilt::Right => "rotate-1",
        }
    }
}

/// Tilt derived from the post id, so a card keeps its angle across renders.
pub fn card_tilt(post_id: &str) -> Tilt {
    let digest = Sha256::digest(post_id.as_bytes());
    match digest[0] % 3 {
        0 => Tilt::Left,
        1 => Tilt::Level,
        _ => Tilt::Right,
    }
}

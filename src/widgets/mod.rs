//! Headless models of the page's interactive widgets. Each keeps the class
//! state of its elements and reacts to the events the host forwards to it.

pub mod classes;
pub mod files;
pub mod filter;
pub mod timeline;
pub mod timers;

use std::time::Duration;

pub use classes::ClassList;
pub use files::{FilePanel, IntersectionEntry};
pub use filter::CardFilter;
pub use timeline::{Rect, Timeline, TimelineGeometry};
pub use timers::{TimerId, Timers};

/// How long scrolling has to pause before it counts as settled.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Center,
    Nearest,
}

/// A smooth scroll the host should perform to bring element `target` into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: usize,
    pub block: ScrollBlock,
    pub inline_center: bool,
}

impl ScrollRequest {
    pub fn center(target: usize) -> ScrollRequest {
        ScrollRequest {
            target,
            block: ScrollBlock::Center,
            inline_center: false,
        }
    }

    pub fn nearest(target: usize) -> ScrollRequest {
        ScrollRequest {
            target,
            block: ScrollBlock::Nearest,
            inline_center: false,
        }
    }
}

use std::time::Duration;

use super::classes::ClassList;
use super::timers::{TimerId, Timers};
use super::{ScrollRequest, SCROLL_SETTLE};

pub const ACTIVE: &str = "active";
pub const COMPLETED: &str = "completed";

/// Items closer to the viewport center than this are highlighted.
const HIGHLIGHT_THRESHOLD: f64 = 0.8;

/// Vertical extent of an element relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Rect {
        Rect { top, height }
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.
    }
}

/// What the host measured for the timeline at the time of an update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineGeometry {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub timeline: Rect,
    pub items: Vec<Rect>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineItem {
    pub dot: ClassList,
    pub content: ClassList,
}

#[derive(Debug)]
struct ScrollSettled;

/// Highlights the timeline item nearest the middle of the viewport and
/// fills the progress bar as the page scrolls.
#[derive(Debug)]
pub struct Timeline {
    items: Vec<TimelineItem>,
    progress_percent: f64,
    scrolling: bool,
    // Geometry of the last scroll, applied on the next frame.
    pending: Option<TimelineGeometry>,
    timers: Timers<ScrollSettled>,
    settle: Option<TimerId>,
}

impl Timeline {
    pub fn new(item_count: usize) -> Timeline {
        Timeline {
            items: vec![TimelineItem::default(); item_count],
            progress_percent: 0.,
            scrolling: false,
            pending: None,
            timers: Timers::new(),
            settle: None,
        }
    }

    /// Recomputes every item state. Snaps are only requested while the page is not scrolling.
    pub fn update(&mut self, geometry: &TimelineGeometry) -> Vec<ScrollRequest> {
        let viewport_center = geometry.viewport_height / 2.;
        let mut snaps = Vec::new();

        for (index, (item, rect)) in self.items.iter_mut().zip(&geometry.items).enumerate() {
            let distance = (rect.center() - viewport_center).abs();
            let closeness = 1. - (distance / viewport_center).min(1.);

            if closeness > HIGHLIGHT_THRESHOLD {
                if !self.scrolling {
                    snaps.push(ScrollRequest::center(index));
                }
                item.dot.add(ACTIVE);
                item.content.add(ACTIVE);
                if rect.top < viewport_center {
                    item.dot.add(COMPLETED);
                    item.content.add(COMPLETED);
                    item.content.remove(ACTIVE);
                }
            } else {
                item.dot.remove(ACTIVE);
                item.content.remove(ACTIVE);
                if rect.top > viewport_center {
                    item.dot.remove(COMPLETED);
                    item.content.remove(COMPLETED);
                }
            }
        }

        self.progress_percent = if geometry.timeline.height > 0. {
            ((geometry.scroll_y - geometry.timeline.top + viewport_center)
                / geometry.timeline.height
                * 100.)
                .clamp(0., 100.)
        } else {
            0.
        };
        snaps
    }

    /// A page scroll: marks the page as scrolling, re-arms the settle timer
    /// and queues an update for the next frame. Several scrolls within one
    /// frame collapse into a single update with the latest geometry.
    pub fn on_scroll(&mut self, geometry: TimelineGeometry) {
        self.scrolling = true;
        if let Some(id) = self.settle.take() {
            self.timers.cancel(id);
        }
        self.settle = Some(self.timers.schedule(SCROLL_SETTLE, ScrollSettled));
        self.pending = Some(geometry);
    }

    /// Runs the queued update, then settles scrolling once it has paused long enough.
    pub fn advance(&mut self, now: Duration) -> Vec<ScrollRequest> {
        let snaps = match self.pending.take() {
            Some(geometry) => self.update(&geometry),
            None => Vec::new(),
        };
        if !self.timers.advance(now).is_empty() {
            self.scrolling = false;
            self.settle = None;
        }
        snaps
    }

    pub fn has_pending_update(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }
}

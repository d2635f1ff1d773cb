use log::debug;
use std::time::Duration;

use super::classes::ClassList;
use super::timers::{TimerId, Timers};
use super::{ScrollBlock, ScrollRequest, SCROLL_SETTLE};

pub const EXPANDED: &str = "expanded";
pub const PREVIEW_VISIBLE: &str = "preview-visible";

/// Share of a file that must be visible in the panel to preview it.
pub const PREVIEW_THRESHOLD: f64 = 0.7;

const PREVIEW_HIDE_DELAY: Duration = Duration::from_millis(200);
const GLYPH_DELAY: Duration = Duration::from_millis(250);
const EXPAND_SCROLL_DELAY: Duration = Duration::from_millis(100);

const COLLAPSED_GLYPH: char = '+';
const EXPANDED_GLYPH: char = '×';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandButton {
    pub rotation_deg: u16,
    pub glyph: char,
}

impl Default for ExpandButton {
    fn default() -> Self {
        ExpandButton {
            rotation_deg: 0,
            glyph: COLLAPSED_GLYPH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FileEntry {
    /// Position in the list, used to stagger the reveal animation.
    pub index: usize,
    pub classes: ClassList,
    pub button: ExpandButton,
}

impl FileEntry {
    pub fn is_expanded(&self) -> bool {
        self.classes.contains(EXPANDED)
    }

    pub fn is_previewed(&self) -> bool {
        self.classes.contains(PREVIEW_VISIBLE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: usize,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn from_ratio(target: usize, ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            target,
            is_intersecting: ratio >= PREVIEW_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum PanelAction {
    HidePreview(usize),
    SetGlyph(usize, char),
    ScrollTo(usize),
    ScrollSettled,
}

/// A folder of files that preview as they scroll into view and expand on click.
/// At most one file is expanded at a time.
#[derive(Debug)]
pub struct FilePanel {
    files: Vec<FileEntry>,
    scrolling: bool,
    timers: Timers<PanelAction>,
    settle: Option<TimerId>,
}

impl FilePanel {
    pub fn new(file_count: usize) -> FilePanel {
        FilePanel {
            files: (0..file_count)
                .map(|index| FileEntry {
                    index,
                    classes: ClassList::new(),
                    button: ExpandButton::default(),
                })
                .collect(),
            scrolling: false,
            timers: Timers::new(),
            settle: None,
        }
    }

    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<ScrollRequest> {
        let mut scrolls = Vec::new();
        for entry in entries {
            let file = match self.files.get_mut(entry.target) {
                Some(file) => file,
                None => continue,
            };
            if entry.is_intersecting && !self.scrolling {
                file.classes.add(PREVIEW_VISIBLE);
                scrolls.push(ScrollRequest {
                    target: entry.target,
                    block: ScrollBlock::Nearest,
                    inline_center: true,
                });
            } else if !file.is_expanded() {
                self.timers
                    .schedule(PREVIEW_HIDE_DELAY, PanelAction::HidePreview(entry.target));
            }
        }
        scrolls
    }

    /// Toggles file `index` and collapses every other one. Returns false for an unknown file.
    pub fn on_click(&mut self, index: usize) -> bool {
        let was_expanded = match self.files.get(index) {
            Some(file) => file.is_expanded(),
            None => return false,
        };
        for other in 0..self.files.len() {
            if other != index {
                self.collapse(other);
            }
        }
        if was_expanded {
            self.collapse(index);
        } else {
            let file = &mut self.files[index];
            file.classes.add(EXPANDED);
            file.button.rotation_deg = 45;
            self.timers
                .schedule(GLYPH_DELAY, PanelAction::SetGlyph(index, EXPANDED_GLYPH));
            self.timers
                .schedule(EXPAND_SCROLL_DELAY, PanelAction::ScrollTo(index));
        }
        debug!("File {} {}", index, if was_expanded { "collapsed" } else { "expanded" });
        true
    }

    fn collapse(&mut self, index: usize) {
        let file = &mut self.files[index];
        file.classes.remove(EXPANDED);
        file.button.rotation_deg = 0;
        self.timers
            .schedule(GLYPH_DELAY, PanelAction::SetGlyph(index, COLLAPSED_GLYPH));
    }

    pub fn on_scroll(&mut self) {
        self.scrolling = true;
        if let Some(id) = self.settle.take() {
            self.timers.cancel(id);
        }
        self.settle = Some(self.timers.schedule(SCROLL_SETTLE, PanelAction::ScrollSettled));
    }

    /// Applies the deferred effects due by `now` and returns the scrolls they request.
    pub fn advance(&mut self, now: Duration) -> Vec<ScrollRequest> {
        let mut scrolls = Vec::new();
        for action in self.timers.advance(now) {
            match action {
                PanelAction::HidePreview(index) => {
                    self.files[index].classes.remove(PREVIEW_VISIBLE);
                }
                PanelAction::SetGlyph(index, glyph) => {
                    self.files[index].button.glyph = glyph;
                }
                PanelAction::ScrollTo(index) => {
                    scrolls.push(ScrollRequest::nearest(index));
                }
                PanelAction::ScrollSettled => {
                    self.scrolling = false;
                    self.settle = None;
                }
            }
        }
        scrolls
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn expanded(&self) -> Option<usize> {
        self.files.iter().position(FileEntry::is_expanded)
    }
}

use log::{debug, info};
use rand::Rng;
use std::time::Duration;

use crate::background::Mount;
use crate::config::AppConfig;
use crate::coordinator::{MultiContainerBalls, Transfer};
use crate::simulation::FrameSource;
use crate::widgets::{CardFilter, FilePanel, ScrollRequest, Timeline};

/// The page's interactive widgets. They are independent of the balls and of each other.
#[derive(Debug)]
pub struct Widgets {
    pub filter: CardFilter,
    pub timeline: Timeline,
    pub files: FilePanel,
}

impl Default for Widgets {
    fn default() -> Self {
        Widgets {
            filter: CardFilter::default(),
            timeline: Timeline::new(0),
            files: FilePanel::new(0),
        }
    }
}

/// What happened during one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub transfer: Option<Transfer>,
    /// Timeline items to center.
    pub snaps: Vec<ScrollRequest>,
    /// File panel entries to bring into view.
    pub scrolls: Vec<ScrollRequest>,
}

/// Owns every behavior on the page. Nothing moves until `start`, and nothing
/// moves after `stop`.
#[derive(Debug)]
pub struct App<R> {
    balls: MultiContainerBalls<R>,
    widgets: Widgets,
    running: bool,
    frames: u64,
}

impl<R: Rng> App<R> {
    pub fn new(config: &AppConfig, rng: R) -> App<R> {
        App::with_widgets(config, Widgets::default(), rng)
    }

    pub fn with_widgets(config: &AppConfig, widgets: Widgets, rng: R) -> App<R> {
        let balls = MultiContainerBalls::from_mounts(
            config.containers.iter().map(Mount::find),
            &config.background,
            config.transfer.interval(),
            rng,
        );
        App {
            balls,
            widgets,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self, now: Duration) {
        if self.running {
            return;
        }
        info!(
            "Starting with {} container(s), {} ball(s)",
            self.balls.instances().len(),
            self.balls.total_balls()
        );
        self.running = true;
        self.balls.start(now);
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        info!("Stopping after {} frame(s)", self.frames);
        self.running = false;
        self.balls.stop();
    }

    /// Advances everything to `now`. Ignored while stopped.
    pub fn frame(&mut self, now: Duration) -> Option<FrameReport> {
        if !self.running {
            return None;
        }
        self.frames += 1;
        self.balls.tick();
        let transfer = self.balls.poll(now);
        let snaps = self.widgets.timeline.advance(now);
        let scrolls = self.widgets.files.advance(now);
        Some(FrameReport {
            transfer,
            snaps,
            scrolls,
        })
    }

    /// Drives frames until the source runs dry or the app is stopped.
    /// Returns the number of frames run.
    pub fn run<F: FrameSource + ?Sized>(&mut self, source: &mut F) -> u64 {
        let first = self.frames;
        self.start(Duration::ZERO);
        while self.running {
            let now = match source.next_frame() {
                Some(now) => now,
                None => break,
            };
            if let Some(report) = self.frame(now) {
                if let Some(transfer) = report.transfer {
                    debug!(
                        "Frame {}: ball {} moved {} -> {}",
                        self.frames,
                        transfer.ball.get(),
                        transfer.from,
                        transfer.to
                    );
                }
            }
        }
        self.frames - first
    }

    /// Re-mounts every container from its original configuration.
    pub fn reset(&mut self) {
        self.balls.reset_all();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn balls(&self) -> &MultiContainerBalls<R> {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut MultiContainerBalls<R> {
        &mut self.balls
    }

    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut Widgets {
        &mut self.widgets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScriptedFrames;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn app() -> App<Pcg64> {
        App::new(&AppConfig::default(), Pcg64::seed_from_u64(42))
    }

    #[test]
    fn frames_are_ignored_until_started() {
        let mut app = app();
        let before: Vec<_> = app.balls().instances()[0].balls().to_vec();
        assert_eq!(app.frame(Duration::from_millis(16)), None);
        assert_eq!(app.balls().instances()[0].balls(), before.as_slice());
        assert_eq!(app.frames(), 0);
    }

    #[test]
    fn stop_halts_movement() {
        let mut app = app();
        app.start(Duration::ZERO);
        assert!(app.frame(Duration::from_millis(16)).is_some());
        app.stop();
        let before: Vec<_> = app.balls().instances()[1].balls().to_vec();
        assert_eq!(app.frame(Duration::from_millis(32)), None);
        assert_eq!(app.balls().instances()[1].balls(), before.as_slice());
        assert!(!app.is_running());
    }

    #[test]
    fn run_consumes_source() {
        let mut app = app();
        let mut frames = ScriptedFrames::every(Duration::from_millis(16), 100);
        assert_eq!(app.run(&mut frames), 100);
        assert_eq!(app.frames(), 100);
        assert_eq!(app.balls().total_balls(), 14);
    }

    #[test]
    fn transfers_happen_on_schedule() {
        let mut app = app();
        app.start(Duration::ZERO);
        let report = app.frame(Duration::from_millis(4999)).unwrap();
        assert_eq!(report.transfer, None);
        // Both containers hold balls, so the cycle cannot be skipped.
        let report = app.frame(Duration::from_millis(5000)).unwrap();
        assert!(report.transfer.is_some());
        assert_eq!(app.balls().total_balls(), 14);
    }

    #[test]
    fn file_panel_scrolls_are_reported() {
        let widgets = Widgets {
            files: FilePanel::new(2),
            ..Widgets::default()
        };
        let mut app = App::with_widgets(&AppConfig::default(), widgets, Pcg64::seed_from_u64(1));
        app.start(Duration::ZERO);
        app.widgets_mut().files.on_click(1);
        let report = app.frame(Duration::from_millis(100)).unwrap();
        assert_eq!(report.scrolls, vec![ScrollRequest::nearest(1)]);
    }
}

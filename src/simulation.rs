use log::trace;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Supplies frame timestamps, measured from the start of the run.
/// `None` means the host stopped producing frames.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Duration>;
}

/// Frames at predetermined timestamps.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFrames {
    frames: VecDeque<Duration>,
}

impl ScriptedFrames {
    /// `count` frames spaced `step` apart, the first one at `step`.
    pub fn every(step: Duration, count: u32) -> ScriptedFrames {
        (1..=count).map(|i| step * i).collect()
    }
}

impl FromIterator<Duration> for ScriptedFrames {
    fn from_iter<T: IntoIterator<Item = Duration>>(iter: T) -> Self {
        ScriptedFrames {
            frames: iter.into_iter().collect(),
        }
    }
}

impl FrameSource for ScriptedFrames {
    fn next_frame(&mut self) -> Option<Duration> {
        self.frames.pop_front()
    }
}

/// Wall-clock frames, sleeping so that frames are at least `frame_time_cap` apart.
#[derive(Debug)]
pub struct PacedFrames {
    started: Instant,
    last_frame: Instant,
    frame_time_cap: Duration,
    remaining: Option<u64>,
}

impl PacedFrames {
    /// `limit` of `None` runs until the consumer stops asking.
    pub fn new(frame_time_cap: Duration, limit: Option<u64>) -> PacedFrames {
        let now = Instant::now();
        PacedFrames {
            started: now,
            last_frame: now,
            frame_time_cap,
            remaining: limit,
        }
    }
}

impl FrameSource for PacedFrames {
    fn next_frame(&mut self) -> Option<Duration> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let frame_time = self.last_frame.elapsed();
        trace!("Frame time: {:?}", frame_time);
        if frame_time < self.frame_time_cap {
            std::thread::sleep(self.frame_time_cap - frame_time);
        }
        self.last_frame = Instant::now();
        Some(self.last_frame - self.started)
    }
}

/// A repeating timer polled from the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    period: Duration,
    next_due: Option<Duration>,
}

impl Interval {
    pub fn new(period: Duration) -> Interval {
        Interval {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Fires at most once per call. After a long stall the schedule restarts
    /// from `now` instead of firing a burst.
    pub fn poll(&mut self, now: Duration) -> bool {
        let due = match self.next_due {
            Some(due) if due <= now => due,
            _ => return false,
        };
        let next = due + self.period;
        self.next_due = Some(if next <= now { now + self.period } else { next });
        true
    }
}

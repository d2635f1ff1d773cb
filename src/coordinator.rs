use log::{debug, warn};
use rand::Rng;
use std::time::Duration;

use crate::background::{BallsBackground, Mount};
use crate::ball::BallId;
use crate::config::BackgroundConfig;
use crate::simulation::Interval;

/// A ball that changed containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub ball: BallId,
    pub from: usize,
    pub to: usize,
}

/// Sibling backgrounds that periodically hand a random ball to one another.
///
/// Fewer than two containers never transfer.
#[derive(Debug)]
pub struct MultiContainerBalls<R> {
    instances: Vec<BallsBackground>,
    interval: Interval,
    rng: R,
}

impl<R: Rng> MultiContainerBalls<R> {
    pub fn new(instances: Vec<BallsBackground>, transfer_interval: Duration, rng: R) -> Self {
        if instances.len() < 2 {
            warn!(
                "{} container(s) mounted, balls will not be transferred",
                instances.len()
            );
        }
        MultiContainerBalls {
            instances,
            interval: Interval::new(transfer_interval),
            rng,
        }
    }

    /// One background per mount point that was found.
    pub fn from_mounts<I>(
        mounts: I,
        config: &BackgroundConfig,
        transfer_interval: Duration,
        mut rng: R,
    ) -> Self
    where
        I: IntoIterator<Item = Option<Mount>>,
    {
        let instances = mounts
            .into_iter()
            .flatten()
            .map(|mount| BallsBackground::new(Some(mount), config.clone(), &mut rng))
            .collect();
        MultiContainerBalls::new(instances, transfer_interval, rng)
    }

    pub fn can_transfer(&self) -> bool {
        self.instances.len() >= 2
    }

    pub fn start(&mut self, now: Duration) {
        if self.can_transfer() {
            self.interval.start(now);
        }
    }

    pub fn stop(&mut self) {
        self.interval.stop();
    }

    pub fn tick(&mut self) {
        for instance in self.instances.iter_mut() {
            instance.tick();
        }
    }

    /// Runs a transfer cycle when the interval has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<Transfer> {
        if !self.interval.poll(now) {
            return None;
        }
        self.transfer_random()
    }

    /// Moves a random ball between two distinct random containers.
    pub fn transfer_random(&mut self) -> Option<Transfer> {
        let count = self.instances.len();
        if count < 2 {
            return None;
        }
        let from = self.rng.gen_range(0..count);
        let mut to = self.rng.gen_range(0..count - 1);
        if to >= from {
            to += 1;
        }
        self.transfer(from, to)
    }

    /// Moves a random ball of container `from` to container `to`.
    /// Skips the cycle if `from` is empty or the indices are not two distinct containers.
    pub fn transfer(&mut self, from: usize, to: usize) -> Option<Transfer> {
        if from == to || from >= self.instances.len() || to >= self.instances.len() {
            return None;
        }
        let source = &self.instances[from];
        if source.is_empty() {
            debug!("Skipping transfer: '{}' has no balls", source.name());
            return None;
        }
        let index = self.rng.gen_range(0..source.len());
        let id = source.ball_at(index)?.id();

        let ball = self.instances[from].remove(id)?;
        if let Err(ball) = self.instances[to].add(ball) {
            // Destination cannot hold balls; keep it where it was.
            let _ = self.instances[from].add(ball);
            return None;
        }
        debug!(
            "Transferred ball {} from '{}' to '{}'",
            id.get(),
            self.instances[from].name(),
            self.instances[to].name()
        );
        Some(Transfer { ball: id, from, to })
    }

    pub fn reset_all(&mut self) {
        for instance in self.instances.iter_mut() {
            instance.reset(&mut self.rng);
        }
    }

    pub fn total_balls(&self) -> usize {
        self.instances.iter().map(BallsBackground::len).sum()
    }

    pub fn instances(&self) -> &[BallsBackground] {
        &self.instances
    }

    pub fn instance(&self, index: usize) -> Option<&BallsBackground> {
        self.instances.get(index)
    }

    pub fn transfer_interval(&self) -> Duration {
        self.interval.period()
    }
}

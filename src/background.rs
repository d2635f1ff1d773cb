use log::{debug, info};
use rand::Rng;

use crate::advance::advance_single_ball;
use crate::ball::{Ball, BallId};
use crate::config::{BackgroundConfig, ContainerConfig};
use crate::wall::Bounds;
use crate::world_gen::random_balls;

/// A page element balls can be mounted into.
#[derive(Clone, Debug, PartialEq)]
pub struct Mount {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl Mount {
    pub fn new(name: &str, width: f64, height: f64) -> Mount {
        Mount {
            name: name.to_string(),
            width,
            height,
        }
    }

    /// Looks a configured container up; disabled ones are not found.
    pub fn find(config: &ContainerConfig) -> Option<Mount> {
        if config.enabled {
            Some(Mount::new(&config.name, config.width, config.height))
        } else {
            None
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

/// The surface balls are drawn on, anchored at the container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    pub width: f64,
    pub height: f64,
}

/// The floating balls of one container.
///
/// A background without a mount point does nothing: it has no overlay and
/// no balls, and every operation on it is a no-op.
#[derive(Debug)]
pub struct BallsBackground {
    mount: Option<Mount>,
    config: BackgroundConfig,
    overlay: Option<Overlay>,
    balls: Vec<Ball>,
}

impl BallsBackground {
    pub fn new<R: Rng + ?Sized>(
        mount: Option<Mount>,
        config: BackgroundConfig,
        rng: &mut R,
    ) -> BallsBackground {
        let mut background = BallsBackground {
            mount,
            config,
            overlay: None,
            balls: Vec::new(),
        };
        background.init(rng);
        background
    }

    fn init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mount = match &self.mount {
            Some(mount) => mount,
            None => return,
        };
        self.overlay = Some(Overlay {
            width: self.config.reference_width,
            height: mount.height,
        });
        self.balls = random_balls(rng, mount.bounds(), &self.config);
        info!(
            "Mounted {} balls in '{}' ({}x{})",
            self.balls.len(),
            mount.name,
            mount.width,
            mount.height
        );
    }

    pub fn tick(&mut self) {
        for ball in self.balls.iter_mut() {
            advance_single_ball(ball);
        }
    }

    /// Detaches a ball. Returns `None` if this container does not own it.
    pub fn remove(&mut self, id: BallId) -> Option<Ball> {
        let index = self.balls.iter().position(|ball| ball.id() == id)?;
        Some(self.balls.remove(index))
    }

    /// Attaches a ball owned elsewhere, confining it to this container from now on.
    /// An unmounted container hands the ball back.
    pub fn add(&mut self, mut ball: Ball) -> Result<(), Ball> {
        let bounds = match &self.mount {
            Some(mount) => mount.bounds(),
            None => return Err(ball),
        };
        ball.rebind(bounds);
        self.balls.push(ball);
        Ok(())
    }

    /// Drops every ball and the overlay, then mounts again from the original config.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.overlay.is_none() {
            return;
        }
        debug!("Resetting '{}'", self.name());
        self.overlay = None;
        self.balls.clear();
        self.init(rng);
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball_at(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.balls.iter().any(|ball| ball.id() == id)
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn name(&self) -> &str {
        self.mount.as_ref().map_or("", |mount| mount.name.as_str())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.mount.as_ref().map(Mount::bounds)
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }
}

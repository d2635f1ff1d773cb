use nalgebra::Vector2;
use rand::Rng;

use crate::ball::{Ball, BallStyle, PALETTE};
use crate::config::BackgroundConfig;
use crate::wall::Bounds;

pub const MAX_SPEED: f64 = 0.75;

/// Creates a ball fully inside `bounds`, with size, speed and color drawn from `rng`.
pub fn random_ball<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    config: &BackgroundConfig,
) -> Ball {
    let size = if config.max_size > config.min_size {
        rng.gen_range(config.min_size..config.max_size)
    } else {
        config.min_size
    };
    let position = Vector2::new(
        spawn_coordinate(rng, bounds.width - size),
        spawn_coordinate(rng, bounds.height - size),
    );
    let velocity = Vector2::new(
        rng.gen_range(-MAX_SPEED..MAX_SPEED),
        rng.gen_range(-MAX_SPEED..MAX_SPEED),
    );
    let style = BallStyle {
        color: PALETTE[rng.gen_range(0..PALETTE.len())],
        blur: config.blur,
    };
    Ball::new(position, velocity, size, style, bounds)
}

pub fn random_balls<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    config: &BackgroundConfig,
) -> Vec<Ball> {
    let mut balls = Vec::with_capacity(config.num_balls);
    while balls.len() < config.num_balls {
        balls.push(random_ball(rng, bounds, config));
    }
    balls
}

// A container smaller than the ball pins it to the origin on that axis.
fn spawn_coordinate<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    if span > 0. {
        rng.gen_range(0.0..span)
    } else {
        0.
    }
}

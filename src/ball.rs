use nalgebra::Vector2;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::wall::Bounds;

static NEXT_BALL_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a ball, stable across transfers between containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(u64);

impl BallId {
    fn next() -> BallId {
        BallId(NEXT_BALL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub const PALETTE: [Color; 3] = [
    Color::rgba(200, 100, 255, 0.5),
    Color::rgba(255, 100, 100, 0.5),
    Color::rgba(100, 255, 180, 0.5),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallStyle {
    pub color: Color,
    /// Blur radius in pixels.
    pub blur: f64,
}

/// A floating ball. `position` is the top-left corner of its square, in the
/// coordinate space of the container that currently owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    id: BallId,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    size: f64,
    style: BallStyle,
    bounds: Bounds,
}

impl Ball {
    pub fn new(
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        size: f64,
        style: BallStyle,
        bounds: Bounds,
    ) -> Ball {
        Ball {
            id: BallId::next(),
            position,
            velocity,
            size,
            style,
            bounds,
        }
    }

    pub fn id(&self) -> BallId {
        self.id
    }

    /// Diameter in pixels, fixed at creation.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.
    }

    pub fn center(&self) -> Vector2<f64> {
        self.position.add_scalar(self.radius())
    }

    pub fn style(&self) -> &BallStyle {
        &self.style
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Moves the ball into another container's coordinate space, pulling it
    /// inside the new walls if it would start past them.
    pub fn rebind(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.position = bounds.clamp(&self.position, self.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> BallStyle {
        BallStyle {
            color: PALETTE[0],
            blur: 30.,
        }
    }

    #[test]
    fn ids_are_unique() {
        let bounds = Bounds::new(100., 100.);
        let a = Ball::new(Vector2::zeros(), Vector2::zeros(), 10., style(), bounds);
        let b = Ball::new(Vector2::zeros(), Vector2::zeros(), 10., style(), bounds);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn center_is_offset_by_radius() {
        let ball = Ball::new(
            Vector2::new(10., 20.),
            Vector2::zeros(),
            50.,
            style(),
            Bounds::new(500., 500.),
        );
        assert_eq!(ball.center(), Vector2::new(35., 45.));
    }

    #[test]
    fn rebind_replaces_bounds() {
        let mut ball = Ball::new(
            Vector2::zeros(),
            Vector2::zeros(),
            10.,
            style(),
            Bounds::new(100., 100.),
        );
        ball.rebind(Bounds::new(300., 40.));
        assert_eq!(ball.bounds(), Bounds::new(300., 40.));
    }

    #[test]
    fn rebind_into_shorter_container_clamps_position() {
        let mut ball = Ball::new(
            Vector2::new(1100., 300.),
            Vector2::new(0.5, 0.5),
            150.,
            style(),
            Bounds::new(1280., 480.),
        );
        ball.rebind(Bounds::new(1000., 360.));
        assert_eq!(ball.position, Vector2::new(850., 210.));
        assert!(ball.bounds().contains(&ball.position, ball.size()));
    }

    #[test]
    fn color_formats_as_css() {
        assert_eq!(PALETTE[2].to_string(), "rgba(100,255,180,0.5)");
    }
}

use crate::ball::Ball;

/// Axes whose velocity component was reflected during a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

/// Moves a ball by one frame's velocity and reflects it off the container walls.
///
/// The position is not corrected after a reflection, so a ball may sit up to
/// one velocity unit past a wall for a frame.
pub fn advance_single_ball(ball: &mut Ball) -> Reflection {
    ball.position += ball.velocity;

    let bounds = ball.bounds();
    let size = ball.size();
    let mut reflection = Reflection::default();
    if ball.position.x < 0. || ball.position.x + size > bounds.width {
        ball.velocity.x = -ball.velocity.x;
        reflection.x = true;
    }
    if ball.position.y < 0. || ball.position.y + size > bounds.height {
        ball.velocity.y = -ball.velocity.y;
        reflection.y = true;
    }
    return reflection;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{BallStyle, PALETTE};
    use crate::wall::Bounds;
    use nalgebra::Vector2;

    fn ball(position: (f64, f64), velocity: (f64, f64)) -> Ball {
        Ball::new(
            Vector2::new(position.0, position.1),
            Vector2::new(velocity.0, velocity.1),
            20.,
            BallStyle {
                color: PALETTE[1],
                blur: 30.,
            },
            Bounds::new(100., 60.),
        )
    }

    #[test]
    fn moves_by_velocity() {
        let mut b = ball((10., 10.), (0.5, -0.25));
        let reflection = advance_single_ball(&mut b);
        assert_eq!(reflection, Reflection::default());
        assert_eq!(b.position, Vector2::new(10.5, 9.75));
        assert_eq!(b.velocity, Vector2::new(0.5, -0.25));
    }

    #[test]
    fn reflects_on_right_wall_with_overshoot() {
        let mut b = ball((79.8, 10.), (0.5, 0.));
        let reflection = advance_single_ball(&mut b);
        assert!(reflection.x);
        assert!(!reflection.y);
        assert_eq!(b.velocity.x, -0.5);
        // Overshoot is kept.
        assert!(b.position.x + b.size() > 100.);
        advance_single_ball(&mut b);
        assert!(b.position.x + b.size() <= 100.);
    }

    #[test]
    fn reflects_on_top_wall() {
        let mut b = ball((10., 0.2), (0., -0.5));
        let reflection = advance_single_ball(&mut b);
        assert!(reflection.y);
        assert_eq!(b.velocity.y, 0.5);
    }

    #[test]
    fn reflects_both_axes_in_a_corner() {
        let mut b = ball((0.1, 39.9), (-0.5, 0.5));
        let reflection = advance_single_ball(&mut b);
        assert_eq!(reflection, Reflection { x: true, y: true });
        assert_eq!(b.velocity, Vector2::new(0.5, -0.5));
    }
}

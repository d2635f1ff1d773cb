use nalgebra::Vector2;

/// The walls a ball bounces between: a container's width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Bounds {
        Bounds { width, height }
    }

    /// Whether a square of `size` at `position` (its top-left corner) lies fully inside.
    pub fn contains(&self, position: &Vector2<f64>, size: f64) -> bool {
        position.x >= 0.
            && position.y >= 0.
            && position.x + size <= self.width
            && position.y + size <= self.height
    }

    /// Nearest position that keeps a square of `size` inside. An axis shorter
    /// than the square pins it to 0.
    pub fn clamp(&self, position: &Vector2<f64>, size: f64) -> Vector2<f64> {
        Vector2::new(
            position.x.clamp(0., (self.width - size).max(0.)),
            position.y.clamp(0., (self.height - size).max(0.)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_checks_every_edge() {
        let bounds = Bounds::new(100., 50.);
        assert!(bounds.contains(&Vector2::new(0., 0.), 50.));
        assert!(bounds.contains(&Vector2::new(50., 0.), 50.));
        assert!(!bounds.contains(&Vector2::new(51., 0.), 50.));
        assert!(!bounds.contains(&Vector2::new(0., 1.), 50.));
        assert!(!bounds.contains(&Vector2::new(-0.5, 0.), 10.));
    }

    #[test]
    fn clamp_pulls_square_back_inside() {
        let bounds = Bounds::new(100., 50.);
        assert_eq!(bounds.clamp(&Vector2::new(10., 20.), 20.), Vector2::new(10., 20.));
        assert_eq!(bounds.clamp(&Vector2::new(95., 45.), 20.), Vector2::new(80., 30.));
        assert_eq!(bounds.clamp(&Vector2::new(-3., -1.), 20.), Vector2::new(0., 0.));
        assert_eq!(bounds.clamp(&Vector2::new(40., 12.), 60.), Vector2::new(40., 0.));
    }
}

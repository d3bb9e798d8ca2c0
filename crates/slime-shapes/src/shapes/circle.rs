// Imports
use super::Rasterizable;
use crate::{Color, Mask, Placement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename = "circle")]
/// A filled circle, inscribed into the bounding box of its placement.
pub struct Circle {
    #[serde(rename = "placement")]
    /// The bounding box. The circle touches the midpoints of its sides.
    pub placement: Placement,
    #[serde(rename = "color")]
    /// The fill color.
    pub color: Color,
}

impl Circle {
    /// A new circle.
    pub fn new(placement: Placement, color: Color) -> Self {
        Self { placement, color }
    }

    /// The radius.
    pub fn radius(&self) -> f64 {
        f64::from(self.placement.size) / 2.0
    }

    /// The center in pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        let radius = self.radius();
        (
            f64::from(self.placement.x) + radius,
            f64::from(self.placement.y) + radius,
        )
    }
}

impl Rasterizable for Circle {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn color(&self) -> Color {
        self.color
    }

    fn mask(&self, width: u32, height: u32) -> Mask {
        let radius = self.radius();
        let (center_x, center_y) = self.center();

        // pixels exactly on the circle are excluded
        Mask::from_fn(width, height, |x, y| {
            (f64::from(x) - center_x).powi(2) + (f64::from(y) - center_y).powi(2)
                < radius.powi(2)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_in_corner_out() {
        let circle = Circle::new(Placement::new(10, 0, 0), Color::default());
        let mask = circle.mask(20, 20);

        assert!(mask.get(5, 5));
        assert!(!mask.get(0, 0));
        assert!(!mask.get(9, 9));
    }

    #[test]
    fn boundary_excluded() {
        let circle = Circle::new(Placement::new(10, 0, 0), Color::default());
        let mask = circle.mask(20, 20);

        // (0, 5) lies exactly on the circle with radius 5 around (5, 5)
        assert!(!mask.get(0, 5));
        assert!(!mask.get(5, 0));
        assert!(mask.get(1, 5));
    }

    #[test]
    fn stays_inside_bounding_box() {
        let circle = Circle::new(Placement::new(12, 7, 3), Color::default());
        let mask = circle.mask(30, 30);

        assert!(mask.count() > 0);
        assert!(mask
            .iter_set()
            .all(|(x, y)| (7..19).contains(&x) && (3..15).contains(&y)));
    }

    #[test]
    fn geometry() {
        let circle = Circle::new(Placement::new(9, 2, 4), Color::default());

        assert_relative_eq!(circle.radius(), 4.5);
        assert_relative_eq!(circle.center().0, 6.5);
        assert_relative_eq!(circle.center().1, 8.5);
    }
}

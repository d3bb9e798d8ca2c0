// Imports
use super::Rasterizable;
use crate::{Color, Mask, Placement};
use image::RgbImage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename = "square")]
/// A filled square.
pub struct Square {
    #[serde(rename = "placement")]
    /// The bounding box, equal to the square itself.
    pub placement: Placement,
    #[serde(rename = "color")]
    /// The fill color.
    pub color: Color,
}

impl Square {
    /// A new square.
    pub fn new(placement: Placement, color: Color) -> Self {
        Self { placement, color }
    }

    /// Creates a base image of `size` x `size` pixels filled with the color of the square,
    /// onto which other shapes can be added.
    pub fn create_canvas(&self) -> RgbImage {
        RgbImage::from_pixel(
            self.placement.size,
            self.placement.size,
            image::Rgb::from(self.color),
        )
    }
}

impl Rasterizable for Square {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn color(&self) -> Color {
        self.color
    }

    fn mask(&self, width: u32, height: u32) -> Mask {
        let right = self.placement.right();
        let bottom = self.placement.bottom();

        Mask::from_fn(width, height, |x, y| {
            x >= self.placement.x
                && u64::from(x) < right
                && y >= self.placement.y
                && u64::from(y) < bottom
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_covers_box() {
        let square = Square::new(Placement::new(4, 2, 2), Color::default());
        let mask = square.mask(20, 20);

        assert_eq!(mask.count(), 16);
        assert!(mask
            .iter_set()
            .all(|(x, y)| (2..6).contains(&x) && (2..6).contains(&y)));
    }

    #[test]
    fn mask_is_clipped() {
        let square = Square::new(Placement::new(10, 15, 0), Color::default());

        assert_eq!(square.mask(20, 20).count(), 5 * 10);
        assert_eq!(square.mask(10, 10).count(), 0);
    }

    #[test]
    fn canvas_is_filled() {
        let canvas = Square::new(Placement::canvas(8), Color::PURPLE).create_canvas();

        assert_eq!(canvas.dimensions(), (8, 8));
        assert!(canvas
            .pixels()
            .all(|p| *p == image::Rgb::from(Color::PURPLE)));
    }
}

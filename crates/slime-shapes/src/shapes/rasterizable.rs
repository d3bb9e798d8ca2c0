// Imports
use crate::{Color, Mask, Placement};
use image::RgbImage;

/// Types that can be rasterized onto a pixel buffer.
pub trait Rasterizable {
    /// The placement of the shape.
    fn placement(&self) -> Placement;
    /// The fill color of the shape.
    fn color(&self) -> Color;
    /// The pixel mask of the shape on a grid of the given dimensions.
    ///
    /// Parts of the shape outside of the grid are clipped.
    fn mask(&self, width: u32, height: u32) -> Mask;
    /// Paint the shape onto the target, recoloring every pixel of its mask.
    fn add_to_image(&self, target: &mut RgbImage) {
        let mask = self.mask(target.width(), target.height());
        let pixel = image::Rgb::from(self.color());

        for (x, y) in mask.iter_set() {
            target.put_pixel(x, y, pixel);
        }
    }
}

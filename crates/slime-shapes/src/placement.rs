// Imports
use serde::{Deserialize, Serialize};

/// An axis-aligned square bounding box on the canvas.
///
/// `x` is the horizontal (column) position and `y` the vertical (row) position of the upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename = "placement")]
pub struct Placement {
    /// The side length.
    #[serde(rename = "size")]
    pub size: u32,
    /// The x position of the upper-left corner.
    #[serde(rename = "x")]
    pub x: u32,
    /// The y position of the upper-left corner.
    #[serde(rename = "y")]
    pub y: u32,
}

impl Placement {
    /// A new placement.
    pub const fn new(size: u32, x: u32, y: u32) -> Self {
        Self { size, x, y }
    }

    /// The placement covering an entire canvas of the given size.
    pub const fn canvas(canvas_size: u32) -> Self {
        Self::new(canvas_size, 0, 0)
    }

    /// The exclusive right edge.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.size)
    }

    /// The exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.size)
    }

    /// Whether the bounding box lies fully inside a square canvas of the given size.
    pub fn fits_canvas(&self, canvas_size: u32) -> bool {
        self.right() <= u64::from(canvas_size) && self.bottom() <= u64::from(canvas_size)
    }

    /// Returns true if the bounding boxes of the placements intersect.
    ///
    /// Both axes are treated as closed intervals `[pos, pos + size]`,
    /// so boxes that share an edge intersect. The test is symmetric.
    pub fn intersects(&self, other: &Self) -> bool {
        intersects_1d(self.x, self.size, other.x, other.size)
            && intersects_1d(self.y, self.size, other.y, other.size)
    }
}

fn intersects_1d(pos_1: u32, size_1: u32, pos_2: u32, size_2: u32) -> bool {
    let (pos_1, size_1, pos_2, size_2) = (
        u64::from(pos_1),
        u64::from(size_1),
        u64::from(pos_2),
        u64::from(size_2),
    );
    pos_1 <= pos_2 + size_2 && pos_2 <= pos_1 + size_1
}

#[cfg(test)]
mod tests {
    use super::Placement;

    #[test]
    fn separated_by_gap() {
        let a = Placement::new(10, 0, 0);
        let b = Placement::new(5, 15, 0);

        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn touching_edges_intersect() {
        let a = Placement::new(10, 0, 0);
        let b = Placement::new(5, 10, 0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        let one_apart = Placement::new(5, 11, 0);
        assert!(!a.intersects(&one_apart));
    }

    #[test]
    fn containment_intersects_in_both_orders() {
        let outer = Placement::new(20, 0, 0);
        let inner = Placement::new(5, 5, 5);

        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn needs_overlap_on_both_axes() {
        let a = Placement::new(10, 0, 0);
        // overlaps on x, but is far below
        let b = Placement::new(10, 5, 40);

        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn canvas_fit() {
        assert!(Placement::canvas(100).fits_canvas(100));
        assert!(Placement::new(25, 75, 75).fits_canvas(100));
        assert!(!Placement::new(25, 76, 0).fits_canvas(100));
        assert!(!Placement::new(u32::MAX, u32::MAX, 0).fits_canvas(100));
    }
}

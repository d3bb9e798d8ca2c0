/// A boolean pixel grid, marking which pixels belong to a shape.
///
/// Stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    /// A new mask where a pixel is set when the predicate returns true for its `(x, y)` coordinates.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// The width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel is set. Coordinates outside of the grid are never set.
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.index(x, y).map(|i| self.data[i]).unwrap_or(false)
    }

    /// The number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|set| **set).count()
    }

    /// Iterator over the `(x, y)` coordinates of the set pixels, in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mask;

    #[test]
    fn from_fn_row_major() {
        let mask = Mask::from_fn(4, 3, |x, y| x == 3 && y == 1);

        assert_eq!(mask.count(), 1);
        assert!(mask.get(3, 1));
        assert!(!mask.get(1, 3));
        assert_eq!(mask.iter_set().collect::<Vec<_>>(), vec![(3, 1)]);
    }

    #[test]
    fn out_of_grid() {
        let mask = Mask::from_fn(2, 2, |_, _| true);

        assert_eq!(mask.count(), 4);
        assert!(mask.get(1, 1));
        assert!(!mask.get(2, 0));
        assert!(!mask.get(5, 0));
        assert!(!mask.get(0, u32::MAX));
    }
}

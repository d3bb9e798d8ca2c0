// Imports
use crate::Placement;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

/// The smallest supported canvas size. Smaller canvases would allow zero sized shapes.
pub const MIN_CANVAS_SIZE: u32 = 10;

/// Layout errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout parameters are invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No free spot was found within the attempt limit.
    #[error(
        "failed to place shape {} of {requested} after {attempts} attempts",
        .placed + 1
    )]
    PlacementFailed {
        /// The number of shapes that were already placed.
        placed: usize,
        /// The number of requested shapes.
        requested: usize,
        /// The number of attempts for the failed placement.
        attempts: u64,
    },
}

/// Layout of non-overlapping placements on a square canvas, found by rejection sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    canvas_size: u32,
    count: usize,
    max_attempts: u64,
}

impl Layout {
    /// The default limit of attempts per placement.
    pub const MAX_ATTEMPTS_DEFAULT: u64 = 10_000;

    /// A new layout for `count` shapes on a canvas of `canvas_size` pixels.
    pub fn new(canvas_size: u32, count: usize) -> Self {
        Self {
            canvas_size,
            count,
            max_attempts: Self::MAX_ATTEMPTS_DEFAULT,
        }
    }

    /// The maximum number of random candidates drawn for each placement before giving up.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The canvas size.
    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// The number of shapes.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The maximum attempts per placement.
    pub fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// The range of shape sizes, between 10% and 25% of the canvas size.
    pub fn size_range(&self) -> RangeInclusive<u32> {
        (self.canvas_size / 10)..=(self.canvas_size / 4)
    }

    /// Validate the parameters.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.canvas_size < MIN_CANVAS_SIZE {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas size must be at least {MIN_CANVAS_SIZE}, got {}",
                self.canvas_size
            )));
        }
        if self.count == 0 {
            return Err(LayoutError::InvalidArgument(String::from(
                "shape count must be at least 1",
            )));
        }
        if self.max_attempts == 0 {
            return Err(LayoutError::InvalidArgument(String::from(
                "max attempts must be at least 1",
            )));
        }
        Ok(())
    }

    /// Generates the placements.
    ///
    /// The first placement always covers the entire canvas, the remaining `count` placements
    /// lie inside the canvas and do not mutually intersect.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Placement>, LayoutError> {
        self.validate()?;

        let mut placements = Vec::with_capacity(self.count + 1);
        placements.push(Placement::canvas(self.canvas_size));

        for placed in 0..self.count {
            let placement = self
                .find_free(rng, &placements[1..])
                .ok_or(LayoutError::PlacementFailed {
                    placed,
                    requested: self.count,
                    attempts: self.max_attempts,
                })?;
            placements.push(placement);
        }

        debug!(
            canvas_size = self.canvas_size,
            count = self.count,
            "generated layout"
        );
        Ok(placements)
    }

    fn find_free<R: Rng>(&self, rng: &mut R, existing: &[Placement]) -> Option<Placement> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.random_placement(rng);

            if !existing.iter().any(|other| candidate.intersects(other)) {
                trace!(?candidate, attempt, "accepted placement");
                return Some(candidate);
            }
        }
        debug!(
            placed = existing.len(),
            max_attempts = self.max_attempts,
            "no free placement found"
        );
        None
    }

    fn random_placement<R: Rng>(&self, rng: &mut R) -> Placement {
        let size = rng.random_range(self.size_range());
        let x = rng.random_range(0..=self.canvas_size - size);
        let y = rng.random_range(0..=self.canvas_size - size);

        Placement::new(size, x, y)
    }
}

/// Builds the placements for `count` shapes on a canvas of `canvas_size`,
/// with the default attempt limit.
///
/// The first placement is for the canvas, which overlaps with all other shapes.
/// The remaining placements' bounding boxes do not mutually intersect but are otherwise placed at random.
pub fn get_positions<R: Rng>(
    rng: &mut R,
    canvas_size: u32,
    count: usize,
) -> Result<Vec<Placement>, LayoutError> {
    Layout::new(canvas_size, count).generate(rng)
}

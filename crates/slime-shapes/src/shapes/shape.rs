// Imports
use super::{Circle, Rasterizable, Square};
use crate::{Color, Mask, Placement};
use serde::{Deserialize, Serialize};

/// Shape, storing shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename = "shape")]
pub enum Shape {
    #[serde(rename = "square")]
    /// A square shape.
    Square(Square),
    #[serde(rename = "circle")]
    /// A circle shape.
    Circle(Circle),
}

impl Shape {
    /// A new square shape.
    pub fn new_square(placement: Placement, color: Color) -> Self {
        Self::Square(Square::new(placement, color))
    }

    /// A new circle shape.
    pub fn new_circle(placement: Placement, color: Color) -> Self {
        Self::Circle(Circle::new(placement, color))
    }

    /// A new shape of the given kind.
    pub fn new(kind: ShapeKind, placement: Placement, color: Color) -> Self {
        match kind {
            ShapeKind::Square => Self::new_square(placement, color),
            ShapeKind::Circle => Self::new_circle(placement, color),
        }
    }

    /// The kind of the shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Square(_) => ShapeKind::Square,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }
}

impl Rasterizable for Shape {
    fn placement(&self) -> Placement {
        match self {
            Self::Square(square) => square.placement(),
            Self::Circle(circle) => circle.placement(),
        }
    }

    fn color(&self) -> Color {
        match self {
            Self::Square(square) => square.color(),
            Self::Circle(circle) => circle.color(),
        }
    }

    fn mask(&self, width: u32, height: u32) -> Mask {
        match self {
            Self::Square(square) => square.mask(width, height),
            Self::Circle(circle) => circle.mask(width, height),
        }
    }
}

/// The kind of a shape, without its placement and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "shape_kind")]
pub enum ShapeKind {
    /// A square.
    #[serde(rename = "square")]
    Square,
    /// A circle.
    #[serde(rename = "circle")]
    Circle,
}

impl ShapeKind {
    /// All shape kinds.
    pub const ALL: [Self; 2] = [Self::Square, Self::Circle];
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ShapeKind::Square => "square",
                ShapeKind::Circle => "circle",
            }
        )
    }
}

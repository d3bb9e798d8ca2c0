// Modules
mod circle;
mod rasterizable;
mod shape;
mod square;

// Re-exports
pub use circle::Circle;
pub use rasterizable::Rasterizable;
pub use shape::{Shape, ShapeKind};
pub use square::Square;

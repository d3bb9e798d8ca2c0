#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![allow(clippy::single_match)]

//! the slime-shapes crate generates labeled raster images of non-overlapping squares and circles on a colored canvas.

// Modules
/// colors
pub mod color;
/// module for the placement layout engine
pub mod layout;
/// pixel masks
pub mod mask;
/// placements of shapes on the canvas
pub mod placement;
/// composing labeled scenes
pub mod scene;
/// module for shapes
pub mod shapes;
/// other misc utilities
pub mod utils;

// Re-exports
pub use color::Color;
pub use layout::{get_positions, Layout, LayoutError};
pub use mask::Mask;
pub use placement::Placement;
pub use scene::{Scene, SceneConfig, SceneError, MIN_SCENE_CANVAS_SIZE};
pub use shapes::{Circle, Rasterizable, Shape, ShapeKind, Square};

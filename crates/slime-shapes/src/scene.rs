// Imports
use crate::layout::{Layout, LayoutError};
use crate::shapes::{Rasterizable, Shape, ShapeKind, Square};
use crate::{Color, Placement};
use image::RgbImage;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scene errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// Laying out the shapes failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// No shape kinds to choose from.
    #[error("no shape kinds configured")]
    EmptyKinds,
    /// The palette needs a background color and at least one other color for the shapes.
    #[error("palette needs at least 2 distinct colors, got {0}")]
    PaletteTooSmall(usize),
    /// The smallest shapes on the canvas would not paint a single pixel.
    #[error("canvas size must be at least {min} for every shape to be visible, got {canvas_size}")]
    CanvasTooSmall {
        /// The configured canvas size.
        canvas_size: u32,
        /// The smallest supported canvas size.
        min: u32,
    },
}

/// The smallest canvas size for scenes.
///
/// Shapes are at least `canvas_size / 10` pixels wide, and a circle needs a size of 2 to cover any pixel.
pub const MIN_SCENE_CANVAS_SIZE: u32 = 20;

/// The configuration for generating scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename = "scene_config")]
pub struct SceneConfig {
    /// The width and height of the canvas in pixels.
    #[serde(rename = "canvas_size")]
    pub canvas_size: u32,
    /// The number of shapes on the canvas.
    #[serde(rename = "shape_count")]
    pub shape_count: usize,
    /// The maximum number of attempts for placing a single shape.
    #[serde(rename = "max_attempts")]
    pub max_attempts: u64,
    /// The shape kinds to choose from.
    #[serde(rename = "kinds")]
    pub kinds: Vec<ShapeKind>,
    /// The colors to choose from, for the background and the shapes.
    #[serde(rename = "palette")]
    pub palette: Vec<Color>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_size: 100,
            shape_count: 3,
            max_attempts: Layout::MAX_ATTEMPTS_DEFAULT,
            kinds: ShapeKind::ALL.to_vec(),
            palette: Color::PRESETS.to_vec(),
        }
    }
}

impl SceneConfig {
    /// The layout for this configuration.
    pub fn layout(&self) -> Layout {
        Layout::new(self.canvas_size, self.shape_count).with_max_attempts(self.max_attempts)
    }

    /// Validate the configuration, including the layout parameters.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.canvas_size < MIN_SCENE_CANVAS_SIZE {
            return Err(SceneError::CanvasTooSmall {
                canvas_size: self.canvas_size,
                min: MIN_SCENE_CANVAS_SIZE,
            });
        }
        if self.kinds.is_empty() {
            return Err(SceneError::EmptyKinds);
        }
        let distinct = self.distinct_palette().len();
        if distinct < 2 {
            return Err(SceneError::PaletteTooSmall(distinct));
        }
        self.layout().validate()?;
        Ok(())
    }

    fn distinct_palette(&self) -> Vec<Color> {
        let mut distinct = Vec::with_capacity(self.palette.len());
        for color in self.palette.iter() {
            if !distinct.contains(color) {
                distinct.push(*color);
            }
        }
        distinct
    }
}

/// A background color with shapes placed on it. Serves as the label of a generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "scene")]
pub struct Scene {
    /// The width and height of the canvas in pixels.
    #[serde(rename = "canvas_size")]
    pub canvas_size: u32,
    /// The background color.
    #[serde(rename = "background")]
    pub background: Color,
    /// The shapes, in the order they are painted.
    #[serde(rename = "shapes")]
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Generates a random scene.
    ///
    /// Every shape paints at least one pixel and never shares the background color, so each of them stays visible.
    pub fn generate<R: Rng>(rng: &mut R, config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let palette = config.distinct_palette();

        let background = palette[rng.random_range(0..palette.len())];
        let shape_colors = palette
            .into_iter()
            .filter(|color| *color != background)
            .collect::<Vec<Color>>();

        let placements = config.layout().generate(rng)?;
        let shapes = placements
            .into_iter()
            .skip(1)
            .map(|placement| {
                let kind = config.kinds[rng.random_range(0..config.kinds.len())];
                let color = shape_colors[rng.random_range(0..shape_colors.len())];
                Shape::new(kind, placement, color)
            })
            .collect::<Vec<Shape>>();

        debug!(
            background = %background,
            shapes = shapes.len(),
            "generated scene"
        );
        Ok(Self {
            canvas_size: config.canvas_size,
            background,
            shapes,
        })
    }

    /// The square covering the entire canvas.
    pub fn background_square(&self) -> Square {
        Square::new(Placement::canvas(self.canvas_size), self.background)
    }

    /// Render the scene to a new image.
    pub fn render(&self) -> RgbImage {
        let mut image = self.background_square().create_canvas();
        for shape in self.shapes.iter() {
            shape.add_to_image(&mut image);
        }
        image
    }
}

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// World bounds and gravity. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Width in world units.
    pub width: f32,
    /// Height in world units.
    pub height: f32,
    /// Downward velocity increment per frame (units/frame^2).
    pub gravity: f32,
}

impl World {
    pub const fn new(width: f32, height: f32, gravity: f32) -> Self {
        Self {
            width,
            height,
            gravity,
        }
    }
}

/// Level geometry rejected at construction time.
#[derive(Debug, PartialEq)]
pub enum LevelError {
    /// A platform has a negative width or height.
    NegativeExtent { index: usize },
    /// A platform has a non-finite coordinate or extent.
    NonFinite { index: usize },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeExtent { index } => {
                write!(f, "platform {index} has a negative width or height")
            },
            Self::NonFinite { index } => {
                write!(f, "platform {index} has a non-finite coordinate")
            },
        }
    }
}

impl std::error::Error for LevelError {}

/// Static level geometry: an immutable list of platform rectangles.
/// Iteration order is fixed for the session but irrelevant to behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    platforms: Vec<Rect>,
}

impl Level {
    /// Validate and freeze a platform list.
    pub fn new(platforms: Vec<Rect>) -> Result<Self, LevelError> {
        for (index, p) in platforms.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite() && p.width.is_finite() && p.height.is_finite())
            {
                return Err(LevelError::NonFinite { index });
            }
            if p.width < 0.0 || p.height < 0.0 {
                return Err(LevelError::NegativeExtent { index });
            }
        }
        Ok(Self { platforms })
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }
}

/// Build the default level: a full-width ground strip and four floating
/// ledges, laid out relative to the bottom of the world.
pub fn default_level(world: &World) -> Level {
    let h = world.height;
    Level::new(vec![
        // Ground
        Rect::new(0.0, h - 48.0, world.width, 48.0),
        // Ledges
        Rect::new(140.0, h - 140.0, 120.0, 20.0),
        Rect::new(320.0, h - 220.0, 120.0, 20.0),
        Rect::new(520.0, h - 180.0, 100.0, 20.0),
        Rect::new(700.0, h - 260.0, 140.0, 20.0),
    ])
    .expect("default level geometry is valid")
}

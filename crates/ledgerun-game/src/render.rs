use serde::{Deserialize, Serialize};

use ledgerun_core::geometry::Rect;
use ledgerun_core::player::Player;
use ledgerun_core::world::World;

/// Everything a renderer needs for one frame, borrowed from the session so
/// a sink cannot mutate simulation state. Serializes for capture/replay
/// tooling.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<'a> {
    pub world: &'a World,
    pub platforms: &'a [Rect],
    pub player: PlayerView,
}

/// The player fields a renderer cares about. Velocity and grounding are
/// included for effects like squash-and-stretch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            vx: p.vx,
            vy: p.vy,
            on_ground: p.on_ground,
        }
    }
}

/// Receives one snapshot per frame. Implemented by the host renderer; the
/// frame driver calls `Session::tick` and hands the result here.
pub trait RenderSink {
    fn render(&mut self, frame: &FrameSnapshot<'_>);
}

/// Default palette, CSS-style hex colors for a canvas-backed renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Sky gradient, top to bottom.
    pub sky_top: String,
    pub sky_bottom: String,
    pub platform_fill: String,
    /// Highlight strip along each platform's top edge.
    pub platform_lip: String,
    pub player_fill: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sky_top: "#74c0fc".to_string(),
            sky_bottom: "#4dabf7".to_string(),
            platform_fill: "#2b2e4a".to_string(),
            platform_lip: "#40446b".to_string(),
            player_fill: "#ffdd55".to_string(),
        }
    }
}

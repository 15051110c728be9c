use serde::{Deserialize, Serialize};

/// Movement intent for one frame, sampled by the physics step. Produced by
/// an edge-detecting input adapter; the engine never subscribes to host
/// events directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    /// Jump key currently held.
    pub jump_held: bool,
    /// Jump key went down since the last frame. Set exactly once per
    /// discrete press; arms the jump buffer.
    pub jump_pressed: bool,
}

impl InputIntent {
    /// Intent for a frame with no keys touched.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        jump_held: false,
        jump_pressed: false,
    };

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::NONE
        }
    }

    /// A fresh jump press this frame.
    pub fn jump() -> Self {
        Self {
            jump_held: true,
            jump_pressed: true,
            ..Self::NONE
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Movement tunables, loadable from TOML. Defaults are the reference
/// values; change them and the game feels different, not broken.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTunables {
    /// Horizontal velocity gained per frame of held input.
    pub acceleration: f32,
    /// Horizontal speed cap, both directions.
    pub max_speed_x: f32,
    /// Upward velocity imparted by a jump.
    pub jump_strength: f32,
    /// Per-frame velocity decay with no directional input, grounded.
    pub ground_friction: f32,
    /// Per-frame velocity decay with no directional input, airborne.
    pub air_friction: f32,
    /// Frames after leaving ground during which a jump still succeeds.
    pub coyote_frames: u8,
    /// Frames an early jump press stays queued before landing.
    pub jump_buffer_frames: u8,
    /// Spawn position.
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Player collision box.
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for MovementTunables {
    fn default() -> Self {
        Self {
            acceleration: 0.65,
            max_speed_x: 4.2,
            jump_strength: 12.0,
            ground_friction: 0.75,
            air_friction: 0.92,
            coyote_frames: 6,
            jump_buffer_frames: 6,
            spawn_x: 80.0,
            spawn_y: 0.0,
            player_width: 32.0,
            player_height: 48.0,
        }
    }
}

/// Full kinematic state of the player, mutated once per frame by
/// [`crate::physics::advance`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    /// True only when this frame's vertical resolution landed on a platform.
    pub on_ground: bool,
    /// Frames remaining in the post-ledge jump grace window.
    pub coyote_counter: u8,
    /// Frames remaining for a queued jump press.
    pub jump_buffer_counter: u8,
}

impl Player {
    pub fn spawn(tunables: &MovementTunables) -> Self {
        Self {
            x: tunables.spawn_x,
            y: tunables.spawn_y,
            vx: 0.0,
            vy: 0.0,
            width: tunables.player_width,
            height: tunables.player_height,
            on_ground: false,
            coyote_counter: 0,
            jump_buffer_counter: 0,
        }
    }

    /// Reset position and velocity to spawn. Jump timers and the grounded
    /// flag are deliberately untouched, matching the reference behavior.
    pub fn respawn(&mut self, tunables: &MovementTunables) {
        self.x = tunables.spawn_x;
        self.y = tunables.spawn_y;
        self.vx = 0.0;
        self.vy = 0.0;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tunables_reference_values() {
        let t = MovementTunables::default();
        assert_eq!(t.acceleration, 0.65);
        assert_eq!(t.max_speed_x, 4.2);
        assert_eq!(t.jump_strength, 12.0);
        assert_eq!(t.ground_friction, 0.75);
        assert_eq!(t.air_friction, 0.92);
        assert_eq!(t.coyote_frames, 6);
        assert_eq!(t.jump_buffer_frames, 6);
        assert_eq!((t.spawn_x, t.spawn_y), (80.0, 0.0));
        assert_eq!((t.player_width, t.player_height), (32.0, 48.0));
    }

    #[test]
    fn spawn_places_player_at_rest() {
        let player = Player::spawn(&MovementTunables::default());
        assert_eq!((player.x, player.y), (80.0, 0.0));
        assert_eq!((player.vx, player.vy), (0.0, 0.0));
        assert!(!player.on_ground);
        assert_eq!(player.coyote_counter, 0);
        assert_eq!(player.jump_buffer_counter, 0);
    }

    #[test]
    fn respawn_keeps_jump_timers() {
        let tunables = MovementTunables::default();
        let mut player = Player::spawn(&tunables);
        player.x = 500.0;
        player.y = 900.0;
        player.vx = 3.0;
        player.vy = 20.0;
        player.coyote_counter = 2;
        player.jump_buffer_counter = 4;
        player.on_ground = true;

        player.respawn(&tunables);

        assert_eq!((player.x, player.y), (80.0, 0.0));
        assert_eq!((player.vx, player.vy), (0.0, 0.0));
        assert_eq!(player.coyote_counter, 2);
        assert_eq!(player.jump_buffer_counter, 4);
        assert!(player.on_ground);
    }

    #[test]
    fn player_state_roundtrips_through_json() {
        let mut player = Player::spawn(&MovementTunables::default());
        player.vy = 7.5;
        player.coyote_counter = 3;
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }

    #[test]
    fn rect_matches_position_and_size() {
        let player = Player::spawn(&MovementTunables::default());
        let r = player.rect();
        assert_eq!((r.x, r.y), (player.x, player.y));
        assert_eq!((r.width, r.height), (32.0, 48.0));
    }
}

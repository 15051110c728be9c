use ledgerun_core::config::GameConfig;
use ledgerun_core::physics::advance;
use ledgerun_core::player::{MovementTunables, Player};
use ledgerun_core::world::{Level, World, default_level};

use crate::keyboard::Keyboard;
use crate::render::{FrameSnapshot, PlayerView};

/// Owns the whole game state and advances it one frame at a time. The host
/// frame driver wires key events into [`Session::keyboard_mut`], calls
/// [`Session::tick`] once per animation tick, and hands the returned
/// snapshot to its render sink. No globals anywhere; a session is fully
/// self-contained and deterministic.
pub struct Session {
    world: World,
    level: Level,
    tunables: MovementTunables,
    player: Player,
    keyboard: Keyboard,
}

impl Session {
    /// Session on the default level.
    pub fn new(config: GameConfig) -> Self {
        let world = config.world.to_world();
        let level = default_level(&world);
        Self::with_level(config, level)
    }

    /// Session on a caller-supplied level.
    pub fn with_level(config: GameConfig, level: Level) -> Self {
        let world = config.world.to_world();
        let player = Player::spawn(&config.movement);
        tracing::debug!(platforms = level.platforms().len(), "session created");
        Self {
            world,
            level,
            tunables: config.movement,
            player,
            keyboard: Keyboard::new(),
        }
    }

    /// Host event wiring point for key-down/key-up events.
    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    /// Advance one frame: sample input, run physics, snapshot the result.
    pub fn tick(&mut self) -> FrameSnapshot<'_> {
        let intent = self.keyboard.sample();
        advance(
            &mut self.player,
            &intent,
            &self.world,
            &self.level,
            &self.tunables,
        );
        self.snapshot()
    }

    /// Read-only view of the current frame without advancing.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            world: &self.world,
            platforms: self.level.platforms(),
            player: PlayerView::from(&self.player),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderSink;

    fn settled_session() -> Session {
        let mut session = Session::default();
        for _ in 0..300 {
            session.tick();
        }
        session
    }

    #[test]
    fn player_falls_from_spawn_and_lands() {
        let session = settled_session();
        let player = session.player();
        assert!(player.on_ground);
        assert_eq!(player.vy, 0.0);
        // Resting on the ground strip of the default level.
        assert_eq!(player.y, session.world().height - 48.0 - player.height);
    }

    #[test]
    fn held_right_key_moves_player() {
        let mut session = settled_session();
        let x_before = session.player().x;
        session.keyboard_mut().on_key_down("ArrowRight");
        for _ in 0..30 {
            session.tick();
        }
        assert!(session.player().x > x_before);
    }

    #[test]
    fn space_press_jumps_from_ground() {
        let mut session = settled_session();
        session.keyboard_mut().on_key_down("Space");
        session.tick();
        assert_eq!(session.player().vy, -12.0);
        assert!(!session.player().on_ground);
    }

    #[test]
    fn jump_arc_returns_to_ground() {
        let mut session = settled_session();
        let rest_y = session.player().y;

        session.keyboard_mut().on_key_down("Space");
        session.tick();
        session.keyboard_mut().on_key_up("Space");

        let mut peak = rest_y;
        for _ in 0..120 {
            session.tick();
            peak = peak.min(session.player().y);
        }

        assert!(peak < rest_y - 50.0, "jump should rise well off the ground");
        assert!(session.player().on_ground);
        assert_eq!(session.player().y, rest_y);
    }

    #[test]
    fn tick_snapshot_tracks_player() {
        let mut session = Session::default();
        let gravity = session.world().gravity;
        let frame = session.tick();
        // One frame of free fall from spawn.
        assert_eq!(frame.player.y, gravity);
        assert_eq!(frame.platforms.len(), 5);
    }

    #[test]
    fn custom_level_session() {
        let config = GameConfig::default();
        let level = ledgerun_core::test_helpers::flat_level(&config.world.to_world());
        let mut session = Session::with_level(config, level);
        for _ in 0..300 {
            session.tick();
        }
        assert!(session.player().on_ground);
        assert_eq!(session.snapshot().platforms.len(), 1);
    }

    struct RecordingSink {
        frames: usize,
        last_y: f32,
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, frame: &FrameSnapshot<'_>) {
            self.frames += 1;
            self.last_y = frame.player.y;
        }
    }

    #[test]
    fn frame_driver_loop_feeds_sink() {
        let mut session = Session::default();
        let mut sink = RecordingSink {
            frames: 0,
            last_y: f32::NAN,
        };
        for _ in 0..10 {
            let frame = session.tick();
            sink.render(&frame);
        }
        assert_eq!(sink.frames, 10);
        assert_eq!(sink.last_y, session.player().y);
    }
}

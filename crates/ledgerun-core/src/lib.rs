pub mod config;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::geometry::Rect;
    use crate::input::InputIntent;
    use crate::physics::advance;
    use crate::player::{MovementTunables, Player};
    use crate::world::{Level, World};

    /// 960x540 world with the default gravity.
    pub fn test_world() -> World {
        World::new(960.0, 540.0, 0.6)
    }

    /// A level with nothing but a full-width ground strip.
    pub fn flat_level(world: &World) -> Level {
        Level::new(vec![Rect::new(
            0.0,
            world.height - 48.0,
            world.width,
            48.0,
        )])
        .expect("ground strip is valid")
    }

    /// A player standing at rest on the ground strip of `flat_level`.
    pub fn grounded_player(world: &World, tunables: &MovementTunables) -> Player {
        let mut player = Player::spawn(tunables);
        player.y = world.height - 48.0 - player.height;
        player.on_ground = true;
        player.coyote_counter = tunables.coyote_frames;
        player
    }

    /// Run `n` frames with the same intent, returning nothing; callers
    /// inspect the player afterwards.
    pub fn run_frames(
        player: &mut Player,
        intent: &InputIntent,
        world: &World,
        level: &Level,
        tunables: &MovementTunables,
        n: usize,
    ) {
        for _ in 0..n {
            advance(player, intent, world, level, tunables);
        }
    }
}

use crate::geometry::{clamp, overlaps};
use crate::input::InputIntent;
use crate::player::{MovementTunables, Player};
use crate::world::{Level, World};

/// How far below the bottom of the world the player may fall before
/// respawning (world units).
pub const RESPAWN_MARGIN: f32 = 200.0;

/// Advance the player by one fixed frame. The host calls this exactly once
/// per animation tick, then renders the resulting state.
///
/// Step order is load-bearing: horizontal intent, horizontal integration and
/// resolution, gravity and vertical integration, vertical resolution, jump
/// resolution, respawn check. Each step depends on the previous step's
/// resolved state.
pub fn advance(
    player: &mut Player,
    input: &InputIntent,
    world: &World,
    level: &Level,
    tunables: &MovementTunables,
) {
    // A fresh press arms the jump buffer before anything else this frame.
    if input.jump_pressed {
        player.jump_buffer_counter = tunables.jump_buffer_frames;
    }

    // Horizontal intent. Opposing keys cancel and decay like no input.
    let accelerating_left = input.left && !input.right;
    let accelerating_right = input.right && !input.left;

    if accelerating_left {
        player.vx -= tunables.acceleration;
    }
    if accelerating_right {
        player.vx += tunables.acceleration;
    }
    if !accelerating_left && !accelerating_right {
        let friction = if player.on_ground {
            tunables.ground_friction
        } else {
            tunables.air_friction
        };
        player.vx *= friction;
    }
    player.vx = clamp(player.vx, -tunables.max_speed_x, tunables.max_speed_x);

    // Integrate X and resolve horizontal collisions.
    player.x += player.vx;
    resolve_horizontal(player, level);

    // Gravity, integrate Y, resolve vertical collisions.
    player.vy += world.gravity;
    player.y += player.vy;
    resolve_vertical(player, level, tunables);

    // Jump after collision resolution so this frame's grounding counts.
    try_jump(player, tunables);

    // Fell out of the world.
    if player.y > world.height + RESPAWN_MARGIN {
        tracing::debug!(x = player.x, y = player.y, "fell out of bounds, respawning");
        player.respawn(tunables);
    }
}

/// Snap the player out of any platform along the X axis. If several
/// platforms overlap at once, the last one in iteration order wins; this is
/// an accepted simplification, not a multi-contact solve.
fn resolve_horizontal(player: &mut Player, level: &Level) {
    for p in level.platforms() {
        if overlaps(&player.rect(), p) {
            if player.vx > 0.0 {
                player.x = p.x - player.width;
            } else if player.vx < 0.0 {
                player.x = p.x + p.width;
            }
            player.vx = 0.0;
        }
    }
}

/// Snap the player out of any platform along the Y axis, then recompute the
/// grounded state and the coyote window from this frame's outcome alone.
fn resolve_vertical(player: &mut Player, level: &Level, tunables: &MovementTunables) {
    let mut grounded = false;
    for p in level.platforms() {
        if overlaps(&player.rect(), p) {
            if player.vy > 0.0 {
                // Landed on top.
                player.y = p.y - player.height;
                player.vy = 0.0;
                grounded = true;
            } else if player.vy < 0.0 {
                // Hit head.
                player.y = p.y + p.height;
                player.vy = 0.0;
            }
        }
    }
    if grounded {
        player.on_ground = true;
        player.coyote_counter = tunables.coyote_frames;
    } else {
        player.on_ground = false;
        if player.coyote_counter > 0 {
            player.coyote_counter -= 1;
        }
    }
}

/// Consume a buffered jump if the player is grounded or inside the coyote
/// window; otherwise let the buffer tick down.
fn try_jump(player: &mut Player, tunables: &MovementTunables) {
    let can_jump = player.on_ground || player.coyote_counter > 0;
    if player.jump_buffer_counter > 0 && can_jump {
        player.vy = -tunables.jump_strength;
        player.on_ground = false;
        player.coyote_counter = 0;
        player.jump_buffer_counter = 0;
    }
    if player.jump_buffer_counter > 0 {
        player.jump_buffer_counter -= 1;
    }
}

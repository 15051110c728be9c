use std::collections::HashSet;

use ledgerun_core::input::InputIntent;

/// Key codes that move left (KeyboardEvent.code values).
const LEFT_KEYS: [&str; 2] = ["ArrowLeft", "KeyA"];
/// Key codes that move right.
const RIGHT_KEYS: [&str; 2] = ["ArrowRight", "KeyD"];
/// Key codes that jump.
const JUMP_KEYS: [&str; 3] = ["Space", "ArrowUp", "KeyW"];

/// Keyboard state fed by host key-down/key-up events and sampled once per
/// frame. The physics core never sees raw events; this adapter owns the
/// jump-press edge so a held key (or host auto-repeat) arms the jump buffer
/// exactly once per discrete press.
#[derive(Debug, Default)]
pub struct Keyboard {
    keys_down: HashSet<String>,
    jump_pressed: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key-down event. Repeated events for an already-held key
    /// (auto-repeat) are ignored.
    pub fn on_key_down(&mut self, code: &str) {
        if self.keys_down.insert(code.to_string()) && JUMP_KEYS.contains(&code) {
            self.jump_pressed = true;
        }
    }

    /// Register a key-up event.
    pub fn on_key_up(&mut self, code: &str) {
        self.keys_down.remove(code);
    }

    fn any_down(&self, codes: &[&str]) -> bool {
        codes.iter().any(|c| self.keys_down.contains(*c))
    }

    /// Derive this frame's intent and consume the jump-press edge.
    pub fn sample(&mut self) -> InputIntent {
        let intent = InputIntent {
            left: self.any_down(&LEFT_KEYS),
            right: self.any_down(&RIGHT_KEYS),
            jump_held: self.any_down(&JUMP_KEYS),
            jump_pressed: self.jump_pressed,
        };
        self.jump_pressed = false;
        intent
    }
}

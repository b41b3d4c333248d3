/// Player input: discrete events plus a per-tick snapshot of held arrows.

use std::collections::HashMap;
use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::consts::BIRD_STEP;

/// One-shot actions delivered through the event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Fire,
}

/// Which of the four movement keys are down right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys { up: false, down: false, left: false, right: false };

    /// Sum of the per-key displacements.  Opposite keys cancel out.
    pub fn displacement(&self) -> (i32, i32) {
        let mut mv = (0, 0);
        if self.up {
            mv.1 -= BIRD_STEP;
        }
        if self.down {
            mv.1 += BIRD_STEP;
        }
        if self.left {
            mv.0 -= BIRD_STEP;
        }
        if self.right {
            mv.0 += BIRD_STEP;
        }
        mv
    }
}

/// Where the game loop gets its input from.
pub trait InputSource {
    /// Drain everything that happened since the last call, without blocking.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;

    /// Movement keys held at this instant.
    fn held_keys(&self) -> HeldKeys;
}

// ── Terminal key tracking ─────────────────────────────────────────────────────

/// A key counts as held if its last press/repeat arrived within this many
/// ticks.  Terminals without release events only re-send presses through OS
/// key repeat (≥ 15 Hz), so 7 ticks at 50 Hz (140 ms) bridges the gap.
pub const HOLD_WINDOW: u64 = 7;

/// Turns raw terminal key events into [`InputEvent`]s and [`HeldKeys`].
///
/// Keyboard-enhanced terminals report `Release`, which drops a key at once.
/// Classic terminals only send `Press` (repeats included), so keys expire
/// after [`HOLD_WINDOW`] ticks of silence.
#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
    tick: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next tick; held keys are judged against this clock.
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    /// Feed one key event.  Returns the one-shot action it triggers, if any.
    pub fn record(&mut self, key: KeyEvent) -> Option<InputEvent> {
        match key.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(key.code, self.tick);
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        Some(InputEvent::Quit)
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(InputEvent::Quit)
                    }
                    KeyCode::Char(' ') => Some(InputEvent::Fire),
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(key.code, self.tick);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key.code);
                None
            }
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| self.tick.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn held_keys(&self) -> HeldKeys {
        HeldKeys {
            up: self.is_held(KeyCode::Up),
            down: self.is_held(KeyCode::Down),
            left: self.is_held(KeyCode::Left),
            right: self.is_held(KeyCode::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn opposite_keys_cancel() {
        let held = HeldKeys { up: true, down: true, left: false, right: true };
        assert_eq!(held.displacement(), (5, 0));
    }

    #[test]
    fn space_fires_and_q_quits() {
        let mut t = KeyTracker::new();
        assert_eq!(t.record(key(KeyCode::Char(' '), KeyEventKind::Press)), Some(InputEvent::Fire));
        assert_eq!(t.record(key(KeyCode::Char('q'), KeyEventKind::Press)), Some(InputEvent::Quit));
        assert_eq!(t.record(key(KeyCode::Up, KeyEventKind::Press)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut t = KeyTracker::new();
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(t.record(ev), Some(InputEvent::Quit));
    }

    #[test]
    fn held_key_expires_without_repeats() {
        let mut t = KeyTracker::new();
        t.record(key(KeyCode::Left, KeyEventKind::Press));
        t.set_tick(HOLD_WINDOW);
        assert!(t.held_keys().left);
        t.set_tick(HOLD_WINDOW + 1);
        assert!(!t.held_keys().left);
    }

    #[test]
    fn release_drops_key_immediately() {
        let mut t = KeyTracker::new();
        t.record(key(KeyCode::Right, KeyEventKind::Press));
        assert!(t.held_keys().right);
        t.record(key(KeyCode::Right, KeyEventKind::Release));
        assert_eq!(t.held_keys(), HeldKeys::NONE);
    }
}

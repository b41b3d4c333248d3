/// Fixed game constants.  Nothing here is configurable at runtime.

use std::time::Duration;

use crate::canvas::Rgb;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Width of the playable rectangle, in world pixels.
pub const WIDTH: i32 = 1100;
/// Height of the playable rectangle, in world pixels.
pub const HEIGHT: i32 = 650;

pub const CAPTION: &str = "Fight! Kokaton";

// ── Pacing ────────────────────────────────────────────────────────────────────

/// Ticks per simulated second.
pub const FPS: u32 = 50;
pub const FRAME: Duration = Duration::from_millis(1000 / FPS as u64);

/// How long an end screen stays up before the process exits.
pub const END_SCREEN_DELAY: Duration = Duration::from_secs(5);

/// Whole-second budget the timer starts with.
pub const TIME_LIMIT: i32 = 10;

// ── Entities ──────────────────────────────────────────────────────────────────

pub const NUM_OF_BOMBS: usize = 5;
pub const BOMB_COLOR: Rgb = Rgb(255, 0, 0);
pub const BOMB_RADIUS: i32 = 10;
pub const BOMB_SPEED: i32 = 5;

pub const BIRD_START: (i32, i32) = (300, 200);
/// Displacement per axis for each held arrow key.
pub const BIRD_STEP: i32 = 5;

/// Ticks an explosion stays on screen.
pub const EXPLOSION_LIFE: i32 = 20;
/// Ticks between explosion frame flips.
pub const EXPLOSION_FLIP: i32 = 4;

// ── Mood sprites ──────────────────────────────────────────────────────────────

/// Happy face: beam hit feedback and the "Game Clear" screen.
pub const MOOD_HAPPY: u8 = 6;
/// Crying face: "Game Over" and "Time Over" screens.
pub const MOOD_CRYING: u8 = 8;

// ── Text ──────────────────────────────────────────────────────────────────────

pub const HUD_COLOR: Rgb = Rgb(0, 0, 255);
pub const HUD_FONT_SIZE: u16 = 30;
pub const SCORE_POS: (i32, i32) = (100, HEIGHT - 50);
pub const TIMER_POS: (i32, i32) = (WIDTH - 200, HEIGHT - 50);

pub const OVERLAY_COLOR: Rgb = Rgb(255, 0, 0);
pub const OVERLAY_FONT_SIZE: u16 = 80;
pub const OVERLAY_POS: (i32, i32) = (WIDTH / 2 - 150, HEIGHT / 2);

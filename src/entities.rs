/// Game entities.  Each one owns its picture and position, and its `update`
/// advances it by one tick and draws it.

use std::io;

use rand::Rng;

use crate::assets::{Assets, BirdSprites, Direction, Sprite, SpriteId};
use crate::canvas::{Canvas, Rgb, TextStyle};
use crate::consts::{
    BIRD_STEP, BOMB_SPEED, EXPLOSION_FLIP, EXPLOSION_LIFE, FPS, HEIGHT, HUD_COLOR, HUD_FONT_SIZE,
    SCORE_POS, TIMER_POS, WIDTH,
};
use crate::geometry::{check_bound, fully_inside, Rect};
use crate::input::HeldKeys;

const HUD_STYLE: TextStyle = TextStyle { color: HUD_COLOR, size: HUD_FONT_SIZE };

// ── Bird ──────────────────────────────────────────────────────────────────────

/// The player character.
#[derive(Clone, Debug)]
pub struct Bird<'a> {
    sprites: &'a BirdSprites,
    /// Sized once from the initial sprite; later picture swaps keep it.
    pub rect: Rect,
    direction: Direction,
    image: SpriteId,
}

impl<'a> Bird<'a> {
    /// A right-facing bird centred on `center`.
    pub fn new(sprites: &'a BirdSprites, center: (i32, i32)) -> Self {
        let sprite = sprites.get(Direction::Right);
        Bird {
            sprites,
            rect: Rect::centered(center, sprite.size),
            direction: Direction::Right,
            image: sprite.id,
        }
    }

    /// Facing of the last nonzero movement input.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn image(&self) -> SpriteId {
        self.image
    }

    /// Apply the held arrows.  A move that would leave the viewport on
    /// either axis is undone entirely.  Any nonzero input turns the bird,
    /// even when the move itself was undone.
    pub fn move_by_keys(&mut self, held: HeldKeys) {
        let mv = held.displacement();
        self.rect.move_ip(mv);
        if !fully_inside(&self.rect) {
            self.rect.move_ip((-mv.0, -mv.1));
        }
        if let Some(dir) = Direction::from_delta(mv) {
            self.direction = dir;
            self.image = self.sprites.get(dir).id;
        }
    }

    pub fn update<C: Canvas>(&mut self, held: HeldKeys, canvas: &mut C) -> io::Result<()> {
        self.move_by_keys(held);
        canvas.blit(self.image, self.rect)
    }

    /// Swap to another picture (a numbered mood face) and draw it at once.
    pub fn set_image<C: Canvas>(&mut self, image: SpriteId, canvas: &mut C) -> io::Result<()> {
        self.image = image;
        canvas.blit(self.image, self.rect)
    }
}

// ── Beam ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Beam {
    pub rect: Rect,
    pub velocity: (i32, i32),
    image: SpriteId,
    /// Cleared when the beam hits a bomb; the loop prunes dead beams.
    pub alive: bool,
}

impl Beam {
    /// Fire from `bird`: travel the way it faces, starting just ahead of it.
    pub fn new(bird: &Bird<'_>, assets: &Assets) -> Self {
        let dir = bird.direction();
        let (vx, vy) = dir.delta();
        let sprite = assets.beam(dir);
        let (bx, by) = bird.rect.center();
        let center = (
            bx + bird.rect.w * vx / BIRD_STEP,
            by + bird.rect.h * vy / BIRD_STEP,
        );
        Beam {
            rect: Rect::centered(center, sprite.size),
            velocity: (vx, vy),
            image: sprite.id,
            alive: true,
        }
    }

    /// Move and draw while inside the viewport; otherwise stay put.
    pub fn update<C: Canvas>(&mut self, canvas: &mut C) -> io::Result<()> {
        if fully_inside(&self.rect) {
            self.rect.move_ip(self.velocity);
            canvas.blit(self.image, self.rect)?;
        }
        Ok(())
    }

    /// True while the beam is still fully on screen.
    pub fn is_over_monitor(&self) -> bool {
        fully_inside(&self.rect)
    }
}

// ── Bomb ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bomb {
    pub rect: Rect,
    pub velocity: (i32, i32),
    image: SpriteId,
    pub alive: bool,
}

impl Bomb {
    /// A bomb dropped anywhere in the viewport (it may start half off-screen).
    pub fn new(color: Rgb, radius: i32, assets: &Assets, rng: &mut impl Rng) -> Self {
        let center = (rng.gen_range(0..=WIDTH), rng.gen_range(0..=HEIGHT));
        Bomb::at(center, color, radius, assets)
    }

    pub fn at(center: (i32, i32), color: Rgb, radius: i32, assets: &Assets) -> Self {
        let sprite: Sprite = assets.bomb(color, radius);
        Bomb {
            rect: Rect::centered(center, sprite.size),
            velocity: (BOMB_SPEED, BOMB_SPEED),
            image: sprite.id,
            alive: true,
        }
    }

    /// Bounce off whichever edges the bomb is past, then move with the
    /// (possibly flipped) velocity in the same tick.
    pub fn update<C: Canvas>(&mut self, canvas: &mut C) -> io::Result<()> {
        let (inside_x, inside_y) = check_bound(&self.rect);
        if !inside_x {
            self.velocity.0 = -self.velocity.0;
        }
        if !inside_y {
            self.velocity.1 = -self.velocity.1;
        }
        self.rect.move_ip(self.velocity);
        canvas.blit(self.image, self.rect)
    }
}

// ── Explosion ─────────────────────────────────────────────────────────────────

/// Short flicker left behind where a bomb was shot down.
#[derive(Clone, Debug)]
pub struct Explosion {
    center: (i32, i32),
    frames: [Sprite; 2],
    life: i32,
}

impl Explosion {
    pub fn new(bomb: &Bomb, assets: &Assets) -> Self {
        Explosion {
            center: bomb.rect.center(),
            frames: assets.explosion_frames(),
            life: EXPLOSION_LIFE,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        self.center
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    /// Which of the two frames the current lifetime shows.  Floor semantics,
    /// so the last update (at -1) lands on frame 1.
    pub fn frame_index(&self) -> usize {
        self.life.div_euclid(EXPLOSION_FLIP).rem_euclid(2) as usize
    }

    pub fn update<C: Canvas>(&mut self, canvas: &mut C) -> io::Result<()> {
        self.life -= 1;
        let frame = self.frames[self.frame_index()];
        canvas.blit(frame.id, Rect::centered(self.center, frame.size))
    }

    pub fn is_live(&self) -> bool {
        self.life >= 0
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn add(&mut self) {
        self.value += 1;
    }

    pub fn update<C: Canvas>(&self, canvas: &mut C) -> io::Result<()> {
        canvas.print(&format!("score: {}", self.value), SCORE_POS, HUD_STYLE)
    }
}

/// Whole-second countdown driven by the tick rate.
#[derive(Clone, Debug)]
pub struct Timer {
    remaining: i32,
    ticks: u32,
}

impl Timer {
    pub fn new(seconds: i32) -> Self {
        Timer { remaining: seconds, ticks: 0 }
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Draw the current value, then count this tick.
    pub fn update<C: Canvas>(&mut self, canvas: &mut C) -> io::Result<()> {
        canvas.print(
            &format!("time remaining: {} seconds", self.remaining),
            TIMER_POS,
            HUD_STYLE,
        )?;
        self.ticks += 1;
        if self.ticks >= FPS {
            self.remaining -= 1;
            self.ticks = 0;
        }
        Ok(())
    }

    pub fn is_time_over(&self) -> bool {
        self.remaining < 0
    }
}

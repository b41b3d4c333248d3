/// The per-tick game logic.
///
/// `Game::tick` runs one frame: input, background, end checks, collisions,
/// pruning, entity updates, present.  Pacing (the 1/50 s throttle and the
/// end-screen hold) belongs to the caller, which reads the returned `Flow`.

use std::io;

use log::{debug, info};
use rand::Rng;

use crate::assets::{Assets, SpriteId};
use crate::canvas::{Canvas, TextStyle};
use crate::consts::{
    BIRD_START, BOMB_COLOR, BOMB_RADIUS, MOOD_CRYING, MOOD_HAPPY, NUM_OF_BOMBS, OVERLAY_COLOR,
    OVERLAY_FONT_SIZE, OVERLAY_POS, TIME_LIMIT,
};
use crate::entities::{Beam, Bird, Bomb, Explosion, Score, Timer};
use crate::input::{InputEvent, InputSource};

// ── States ────────────────────────────────────────────────────────────────────

/// How a session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    /// Ran out of time with bombs left.
    TimeOver,
    /// Ran out of time with every bomb shot down.
    GameClear,
    /// Touched a bomb.
    GameOver,
}

impl Ending {
    /// Overlay text for the end screen.
    pub fn message(self) -> &'static str {
        match self {
            Ending::TimeOver => "Time Over",
            Ending::GameClear => "Game Clear",
            Ending::GameOver => "Game Over",
        }
    }

    /// Mood face shown on the end screen.
    pub fn mood(self) -> u8 {
        match self {
            Ending::GameClear => MOOD_HAPPY,
            Ending::TimeOver | Ending::GameOver => MOOD_CRYING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Ended(Ending),
}

/// What the caller should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Wait out the rest of the tick, then call `tick` again.
    Continue,
    /// Leave immediately; nothing more is drawn.
    Quit,
    /// The end screen is up: hold it, then leave.
    Ended(Ending),
}

// ── Game ──────────────────────────────────────────────────────────────────────

/// Every entity list, owned exclusively by the loop.
pub struct Game<'a> {
    assets: &'a Assets,
    pub bird: Bird<'a>,
    pub beams: Vec<Beam>,
    pub bombs: Vec<Bomb>,
    pub explosions: Vec<Explosion>,
    pub score: Score,
    pub timer: Timer,
    pub status: GameStatus,
    /// Ticks completed so far.
    pub frame: u64,
}

impl<'a> Game<'a> {
    /// A fresh session with the standard number of randomly placed bombs.
    pub fn new(assets: &'a Assets, rng: &mut impl Rng) -> Self {
        let bombs = (0..NUM_OF_BOMBS)
            .map(|_| Bomb::new(BOMB_COLOR, BOMB_RADIUS, assets, &mut *rng))
            .collect();
        Game::with_bombs(assets, bombs)
    }

    /// A fresh session with the given bombs.
    pub fn with_bombs(assets: &'a Assets, bombs: Vec<Bomb>) -> Self {
        info!("new session: {} bombs, {} seconds", bombs.len(), TIME_LIMIT);
        Game {
            assets,
            bird: Bird::new(assets.bird_sprites(), BIRD_START),
            beams: Vec::new(),
            bombs,
            explosions: Vec::new(),
            score: Score::new(),
            timer: Timer::new(TIME_LIMIT),
            status: GameStatus::Running,
            frame: 0,
        }
    }

    /// Fire a beam from wherever the bird is and whichever way it faces.
    pub fn fire(&mut self) {
        let beam = Beam::new(&self.bird, self.assets);
        debug!("beam fired {:?} from {:?}", self.bird.direction(), beam.rect.center());
        self.beams.push(beam);
    }

    /// Run one tick.  Once the game has ended every further call is a no-op
    /// returning the same `Flow::Ended`.
    pub fn tick<I, C>(&mut self, input: &mut I, canvas: &mut C) -> io::Result<Flow>
    where
        I: InputSource,
        C: Canvas,
    {
        if let GameStatus::Ended(ending) = self.status {
            return Ok(Flow::Ended(ending));
        }

        // ── 1. Events ─────────────────────────────────────────────────────────
        for event in input.poll_events()? {
            match event {
                InputEvent::Quit => {
                    info!("quit after {} ticks", self.frame);
                    return Ok(Flow::Quit);
                }
                InputEvent::Fire => self.fire(),
            }
        }

        // ── 2. Background ─────────────────────────────────────────────────────
        canvas.fill_background()?;

        // ── 3. Time over ──────────────────────────────────────────────────────
        if self.timer.is_time_over() {
            let ending = if self.bombs.is_empty() {
                Ending::GameClear
            } else {
                Ending::TimeOver
            };
            return self.end(ending, canvas);
        }

        // ── 4. Bird ↔ bomb ────────────────────────────────────────────────────
        if self.bombs.iter().any(|b| self.bird.rect.colliderect(&b.rect)) {
            return self.end(Ending::GameOver, canvas);
        }

        // ── 5. Beam ↔ bomb ────────────────────────────────────────────────────
        self.resolve_hits(canvas)?;

        // ── 6. Prune ──────────────────────────────────────────────────────────
        self.bombs.retain(|b| b.alive);
        self.beams.retain(|b| b.alive && b.is_over_monitor());
        self.explosions.retain(Explosion::is_live);

        // ── 7. Update & draw ──────────────────────────────────────────────────
        self.bird.update(input.held_keys(), canvas)?;
        for beam in &mut self.beams {
            beam.update(canvas)?;
        }
        for bomb in &mut self.bombs {
            bomb.update(canvas)?;
        }
        for explosion in &mut self.explosions {
            explosion.update(canvas)?;
        }
        self.score.update(canvas)?;
        self.timer.update(canvas)?;

        // ── 8. Present ────────────────────────────────────────────────────────
        canvas.present()?;
        self.frame += 1;
        Ok(Flow::Continue)
    }

    /// Pair every live bomb with every live beam.  A pair that overlaps
    /// destroys both, leaves an explosion, scores a point and flashes the
    /// happy face straight to the screen.
    fn resolve_hits<C: Canvas>(&mut self, canvas: &mut C) -> io::Result<()> {
        for bomb in &mut self.bombs {
            for beam in &mut self.beams {
                if !bomb.alive || !beam.alive {
                    continue;
                }
                if beam.rect.colliderect(&bomb.rect) {
                    self.explosions.push(Explosion::new(bomb, self.assets));
                    beam.alive = false;
                    bomb.alive = false;
                    self.bird.set_image(SpriteId::Mood(MOOD_HAPPY), canvas)?;
                    self.score.add();
                    debug!("bomb hit at {:?}, score {}", bomb.rect.center(), self.score.value());
                    canvas.present()?;
                }
            }
        }
        Ok(())
    }

    /// Draw the end screen and freeze the game.
    fn end<C: Canvas>(&mut self, ending: Ending, canvas: &mut C) -> io::Result<Flow> {
        self.bird.set_image(SpriteId::Mood(ending.mood()), canvas)?;
        let style = TextStyle { color: OVERLAY_COLOR, size: OVERLAY_FONT_SIZE };
        canvas.print(ending.message(), OVERLAY_POS, style)?;
        canvas.present()?;
        self.status = GameStatus::Ended(ending);
        info!(
            "{} after {} ticks, score {}",
            ending.message(),
            self.frame,
            self.score.value()
        );
        Ok(Flow::Ended(ending))
    }
}

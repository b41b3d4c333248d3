/// Sprite identifiers and their pixel geometry.
///
/// The game never decodes images itself; it only needs to know which picture
/// to show and how large it is, because rectangles (and therefore collisions)
/// are sized from the picture.  Rotated and zoomed variants are sized the way
/// a rotate-and-scale transform sizes its output: the bounding box of the
/// rotated source, times the zoom factor.

use std::collections::HashMap;

use crate::canvas::Rgb;
use crate::consts::BIRD_STEP;

// ── Source image sizes ────────────────────────────────────────────────────────

/// Size of every numbered kokaton image before zooming.
pub const KOKATON_SIZE: (i32, i32) = (88, 80);
/// Unrotated beam image (points right).
pub const BEAM_SIZE: (i32, i32) = (60, 20);
pub const EXPLOSION_SIZE: (i32, i32) = (66, 68);

/// Zoom applied to kokaton images on load.
pub const KOKATON_ZOOM: f64 = 0.9;

/// Numbered mood images that ship with the game.
pub const MOOD_COUNT: u8 = 10;

// ── Directions ────────────────────────────────────────────────────────────────

/// The eight facings a bird (and therefore a beam) can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Counter-clockwise from `Right`.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Per-tick displacement in screen coordinates (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        let s = BIRD_STEP;
        match self {
            Direction::Right => (s, 0),
            Direction::UpRight => (s, -s),
            Direction::Up => (0, -s),
            Direction::UpLeft => (-s, -s),
            Direction::Left => (-s, 0),
            Direction::DownLeft => (-s, s),
            Direction::Down => (0, s),
            Direction::DownRight => (s, s),
        }
    }

    /// Inverse of [`Direction::delta`]; `None` for the zero vector or any
    /// displacement that is not one of the eight.
    pub fn from_delta(delta: (i32, i32)) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }

    /// Screen angle of the direction in degrees, counter-clockwise from
    /// the positive x axis.
    pub fn angle_degrees(self) -> f64 {
        let (vx, vy) = self.delta();
        f64::from(-vy).atan2(f64::from(vx)).to_degrees()
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Which picture to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteId {
    /// Walking kokaton facing the given way.
    Bird(Direction),
    /// Numbered kokaton face used for hit/win/lose feedback.
    Mood(u8),
    /// Beam rotated to travel the given way.
    Beam(Direction),
    /// Filled circle.
    Bomb { color: Rgb, radius: i32 },
    /// Explosion frame 0 or its mirrored twin, frame 1.
    Explosion(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub id: SpriteId,
    pub size: (i32, i32),
}

/// Output size of rotating `size` by `degrees` and scaling by `zoom`.
pub fn rotozoom_size((w, h): (i32, i32), degrees: f64, zoom: f64) -> (i32, i32) {
    let rad = degrees.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let (w, h) = (f64::from(w), f64::from(h));
    let rw = ((w * cos + h * sin) * zoom).round() as i32;
    let rh = ((w * sin + h * cos) * zoom).round() as i32;
    (rw.max(1), rh.max(1))
}

/// Immutable direction → sprite table shared by reference with every bird.
#[derive(Debug, Clone)]
pub struct BirdSprites {
    by_direction: HashMap<Direction, Sprite>,
}

impl BirdSprites {
    fn build() -> Self {
        // The right-facing image is the left-facing one mirrored, so both
        // share the zoomed base size; diagonals and verticals get rotated
        // and zoomed once more.
        let base = rotozoom_size(KOKATON_SIZE, 0.0, KOKATON_ZOOM);
        let turned = |degrees: f64| rotozoom_size(base, degrees, KOKATON_ZOOM);

        let by_direction = Direction::ALL
            .into_iter()
            .map(|dir| {
                let size = match dir {
                    Direction::Right | Direction::Left => base,
                    Direction::UpRight => turned(45.0),
                    Direction::Up => turned(90.0),
                    Direction::UpLeft => turned(-45.0),
                    Direction::DownLeft => turned(45.0),
                    Direction::Down => turned(-90.0),
                    Direction::DownRight => turned(-45.0),
                };
                (dir, Sprite { id: SpriteId::Bird(dir), size })
            })
            .collect();

        BirdSprites { by_direction }
    }

    pub fn get(&self, dir: Direction) -> Sprite {
        // The table is built from `Direction::ALL`, so every key is present.
        self.by_direction[&dir]
    }
}

/// Every sprite the game uses, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Assets {
    bird: BirdSprites,
}

impl Assets {
    pub fn load() -> Self {
        Assets { bird: BirdSprites::build() }
    }

    pub fn bird_sprites(&self) -> &BirdSprites {
        &self.bird
    }

    /// Numbered kokaton face, zoomed like the walking sprites.
    pub fn mood(&self, num: u8) -> Sprite {
        debug_assert!(num < MOOD_COUNT, "no kokaton image {num}");
        Sprite {
            id: SpriteId::Mood(num),
            size: rotozoom_size(KOKATON_SIZE, 0.0, KOKATON_ZOOM),
        }
    }

    /// Beam image turned to point along `dir`.
    pub fn beam(&self, dir: Direction) -> Sprite {
        Sprite {
            id: SpriteId::Beam(dir),
            size: rotozoom_size(BEAM_SIZE, dir.angle_degrees(), 1.0),
        }
    }

    pub fn bomb(&self, color: Rgb, radius: i32) -> Sprite {
        Sprite {
            id: SpriteId::Bomb { color, radius },
            size: (2 * radius, 2 * radius),
        }
    }

    /// The explosion image and its mirror image.
    pub fn explosion_frames(&self) -> [Sprite; 2] {
        [0, 1].map(|frame| Sprite {
            id: SpriteId::Explosion(frame),
            size: EXPLOSION_SIZE,
        })
    }
}

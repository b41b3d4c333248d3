/// Terminal frame buffer.
///
/// The world is 1100×650 pixels; the terminal is whatever size it is.  Each
/// sprite is drawn as a short glyph at the cell under its rectangle's centre,
/// text goes to the cell under its top-left corner.  Nothing reaches the
/// screen until `present`.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use fight_kokaton::assets::{Direction, SpriteId};
use fight_kokaton::canvas::{Canvas, Rgb, TextStyle};
use fight_kokaton::consts::{HEIGHT, MOOD_CRYING, MOOD_HAPPY, WIDTH};
use fight_kokaton::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BIRD: Color = Color::White;
const C_BEAM: Color = Color::Cyan;
const C_EXPLOSION: Color = Color::Yellow;

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Cell under world point `(x, y)` on a `cols`×`rows` terminal.
fn to_cell((x, y): (i32, i32), cols: u16, rows: u16) -> (u16, u16) {
    let scale = |v: i32, world: i32, cells: u16| -> u16 {
        let last = i64::from(cells.saturating_sub(1));
        (i64::from(v) * i64::from(cells) / i64::from(world)).clamp(0, last) as u16
    };
    (scale(x, WIDTH, cols), scale(y, HEIGHT, rows))
}

fn arrow(dir: Direction) -> &'static str {
    match dir {
        Direction::Right => "→",
        Direction::UpRight => "↗",
        Direction::Up => "↑",
        Direction::UpLeft => "↖",
        Direction::Left => "←",
        Direction::DownLeft => "↙",
        Direction::Down => "↓",
        Direction::DownRight => "↘",
    }
}

fn beam_stroke(dir: Direction) -> &'static str {
    match dir {
        Direction::Right | Direction::Left => "─",
        Direction::Up | Direction::Down => "│",
        Direction::UpRight | Direction::DownLeft => "╱",
        Direction::UpLeft | Direction::DownRight => "╲",
    }
}

/// Glyph and colour for a sprite.
fn glyph(sprite: SpriteId) -> (String, Color) {
    match sprite {
        SpriteId::Bird(dir) => (format!("@{}", arrow(dir)), C_BIRD),
        SpriteId::Mood(MOOD_HAPPY) => ("^o^".to_string(), C_BIRD),
        SpriteId::Mood(MOOD_CRYING) => ("T_T".to_string(), C_BIRD),
        SpriteId::Mood(_) => ("@".to_string(), C_BIRD),
        SpriteId::Beam(dir) => (beam_stroke(dir).to_string(), C_BEAM),
        SpriteId::Bomb { color: c, .. } => ("●".to_string(), color(c)),
        SpriteId::Explosion(0) => ("✶".to_string(), C_EXPLOSION),
        SpriteId::Explosion(_) => ("✷".to_string(), C_EXPLOSION),
    }
}

pub struct TerminalCanvas<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(TerminalCanvas { out, cols, rows })
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn fill_background(&mut self) -> io::Result<()> {
        // Follow terminal resizes frame by frame.
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn blit(&mut self, sprite: SpriteId, rect: Rect) -> io::Result<()> {
        let (text, fg) = glyph(sprite);
        let (col, row) = to_cell(rect.center(), self.cols, self.rows);
        let width = text.chars().count() as u16;
        let col = col.saturating_sub(width / 2);
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(fg))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn print(&mut self, text: &str, at: (i32, i32), text_style: TextStyle) -> io::Result<()> {
        let (col, row) = to_cell(at, self.cols, self.rows);
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color(text_style.color)))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

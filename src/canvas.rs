/// The frame buffer the game draws onto.
///
/// Entities only ever talk to this trait, so the same simulation can be shown
/// in a terminal or captured by a test recorder.

use std::io;

use crate::assets::SpriteId;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Rgb,
    /// Nominal font size in world pixels.
    pub size: u16,
}

pub trait Canvas {
    /// Paint the background, wiping whatever the previous frame left behind.
    fn fill_background(&mut self) -> io::Result<()>;

    /// Draw `sprite` so that it covers `rect`.
    fn blit(&mut self, sprite: SpriteId, rect: Rect) -> io::Result<()>;

    /// Draw a line of text with its top-left corner at `at`.
    fn print(&mut self, text: &str, at: (i32, i32), style: TextStyle) -> io::Result<()>;

    /// Make everything drawn so far visible.
    fn present(&mut self) -> io::Result<()>;
}

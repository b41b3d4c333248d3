/// Integer rectangles and the viewport bounds check.

use crate::consts::{HEIGHT, WIDTH};

/// Axis-aligned rectangle in world pixels, stored as top-left corner + size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// A `w`×`h` rectangle whose centre sits on `center`.
    pub fn centered(center: (i32, i32), (w, h): (i32, i32)) -> Self {
        let mut r = Rect::new(0, 0, w, h);
        r.set_center(center);
        r
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    /// Translate in place.
    pub fn move_ip(&mut self, (dx, dy): (i32, i32)) {
        self.x += dx;
        self.y += dy;
    }

    /// True when the two rectangles share interior area.  Touching edges and
    /// empty rectangles never collide.
    pub fn colliderect(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Whether `rect` lies within the viewport, per axis: `(horizontal, vertical)`.
///
/// The horizontal flag is false as soon as the rectangle pokes past the left
/// or right edge; the vertical flag likewise for top and bottom.
pub fn check_bound(rect: &Rect) -> (bool, bool) {
    let inside_x = !(rect.left() < 0 || WIDTH < rect.right());
    let inside_y = !(rect.top() < 0 || HEIGHT < rect.bottom());
    (inside_x, inside_y)
}

/// Both axes of [`check_bound`] passed.
pub fn fully_inside(rect: &Rect) -> bool {
    check_bound(rect) == (true, true)
}

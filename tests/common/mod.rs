#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use fight_kokaton::assets::SpriteId;
use fight_kokaton::canvas::{Canvas, TextStyle};
use fight_kokaton::geometry::Rect;
use fight_kokaton::input::{HeldKeys, InputEvent, InputSource};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Background,
    Blit(SpriteId, Rect),
    Print(String, (i32, i32)),
    Present,
}

/// Canvas that just remembers what it was asked to draw.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Print(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<SpriteId> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Blit(id, _) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Present).count()
    }
}

impl Canvas for Recorder {
    fn fill_background(&mut self) -> io::Result<()> {
        self.ops.push(Op::Background);
        Ok(())
    }

    fn blit(&mut self, sprite: SpriteId, rect: Rect) -> io::Result<()> {
        self.ops.push(Op::Blit(sprite, rect));
        Ok(())
    }

    fn print(&mut self, text: &str, at: (i32, i32), _style: TextStyle) -> io::Result<()> {
        self.ops.push(Op::Print(text.to_string(), at));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.ops.push(Op::Present);
        Ok(())
    }
}

/// Input that replays a fixed list of per-tick events.
#[derive(Default)]
pub struct Script {
    pub ticks: VecDeque<Vec<InputEvent>>,
    pub held: HeldKeys,
}

impl Script {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn then(mut self, events: Vec<InputEvent>) -> Self {
        self.ticks.push_back(events);
        self
    }
}

impl InputSource for Script {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.ticks.pop_front().unwrap_or_default())
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

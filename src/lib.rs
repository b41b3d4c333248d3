//! Fight! Kokaton: steer the kokaton around the screen, shoot down the
//! bouncing bombs with beams and avoid touching them before time runs out.
//!
//! The library holds the whole simulation behind two small traits,
//! [`canvas::Canvas`] and [`input::InputSource`]; the binary plugs a terminal
//! into both.

pub mod assets;
pub mod canvas;
pub mod compute;
pub mod consts;
pub mod entities;
pub mod geometry;
pub mod input;

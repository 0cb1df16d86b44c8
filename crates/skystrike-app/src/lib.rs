//! SKY STRIKE terminal application.
//!
//! This crate wires the simulation crates to a crossterm front end: a
//! fixed-step game loop thread, pointer input mapped into the logical
//! arena, and a snapshot renderer.

pub mod display;
pub mod game_loop;
pub mod input;
pub mod state;

pub use skystrike_core as core;

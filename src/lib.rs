//! Side-scrolling arcade shooter for the terminal.
//!
//! - `compute`: the per-frame simulation (pure logic, explicit time input)
//! - `entities` / `pools`: game state and its fixed-capacity slot pools
//! - `input`: keyboard events to player intents
//! - `display`: half-block renderer
//! - `assets` / `audio`: resources loaded once at startup

pub mod assets;
pub mod audio;
pub mod compute;
pub mod consts;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod pools;

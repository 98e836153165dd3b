//! Core of a single-screen shooting gallery: a gun at the bottom of the
//! field fires bullets upward at rows of targets that descend as new rows
//! are added.
//!
//! The simulation (`compute` over an `entities::Field`) is deterministic and
//! total.
//! `game::Game` ties it to a [`surface::Surface`] that renders each frame.

pub mod compute;
pub mod config;
pub mod entities;
pub mod game;
pub mod layout;
pub mod stats;
pub mod surface;

pub use config::GameConfig;
pub use game::Game;
pub use surface::{NullSurface, Surface};

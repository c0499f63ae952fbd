#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod common;
mod config;
mod game;
mod generator;
mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod ship;
mod shot;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use shot::*;
#[cfg(feature = "std")]
pub use ui::*;

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
pub mod fleet;
mod game;
mod input;
mod placement;
mod player;
mod ship;
mod targeting;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::Fleet;
pub use game::*;
pub use input::*;
pub use placement::*;
pub use player::*;
pub use ship::*;
pub use targeting::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};

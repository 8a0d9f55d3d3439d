//! Line-oriented front end for the hotel reservation API.
//!
//! Every command is one user action run through a `hotel_core::Session`;
//! after each one the console prints whichever display slot is populated.

pub mod command;
pub mod render;

pub use command::{Command, Console, Flow, Line};
pub use render::render;

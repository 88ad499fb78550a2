//! Domain layer - Core value types of the startup sequence.
//!
//! Describes what gets launched and in which order, independent of how
//! processes are actually created.

pub mod command;
pub mod step;

pub use command::CommandSpec;
pub use step::{LaunchMode, Step};

//! Application services layer - The startup sequence itself.
//!
//! Services depend on the `ProcessRunner` abstraction rather than on
//! the operating system directly.

mod sequencer;

pub use sequencer::Sequencer;

//! Input subsystem.
//!
//! Public types are platform-agnostic. `platform::winit` translates window
//! system events into `InputEvent`s.

pub mod platform;
mod types;

pub use types::{key_action, CanvasAction, InputEvent, Key, KeyState};

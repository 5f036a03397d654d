//! Experiment engine crate.
//!
//! This crate owns the platform + GPU runtime pieces: a window with a wgpu
//! surface, adapter/device setup and a present loop that reports frame rate.

pub mod device;
pub mod input;
pub mod logging;
pub mod time;
pub mod window;

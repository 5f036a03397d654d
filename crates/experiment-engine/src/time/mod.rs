//! Time subsystem.
//!
//! Frame-rate measurement that does not depend on the runtime.
//! Intended usage:
//! - one `FpsCounter` per render loop
//! - call `tick()` once per presented frame and log the sample when one is returned

mod fps_counter;

pub use fps_counter::{FpsCounter, FpsSample};

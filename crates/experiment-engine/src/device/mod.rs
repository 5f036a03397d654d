//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - choosing the surface configuration from its capabilities
//! - classifying surface errors raised while presenting

mod error;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceInit;

pub(crate) use surface::surface_config;

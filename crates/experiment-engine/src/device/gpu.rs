use anyhow::{Context, Result};

use super::GpuInit;

/// Owns the adapter and the logical device/queue pair.
///
/// The surface is not stored here; it lives in the `Canvas` next to the
/// window it borrows.
pub struct Gpu {
    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue. Held with the device; nothing is submitted yet.
    _queue: wgpu::Queue,
}

impl Gpu {
    /// Creates the wgpu instance used for both surface and adapter creation.
    pub fn create_instance(init: &GpuInit) -> wgpu::Instance {
        wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        })
    }

    /// Requests an adapter able to present to `surface`, then a device from it.
    ///
    /// Both requests are asynchronous under wgpu; there is no retry and no
    /// timeout. Logs the adapter identity and device creation at info level.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
        init: GpuInit,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        log::info!("adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("experiment device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        log::info!("created device");

        Ok(Self {
            adapter,
            device,
            _queue: queue,
        })
    }

    /// Returns the selected adapter.
    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }
}

use winit::window::Window;

use super::{AdapterReport, GpuInit};
use crate::error::StartupError;

/// Owns the wgpu handles acquired for one window.
///
/// Acquisition order is instance → surface → adapter. Fields are declared in
/// the reverse order so that dropping the context releases them
/// adapter → surface → instance.
pub struct GpuContext<'w> {
    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Surface bound to the window, if one was requested.
    ///
    /// Borrows the window for `'w`; the runtime keeps the window alive longer.
    surface: Option<wgpu::Surface<'w>>,

    /// wgpu instance used to create the surface and request the adapter.
    instance: wgpu::Instance,
}

impl<'w> GpuContext<'w> {
    /// Creates the instance, the optional surface and the adapter for `window`.
    ///
    /// Blocks the calling thread while the adapter request resolves.
    pub fn new(window: &'w Window, init: GpuInit) -> Result<Self, StartupError> {
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(StartupError::ZeroSize {
                width: size.width,
                height: size.height,
            });
        }

        let instance = wgpu::Instance::new(&init.instance_descriptor());
        log::debug!("created wgpu instance (backends: {:?})", init.backends);

        let surface = if init.compatible_surface {
            let surface = instance
                .create_surface(window)
                .map_err(StartupError::Surface)?;
            log::debug!("created surface for {}x{} window", size.width, size.height);
            Some(surface)
        } else {
            None
        };

        let adapter =
            Self::request_adapter_blocking(&instance, &init.adapter_options(surface.as_ref()))?;

        let info = adapter.get_info();
        log::info!("using adapter {:?} ({:?}, {:?})", info.name, info.device_type, info.backend);

        Ok(Self {
            adapter,
            surface,
            instance,
        })
    }

    /// Requests an adapter and blocks the calling thread until it resolves.
    ///
    /// Adapter acquisition is asynchronous under wgpu. No retry and no
    /// timeout: the result of the single request is returned.
    pub fn request_adapter_blocking(
        instance: &wgpu::Instance,
        options: &wgpu::RequestAdapterOptions<'_, '_>,
    ) -> Result<wgpu::Adapter, StartupError> {
        pollster::block_on(instance.request_adapter(options)).map_err(StartupError::NoAdapter)
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    pub fn surface(&self) -> Option<&wgpu::Surface<'w>> {
        self.surface.as_ref()
    }

    /// Describes the adapter: identity, features, limits and, when a surface
    /// exists, what the surface accepts.
    pub fn report(&self) -> AdapterReport {
        let caps = self
            .surface
            .as_ref()
            .map(|s| s.get_capabilities(&self.adapter));

        AdapterReport::new(
            &self.adapter.get_info(),
            self.adapter.features(),
            &self.adapter.limits(),
            caps.as_ref(),
        )
    }
}

impl Drop for GpuContext<'_> {
    fn drop(&mut self) {
        // Field drop order does the actual release.
        log::debug!("releasing adapter");
        if self.surface.is_some() {
            log::debug!("releasing surface");
        }
        log::debug!("releasing instance");
    }
}

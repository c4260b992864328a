/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance is allowed to use.
    pub backends: wgpu::Backends,

    /// Adapter power preference.
    pub power_preference: wgpu::PowerPreference,

    /// Only accept a software/fallback adapter.
    pub force_fallback_adapter: bool,

    /// Create a surface for the window and require a compatible adapter.
    ///
    /// When false, the adapter request is not tied to the window at all.
    pub compatible_surface: bool,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: true,
        }
    }
}

impl GpuInit {
    /// Defaults with the standard wgpu environment overrides applied.
    ///
    /// Honors `WGPU_BACKEND` (e.g. "vulkan,gl") and `WGPU_POWER_PREF`
    /// ("low", "high", "none").
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies `WGPU_BACKEND` / `WGPU_POWER_PREF` on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(backends) = wgpu::Backends::from_env() {
            self.backends = backends;
        }
        if let Some(power) = wgpu::PowerPreference::from_env() {
            self.power_preference = power;
        }
        self
    }

    pub(crate) fn instance_descriptor(&self) -> wgpu::InstanceDescriptor {
        wgpu::InstanceDescriptor {
            backends: self.backends,
            ..Default::default()
        }
    }

    pub(crate) fn adapter_options<'a, 's>(
        &self,
        surface: Option<&'a wgpu::Surface<'s>>,
    ) -> wgpu::RequestAdapterOptions<'a, 's> {
        wgpu::RequestAdapterOptions {
            power_preference: self.power_preference,
            compatible_surface: surface,
            force_fallback_adapter: self.force_fallback_adapter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bootstrap_needs() {
        let init = GpuInit::default();
        assert_eq!(init.backends, wgpu::Backends::all());
        assert_eq!(init.power_preference, wgpu::PowerPreference::HighPerformance);
        assert!(!init.force_fallback_adapter);
        assert!(init.compatible_surface);
    }

    #[test]
    fn instance_descriptor_carries_backends() {
        let init = GpuInit {
            backends: wgpu::Backends::VULKAN,
            ..GpuInit::default()
        };
        assert_eq!(init.instance_descriptor().backends, wgpu::Backends::VULKAN);
    }

    #[test]
    fn adapter_options_without_surface() {
        let init = GpuInit {
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: true,
            ..GpuInit::default()
        };
        let opts = init.adapter_options(None);
        assert!(opts.compatible_surface.is_none());
        assert!(opts.force_fallback_adapter);
        assert_eq!(opts.power_preference, wgpu::PowerPreference::LowPower);
    }
}

use std::fmt;

use super::surface::choose_surface_format;

/// Known features with their display names.
///
/// WebGPU-standard features first, then native-only ones.
const FEATURE_TABLE: &[(wgpu::Features, &str)] = &[
    (wgpu::Features::DEPTH_CLIP_CONTROL, "depth-clip-control"),
    (wgpu::Features::DEPTH32FLOAT_STENCIL8, "depth32float-stencil8"),
    (wgpu::Features::TEXTURE_COMPRESSION_BC, "texture-compression-bc"),
    (wgpu::Features::TEXTURE_COMPRESSION_ETC2, "texture-compression-etc2"),
    (wgpu::Features::TEXTURE_COMPRESSION_ASTC, "texture-compression-astc"),
    (wgpu::Features::TIMESTAMP_QUERY, "timestamp-query"),
    (wgpu::Features::INDIRECT_FIRST_INSTANCE, "indirect-first-instance"),
    (wgpu::Features::SHADER_F16, "shader-f16"),
    (wgpu::Features::RG11B10UFLOAT_RENDERABLE, "rg11b10ufloat-renderable"),
    (wgpu::Features::BGRA8UNORM_STORAGE, "bgra8unorm-storage"),
    (wgpu::Features::FLOAT32_FILTERABLE, "float32-filterable"),
    (wgpu::Features::DUAL_SOURCE_BLENDING, "dual-source-blending"),
    // native
    (wgpu::Features::POLYGON_MODE_LINE, "polygon-mode-line"),
    (wgpu::Features::POLYGON_MODE_POINT, "polygon-mode-point"),
    (wgpu::Features::CONSERVATIVE_RASTERIZATION, "conservative-rasterization"),
    (wgpu::Features::TEXTURE_BINDING_ARRAY, "texture-binding-array"),
    (wgpu::Features::BUFFER_BINDING_ARRAY, "buffer-binding-array"),
    (wgpu::Features::VERTEX_WRITABLE_STORAGE, "vertex-writable-storage"),
    (wgpu::Features::SHADER_F64, "shader-f64"),
    (wgpu::Features::PIPELINE_STATISTICS_QUERY, "pipeline-statistics-query"),
    (wgpu::Features::MAPPABLE_PRIMARY_BUFFERS, "mappable-primary-buffers"),
];

/// Names of the known features contained in `features`, in table order.
///
/// Bits with no table entry are skipped.
pub fn feature_names(features: wgpu::Features) -> Vec<&'static str> {
    FEATURE_TABLE
        .iter()
        .filter(|(flag, _)| features.contains(*flag))
        .map(|(_, name)| *name)
        .collect()
}

/// Headline adapter limits as `(name, value)` pairs.
pub fn limit_entries(limits: &wgpu::Limits) -> Vec<(&'static str, u64)> {
    vec![
        ("maxTextureDimension1D", u64::from(limits.max_texture_dimension_1d)),
        ("maxTextureDimension2D", u64::from(limits.max_texture_dimension_2d)),
        ("maxTextureDimension3D", u64::from(limits.max_texture_dimension_3d)),
        ("maxTextureArrayLayers", u64::from(limits.max_texture_array_layers)),
        ("maxBindGroups", u64::from(limits.max_bind_groups)),
        ("maxBindingsPerBindGroup", u64::from(limits.max_bindings_per_bind_group)),
        ("maxUniformBufferBindingSize", u64::from(limits.max_uniform_buffer_binding_size)),
        ("maxStorageBufferBindingSize", u64::from(limits.max_storage_buffer_binding_size)),
        ("maxBufferSize", u64::from(limits.max_buffer_size)),
        ("maxVertexBuffers", u64::from(limits.max_vertex_buffers)),
        ("maxVertexAttributes", u64::from(limits.max_vertex_attributes)),
        ("maxComputeWorkgroupSizeX", u64::from(limits.max_compute_workgroup_size_x)),
        ("maxComputeWorkgroupSizeY", u64::from(limits.max_compute_workgroup_size_y)),
        ("maxComputeWorkgroupSizeZ", u64::from(limits.max_compute_workgroup_size_z)),
        (
            "maxComputeInvocationsPerWorkgroup",
            u64::from(limits.max_compute_invocations_per_workgroup),
        ),
    ]
}

/// Identity of the selected adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterSummary {
    pub name: String,
    pub vendor: u32,
    pub device: u32,
    pub device_type: wgpu::DeviceType,
    pub driver: String,
    pub driver_info: String,
    pub backend: wgpu::Backend,
}

impl From<&wgpu::AdapterInfo> for AdapterSummary {
    fn from(info: &wgpu::AdapterInfo) -> Self {
        Self {
            name: info.name.clone(),
            vendor: info.vendor,
            device: info.device,
            device_type: info.device_type,
            driver: info.driver.clone(),
            driver_info: info.driver_info.clone(),
            backend: info.backend,
        }
    }
}

/// What the surface accepts when driven by the selected adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSummary {
    pub formats: Vec<wgpu::TextureFormat>,
    pub present_modes: Vec<wgpu::PresentMode>,
    pub alpha_modes: Vec<wgpu::CompositeAlphaMode>,
    pub preferred_format: Option<wgpu::TextureFormat>,
}

impl From<&wgpu::SurfaceCapabilities> for SurfaceSummary {
    fn from(caps: &wgpu::SurfaceCapabilities) -> Self {
        Self {
            formats: caps.formats.clone(),
            present_modes: caps.present_modes.clone(),
            alpha_modes: caps.alpha_modes.clone(),
            preferred_format: choose_surface_format(caps, true),
        }
    }
}

/// Printable description of an acquired adapter.
#[derive(Debug, Clone)]
pub struct AdapterReport {
    pub adapter: AdapterSummary,
    pub features: Vec<&'static str>,
    pub limits: Vec<(&'static str, u64)>,
    pub surface: Option<SurfaceSummary>,
}

impl AdapterReport {
    pub fn new(
        info: &wgpu::AdapterInfo,
        features: wgpu::Features,
        limits: &wgpu::Limits,
        surface: Option<&wgpu::SurfaceCapabilities>,
    ) -> Self {
        Self {
            adapter: AdapterSummary::from(info),
            features: feature_names(features),
            limits: limit_entries(limits),
            surface: surface.map(SurfaceSummary::from),
        }
    }
}

impl fmt::Display for AdapterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.adapter;
        writeln!(f, "Adapter: {}", a.name)?;
        writeln!(f, "  vendor: {:#06x}  device: {:#06x}", a.vendor, a.device)?;
        writeln!(f, "  type: {:?}  backend: {:?}", a.device_type, a.backend)?;
        if a.driver_info.is_empty() {
            writeln!(f, "  driver: {}", a.driver)?;
        } else {
            writeln!(f, "  driver: {} ({})", a.driver, a.driver_info)?;
        }

        writeln!(f, "Adapter features:")?;
        if self.features.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for name in &self.features {
            writeln!(f, "  - {name}")?;
        }

        writeln!(f, "Adapter limits:")?;
        for (name, value) in &self.limits {
            writeln!(f, "  - {name}: {value}")?;
        }

        if let Some(s) = &self.surface {
            writeln!(f, "Surface:")?;
            writeln!(f, "  formats: {:?}", s.formats)?;
            writeln!(f, "  present modes: {:?}", s.present_modes)?;
            writeln!(f, "  alpha modes: {:?}", s.alpha_modes)?;
            match s.preferred_format {
                Some(format) => writeln!(f, "  preferred format: {format:?}")?,
                None => writeln!(f, "  preferred format: (incompatible)")?,
            }
        }

        Ok(())
    }
}

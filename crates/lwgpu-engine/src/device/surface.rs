/// sRGB formats in order of preference.
const PREFERRED_SRGB: [wgpu::TextureFormat; 2] = [
    wgpu::TextureFormat::Bgra8UnormSrgb,
    wgpu::TextureFormat::Rgba8UnormSrgb,
];

/// Picks the format a renderer should configure the surface with.
///
/// Returns `None` when the surface is incompatible with the adapter
/// (no formats reported).
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = PREFERRED_SRGB.iter().find(|f| caps.formats.contains(f)) {
            return Some(*f);
        }
    }

    caps.formats.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat;

    fn caps(formats: &[TextureFormat]) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_caps_yield_none() {
        assert_eq!(choose_surface_format(&caps(&[]), true), None);
    }

    #[test]
    fn prefers_bgra_srgb() {
        let c = caps(&[
            TextureFormat::Rgba8Unorm,
            TextureFormat::Rgba8UnormSrgb,
            TextureFormat::Bgra8UnormSrgb,
        ]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_rgba_srgb() {
        let c = caps(&[TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn first_format_when_no_srgb_available() {
        let c = caps(&[TextureFormat::Rgb10a2Unorm, TextureFormat::Bgra8Unorm]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Rgb10a2Unorm));
    }

    #[test]
    fn first_format_when_srgb_not_requested() {
        let c = caps(&[TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb]);
        assert_eq!(choose_surface_format(&c, false), Some(TextureFormat::Bgra8Unorm));
    }
}

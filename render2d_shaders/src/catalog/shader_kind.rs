/// ShaderKind - identity of every program the renderer can draw with

use crate::config::ShaderConfig;

/// Program identity
///
/// `None` is a sentinel meaning "no program" and is never compiled. All
/// variants exist regardless of build features; which ones are compiled is
/// decided by `catalog_kinds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShaderKind {
    None,
    Solid,
    Rgb,
    Rgba,
    RgbPixelArt,
    RgbaPixelArt,
    Yuv,
    Nv12Ra,
    Nv12Rg,
    Nv21Ra,
    Nv21Rg,
}

impl ShaderKind {
    /// Number of kinds, `None` included
    pub const COUNT: usize = 11;

    /// Every kind in enumeration order
    pub const ALL: [ShaderKind; ShaderKind::COUNT] = [
        ShaderKind::None,
        ShaderKind::Solid,
        ShaderKind::Rgb,
        ShaderKind::Rgba,
        ShaderKind::RgbPixelArt,
        ShaderKind::RgbaPixelArt,
        ShaderKind::Yuv,
        ShaderKind::Nv12Ra,
        ShaderKind::Nv12Rg,
        ShaderKind::Nv21Ra,
        ShaderKind::Nv21Rg,
    ];

    /// Position in `ALL`, used to index per-kind arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            ShaderKind::None => "none",
            ShaderKind::Solid => "solid",
            ShaderKind::Rgb => "rgb",
            ShaderKind::Rgba => "rgba",
            ShaderKind::RgbPixelArt => "rgb_pixelart",
            ShaderKind::RgbaPixelArt => "rgba_pixelart",
            ShaderKind::Yuv => "yuv",
            ShaderKind::Nv12Ra => "nv12_ra",
            ShaderKind::Nv12Rg => "nv12_rg",
            ShaderKind::Nv21Ra => "nv21_ra",
            ShaderKind::Nv21Rg => "nv21_rg",
        }
    }

    /// Pixel-art scaling programs (take a `texel_size` vec4)
    pub fn is_pixel_art(self) -> bool {
        matches!(self, ShaderKind::RgbPixelArt | ShaderKind::RgbaPixelArt)
    }

    /// Planar and semi-planar YUV programs (take the color conversion vectors)
    pub fn is_yuv(self) -> bool {
        matches!(
            self,
            ShaderKind::Yuv
                | ShaderKind::Nv12Ra
                | ShaderKind::Nv12Rg
                | ShaderKind::Nv21Ra
                | ShaderKind::Nv21Rg
        )
    }

    /// Number of floats the parameter vector must hold, 0 when unused
    pub fn param_len(self) -> usize {
        if self.is_pixel_art() {
            4
        } else if self.is_yuv() {
            16
        } else {
            0
        }
    }

    /// Pick the program for a texture draw
    ///
    /// `rg_textures` tells whether two-channel RG textures are available; the
    /// interleaved chroma plane of NV12/NV21 is otherwise stored as
    /// luminance-alpha. Pixel-art scaling only applies to RGB(A) textures.
    pub fn for_texture(format: TextureFormat, scale_mode: ScaleMode, rg_textures: bool) -> ShaderKind {
        let pixel_art = scale_mode == ScaleMode::PixelArt;
        match format {
            TextureFormat::Rgb if pixel_art => ShaderKind::RgbPixelArt,
            TextureFormat::Rgb => ShaderKind::Rgb,
            TextureFormat::Rgba if pixel_art => ShaderKind::RgbaPixelArt,
            TextureFormat::Rgba => ShaderKind::Rgba,
            TextureFormat::Yv12 | TextureFormat::Iyuv => ShaderKind::Yuv,
            TextureFormat::Nv12 if rg_textures => ShaderKind::Nv12Rg,
            TextureFormat::Nv12 => ShaderKind::Nv12Ra,
            TextureFormat::Nv21 if rg_textures => ShaderKind::Nv21Rg,
            TextureFormat::Nv21 => ShaderKind::Nv21Ra,
        }
    }
}

/// Texture layouts the renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Opaque RGB (alpha ignored)
    Rgb,
    /// RGB with alpha
    Rgba,
    /// Planar Y, V, U
    Yv12,
    /// Planar Y, U, V
    Iyuv,
    /// Y plane + interleaved U/V plane
    Nv12,
    /// Y plane + interleaved V/U plane
    Nv21,
}

/// Texture scaling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleMode {
    Nearest,
    #[default]
    Linear,
    /// Nearest sampling with anti-aliased texel edges
    PixelArt,
}

/// Kinds compiled for `config`, in enumeration order, `None` excluded
pub fn catalog_kinds(config: &ShaderConfig) -> impl Iterator<Item = ShaderKind> + '_ {
    ShaderKind::ALL
        .into_iter()
        .filter(move |kind| *kind != ShaderKind::None && (config.enable_yuv || !kind.is_yuv()))
}

#[cfg(test)]
#[path = "shader_kind_tests.rs"]
mod tests;

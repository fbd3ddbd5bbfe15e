/// GLSL source text for every program of the catalog
///
/// Fragment sources always use `sampler2D`/`texture2D`; the compile step
/// redefines them to the rectangle versions when the driver requires
/// texture rectangle addressing.

use crate::catalog::{catalog_kinds, ShaderKind};
use crate::config::ShaderConfig;

/// Static source of one program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSourceEntry {
    pub vertex: &'static str,
    pub fragment: &'static str,
    /// `#version` line prepended to the fragment stage, if any
    pub fragment_version: Option<&'static str>,
}

/// Vertex stage defines (none are needed today)
pub const VERTEX_DEFINES: &str = "";

/// Fragment defines for normalized 2D sampling
pub const FRAGMENT_DEFINES_NORMAL: &str = "#define UVCoordScale 1.0\n";

/// Fragment defines for rectangle sampling; chroma planes are half size in texels
pub const FRAGMENT_DEFINES_RECTANGLE: &str = concat!(
    "#define sampler2D sampler2DRect\n",
    "#define texture2D texture2DRect\n",
    "#define UVCoordScale 0.5\n",
);

/// Shading language version needed for derivative-based sampling
pub const PIXEL_ART_FRAGMENT_VERSION: &str = "#version 130\n";

/// Fragment defines for the addressing mode
pub fn fragment_defines(texture_rectangle: bool) -> &'static str {
    if texture_rectangle {
        FRAGMENT_DEFINES_RECTANGLE
    } else {
        FRAGMENT_DEFINES_NORMAL
    }
}

/// Catalog kinds for `config` paired with their sources, in build order
pub fn catalog_entries(
    config: &ShaderConfig,
) -> impl Iterator<Item = (ShaderKind, &'static ShaderSourceEntry)> + '_ {
    catalog_kinds(config).filter_map(|kind| shader_source(kind).map(|entry| (kind, entry)))
}

/// Source of `kind`, `None` for the sentinel kind
pub fn shader_source(kind: ShaderKind) -> Option<&'static ShaderSourceEntry> {
    match kind {
        ShaderKind::None => None,
        ShaderKind::Solid => Some(&SOLID),
        ShaderKind::Rgb => Some(&RGB),
        ShaderKind::Rgba => Some(&RGBA),
        ShaderKind::RgbPixelArt => Some(&RGB_PIXELART),
        ShaderKind::RgbaPixelArt => Some(&RGBA_PIXELART),
        ShaderKind::Yuv => Some(&YUV),
        ShaderKind::Nv12Ra => Some(&NV12_RA),
        ShaderKind::Nv12Rg => Some(&NV12_RG),
        ShaderKind::Nv21Ra => Some(&NV21_RA),
        ShaderKind::Nv21Rg => Some(&NV21_RG),
    }
}

// ============================================================================
// Shared fragments
// ============================================================================

macro_rules! color_vertex_shader {
    () => {
        concat!(
            "varying vec4 v_color;\n",
            "\n",
            "void main()\n",
            "{\n",
            "    gl_Position = gl_ModelViewProjectionMatrix * gl_Vertex;\n",
            "    v_color = gl_Color;\n",
            "}",
        )
    };
}

macro_rules! texture_vertex_shader {
    () => {
        concat!(
            "varying vec4 v_color;\n",
            "varying vec2 v_texCoord;\n",
            "\n",
            "void main()\n",
            "{\n",
            "    gl_Position = gl_ModelViewProjectionMatrix * gl_Vertex;\n",
            "    v_color = gl_Color;\n",
            "    v_texCoord = vec2(gl_MultiTexCoord0);\n",
            "}",
        )
    };
}

macro_rules! pixel_art_sample {
    () => {
        concat!(
            "    vec2 boxSize = clamp(fwidth(v_texCoord) * texel_size.zw, 1e-5, 1.0);\n",
            "    vec2 tx = v_texCoord * texel_size.zw - 0.5 * boxSize;\n",
            "    vec2 txOffset = smoothstep(vec2(1.0) - boxSize, vec2(1.0), fract(tx));\n",
            "    vec2 uv = (floor(tx) + 0.5 + txOffset) * texel_size.xy;\n",
            "    gl_FragColor = textureGrad(tex0, uv, dFdx(v_texCoord), dFdy(v_texCoord));\n",
        )
    };
}

macro_rules! yuv_prologue {
    () => {
        concat!(
            "varying vec4 v_color;\n",
            "varying vec2 v_texCoord;\n",
            "uniform sampler2D tex0; // Y \n",
            "uniform sampler2D tex1; // U \n",
            "uniform sampler2D tex2; // V \n",
            "uniform vec3 Yoffset;\n",
            "uniform vec3 Rcoeff;\n",
            "uniform vec3 Gcoeff;\n",
            "uniform vec3 Bcoeff;\n",
            "\n",
        )
    };
}

macro_rules! nv_prologue {
    () => {
        concat!(
            "varying vec4 v_color;\n",
            "varying vec2 v_texCoord;\n",
            "uniform sampler2D tex0; // Y \n",
            "uniform sampler2D tex1; // U/V \n",
            "uniform vec3 Yoffset;\n",
            "uniform vec3 Rcoeff;\n",
            "uniform vec3 Gcoeff;\n",
            "uniform vec3 Bcoeff;\n",
            "\n",
        )
    };
}

/// `main()` of the YUV programs; `$chroma` fetches the U and V values
macro_rules! yuv_body {
    ($chroma:expr) => {
        concat!(
            "\n",
            "void main()\n",
            "{\n",
            "    vec2 tcoord;\n",
            "    vec3 yuv, rgb;\n",
            "\n",
            "    // Get the Y value \n",
            "    tcoord = v_texCoord;\n",
            "    yuv.x = texture2D(tex0, tcoord).r;\n",
            "\n",
            "    // Get the U and V values \n",
            "    tcoord *= UVCoordScale;\n",
            $chroma,
            "\n",
            "    // Do the color transform \n",
            "    yuv += Yoffset;\n",
            "    rgb.r = dot(yuv, Rcoeff);\n",
            "    rgb.g = dot(yuv, Gcoeff);\n",
            "    rgb.b = dot(yuv, Bcoeff);\n",
            "\n",
            "    gl_FragColor = vec4(rgb, 1.0) * v_color;\n",
            "}",
        )
    };
}

/// Interleaved chroma fetch with the given swizzle
macro_rules! nv_chroma {
    ($swizzle:literal) => {
        concat!("    yuv.yz = texture2D(tex1, tcoord).", $swizzle, ";\n")
    };
}

// ============================================================================
// Catalog entries
// ============================================================================

static SOLID: ShaderSourceEntry = ShaderSourceEntry {
    vertex: color_vertex_shader!(),
    fragment: concat!(
        "varying vec4 v_color;\n",
        "\n",
        "void main()\n",
        "{\n",
        "    gl_FragColor = v_color;\n",
        "}",
    ),
    fragment_version: None,
};

static RGB: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(
        "varying vec4 v_color;\n",
        "varying vec2 v_texCoord;\n",
        "uniform sampler2D tex0;\n",
        "\n",
        "void main()\n",
        "{\n",
        "    gl_FragColor = texture2D(tex0, v_texCoord);\n",
        "    gl_FragColor.a = 1.0;\n",
        "    gl_FragColor *= v_color;\n",
        "}",
    ),
    fragment_version: None,
};

static RGBA: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(
        "varying vec4 v_color;\n",
        "varying vec2 v_texCoord;\n",
        "uniform sampler2D tex0;\n",
        "\n",
        "void main()\n",
        "{\n",
        "    gl_FragColor = texture2D(tex0, v_texCoord) * v_color;\n",
        "}",
    ),
    fragment_version: None,
};

static RGB_PIXELART: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(
        "varying vec4 v_color;\n",
        "varying vec2 v_texCoord;\n",
        "uniform sampler2D tex0;\n",
        "uniform vec4 texel_size; // xy: texel size, zw: texture dimensions\n",
        "\n",
        "void main()\n",
        "{\n",
        pixel_art_sample!(),
        "    gl_FragColor.a = 1.0;\n",
        "    gl_FragColor *= v_color;\n",
        "}",
    ),
    fragment_version: Some(PIXEL_ART_FRAGMENT_VERSION),
};

static RGBA_PIXELART: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(
        "varying vec4 v_color;\n",
        "varying vec2 v_texCoord;\n",
        "uniform sampler2D tex0;\n",
        "uniform vec4 texel_size; // xy: texel size, zw: texture dimensions\n",
        "\n",
        "void main()\n",
        "{\n",
        pixel_art_sample!(),
        "    gl_FragColor *= v_color;\n",
        "}",
    ),
    fragment_version: Some(PIXEL_ART_FRAGMENT_VERSION),
};

static YUV: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(
        yuv_prologue!(),
        yuv_body!(concat!(
            "    yuv.y = texture2D(tex1, tcoord).r;\n",
            "    yuv.z = texture2D(tex2, tcoord).r;\n",
        )),
    ),
    fragment_version: None,
};

static NV12_RA: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(nv_prologue!(), yuv_body!(nv_chroma!("ra"))),
    fragment_version: None,
};

static NV12_RG: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(nv_prologue!(), yuv_body!(nv_chroma!("rg"))),
    fragment_version: None,
};

static NV21_RA: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(nv_prologue!(), yuv_body!(nv_chroma!("ar"))),
    fragment_version: None,
};

static NV21_RG: ShaderSourceEntry = ShaderSourceEntry {
    vertex: texture_vertex_shader!(),
    fragment: concat!(nv_prologue!(), yuv_body!(nv_chroma!("gr"))),
    fragment_version: None,
};

#[cfg(test)]
#[path = "shader_source_tests.rs"]
mod tests;

//! Parameter vectors passed to `ShaderContext::select`
//!
//! Uploads are keyed on the slice address, so tables reused every frame
//! should live somewhere stable (a `static`, or a field of the texture they
//! belong to). The YUV tables below are statics for that reason.
//!
//! YUV layout: four vec3 (`Yoffset`, `Rcoeff`, `Gcoeff`, `Bcoeff`) on a
//! stride of 4 floats, the fourth float of each being padding.

use glam::Vec3;

/// Floats taken by pixel-art programs (`texel_size`)
pub const PIXEL_ART_PARAM_LEN: usize = 4;

/// Floats taken by YUV programs
pub const YUV_PARAM_LEN: usize = 16;

/// `texel_size` for a `width` x `height` texture: (1/w, 1/h, w, h)
///
/// A zero dimension yields an infinite reciprocal; callers never draw empty
/// textures.
pub fn pixel_art_params(width: u32, height: u32) -> [f32; PIXEL_ART_PARAM_LEN] {
    let (w, h) = (width as f32, height as f32);
    [1.0 / w, 1.0 / h, w, h]
}

/// Pack a YUV to RGB conversion into the layout the YUV programs read
pub fn yuv_params(offset: Vec3, rcoeff: Vec3, gcoeff: Vec3, bcoeff: Vec3) -> [f32; YUV_PARAM_LEN] {
    let mut params = [0.0; YUV_PARAM_LEN];
    for (chunk, vector) in params.chunks_exact_mut(4).zip([offset, rcoeff, gcoeff, bcoeff]) {
        chunk[..3].copy_from_slice(&vector.to_array());
    }
    params
}

/// Full range BT.601 (JPEG)
pub static YUV_JPEG: [f32; YUV_PARAM_LEN] = [
    0.0, -0.501960814, -0.501960814, 0.0, // offset
    1.0, 0.0, 1.402, 0.0,                  // Rcoeff
    1.0, -0.3441, -0.7141, 0.0,            // Gcoeff
    1.0, 1.772, 0.0, 0.0,                  // Bcoeff
];

/// Limited range BT.601
pub static YUV_BT601_LIMITED: [f32; YUV_PARAM_LEN] = [
    -0.0627451017, -0.501960814, -0.501960814, 0.0, // offset
    1.1644, 0.0, 1.596, 0.0,                         // Rcoeff
    1.1644, -0.3918, -0.813, 0.0,                    // Gcoeff
    1.1644, 2.0172, 0.0, 0.0,                        // Bcoeff
];

/// Limited range BT.709
pub static YUV_BT709_LIMITED: [f32; YUV_PARAM_LEN] = [
    -0.0627451017, -0.501960814, -0.501960814, 0.0, // offset
    1.1644, 0.0, 1.7927, 0.0,                        // Rcoeff
    1.1644, -0.2132, -0.5329, 0.0,                   // Gcoeff
    1.1644, 2.1124, 0.0, 0.0,                        // Bcoeff
];

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;

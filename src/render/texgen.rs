//! Procedural texture maps for the container cube.
//!
//! Generates the diffuse and specular maps in memory instead of shipping
//! image assets: a steel frame around a planked wooden interior, with the
//! specular map bright on the frame and dull on the wood. Both maps are
//! deterministic for a given size.

use image::{Rgba, RgbaImage};

const STEEL: [u8; 4] = [96, 96, 96, 255];
const WOOD: [u8; 4] = [134, 84, 41, 255];
const WOOD_SEAM: [u8; 4] = [94, 58, 27, 255];

const FRAME_SPECULAR: u8 = 160;
const WOOD_SPECULAR: u8 = 26;

fn frame_thickness(size: u32) -> u32 {
    (size / 8).max(1)
}

fn on_frame(x: u32, y: u32, size: u32) -> bool {
    let t = frame_thickness(size);
    x < t || y < t || x >= size - t || y >= size - t
}

fn on_plank_seam(y: u32, size: u32) -> bool {
    let plank = (size / 4).max(1);
    y % plank == 0
}

/// Diffuse map: steel frame, wooden planks inside.
pub fn diffuse_map(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if on_frame(x, y, size) {
            Rgba(STEEL)
        } else if on_plank_seam(y, size) {
            Rgba(WOOD_SEAM)
        } else {
            // Light grain variation along the plank
            let grain = ((x * 7 + y * 3) % 5) as u8 * 4;
            Rgba([
                WOOD[0].saturating_sub(grain),
                WOOD[1].saturating_sub(grain),
                WOOD[2],
                255,
            ])
        }
    })
}

/// Specular map: the steel frame reflects, the wood barely does.
pub fn specular_map(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let intensity = if on_frame(x, y, size) {
            FRAME_SPECULAR
        } else {
            WOOD_SPECULAR
        };
        Rgba([intensity, intensity, intensity, 255])
    })
}

//! Texture generation and embedded image assets.

use firmament_core::constants::{
    BYTES_PER_PIXEL, SUN_DISK_RADIUS_RATIO, SUN_FADE_RADIUS_RATIO, SUN_GLOW_RADIUS_RATIO,
};
use firmament_core::math::distance;
use firmament_core::{FirmamentError, PixelFormat};
use image::ImageFormat;

static MOON_PNG: &[u8] = include_bytes!("../../../assets/moon.png");
static NIGHT_SKY_PNG: &[u8] = include_bytes!("../../../assets/night_sky.png");

/// An 8-bit four channel image, row-major, in `format` byte order.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Wrap a pixel buffer, checking its length against the dimensions.
    pub fn from_pixels(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, FirmamentError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(FirmamentError::TextureSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    /// Alpha of the pixel at (x, y). Alpha is the last byte in both formats.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.pixels[index + 3]
    }
}

/// Alpha of a sun texel `dist` texels from the centre of a texture whose
/// half width is `center`.
fn sun_alpha(dist: f32, center: f32, glow_floor: f32) -> u8 {
    let disk = center * SUN_DISK_RADIUS_RATIO;
    let fade = center * SUN_FADE_RADIUS_RATIO;
    let glow = center * SUN_GLOW_RADIUS_RATIO;

    let alpha = if dist <= disk {
        1.0
    } else if dist <= fade {
        (1.0 - (dist - disk) / (fade - disk)) * (1.0 - glow_floor) + glow_floor
    } else if dist <= glow {
        (1.0 - (dist - disk) / (glow - disk)) * glow_floor
    } else {
        0.0
    };
    (alpha.clamp(0.0, 1.0) * 255.0) as u8
}

/// Build a white sun disk with a soft edge.
///
/// The disk is opaque out to 0.45 of the half width, fades linearly down
/// to `glow_floor` by 0.55, then a glow scaled by `glow_floor` runs out
/// to 0.98, measured from the disk edge. Everything past that is
/// transparent.
pub fn create_sun_texture(side: u32, glow_floor: f32, format: PixelFormat) -> Texture {
    let center = side as f32 / 2.0;
    let glow_floor = glow_floor.clamp(0.0, 1.0);
    let mut pixels = vec![255u8; side as usize * side as usize * BYTES_PER_PIXEL];

    for (i, px) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let x = (i % side as usize) as f32;
        let y = (i / side as usize) as f32;
        px[3] = sun_alpha(distance(x, y, center, center), center, glow_floor);
    }

    Texture {
        width: side,
        height: side,
        format,
        pixels,
    }
}

fn decode_png(bytes: &[u8], format: PixelFormat, name: &str) -> Result<Texture, FirmamentError> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| FirmamentError::TextureDecode(format!("{name}: {e}")))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let mut pixels = image.into_raw();
    format.convert_from_rgba(&mut pixels);
    log::debug!("Decoded {name} texture {width}x{height} as {format:?}");
    Texture::from_pixels(width, height, format, pixels)
}

/// Decode the embedded full-moon image. This is the unmasked copy that
/// phase masking starts from on every update.
pub fn create_moon_texture(format: PixelFormat) -> Result<Texture, FirmamentError> {
    decode_png(MOON_PNG, format, "moon")
}

/// Decode the embedded star field for the night dome.
pub fn create_night_sky_texture(format: PixelFormat) -> Result<Texture, FirmamentError> {
    decode_png(NIGHT_SKY_PNG, format, "night sky")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_center_opaque_corners_clear() {
        let tex = create_sun_texture(128, 0.125, PixelFormat::Bgra8);
        assert_eq!(tex.byte_len(), 128 * 128 * 4);
        assert_eq!(tex.alpha_at(64, 64), 255);
        for (x, y) in [(0, 0), (127, 0), (0, 127), (127, 127)] {
            assert_eq!(tex.alpha_at(x, y), 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_sun_color_is_white() {
        let tex = create_sun_texture(32, 0.125, PixelFormat::Rgba8);
        assert!(tex
            .pixels
            .chunks_exact(4)
            .all(|px| px[0] == 255 && px[1] == 255 && px[2] == 255));
    }

    #[test]
    fn test_sun_alpha_regions() {
        let c = 64.0;
        let g = 0.125;
        assert_eq!(sun_alpha(c * 0.45, c, g), 255);
        // Fade ring ends at the glow floor.
        assert_eq!(sun_alpha(c * 0.55, c, g), (g * 255.0) as u8);
        // Midway through the fade ring.
        let mid = sun_alpha(c * 0.5, c, g) as f32 / 255.0;
        assert!((mid - (0.5 * (1.0 - g) + g)).abs() < 0.01);
        // Glow ramps from the disk edge, so it starts below the floor.
        assert_eq!(sun_alpha(c * 0.56, c, g), 25);
        assert_eq!(sun_alpha(c * 0.7, c, g), 16);
        assert_eq!(sun_alpha(c * 0.98, c, g), 0);
        assert_eq!(sun_alpha(c, c, g), 0);
    }

    #[test]
    fn test_sun_alpha_decreases_outward() {
        let tex = create_sun_texture(128, 0.2, PixelFormat::Rgba8);
        let mut last = 255;
        for x in 64..128 {
            let a = tex.alpha_at(x, 64);
            assert!(a <= last, "alpha rose at x={x}");
            last = a;
        }
    }

    #[test]
    fn test_texture_size_check() {
        let err = Texture::from_pixels(2, 2, PixelFormat::Rgba8, vec![0; 15]);
        assert!(matches!(
            err,
            Err(FirmamentError::TextureSizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_moon_texture_decodes() {
        let tex = create_moon_texture(PixelFormat::Bgra8).expect("embedded moon decodes");
        assert_eq!((tex.width, tex.height), (128, 128));
        assert_eq!(tex.byte_len(), 128 * 128 * 4);
        assert_eq!(tex.alpha_at(0, 0), 0);
        assert_eq!(tex.alpha_at(64, 64), 255);
    }

    #[test]
    fn test_night_sky_texture_channel_order() {
        let rgba = create_night_sky_texture(PixelFormat::Rgba8).expect("night sky decodes");
        let bgra = create_night_sky_texture(PixelFormat::Bgra8).expect("night sky decodes");
        assert_eq!((rgba.width, rgba.height), (512, 256));
        for (a, b) in rgba.pixels.chunks_exact(4).zip(bgra.pixels.chunks_exact(4)).take(1000) {
            assert_eq!([a[2], a[1], a[0], a[3]], [b[0], b[1], b[2], b[3]]);
        }
    }
}

//! Moon phase masking.
//!
//! The lit part of the moon is bounded by the disk edge on one side and
//! by half an ellipse (the terminator) on the other. The ellipse spans the
//! full disk height. Its half width shrinks from the disk radius to one
//! texel across each quarter and then grows again. Everything on the dark
//! side of the terminator gets alpha 0.

use firmament_core::constants::BYTES_PER_PIXEL;
use firmament_core::math::revolution_reduction_degrees;

/// Which quarter of the lunation a phase angle falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonQuarter {
    /// 0..=90: waxing crescent, dark on the left of the terminator.
    First,
    /// 90..=180: waxing gibbous.
    Second,
    /// 180..=270: waning gibbous.
    Third,
    /// 270..360: waning crescent.
    Fourth,
}

/// Terminator ellipse for a phase angle on a texture `width` texels wide.
///
/// Returns the quarter and the ellipse half width in texels.
pub fn terminator_for_phase(phase: f32, width: u32) -> (MoonQuarter, i64) {
    let center_x = (width as f32 * 0.5) as i64;
    let mut phase = revolution_reduction_degrees(phase as f64) as f32;
    let mut quarter = 0;
    if phase > 180.0 {
        phase -= 180.0;
        quarter += 2;
    }
    let half_width = if phase > 90.0 {
        phase -= 90.0;
        quarter += 1;
        (center_x as f32 - (center_x - 1) as f32 * (1.0 - phase / 90.0)) as i64
    } else {
        (center_x as f32 - (center_x - 1) as f32 * (phase / 90.0)) as i64
    };
    let quarter = match quarter {
        0 => MoonQuarter::First,
        1 => MoonQuarter::Second,
        2 => MoonQuarter::Third,
        _ => MoonQuarter::Fourth,
    };
    (quarter, half_width)
}

/// Columns to clear on a row where the terminator sits `offset` texels
/// from the centre. Inclusive on both ends, clamped into the texture.
fn masked_columns(
    quarter: MoonQuarter,
    center_x: i64,
    offset: i64,
    width: i64,
) -> Option<(usize, usize)> {
    let (start, end) = match quarter {
        MoonQuarter::First => (0, center_x + offset),
        MoonQuarter::Second => (0, center_x - offset),
        MoonQuarter::Third => (center_x + offset, width),
        MoonQuarter::Fourth => (center_x - offset, width),
    };
    let start = start.max(0);
    let end = end.min(width - 1);
    (start <= end).then_some((start as usize, end as usize))
}

fn clear_alpha(pixels: &mut [u8], width: usize, row: usize, columns: (usize, usize)) {
    let base = row * width;
    for x in columns.0..=columns.1 {
        pixels[(base + x) * BYTES_PER_PIXEL + 3] = 0;
    }
}

/// Copy the unmasked moon into `pixels` and cut the shadowed side away
/// for `phase` degrees (0 new, 180 full).
///
/// `pixels` and `baked` must both hold `width × height` texels.
pub fn apply_moon_phase(pixels: &mut [u8], baked: &[u8], width: u32, height: u32, phase: f32) {
    let len = width as usize * height as usize * BYTES_PER_PIXEL;
    if width == 0 || height == 0 || pixels.len() < len || baked.len() < len {
        log::warn!(
            "Moon texture buffer too small for {width}x{height}: {} / {} bytes",
            pixels.len(),
            baked.len()
        );
        return;
    }
    pixels[..len].copy_from_slice(&baked[..len]);

    let (quarter, half_width) = terminator_for_phase(phase, width);
    let center_x = (width as f32 * 0.5) as i64;
    let center_y = (height as f32 * 0.5) as i64;
    let half_height = ((height as f32 - 1.0) / 2.0) as i64;
    let w = width as i64;
    let h = height as i64;
    let row_width = width as usize;

    if let Some(cols) = masked_columns(quarter, center_x, half_width, w) {
        clear_alpha(pixels, row_width, center_y as usize, cols);
    }

    // Step down the ellipse one row at a time. x0 only ever shrinks, so the
    // search for each row starts from the previous row's edge.
    let hh = half_height * half_height;
    let ww = half_width * half_width;
    let hhww = hh * ww;
    let mut x0 = half_width;
    let mut dx = 0;
    for y in 1..=half_height {
        let mut x1 = x0 - (dx - 1);
        while x1 > 0 {
            if x1 * x1 * hh + y * y * ww <= hhww {
                break;
            }
            x1 -= 1;
        }
        dx = x0 - x1;
        x0 = x1;

        if let Some(cols) = masked_columns(quarter, center_x, x0, w) {
            for row in [center_y + y, center_y - y] {
                if (0..h).contains(&row) {
                    clear_alpha(pixels, row_width, row as usize, cols);
                }
            }
        }
    }
}

/// Cap every texel's alpha at `visibility × 255`.
pub fn apply_moon_visibility(pixels: &mut [u8], visibility: f32) {
    let cap = (255.0 * visibility.clamp(0.0, 1.0)) as u8;
    for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        px[3] = px[3].min(cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 64;

    /// Fully opaque square so every mask decision is visible.
    fn opaque() -> Vec<u8> {
        vec![255; (SIZE * SIZE) as usize * 4]
    }

    fn alpha(pixels: &[u8], x: u32, y: u32) -> u8 {
        pixels[((y * SIZE + x) * 4 + 3) as usize]
    }

    fn lit_count(pixels: &[u8]) -> usize {
        pixels.chunks_exact(4).filter(|p| p[3] > 0).count()
    }

    fn masked(phase: f32) -> Vec<u8> {
        let baked = opaque();
        let mut pixels = vec![0; baked.len()];
        apply_moon_phase(&mut pixels, &baked, SIZE, SIZE, phase);
        pixels
    }

    #[test]
    fn test_terminator_quarters() {
        assert_eq!(terminator_for_phase(0.0, 64), (MoonQuarter::First, 32));
        assert_eq!(terminator_for_phase(90.0, 64), (MoonQuarter::First, 1));
        assert_eq!(terminator_for_phase(135.0, 64).0, MoonQuarter::Second);
        assert_eq!(terminator_for_phase(180.0, 64), (MoonQuarter::Second, 32));
        assert_eq!(terminator_for_phase(200.0, 64).0, MoonQuarter::Third);
        assert_eq!(terminator_for_phase(300.0, 64).0, MoonQuarter::Fourth);
        // Out of range phases wrap.
        assert_eq!(terminator_for_phase(-60.0, 64), terminator_for_phase(300.0, 64));
        assert_eq!(terminator_for_phase(720.0, 64), terminator_for_phase(0.0, 64));
    }

    #[test]
    fn test_new_moon_masks_center_row() {
        let pixels = masked(0.0);
        for x in 0..SIZE {
            assert_eq!(alpha(&pixels, x, SIZE / 2), 0, "x={x}");
        }
    }

    #[test]
    fn test_full_moon_keeps_most_of_disk() {
        let full = lit_count(&masked(180.0));
        let new = lit_count(&masked(0.0));
        let quarter = lit_count(&masked(90.0));
        assert!(full > quarter && quarter > new, "{full} {quarter} {new}");
    }

    #[test]
    fn test_waxing_and_waning_light_opposite_sides() {
        let waxing = masked(45.0);
        let waning = masked(315.0);
        let row = SIZE / 2;
        // Waxing crescent is lit on the right.
        assert_eq!(alpha(&waxing, 0, row), 0);
        assert_eq!(alpha(&waxing, SIZE - 1, row), 255);
        // Waning crescent is lit on the left.
        assert_eq!(alpha(&waning, 0, row), 255);
        assert_eq!(alpha(&waning, SIZE - 1, row), 0);
    }

    #[test]
    fn test_phase_restarts_from_baked_copy() {
        let baked = opaque();
        let mut pixels = vec![0; baked.len()];
        apply_moon_phase(&mut pixels, &baked, SIZE, SIZE, 0.0);
        apply_moon_phase(&mut pixels, &baked, SIZE, SIZE, 180.0);
        assert_eq!(lit_count(&pixels), lit_count(&masked(180.0)));
    }

    #[test]
    fn test_short_buffer_is_ignored() {
        let baked = opaque();
        let mut pixels = vec![7; 16];
        apply_moon_phase(&mut pixels, &baked, SIZE, SIZE, 90.0);
        assert!(pixels.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_visibility_caps_alpha() {
        let mut pixels = vec![10, 20, 30, 255, 10, 20, 30, 40];
        apply_moon_visibility(&mut pixels, 0.5);
        assert_eq!(pixels, vec![10, 20, 30, 127, 10, 20, 30, 40]);
        apply_moon_visibility(&mut pixels, 0.0);
        assert_eq!(pixels[3], 0);
        assert_eq!(pixels[7], 0);
    }
}

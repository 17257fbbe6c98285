//! Perez all-weather sky model with the Preetham turbidity fits.
//!
//! Sky luminance and chromaticity at a view direction are the zenith
//! reference color scaled by the ratio of the Perez distribution at the
//! view point to its value at the zenith.

use std::f64::consts::{FRAC_PI_2, PI};

use firmament_core::constants::{
    HORIZON_ZENITH, HORIZON_ZENITH_EPSILON, TONE_COMPRESSION_SCALE, TWILIGHT_END_ZENITH,
    TWILIGHT_START_ZENITH,
};
use firmament_core::SkyPosition;

/// The five Perez distribution parameters for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerezCoefficient {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

/// Perez parameters for luminance and both chromaticity channels.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerezYxyCoefficients {
    pub Y: PerezCoefficient,
    pub x: PerezCoefficient,
    pub y: PerezCoefficient,
}

/// Luminance (cd/m²) plus CIE chromaticity.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YxyColor {
    pub Y: f64,
    pub x: f64,
    pub y: f64,
}

/// Tone-compressed linear RGB, channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl RgbColor {
    /// Scale to 8-bit channels, truncating.
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.red * 255.0) as u8,
            (self.green * 255.0) as u8,
            (self.blue * 255.0) as u8,
        ]
    }
}

/// Perez parameters for a turbidity.
pub fn perez_coefficients_for_turbidity(turbidity: f64) -> PerezYxyCoefficients {
    let t = turbidity;
    PerezYxyCoefficients {
        Y: PerezCoefficient {
            a: 0.17872 * t - 1.46303,
            b: -0.3554 * t + 0.42749,
            c: -0.02266 * t + 5.32505,
            d: 0.12064 * t - 2.57705,
            e: -0.06696 * t + 0.37027,
        },
        x: PerezCoefficient {
            a: -0.01925 * t - 0.25922,
            b: -0.06651 * t + 0.00081,
            c: -0.00041 * t + 0.21247,
            d: -0.06409 * t - 0.89887,
            e: -0.00325 * t + 0.04517,
        },
        y: PerezCoefficient {
            a: -0.01669 * t - 0.26078,
            b: -0.09495 * t + 0.00921,
            c: -0.00792 * t + 0.21023,
            d: -0.04405 * t - 1.65369,
            e: -0.01092 * t + 0.05291,
        },
    }
}

/// Zenith luminance and chromaticity for a sun zenith and turbidity.
pub fn zenith_color(sun_zenith: f64, turbidity: f64) -> YxyColor {
    let z = sun_zenith;
    let z2 = z * z;
    let z3 = z2 * z;
    let t = turbidity;
    let t2 = t * t;

    let chi = (4.0 / 9.0 - t / 120.0) * (PI - 2.0 * z);
    let luminance = ((4.0453 * t - 4.971) * chi.tan() - 0.2155 * t + 2.4192) * 1000.0;

    let x = (0.00165 * z3 - 0.00375 * z2 + 0.00209 * z) * t2
        + (-0.02903 * z3 + 0.06377 * z2 - 0.03202 * z + 0.00394) * t
        + (0.11693 * z3 - 0.21196 * z2 + 0.06052 * z + 0.25886);
    let y = (0.00275 * z3 - 0.0061 * z2 + 0.00317 * z) * t2
        + (-0.04214 * z3 + 0.0897 * z2 - 0.04153 * z + 0.00516) * t
        + (0.15346 * z3 - 0.26756 * z2 + 0.0667 * z + 0.26688);

    YxyColor { Y: luminance, x, y }
}

/// Perez distribution value at a view zenith and angle from the sun.
pub fn perez_luminance(zenith: f64, gamma: f64, coeff: &PerezCoefficient) -> f64 {
    let cos_zenith = if zenith == FRAC_PI_2 {
        1e-7
    } else {
        zenith.cos()
    };
    let cos_gamma = gamma.cos();
    (1.0 + coeff.a * (coeff.b / cos_zenith).exp())
        * (1.0 + coeff.c * (coeff.d * gamma).exp() + coeff.e * cos_gamma * cos_gamma)
}

/// Angle between a view direction and the sun, by the spherical law of cosines.
/// Rounding outside [-1, 1] returns 0 or π instead of NaN.
pub fn perez_gamma(zenith: f64, azimuth: f64, sun_zenith: f64, sun_azimuth: f64) -> f64 {
    let cos_gamma = zenith.sin() * sun_zenith.sin() * (sun_azimuth - azimuth).cos()
        + zenith.cos() * sun_zenith.cos();
    if cos_gamma > 1.0 {
        0.0
    } else if cos_gamma < -1.0 {
        PI
    } else {
        cos_gamma.acos()
    }
}

/// Convert Yxy to tone-compressed linear sRGB.
pub fn rgb_from_yxy(color: YxyColor) -> RgbColor {
    let YxyColor { Y: big_y, x, y } = color;
    let big_x = x / y * big_y;
    let big_z = (1.0 - x - y) / y * big_y;

    let red = 3.2404 * big_x - 1.5371 * big_y - 0.4985 * big_z;
    let green = -0.9692 * big_x + 1.8759 * big_y + 0.0415 * big_z;
    let blue = 0.0556 * big_x - 0.2040 * big_y + 1.0573 * big_z;

    let compress = |c: f64| (1.0 - (-c / TONE_COMPRESSION_SCALE).exp()).clamp(0.0, 1.0) as f32;
    RgbColor {
        red: compress(red),
        green: compress(green),
        blue: compress(blue),
    }
}

/// Sky alpha for a sun zenith: opaque by day, fading to clear through
/// twilight so the night dome shows through.
pub fn twilight_alpha(sun_zenith: f32) -> u8 {
    if sun_zenith > TWILIGHT_END_ZENITH {
        0
    } else if sun_zenith >= TWILIGHT_START_ZENITH {
        let t = (sun_zenith - TWILIGHT_START_ZENITH) / (TWILIGHT_END_ZENITH - TWILIGHT_START_ZENITH);
        (255 - (t * 255.0) as i32).clamp(0, 255) as u8
    } else {
        255
    }
}

/// Per-sun-position state for painting many vertices.
#[derive(Debug, Clone, Copy)]
pub struct SkyColorModel {
    coefficients: PerezYxyCoefficients,
    zenith: YxyColor,
    /// Perez values at the zenith for Y, x, y.
    normalization: [f64; 3],
    sun: SkyPosition,
}

impl SkyColorModel {
    pub fn new(sun: SkyPosition, turbidity: f64) -> Self {
        let coefficients = perez_coefficients_for_turbidity(turbidity);
        let sun_zenith = sun.zenith as f64;
        Self {
            coefficients,
            zenith: zenith_color(sun_zenith, turbidity),
            normalization: [
                perez_luminance(0.0, sun_zenith, &coefficients.Y),
                perez_luminance(0.0, sun_zenith, &coefficients.x),
                perez_luminance(0.0, sun_zenith, &coefficients.y),
            ],
            sun,
        }
    }

    /// Sky color at a dome-space point.
    pub fn color_at_point(&self, x: f32, y: f32, z: f32) -> RgbColor {
        self.color_at(SkyPosition::from_cartesian(x, y, z))
    }

    /// Sky color in a direction. Directions at or below the horizon use
    /// the color just above it.
    pub fn color_at(&self, mut position: SkyPosition) -> RgbColor {
        if position.zenith >= HORIZON_ZENITH {
            position.zenith = HORIZON_ZENITH - HORIZON_ZENITH_EPSILON;
        }
        let zenith = position.zenith as f64;
        let gamma = perez_gamma(
            zenith,
            position.azimuth as f64,
            self.sun.zenith as f64,
            self.sun.azimuth as f64,
        );
        let c = &self.coefficients;
        let yxy = YxyColor {
            Y: self.zenith.Y * perez_luminance(zenith, gamma, &c.Y) / self.normalization[0],
            x: self.zenith.x * perez_luminance(zenith, gamma, &c.x) / self.normalization[1],
            y: self.zenith.y * perez_luminance(zenith, gamma, &c.y) / self.normalization[2],
        };
        rgb_from_yxy(yxy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOON_SUN: SkyPosition = SkyPosition {
        azimuth: 2.8096,
        zenith: 0.3346,
    };

    #[test]
    fn test_luminance_ratio_is_one_at_reference_point() {
        let coeffs = perez_coefficients_for_turbidity(3.5);
        for channel in [coeffs.Y, coeffs.x, coeffs.y] {
            let ratio = perez_luminance(0.0, 0.0, &channel) / perez_luminance(0.0, 0.0, &channel);
            assert!((ratio - 1.0).abs() < 1e-12);
        }
        // Looking straight up with the sun elsewhere: gamma equals the sun zenith.
        let sun_zenith = 0.9;
        let gamma = perez_gamma(0.0, 1.3, sun_zenith, 0.4);
        assert!((gamma - sun_zenith).abs() < 1e-12);
        for channel in [coeffs.Y, coeffs.x, coeffs.y] {
            let ratio =
                perez_luminance(0.0, gamma, &channel) / perez_luminance(0.0, sun_zenith, &channel);
            assert!((ratio - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_coefficients_linear_in_turbidity() {
        let c2 = perez_coefficients_for_turbidity(2.0);
        let c3 = perez_coefficients_for_turbidity(3.0);
        let c4 = perez_coefficients_for_turbidity(4.0);
        assert!(((c3.Y.a - c2.Y.a) - (c4.Y.a - c3.Y.a)).abs() < 1e-12);
        assert!((c3.Y.a - c2.Y.a - 0.17872).abs() < 1e-12);
        assert!((c3.y.d - c2.y.d + 0.04405).abs() < 1e-12);
    }

    #[test]
    fn test_zenith_color_reference() {
        let zen = zenith_color(0.3346, 3.5);
        assert!((zen.Y - 16851.7).abs() < 1.0, "Y {}", zen.Y);
        assert!((zen.x - 0.2614).abs() < 1e-4, "x {}", zen.x);
        assert!((zen.y - 0.2699).abs() < 1e-4, "y {}", zen.y);
    }

    #[test]
    fn test_gamma_guards_domain() {
        assert_eq!(perez_gamma(0.0, 0.0, 0.0, 0.0), 0.0);
        let opposite = perez_gamma(FRAC_PI_2, 0.0, FRAC_PI_2, PI);
        assert!((opposite - PI).abs() < 1e-6);
        for i in 0..100 {
            let g = perez_gamma(i as f64 * 0.03, i as f64 * 0.1, 1.0, 2.0);
            assert!(g.is_finite() && (0.0..=PI).contains(&g));
        }
    }

    #[test]
    fn test_horizon_luminance_finite() {
        let coeffs = perez_coefficients_for_turbidity(3.5);
        let v = perez_luminance(FRAC_PI_2, 1.0, &coeffs.Y);
        assert!(v.is_finite());
    }

    #[test]
    fn test_rgb_clamped() {
        let bright = rgb_from_yxy(YxyColor {
            Y: 1e9,
            x: 0.3,
            y: 0.3,
        });
        assert_eq!(bright.green, 1.0);
        let dark = rgb_from_yxy(YxyColor {
            Y: 0.0,
            x: 0.3,
            y: 0.3,
        });
        assert_eq!(dark, RgbColor { red: 0.0, green: 0.0, blue: 0.0 });
    }

    #[test]
    fn test_noon_zenith_sky_is_blue() {
        let model = SkyColorModel::new(NOON_SUN, 3.5);
        let [r, g, b] = model.color_at(SkyPosition::new(0.0, 0.0)).to_bytes();
        assert!(b > g && g > r, "zenith rgb ({r}, {g}, {b})");
    }

    #[test]
    fn test_sky_brighter_near_sun() {
        let model = SkyColorModel::new(NOON_SUN, 3.5);
        let near = model.color_at(SkyPosition::new(NOON_SUN.azimuth, 0.3));
        let far = model.color_at(SkyPosition::new(NOON_SUN.azimuth + std::f32::consts::PI, 1.5));
        assert!(near.red > far.red && near.green > far.green && near.blue > far.blue);
    }

    #[test]
    fn test_below_horizon_matches_horizon() {
        let model = SkyColorModel::new(NOON_SUN, 3.5);
        let below = model.color_at_point(1.0, -0.5, 0.0);
        let at = model.color_at(SkyPosition::new(
            std::f32::consts::FRAC_PI_2,
            HORIZON_ZENITH - HORIZON_ZENITH_EPSILON,
        ));
        assert_eq!(below, at);
    }

    #[test]
    fn test_twilight_alpha() {
        assert_eq!(twilight_alpha(0.3), 255);
        assert_eq!(twilight_alpha(TWILIGHT_START_ZENITH), 255);
        assert_eq!(twilight_alpha(TWILIGHT_END_ZENITH + 0.01), 0);
        let mid = twilight_alpha(98f32.to_radians());
        assert!((126..=129).contains(&mid), "alpha {mid}");
        let mut last = 255;
        for i in 0..200 {
            let a = twilight_alpha(1.6 + i as f32 * 0.001);
            assert!(a <= last);
            last = a;
        }
    }
}

use firmament_core::math::lerp;
use firmament_core::{LightData, LightKeypoint, Rgba};

/// Piecewise linear map from sun zenith to light color.
///
/// Keypoints stay sorted by angle. Ambient color is not interpolated and
/// keeps the [`LightData`] default.
#[derive(Debug, Clone, PartialEq)]
pub struct LightTable {
    keypoints: Vec<LightKeypoint>,
}

impl Default for LightTable {
    /// Daylight white until 84°, orange at sunset, grey through twilight.
    fn default() -> Self {
        Self::new(vec![
            LightKeypoint::from_degrees(0.0, 1.0, 1.0, 251.0 / 255.0),
            LightKeypoint::from_degrees(84.0, 1.0, 1.0, 251.0 / 255.0),
            LightKeypoint::from_degrees(94.0, 1.0, 126.0 / 255.0, 0.0),
            LightKeypoint::from_degrees(96.0, 153.0 / 255.0, 153.0 / 255.0, 150.0 / 255.0),
            LightKeypoint::from_degrees(108.0, 102.0 / 255.0, 102.0 / 255.0, 100.0 / 255.0),
        ])
    }
}

impl LightTable {
    pub fn new(keypoints: Vec<LightKeypoint>) -> Self {
        let mut table = Self { keypoints: Vec::new() };
        table.set_keypoints(keypoints);
        table
    }

    /// Replace all keypoints. They are sorted ascending by angle.
    pub fn set_keypoints(&mut self, mut keypoints: Vec<LightKeypoint>) {
        keypoints.sort_by(|a, b| a.angle.total_cmp(&b.angle));
        self.keypoints = keypoints;
    }

    /// Insert one keypoint, keeping the table sorted.
    pub fn insert(&mut self, keypoint: LightKeypoint) {
        let at = self
            .keypoints
            .partition_point(|k| k.angle <= keypoint.angle);
        self.keypoints.insert(at, keypoint);
    }

    pub fn keypoints(&self) -> &[LightKeypoint] {
        &self.keypoints
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Light color for a sun at `sun_zenith` radians.
    ///
    /// Interpolates between the first keypoint above the zenith and the one
    /// before it. Zeniths before the first keypoint take its color, past the
    /// last keypoint take the last color. An empty table yields the default.
    pub fn sample(&self, sun_zenith: f32) -> LightData {
        let Some(last) = self.keypoints.last() else {
            return LightData::default();
        };

        for (i, upper) in self.keypoints.iter().enumerate() {
            if sun_zenith < upper.angle {
                if i == 0 {
                    log::debug!("Sky light: zenith {sun_zenith:.4} precedes table");
                    return with_color(upper.color);
                }
                let lower = &self.keypoints[i - 1];
                let t = (sun_zenith - lower.angle) / (upper.angle - lower.angle);
                log::debug!("Sky light: interpolating [{}:{}] amount {t:.4}", i - 1, i);
                return with_color(Rgba::rgb(
                    lerp(lower.color.r, upper.color.r, t),
                    lerp(lower.color.g, upper.color.g, t),
                    lerp(lower.color.b, upper.color.b, t),
                ));
            }
            if sun_zenith == upper.angle {
                log::debug!("Sky light: exact keypoint {i}");
                return with_color(upper.color);
            }
        }

        log::debug!("Sky light: zenith {sun_zenith:.4} past table, using last keypoint");
        with_color(last.color)
    }
}

fn with_color(color: Rgba) -> LightData {
    LightData {
        color: Rgba { a: 1.0, ..color },
        ..LightData::default()
    }
}

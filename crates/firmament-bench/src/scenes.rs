use firmament_config::DomeConfig;

/// One dome resolution to benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub name: &'static str,
    pub vertical_segments: u32,
    pub horizontal_segments: u32,
    pub full_sphere: bool,
}

impl SceneConfig {
    /// Dome config for this scene at `radius`.
    pub fn dome_config(&self, radius: f32) -> DomeConfig {
        DomeConfig {
            radius,
            vertical_segments: self.vertical_segments,
            horizontal_segments: self.horizontal_segments,
            full_sphere: self.full_sphere,
        }
    }

    pub fn vertex_count(&self) -> u64 {
        self.dome_config(1.0).vertex_count()
    }
}

/// Standard suite, from the default dome up to the largest sphere that
/// still fits 16-bit indices comfortably.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "dome-12x6",
            vertical_segments: 12,
            horizontal_segments: 6,
            full_sphere: false,
        },
        SceneConfig {
            name: "dome-32x16",
            vertical_segments: 32,
            horizontal_segments: 16,
            full_sphere: false,
        },
        SceneConfig {
            name: "dome-64x32",
            vertical_segments: 64,
            horizontal_segments: 32,
            full_sphere: false,
        },
        SceneConfig {
            name: "dome-128x64",
            vertical_segments: 128,
            horizontal_segments: 64,
            full_sphere: false,
        },
        SceneConfig {
            name: "sphere-64x32",
            vertical_segments: 64,
            horizontal_segments: 32,
            full_sphere: true,
        },
        SceneConfig {
            name: "sphere-128x128",
            vertical_segments: 128,
            horizontal_segments: 128,
            full_sphere: true,
        },
    ]
}

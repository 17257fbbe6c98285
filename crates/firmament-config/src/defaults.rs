//! Built-in configuration values.

use crate::config::LightKeypointDef;

/// Default sky setup shipped with the crate.
pub const DEFAULT_CONFIG_RON: &str = include_str!("../../../data/sky.ron");

/// Daylight white until 84°, orange at sunset, grey through twilight.
pub fn default_light_table() -> Vec<LightKeypointDef> {
    [
        (0.0, (1.0, 1.0, 251.0 / 255.0)),
        (84.0, (1.0, 1.0, 251.0 / 255.0)),
        (94.0, (1.0, 126.0 / 255.0, 0.0)),
        (96.0, (153.0 / 255.0, 153.0 / 255.0, 150.0 / 255.0)),
        (108.0, (102.0 / 255.0, 102.0 / 255.0, 100.0 / 255.0)),
    ]
    .into_iter()
    .map(|(angle_degrees, color)| LightKeypointDef {
        angle_degrees,
        color,
    })
    .collect()
}

use std::time::Instant;

use firmament_config::SkyConfig;
use firmament_core::FirmamentError;
use firmament_render::{create_moon_texture, MemoryDome, SkyPainter};
use firmament_sky::{build_dome_geometry, Sky};

use crate::scenes::SceneConfig;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub vertex_count: u32,
    pub triangle_count: u32,
    pub tick_count: u32,
    /// Simulated time covered by all ticks.
    pub simulated_hours: f64,
    pub timings: TimingSeries,
}

/// Drives a dynamic sky over an in-memory dome and times each update.
pub struct BenchmarkRunner {
    config: SkyConfig,
    tick_count: u32,
    step_seconds: f32,
}

impl BenchmarkRunner {
    pub fn new(config: SkyConfig, tick_count: u32, step_seconds: f32) -> Self {
        Self {
            config,
            tick_count,
            step_seconds,
        }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, scene: &SceneConfig) -> Result<BenchmarkResult, FirmamentError> {
        log::info!("Running scene '{}' ({} vertices)...", scene.name, scene.vertex_count());

        let geometry = build_dome_geometry(&scene.dome_config(self.config.dome.radius))?;
        let moon = create_moon_texture(self.config.pixel_format)?;
        let dome = MemoryDome::from_geometry(&geometry, &moon);

        let mut painter = SkyPainter::new(Some(dome), moon);
        painter.set_turbidity(self.config.turbidity);
        painter.set_sky_lights(self.config.light_keypoints());
        let mut sky = Sky::calculated_dynamic(painter, self.config.date_time(), self.config.gps());

        let mut frame_times = Vec::with_capacity(self.tick_count as usize);
        for _ in 0..self.tick_count {
            let frame_start = Instant::now();
            sky.update_with_delta(self.step_seconds);
            frame_times.push(frame_start.elapsed().as_secs_f64() * 1000.0);
        }

        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: mean={:.3}ms, p95={:.3}ms, p99={:.3}ms",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        Ok(BenchmarkResult {
            scene_name: scene.name.to_string(),
            vertex_count: geometry.vertex_count() as u32,
            triangle_count: geometry.triangle_count() as u32,
            tick_count: self.tick_count,
            simulated_hours: self.tick_count as f64 * self.step_seconds as f64 / 3600.0,
            timings,
        })
    }
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_timings_are_zero() {
        let t = compute_timings(&[]);
        assert_eq!(t.mean_ms, 0.0);
        assert_eq!(t.max_ms, 0.0);
    }

    #[test]
    fn test_timing_statistics() {
        let times: Vec<f64> = (1..=100).map(f64::from).collect();
        let t = compute_timings(&times);
        assert!((t.mean_ms - 50.5).abs() < 1e-9);
        assert!((t.median_ms - 50.5).abs() < 1e-9);
        assert_eq!(t.min_ms, 1.0);
        assert_eq!(t.max_ms, 100.0);
        assert_eq!(t.p95_ms, 96.0);
        assert_eq!(t.p99_ms, 100.0);
    }

    #[test]
    fn test_odd_median_and_unsorted_input() {
        let t = compute_timings(&[5.0, 1.0, 3.0]);
        assert_eq!(t.median_ms, 3.0);
        assert_eq!(t.min_ms, 1.0);
    }

    #[test]
    fn test_run_small_scene() {
        let runner = BenchmarkRunner::new(SkyConfig::default(), 4, 900.0);
        let scene = SceneConfig {
            name: "tiny",
            vertical_segments: 8,
            horizontal_segments: 2,
            full_sphere: false,
        };
        let result = runner.run_scene(&scene).expect("scene runs");
        assert_eq!(result.vertex_count, 17);
        assert_eq!(result.triangle_count, 24);
        assert_eq!(result.tick_count, 4);
        assert!((result.simulated_hours - 1.0).abs() < 1e-9);
        assert!(result.timings.min_ms <= result.timings.max_ms);
    }
}

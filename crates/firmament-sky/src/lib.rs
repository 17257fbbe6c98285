//! The sky orchestrator: ties the ephemeris to a painted dome and keeps
//! it current.
//!
//! ```no_run
//! use firmament_config::load_default_config;
//! use firmament_render::MemoryDome;
//! use firmament_sky::{Sky, SkyAssets};
//!
//! let config = load_default_config()?;
//! let assets = SkyAssets::from_config(&config)?;
//! let dome = MemoryDome::from_geometry(&assets.dome, &assets.moon_texture);
//! let mut sky = Sky::from_config(Some(dome), &config)?;
//! sky.update_with_delta(1.0 / 60.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod mode;
pub mod sky;

pub use builder::{build_dome_geometry, SkyAssets};
pub use mode::SkyMode;
pub use sky::Sky;

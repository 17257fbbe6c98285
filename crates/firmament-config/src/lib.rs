//! Sky configuration loaded from RON.

pub mod config;
pub mod defaults;
pub mod loader;
pub mod validator;

pub use config::{
    DomeConfig, LightKeypointDef, LocationConfig, ManualConfig, SkyConfig, SkyModeSetting,
    StartConfig, SunTextureConfig,
};
pub use loader::{
    load_config_file, load_config_from_str, load_default_config, load_validated_config,
    LoadError,
};
pub use validator::{validate_config, ValidationError};

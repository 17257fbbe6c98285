pub mod constants;
pub mod date;
pub mod datetime;
pub mod error;
pub mod gps;
pub mod math;
pub mod types;

pub use date::{Date, Month};
pub use datetime::DateTime;
pub use error::{error_code_to_string, ErrorCode, FirmamentError};
pub use gps::Gps;
pub use types::{
    LightData, LightKeypoint, PixelFormat, RawGeometry, Rgba, SkyData, SkyPosition,
};

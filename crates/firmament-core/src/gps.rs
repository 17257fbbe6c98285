use crate::constants::{MAX_LATITUDE_DEGREES, MAX_LONGITUDE_DEGREES};

/// Observer location in degrees. Setters clamp instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gps {
    latitude: f32,
    longitude: f32,
}

impl Gps {
    pub fn new(latitude: f32, longitude: f32) -> Self {
        let mut gps = Self::default();
        gps.set_latitude(latitude);
        gps.set_longitude(longitude);
        gps
    }

    /// Build from radians, clamping after conversion.
    pub fn from_radians(latitude: f32, longitude: f32) -> Self {
        let mut gps = Self::default();
        gps.set_latitude_radians(latitude);
        gps.set_longitude_radians(longitude);
        gps
    }

    /// Latitude in degrees, clamped to [-90, 90].
    pub fn set_latitude(&mut self, latitude: f32) {
        self.latitude = latitude.clamp(-MAX_LATITUDE_DEGREES, MAX_LATITUDE_DEGREES);
    }

    /// Longitude in degrees, clamped to [-180, 180].
    pub fn set_longitude(&mut self, longitude: f32) {
        self.longitude = longitude.clamp(-MAX_LONGITUDE_DEGREES, MAX_LONGITUDE_DEGREES);
    }

    pub fn set_latitude_radians(&mut self, latitude: f32) {
        self.set_latitude(latitude.to_degrees());
    }

    pub fn set_longitude_radians(&mut self, longitude: f32) {
        self.set_longitude(longitude.to_degrees());
    }

    pub fn latitude(&self) -> f32 {
        self.latitude
    }

    pub fn longitude(&self) -> f32 {
        self.longitude
    }

    pub fn latitude_radians(&self) -> f32 {
        self.latitude.to_radians()
    }

    pub fn longitude_radians(&self) -> f32 {
        self.longitude.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_zero() {
        let gps = Gps::default();
        assert_eq!(gps.latitude(), 0.0);
        assert_eq!(gps.longitude(), 0.0);
    }

    #[test]
    fn test_clamps_degrees() {
        let mut gps = Gps::new(95.0, -200.0);
        assert_eq!(gps.latitude(), 90.0);
        assert_eq!(gps.longitude(), -180.0);
        gps.set_latitude(-91.0);
        gps.set_longitude(181.0);
        assert_eq!(gps.latitude(), -90.0);
        assert_eq!(gps.longitude(), 180.0);
        gps.set_latitude(33.45);
        gps.set_longitude(-112.07);
        assert_eq!(gps.latitude(), 33.45);
        assert_eq!(gps.longitude(), -112.07);
    }

    #[test]
    fn test_radian_accessors() {
        let gps = Gps::from_radians(0.7156, -1.9548);
        assert!((gps.latitude_radians() - 0.7156).abs() < 1e-5);
        assert!((gps.longitude_radians() + 1.9548).abs() < 1e-5);
        assert!((gps.latitude() - 41.0009).abs() < 1e-2);
    }

    #[test]
    fn test_radian_setters_clamp_after_conversion() {
        let mut gps = Gps::default();
        gps.set_latitude_radians(1.7);
        assert_eq!(gps.latitude(), 90.0);
        gps.set_longitude_radians(-3.3);
        assert_eq!(gps.longitude(), -180.0);
    }
}

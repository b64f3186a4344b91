use crate::config::{LayoutConfig, PIXELS_PER_METER};

/// Fixed meters <-> pixels conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pixels_per_meter: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(PIXELS_PER_METER)
    }
}

impl Scale {
    pub fn new(pixels_per_meter: f64) -> Self {
        Self { pixels_per_meter }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.pixels_per_meter)
    }

    pub fn meters_to_pixels(&self, meters: f64) -> f64 {
        meters * self.pixels_per_meter
    }

    pub fn pixels_to_meters(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_meter
    }
}

/// Converts meters to pixels with the default scale.
pub fn meters_to_pixels(meters: f64) -> f64 {
    Scale::default().meters_to_pixels(meters)
}

/// Converts pixels to meters with the default scale.
pub fn pixels_to_meters(pixels: f64) -> f64 {
    Scale::default().pixels_to_meters(pixels)
}

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Pixels drawn for one meter of real-world length.
pub const PIXELS_PER_METER: f64 = 80.0;

pub const CANVAS_MIN_WIDTH: f64 = 500.0;
pub const CANVAS_MIN_HEIGHT: f64 = 400.0;
pub const CANVAS_PADDING: f64 = 100.0;
/// Room reserved under the bed for its name label.
pub const CANVAS_NAME_LABEL_HEIGHT: f64 = 30.0;
pub const CANVAS_DEFAULT_WIDTH: f64 = 700.0;
pub const CANVAS_DEFAULT_HEIGHT: f64 = 550.0;

/// Pixel size given to a plant that has no size of its own. This is the only
/// place the value is defined; grid fallback and rect resolution both read it.
pub const DEFAULT_ITEM_SIZE: f64 = 40.0;

/// Highest numeric suffix the allocator hands out (`A99`).
pub const MAX_COMPOUND_SUFFIX: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    pub min_width: f64,
    pub min_height: f64,
    pub padding: f64,
    pub name_label_height: f64,
    pub default_width: f64,
    pub default_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_width: CANVAS_MIN_WIDTH,
            min_height: CANVAS_MIN_HEIGHT,
            padding: CANVAS_PADDING,
            name_label_height: CANVAS_NAME_LABEL_HEIGHT,
            default_width: CANVAS_DEFAULT_WIDTH,
            default_height: CANVAS_DEFAULT_HEIGHT,
        }
    }
}

/// All tunable constants of the engine. Missing fields fall back to the
/// defaults above, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub pixels_per_meter: f64,
    pub canvas: CanvasConfig,
    pub default_item_size: f64,
    pub max_compound_suffix: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: PIXELS_PER_METER,
            canvas: CanvasConfig::default(),
            default_item_size: DEFAULT_ITEM_SIZE,
            max_compound_suffix: MAX_COMPOUND_SUFFIX,
        }
    }
}

impl LayoutConfig {
    /// Reads a configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

use serde::{Deserialize, Serialize};

/// Real-world size of a bed together with its pixel equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub length_meters: f64,
    pub width_meters: f64,
    pub length_pixels: f64,
    pub width_pixels: f64,
}

/// Outcome of reading a free-text size description.
/// `Unparsed` means "use defaults", never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "dimensions", rename_all = "camelCase")]
pub enum DimensionParse {
    Parsed(Dimensions),
    Unparsed,
}

impl DimensionParse {
    pub fn dimensions(&self) -> Option<&Dimensions> {
        match self {
            DimensionParse::Parsed(d) => Some(d),
            DimensionParse::Unparsed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

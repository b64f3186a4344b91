use log::{debug, warn};

use crate::logic::scale::Scale;
use crate::models::dimensions::{DimensionParse, Dimensions};

/// Separators accepted between length and width (`4x3`, `4 X 3`, `4 × 3`).
const SEPARATORS: [char; 3] = ['x', 'X', '×'];

/// Reads free-text bed sizes such as `"4x3"`, `"1,2 x 8"` or `"8m"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionParser {
    scale: Scale,
}

impl DimensionParser {
    pub fn new(scale: Scale) -> Self {
        Self { scale }
    }

    /// Two numbers around a separator give length then width; a lone number
    /// describes a square bed. Anything else is `Unparsed`.
    pub fn parse(&self, description: Option<&str>) -> DimensionParse {
        let Some(raw) = description else {
            debug!("no plant bed size given, using defaults");
            return DimensionParse::Unparsed;
        };
        let normalized: Vec<char> = raw
            .chars()
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        let found =
            find_pair(&normalized).or_else(|| find_single(&normalized).map(|n| (n, n)));
        let dimensions = found.map(|(length, width)| Dimensions {
            length_meters: length,
            width_meters: width,
            length_pixels: self.scale.meters_to_pixels(length),
            width_pixels: self.scale.meters_to_pixels(width),
        });
        match dimensions {
            // Meters can be finite while their pixel size overflows.
            Some(d) if d.length_pixels.is_finite() && d.width_pixels.is_finite() => {
                DimensionParse::Parsed(d)
            }
            _ => {
                warn!("could not parse plant bed dimensions from {raw:?}, using defaults");
                DimensionParse::Unparsed
            }
        }
    }
}

/// Parses a size description with the default scale.
pub fn parse_plant_bed_dimensions(description: Option<&str>) -> DimensionParse {
    DimensionParser::default().parse(description)
}

/// Reads a decimal number (`12`, `1.5`) starting at `start`. Returns the
/// value and the index just past it.
fn scan_number(chars: &[char], start: usize) -> Option<(f64, usize)> {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }
    if end + 1 < chars.len() && chars[end] == '.' && chars[end + 1].is_ascii_digit() {
        end += 1;
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }
    }
    let text: String = chars[start..end].iter().collect();
    text.parse::<f64>().ok().map(|value| (value, end))
}

fn skip_whitespace(chars: &[char], mut index: usize) -> usize {
    while index < chars.len() && chars[index].is_whitespace() {
        index += 1;
    }
    index
}

/// Leftmost `<number> [ws] x [ws] <number>` in the text.
fn find_pair(chars: &[char]) -> Option<(f64, f64)> {
    (0..chars.len()).find_map(|start| {
        let (first, end) = scan_number(chars, start)?;
        let sep = skip_whitespace(chars, end);
        if !SEPARATORS.contains(chars.get(sep)?) {
            return None;
        }
        let next = skip_whitespace(chars, sep + 1);
        let (second, _) = scan_number(chars, next)?;
        Some((first, second))
    })
}

fn find_single(chars: &[char]) -> Option<f64> {
    (0..chars.len()).find_map(|start| scan_number(chars, start).map(|(value, _)| value))
}

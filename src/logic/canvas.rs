use crate::config::{CanvasConfig, LayoutConfig};
use crate::logic::dimensions::DimensionParser;
use crate::logic::scale::Scale;
use crate::models::dimensions::{CanvasSize, DimensionParse};

/// Sizes the drawing surface for a bed: the bed's pixel size plus padding,
/// never smaller than the configured minimums.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasSizeCalculator {
    parser: DimensionParser,
    canvas: CanvasConfig,
}

impl CanvasSizeCalculator {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            parser: DimensionParser::new(Scale::from_config(config)),
            canvas: config.canvas,
        }
    }

    pub fn calculate(&self, description: Option<&str>) -> CanvasSize {
        self.for_parse(&self.parser.parse(description))
    }

    /// Same as [`calculate`](Self::calculate) for an already parsed size.
    pub fn for_parse(&self, parse: &DimensionParse) -> CanvasSize {
        let c = &self.canvas;
        match parse {
            DimensionParse::Parsed(d) => {
                let margin = c.padding * 1.5;
                CanvasSize {
                    width: c.min_width.max(d.length_pixels + margin),
                    height: c.min_height.max(d.width_pixels + margin + c.name_label_height),
                }
            }
            DimensionParse::Unparsed => CanvasSize {
                width: c.default_width,
                height: c.default_height,
            },
        }
    }
}

/// Canvas size for a bed description using the default configuration.
pub fn calculate_plant_bed_canvas_size(description: Option<&str>) -> CanvasSize {
    CanvasSizeCalculator::default().calculate(description)
}

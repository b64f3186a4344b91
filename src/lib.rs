//! Identifier allocation and spatial layout for plant beds.
//!
//! Every function in this crate is pure: callers pass a snapshot of the data
//! they hold (existing bed codes, a size description, items to place) and get
//! plain values back. Nothing here persists or performs I/O.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use config::LayoutConfig;
pub use error::{LayoutError, Result};
pub use logic::canvas::calculate_plant_bed_canvas_size;
pub use logic::codes::{generate_next_letter_code, is_valid_letter_code, sort_letter_codes};
pub use logic::dimensions::parse_plant_bed_dimensions;
pub use logic::placement::{
    grid_fallback_positions, resolve_placements, resolve_placements_with_config,
};
pub use logic::scale::{meters_to_pixels, pixels_to_meters};

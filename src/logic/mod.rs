pub mod canvas;
pub mod codes;
pub mod dimensions;
pub mod placement;
pub mod scale;

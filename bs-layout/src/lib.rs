//! Brick layout generation.
//!
//! Every entry point is a pure function from a shape description to a
//! [`Layout`]. Malformed input never errors: unknown grid symbols and
//! characters without a glyph simply produce no bricks.

pub mod art;
mod brick;
pub mod font;
mod grid;
mod preset;
mod text;

pub use brick::{
    BODY_CLEARANCE, BODY_HEIGHT, BRICK_BLUE, BRICK_GREEN, BRICK_RED, BRICK_WHITE, BRICK_YELLOW,
    BrickSpec, Layout, MM, PALETTE, PlacedBrick, STUD_DIAMETER, STUD_HEIGHT, STUD_PITCH, rgb_hex,
};
pub use grid::{ART_SEAM, FILL_MARKER, GridMetrics, GridStyle, WORD_SEAM, layout_grid};
pub use preset::{
    COURSE_HEIGHT, DEFAULT_COURSES, DEFAULT_HOUSES, DEFAULT_STACK_LAYERS, HOUSE_SPACING,
    LONG_SIDE, MAX_COURSES, MAX_HOUSES, MAX_STACK_LAYERS, Preset,
};
pub use text::{DEFAULT_SPACING, TextStyle, layout_text, text_columns};

#[cfg(test)]
mod tests;

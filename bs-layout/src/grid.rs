use bevy::prelude::Vec3;
use tracing::debug;

use crate::brick::{BODY_HEIGHT, BRICK_RED, BrickSpec, Layout, MM, PlacedBrick, STUD_PITCH};

pub const FILL_MARKER: char = '#';

/// Seam for brick art: adjacent bodies overlap by 0.05 mm.
pub const ART_SEAM: f32 = 0.15 * MM;
/// Seam for pixel lettering: a 0.6 mm gap between adjacent bodies.
pub const WORD_SEAM: f32 = -0.5 * MM;

/// How each filled cell of a grid becomes a brick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub cell: BrickSpec,
    /// Subtracted from the nominal cell width when stepping between columns.
    pub seam: f32,
    pub fill: char,
}

impl GridStyle {
    pub fn new(cell: BrickSpec, seam: f32) -> Self {
        Self {
            cell,
            seam,
            fill: FILL_MARKER,
        }
    }

    pub fn brick_art() -> Self {
        Self::new(BrickSpec::new(2, 2, BRICK_RED), ART_SEAM)
    }

    pub fn pixel_word() -> Self {
        Self::new(BrickSpec::new(1, 1, BRICK_RED), WORD_SEAM)
    }

    pub fn step_x(&self) -> f32 {
        self.cell.studs_x() as f32 * STUD_PITCH - self.seam
    }

    pub fn step_y(&self) -> f32 {
        BODY_HEIGHT
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self::brick_art()
    }
}

/// Maps (column, row) cell coordinates of a centered grid to world positions.
///
/// Row 0 is the top of the pattern; the last row rests on y = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub columns: usize,
    pub rows: usize,
    pub step_x: f32,
    pub step_y: f32,
}

impl GridMetrics {
    pub fn new(columns: usize, rows: usize, style: &GridStyle) -> Self {
        Self {
            columns,
            rows,
            step_x: style.step_x(),
            step_y: style.step_y(),
        }
    }

    pub fn origin_x(&self) -> f32 {
        -((self.columns.saturating_sub(1)) as f32 * self.step_x) / 2.0
    }

    pub fn cell_position(&self, column: usize, row: usize) -> Vec3 {
        let inverted = self.rows.saturating_sub(1).saturating_sub(row);
        Vec3::new(
            self.origin_x() + column as f32 * self.step_x,
            inverted as f32 * self.step_y,
            0.0,
        )
    }

    pub fn brick_at(&self, column: usize, row: usize, style: &GridStyle) -> PlacedBrick {
        PlacedBrick::new(style.cell, self.cell_position(column, row), 0.0)
    }
}

/// Lays out one brick per fill marker. Short rows count as padded with
/// empty cells and any character other than the fill marker is empty.
pub fn layout_grid<S: AsRef<str>>(rows: &[S], style: &GridStyle) -> Layout {
    let columns = rows
        .iter()
        .map(|row| row.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let metrics = GridMetrics::new(columns, rows.len(), style);

    let mut layout = Layout::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.as_ref().chars().enumerate() {
            if ch == style.fill {
                layout.push(metrics.brick_at(c, r, style));
            }
        }
    }

    debug!(
        columns,
        rows = rows.len(),
        bricks = layout.len(),
        "laid out brick grid"
    );
    layout
}

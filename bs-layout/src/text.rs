use tracing::{debug, warn};

use crate::brick::Layout;
use crate::font::{self, GLYPH_ROWS};
use crate::grid::{GridMetrics, GridStyle};

pub const DEFAULT_SPACING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub grid: GridStyle,
    /// Empty columns between consecutive characters.
    pub spacing: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            grid: GridStyle::pixel_word(),
            spacing: DEFAULT_SPACING,
        }
    }
}

/// Total column count of `text` once rendered: glyph widths plus spacing
/// between characters. Unsupported characters have zero width.
pub fn text_columns(text: &str, spacing: usize) -> usize {
    let mut columns = 0;
    let mut count: usize = 0;
    for ch in text.chars().flat_map(char::to_uppercase) {
        columns += font::glyph(ch).map_or(0, |g| g.width());
        count += 1;
    }
    columns + spacing * count.saturating_sub(1)
}

/// Renders `text` in the pixel font, one brick per filled glyph cell,
/// centered on x = 0 with the baseline row at y = 0.
pub fn layout_text(text: &str, style: &TextStyle) -> Layout {
    let upper: String = text.chars().flat_map(char::to_uppercase).collect();
    let columns = text_columns(&upper, style.spacing);
    let metrics = GridMetrics::new(columns, GLYPH_ROWS, &style.grid);

    let mut layout = Layout::new();
    let mut cursor = 0;
    let mut skipped = 0;
    for ch in upper.chars() {
        match font::glyph(ch) {
            Some(glyph) => {
                for (column, row) in glyph.filled_cells() {
                    layout.push(metrics.brick_at(cursor + column, row, &style.grid));
                }
                cursor += glyph.width();
            }
            None => {
                if !ch.is_whitespace() {
                    skipped += 1;
                }
            }
        }
        cursor += style.spacing;
    }

    if skipped > 0 {
        warn!(skipped, text, "characters without a glyph were left blank");
    }
    debug!(columns, bricks = layout.len(), text, "laid out brick text");
    layout
}

//! 5x7 pixel font used for brick lettering.
//!
//! Glyphs are static data: one bit row per raster row, most significant of
//! the five bits being the leftmost column. Only uppercase letters and digits
//! are present; lookups for anything else return `None`.

pub const GLYPH_COLUMNS: usize = 5;
pub const GLYPH_ROWS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    /// Builds a glyph from rows of `'1'` (filled) and anything else (empty).
    pub const fn from_rows(rows: [&str; GLYPH_ROWS]) -> Self {
        let mut bits = [0u8; GLYPH_ROWS];
        let mut r = 0;
        while r < GLYPH_ROWS {
            let bytes = rows[r].as_bytes();
            let mut c = 0;
            while c < bytes.len() && c < GLYPH_COLUMNS {
                if bytes[c] == b'1' {
                    bits[r] |= 1 << (GLYPH_COLUMNS - 1 - c);
                }
                c += 1;
            }
            r += 1;
        }
        Self { rows: bits }
    }

    pub const fn width(&self) -> usize {
        GLYPH_COLUMNS
    }

    pub const fn height(&self) -> usize {
        GLYPH_ROWS
    }

    pub fn is_filled(&self, column: usize, row: usize) -> bool {
        if column >= GLYPH_COLUMNS || row >= GLYPH_ROWS {
            return false;
        }
        self.rows[row] & (1 << (GLYPH_COLUMNS - 1 - column)) != 0
    }

    /// Filled cells as (column, row), row 0 being the top of the glyph.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLUMNS)
                .filter(move |&column| self.is_filled(column, row))
                .map(move |column| (column, row))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }
}

pub fn glyph(ch: char) -> Option<&'static Glyph> {
    FONT.iter().find(|(c, _)| *c == ch).map(|(_, g)| g)
}

pub fn supported_chars() -> impl Iterator<Item = char> {
    FONT.iter().map(|(c, _)| *c)
}

static FONT: [(char, Glyph); 36] = [
    ('A', Glyph::from_rows(["01110", "10001", "10001", "11111", "10001", "10001", "10001"])),
    ('B', Glyph::from_rows(["11110", "10001", "10001", "11110", "10001", "10001", "11110"])),
    ('C', Glyph::from_rows(["01110", "10001", "10000", "10000", "10000", "10001", "01110"])),
    ('D', Glyph::from_rows(["11100", "10010", "10001", "10001", "10001", "10010", "11100"])),
    ('E', Glyph::from_rows(["11111", "10000", "10000", "11110", "10000", "10000", "11111"])),
    ('F', Glyph::from_rows(["11111", "10000", "10000", "11110", "10000", "10000", "10000"])),
    ('G', Glyph::from_rows(["01110", "10001", "10000", "10111", "10001", "10001", "01111"])),
    ('H', Glyph::from_rows(["10001", "10001", "10001", "11111", "10001", "10001", "10001"])),
    ('I', Glyph::from_rows(["01110", "00100", "00100", "00100", "00100", "00100", "01110"])),
    ('J', Glyph::from_rows(["00111", "00010", "00010", "00010", "00010", "10010", "01100"])),
    ('K', Glyph::from_rows(["10001", "10010", "10100", "11000", "10100", "10010", "10001"])),
    ('L', Glyph::from_rows(["10000", "10000", "10000", "10000", "10000", "10000", "11111"])),
    ('M', Glyph::from_rows(["10001", "11011", "10101", "10101", "10001", "10001", "10001"])),
    ('N', Glyph::from_rows(["10001", "10001", "11001", "10101", "10011", "10001", "10001"])),
    ('O', Glyph::from_rows(["01110", "10001", "10001", "10001", "10001", "10001", "01110"])),
    ('P', Glyph::from_rows(["11110", "10001", "10001", "11110", "10000", "10000", "10000"])),
    ('Q', Glyph::from_rows(["01110", "10001", "10001", "10001", "10101", "10010", "01101"])),
    ('R', Glyph::from_rows(["11110", "10001", "10001", "11110", "10100", "10010", "10001"])),
    ('S', Glyph::from_rows(["01111", "10000", "10000", "01110", "00001", "00001", "11110"])),
    ('T', Glyph::from_rows(["11111", "00100", "00100", "00100", "00100", "00100", "00100"])),
    ('U', Glyph::from_rows(["10001", "10001", "10001", "10001", "10001", "10001", "01110"])),
    ('V', Glyph::from_rows(["10001", "10001", "10001", "10001", "10001", "01010", "00100"])),
    ('W', Glyph::from_rows(["10001", "10001", "10001", "10101", "10101", "10101", "01010"])),
    ('X', Glyph::from_rows(["10001", "10001", "01010", "00100", "01010", "10001", "10001"])),
    ('Y', Glyph::from_rows(["10001", "10001", "01010", "00100", "00100", "00100", "00100"])),
    ('Z', Glyph::from_rows(["11111", "00001", "00010", "00100", "01000", "10000", "11111"])),
    ('0', Glyph::from_rows(["01110", "10001", "10011", "10101", "11001", "10001", "01110"])),
    ('1', Glyph::from_rows(["00100", "01100", "00100", "00100", "00100", "00100", "01110"])),
    ('2', Glyph::from_rows(["01110", "10001", "00001", "00010", "00100", "01000", "11111"])),
    ('3', Glyph::from_rows(["11111", "00010", "00100", "00010", "00001", "10001", "01110"])),
    ('4', Glyph::from_rows(["00010", "00110", "01010", "10010", "11111", "00010", "00010"])),
    ('5', Glyph::from_rows(["11111", "10000", "11110", "00001", "00001", "10001", "01110"])),
    ('6', Glyph::from_rows(["00110", "01000", "10000", "11110", "10001", "10001", "01110"])),
    ('7', Glyph::from_rows(["11111", "00001", "00010", "00100", "01000", "01000", "01000"])),
    ('8', Glyph::from_rows(["01110", "10001", "10001", "01110", "10001", "10001", "01110"])),
    ('9', Glyph::from_rows(["01110", "10001", "10001", "01111", "00001", "00010", "01100"])),
];

//! Built-in ASCII patterns for brick art. `#` is a brick, anything else is empty.

pub const NUMERAL_SEVEN: &[&str] = &[
    "#####",
    "....#",
    "...#.",
    "..#..",
    ".#...",
    ".#...",
    ".#...",
];

pub const LETTER_A: &[&str] = &[
    ".###.",
    "#...#",
    "#...#",
    "#####",
    "#...#",
    "#...#",
    "#...#",
];

/// Rows are deliberately ragged; trailing empties are implied.
pub const TWENTY_FIVE: &[&str] = &[
    "###..###",
    "..#..#",
    "###..###",
    "#......#",
    "###..###",
];

pub const ALL: [(&str, &[&str]); 3] = [
    ("seven", NUMERAL_SEVEN),
    ("a", LETTER_A),
    ("25", TWENTY_FIVE),
];

pub fn by_name(name: &str) -> Option<&'static [&'static str]> {
    let name = name.trim().to_ascii_lowercase();
    ALL.iter().find(|(n, _)| *n == name).map(|(_, rows)| *rows)
}

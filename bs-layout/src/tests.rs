use std::f32::consts::FRAC_PI_2;

use super::*;
use bevy::prelude::Vec3;

const EPS: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn xs(layout: &Layout) -> Vec<f32> {
    layout.iter().map(|b| b.position().x).collect()
}

fn ys(layout: &Layout) -> Vec<f32> {
    layout.iter().map(|b| b.position().y).collect()
}

fn min(values: &[f32]) -> f32 {
    values.iter().copied().fold(f32::INFINITY, f32::min)
}

fn max(values: &[f32]) -> f32 {
    values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}

#[test]
fn body_is_undersized_by_clearance() {
    let brick = BrickSpec::two_by_four(BRICK_RED);
    assert!(approx(brick.body_width(), 2.0 * STUD_PITCH - BODY_CLEARANCE));
    assert!(approx(brick.body_length(), 4.0 * STUD_PITCH - BODY_CLEARANCE));
    assert!(approx(brick.body_size().y, BODY_HEIGHT));
}

#[test]
fn stud_offsets_are_centered_on_body() {
    let brick = BrickSpec::new(2, 4, BRICK_BLUE);
    let studs = brick.stud_offsets();
    assert_eq!(studs.len(), 8);
    assert_eq!(brick.stud_count(), 8);

    let sum: Vec3 = studs.iter().copied().sum();
    let mean = sum / studs.len() as f32;
    assert!(approx(mean.x, 0.0));
    assert!(approx(mean.z, 0.0));
    for stud in &studs {
        assert!(approx(stud.y, BODY_HEIGHT + STUD_HEIGHT / 2.0));
        assert!(stud.x.abs() < brick.body_width() / 2.0);
        assert!(stud.z.abs() < brick.body_length() / 2.0);
    }
    assert!(approx(studs[1].z - studs[0].z, STUD_PITCH));
}

#[test]
fn zero_stud_counts_clamp_to_one() {
    let brick = BrickSpec::new(0, 0, BRICK_RED);
    assert_eq!(brick.studs_x(), 1);
    assert_eq!(brick.studs_z(), 1);
    assert_eq!(brick.stud_offsets(), vec![Vec3::new(0.0, BODY_HEIGHT + STUD_HEIGHT / 2.0, 0.0)]);
}

#[test]
fn grid_emits_one_brick_per_fill_marker() {
    let rows = ["#.#", "##", "x#. "];
    let layout = layout_grid(&rows, &GridStyle::brick_art());
    assert_eq!(layout.len(), 5);
    assert_eq!(layout.stud_count(), 5 * 4);
}

#[test]
fn grid_row_is_symmetric_and_evenly_spaced() {
    let style = GridStyle::brick_art();
    let layout = layout_grid(&["###"], &style);
    let xs = xs(&layout);
    assert_eq!(xs.len(), 3);
    assert!(approx(xs[0], -style.step_x()));
    assert!(approx(xs[1], 0.0));
    assert!(approx(xs[2], style.step_x()));
    assert!(layout.iter().all(|b| approx(b.position().y, 0.0)));
}

#[test]
fn grid_step_subtracts_seam() {
    let style = GridStyle::new(BrickSpec::new(2, 2, BRICK_RED), ART_SEAM);
    assert!(approx(style.step_x(), 2.0 * STUD_PITCH - ART_SEAM));
    // Art bricks overlap slightly; word bricks leave a gap.
    assert!(style.step_x() < style.cell.body_width());
    let word = GridStyle::pixel_word();
    assert!(word.step_x() > word.cell.body_width());
}

#[test]
fn grid_last_row_rests_on_ground() {
    let rows = ["#..", ".#.", "..#"];
    let layout = layout_grid(&rows, &GridStyle::brick_art());
    let ys = ys(&layout);

    assert!(approx(ys[2], 0.0));
    assert!(approx(min(&ys), ys[2]));
    assert!(approx(ys[0], 2.0 * BODY_HEIGHT));
    assert!(approx(max(&ys), ys[0]));
}

#[test]
fn ragged_rows_center_on_widest_row() {
    let style = GridStyle::brick_art();
    let layout = layout_grid(&["#", "#####"], &style);
    // The lone brick of the short row sits in column 0 of a five wide grid.
    assert!(approx(layout.bricks()[0].position().x, -2.0 * style.step_x()));
    assert!(approx(layout.bricks()[0].position().y, BODY_HEIGHT));
}

#[test]
fn empty_grid_is_empty() {
    let rows: [&str; 0] = [];
    assert!(layout_grid(&rows, &GridStyle::default()).is_empty());
    assert!(layout_grid(&["....", ""], &GridStyle::default()).is_empty());
}

#[test]
fn builtin_art_counts_match_patterns() {
    for (name, rows) in art::ALL {
        let expected: usize = rows.iter().map(|r| r.matches('#').count()).sum();
        let layout = layout_grid(rows, &GridStyle::brick_art());
        assert_eq!(layout.len(), expected, "art {name}");
    }
    assert!(art::by_name("Seven").is_some());
    assert!(art::by_name("nope").is_none());
}

#[test]
fn font_covers_letters_and_digits() {
    assert_eq!(font::supported_chars().count(), 36);
    for ch in ('A'..='Z').chain('0'..='9') {
        let glyph = font::glyph(ch).expect("glyph");
        assert_eq!(glyph.width(), font::GLYPH_COLUMNS);
        assert_eq!(glyph.height(), font::GLYPH_ROWS);
        assert!(glyph.filled_count() > 0, "{ch} is blank");
    }
    assert!(font::glyph('a').is_none());
    assert!(font::glyph('!').is_none());
}

#[test]
fn glyph_b_has_expected_raster() {
    let b = font::glyph('B').expect("glyph");
    assert_eq!(b.filled_count(), 20);
    assert!(b.is_filled(0, 0));
    assert!(!b.is_filled(4, 0));
    assert!(b.is_filled(4, 1));
    assert!(!b.is_filled(5, 0));
    assert_eq!(b.filled_cells().count(), 20);
}

#[test]
fn text_b_yields_one_brick_per_filled_cell() {
    let layout = layout_text("B", &TextStyle::default());
    assert_eq!(layout.len(), 20);
    let color = layout.bricks()[0].spec().color();
    assert!(layout.iter().all(|b| b.yaw() == 0.0));
    assert!(layout.iter().all(|b| b.spec().color() == color));

    let ys = ys(&layout);
    assert!(approx(min(&ys), 0.0));
    assert!(approx(max(&ys), 6.0 * BODY_HEIGHT));
}

#[test]
fn text_is_case_insensitive() {
    let style = TextStyle::default();
    assert_eq!(layout_text("hello", &style), layout_text("HELLO", &style));
}

#[test]
fn text_columns_include_spacing_between_characters() {
    assert_eq!(text_columns("", 1), 0);
    assert_eq!(text_columns("H", 1), 5);
    assert_eq!(text_columns("HI", 1), 11);
    assert_eq!(text_columns("HI", 3), 13);
    assert_eq!(text_columns("H?I", 1), 12);
    assert_eq!(text_columns("h i", 1), 12);
}

#[test]
fn text_is_centered() {
    let style = TextStyle::default();
    let layout = layout_text("HH", &style);
    let xs = xs(&layout);
    assert!(approx(min(&xs), -max(&xs)));
    assert!(approx(max(&xs), 5.0 * style.grid.step_x()));
}

#[test]
fn unknown_characters_advance_cursor() {
    let style = TextStyle::default();
    let plain = layout_text("HI", &style);
    let spaced = layout_text("H I", &style);
    assert_eq!(plain.len(), spaced.len());

    // "H I" is one column wider, so the H moves left by half a step
    // and the I moves right by half a step.
    let step = style.grid.step_x();
    let first_plain = plain.bricks()[0].position().x;
    let first_spaced = spaced.bricks()[0].position().x;
    assert!(approx(first_plain - first_spaced, step / 2.0));
    let last_plain = plain.bricks()[plain.len() - 1].position().x;
    let last_spaced = spaced.bricks()[spaced.len() - 1].position().x;
    assert!(approx(last_spaced - last_plain, step / 2.0));
}

#[test]
fn empty_and_unsupported_text_is_empty() {
    let style = TextStyle::default();
    assert!(layout_text("", &style).is_empty());
    assert!(layout_text("?!", &style).is_empty());
}

#[test]
fn layouts_are_idempotent() {
    let style = TextStyle::default();
    assert_eq!(layout_text("Brick 25", &style), layout_text("Brick 25", &style));
    assert_eq!(
        layout_grid(art::TWENTY_FIVE, &GridStyle::brick_art()),
        layout_grid(art::TWENTY_FIVE, &GridStyle::brick_art())
    );
    assert_eq!(
        Preset::Village { houses: 2 }.layout(None),
        Preset::Village { houses: 2 }.layout(None)
    );
}

#[test]
fn single_brick_sits_at_origin() {
    let layout = Preset::SingleBrick.layout(Some(BRICK_GREEN));
    assert_eq!(layout.len(), 1);
    let brick = layout.bricks()[0];
    assert_eq!(brick.position(), Vec3::ZERO);
    assert_eq!(brick.spec().color(), BRICK_GREEN);
    assert_eq!(layout.stud_count(), 8);
}

#[test]
fn stack_repeats_pair_per_layer() {
    let layers = 4;
    let layout = Preset::Stack { layers }.layout(None);
    assert_eq!(layout.len(), 2 * layers as usize);

    for layer in 0..layers {
        let y = layer as f32 * BODY_HEIGHT;
        let count = layout.iter().filter(|b| approx(b.position().y, y)).count();
        assert_eq!(count, 2, "layer {layer}");
    }

    // Centers sit one two-stud brick width apart.
    let pair = &layout.bricks()[..2];
    let gap = pair[1].position().x - pair[0].position().x;
    assert!(approx(gap, 2.0 * STUD_PITCH));
}

#[test]
fn perimeter_house_has_staggered_courses() {
    let layout = Preset::PerimeterHouse { courses: 2 }.layout(None);
    assert_eq!(layout.len(), 24);

    let first = &layout.bricks()[..12];
    let second = &layout.bricks()[12..];
    assert!(first.iter().all(|b| approx(b.position().y, 0.0)));
    assert!(second.iter().all(|b| approx(b.position().y, COURSE_HEIGHT)));

    for (a, b) in first.iter().zip(second) {
        let delta = b.position() - a.position();
        assert!(approx(delta.y, COURSE_HEIGHT));
        if a.yaw() == FRAC_PI_2 {
            assert!(approx(delta.x, LONG_SIDE / 2.0));
            assert!(approx(delta.z, 0.0));
        } else {
            assert!(approx(delta.x, 0.0));
            assert!(approx(delta.z, LONG_SIDE / 2.0));
        }
    }

    let turned = first.iter().filter(|b| b.yaw() == FRAC_PI_2).count();
    assert_eq!(turned, 8);
}

#[test]
fn village_uses_palette_per_house() {
    let layout = Preset::Village { houses: 3 }.layout(None);
    assert_eq!(layout.len(), 3 * 24);

    for (i, house) in layout.bricks().chunks(24).enumerate() {
        let color = PALETTE[i];
        assert!(house.iter().all(|b| b.spec().color() == color));
    }

    let first = layout.bricks()[0].position().x;
    let middle = layout.bricks()[24].position().x;
    assert!(approx(middle - first, HOUSE_SPACING));
}

#[test]
fn empty_presets_produce_nothing() {
    assert!(Preset::Stack { layers: 0 }.layout(None).is_empty());
    assert!(Preset::Village { houses: 0 }.layout(None).is_empty());
}

#[test]
fn stud_count_does_not_overflow_u32() {
    let spec = BrickSpec::new(70_000, 70_000, BRICK_RED);
    assert_eq!(spec.stud_count(), 4_900_000_000usize);
}

#[test]
fn oversized_preset_counts_are_clamped() {
    let house = Preset::PerimeterHouse { courses: 4_000_000_000 }.layout(None);
    assert_eq!(house.len(), MAX_COURSES as usize * 12);

    let stack = Preset::Stack { layers: u32::MAX }.layout(None);
    assert_eq!(stack.len(), MAX_STACK_LAYERS as usize * 2);

    assert_eq!(
        Preset::Village { houses: 1_000 }.clamped(),
        Preset::Village { houses: MAX_HOUSES }
    );
    assert_eq!(Preset::Stack { layers: 4 }.clamped(), Preset::Stack { layers: 4 });
}

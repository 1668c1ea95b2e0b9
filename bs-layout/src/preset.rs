use std::f32::consts::FRAC_PI_2;

use bevy::prelude::{Color, Vec3};
use tracing::{debug, warn};

use crate::brick::{
    BODY_HEIGHT, BRICK_RED, BRICK_YELLOW, BrickSpec, Layout, PALETTE, PlacedBrick, STUD_HEIGHT,
    STUD_PITCH,
};

/// Length of a 2x4 brick along its long side.
pub const LONG_SIDE: f32 = 4.0 * STUD_PITCH;
/// Course height used by the perimeter house.
pub const COURSE_HEIGHT: f32 = BODY_HEIGHT + STUD_HEIGHT;
/// Distance between neighbouring house centers in a village.
pub const HOUSE_SPACING: f32 = 6.0 * LONG_SIDE;

pub const DEFAULT_STACK_LAYERS: u32 = 3;
pub const DEFAULT_COURSES: u32 = 2;
pub const DEFAULT_HOUSES: u32 = 3;

/// Upper bounds on preset repetition counts; larger requests are clamped.
pub const MAX_STACK_LAYERS: u32 = 512;
pub const MAX_COURSES: u32 = 512;
pub const MAX_HOUSES: u32 = 64;

/// Fixed brick arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    SingleBrick,
    /// A side-by-side pair of 2x4 bricks repeated `layers` times.
    Stack { layers: u32 },
    /// Perimeter walls of 2x4 bricks in staggered courses.
    PerimeterHouse { courses: u32 },
    /// A row of two-course perimeter houses in palette colors.
    Village { houses: u32 },
}

impl Preset {
    pub fn layout(self, color: Option<Color>) -> Layout {
        let color = color.unwrap_or(BRICK_RED);
        let preset = self.clamped();
        if preset != self {
            warn!(requested = ?self, used = ?preset, "preset count clamped");
        }
        let layout = match preset {
            Self::SingleBrick => single_brick(color),
            Self::Stack { layers } => stack(layers, color),
            Self::PerimeterHouse { courses } => perimeter_house(courses, color),
            Self::Village { houses } => village(houses),
        };
        debug!(?preset, bricks = layout.len(), "built preset layout");
        layout
    }

    /// Copy of this preset with its repetition count limited to the maximum.
    pub fn clamped(self) -> Self {
        match self {
            Self::SingleBrick => Self::SingleBrick,
            Self::Stack { layers } => Self::Stack {
                layers: layers.min(MAX_STACK_LAYERS),
            },
            Self::PerimeterHouse { courses } => Self::PerimeterHouse {
                courses: courses.min(MAX_COURSES),
            },
            Self::Village { houses } => Self::Village {
                houses: houses.min(MAX_HOUSES),
            },
        }
    }
}

fn single_brick(color: Color) -> Layout {
    std::iter::once(PlacedBrick::new(
        BrickSpec::two_by_four(color),
        Vec3::ZERO,
        0.0,
    ))
    .collect()
}

fn stack(layers: u32, color: Color) -> Layout {
    let left = BrickSpec::two_by_four(color);
    let right = BrickSpec::two_by_four(BRICK_YELLOW);

    let mut layout = Layout::new();
    for layer in 0..layers {
        let y = layer as f32 * BODY_HEIGHT;
        layout.push(PlacedBrick::new(left, Vec3::new(-STUD_PITCH, y, 0.0), 0.0));
        layout.push(PlacedBrick::new(right, Vec3::new(STUD_PITCH, y, 0.0), 0.0));
    }
    layout
}

fn perimeter_house(courses: u32, color: Color) -> Layout {
    let brick = BrickSpec::two_by_four(color);
    let row_xs = [-1.5 * LONG_SIDE, -0.5 * LONG_SIDE, 0.5 * LONG_SIDE, 1.5 * LONG_SIDE];
    let (front_z, back_z) = (0.0, 2.0 * LONG_SIDE);
    let side_zs = [0.5 * LONG_SIDE, 1.5 * LONG_SIDE];
    let (left_x, right_x) = (-2.0 * LONG_SIDE, 2.0 * LONG_SIDE);

    let mut layout = Layout::new();
    for course in 0..courses {
        let y = course as f32 * COURSE_HEIGHT;
        // Odd courses shift by half a brick so joints never line up.
        let shift = if course % 2 == 1 { LONG_SIDE / 2.0 } else { 0.0 };

        for x in row_xs {
            let x = x + shift;
            layout.push(PlacedBrick::new(brick, Vec3::new(x, y, front_z), FRAC_PI_2));
            layout.push(PlacedBrick::new(brick, Vec3::new(x, y, back_z), FRAC_PI_2));
        }
        for z in side_zs {
            let z = z + shift;
            layout.push(PlacedBrick::new(brick, Vec3::new(left_x, y, z), 0.0));
            layout.push(PlacedBrick::new(brick, Vec3::new(right_x, y, z), 0.0));
        }
    }
    layout
}

fn village(houses: u32) -> Layout {
    let mut layout = Layout::new();
    let center = houses.saturating_sub(1) as f32 / 2.0;
    for i in 0..houses {
        let color = PALETTE[i as usize % PALETTE.len()];
        let offset = Vec3::new((i as f32 - center) * HOUSE_SPACING, 0.0, 0.0);
        layout.append(perimeter_house(DEFAULT_COURSES, color).translated(offset));
    }
    layout
}

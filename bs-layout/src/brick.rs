use bevy::prelude::{Color, Vec3};

/// Millimeters expressed in world units (meters).
pub const MM: f32 = 0.001;

pub const STUD_PITCH: f32 = 8.0 * MM;
pub const STUD_DIAMETER: f32 = 4.8 * MM;
pub const STUD_HEIGHT: f32 = 1.8 * MM;
pub const BODY_HEIGHT: f32 = 9.6 * MM;
/// Amount each body is shrunk relative to its nominal stud footprint.
pub const BODY_CLEARANCE: f32 = 0.1 * MM;

pub const BRICK_RED: Color = rgb_hex(0xD32F2F);
pub const BRICK_BLUE: Color = rgb_hex(0x1976D2);
pub const BRICK_YELLOW: Color = rgb_hex(0xFBC02D);
pub const BRICK_GREEN: Color = rgb_hex(0x388E3C);
pub const BRICK_WHITE: Color = rgb_hex(0xF5F5F5);

pub const PALETTE: [Color; 5] = [BRICK_RED, BRICK_BLUE, BRICK_YELLOW, BRICK_GREEN, BRICK_WHITE];

pub const fn rgb_hex(hex: u32) -> Color {
    Color::srgb(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickSpec {
    studs_x: u32,
    studs_z: u32,
    color: Color,
}

impl BrickSpec {
    /// Stud counts below one are clamped to one.
    pub fn new(studs_x: u32, studs_z: u32, color: Color) -> Self {
        Self {
            studs_x: studs_x.max(1),
            studs_z: studs_z.max(1),
            color,
        }
    }

    /// The classic 2x4 brick.
    pub fn two_by_four(color: Color) -> Self {
        Self::new(2, 4, color)
    }

    pub fn studs_x(&self) -> u32 {
        self.studs_x
    }

    pub fn studs_z(&self) -> u32 {
        self.studs_z
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn body_width(&self) -> f32 {
        self.studs_x as f32 * STUD_PITCH - BODY_CLEARANCE
    }

    pub fn body_length(&self) -> f32 {
        self.studs_z as f32 * STUD_PITCH - BODY_CLEARANCE
    }

    /// Body extents as (width, height, length).
    pub fn body_size(&self) -> Vec3 {
        Vec3::new(self.body_width(), BODY_HEIGHT, self.body_length())
    }

    pub fn stud_count(&self) -> usize {
        self.studs_x as usize * self.studs_z as usize
    }

    /// Stud centers relative to the brick origin (center of the body's bottom face).
    pub fn stud_offsets(&self) -> Vec<Vec3> {
        let start_x = -((self.studs_x - 1) as f32 * STUD_PITCH) / 2.0;
        let start_z = -((self.studs_z - 1) as f32 * STUD_PITCH) / 2.0;
        let y = BODY_HEIGHT + STUD_HEIGHT / 2.0;

        let mut offsets = Vec::with_capacity(self.stud_count());
        for ix in 0..self.studs_x {
            for iz in 0..self.studs_z {
                offsets.push(Vec3::new(
                    start_x + ix as f32 * STUD_PITCH,
                    y,
                    start_z + iz as f32 * STUD_PITCH,
                ));
            }
        }
        offsets
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBrick {
    spec: BrickSpec,
    position: Vec3,
    yaw: f32,
}

impl PlacedBrick {
    pub fn new(spec: BrickSpec, position: Vec3, yaw: f32) -> Self {
        Self {
            spec,
            position,
            yaw,
        }
    }

    pub fn spec(&self) -> &BrickSpec {
        &self.spec
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn translated(self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }
}

/// Flat list of bricks making up one scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    bricks: Vec<PlacedBrick>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, brick: PlacedBrick) {
        self.bricks.push(brick);
    }

    pub fn append(&mut self, other: Layout) {
        self.bricks.extend(other.bricks);
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn bricks(&self) -> &[PlacedBrick] {
        &self.bricks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedBrick> {
        self.bricks.iter()
    }

    pub fn stud_count(&self) -> usize {
        self.bricks.iter().map(|b| b.spec.stud_count()).sum()
    }

    pub fn translated(self, offset: Vec3) -> Self {
        self.bricks
            .into_iter()
            .map(|b| b.translated(offset))
            .collect()
    }
}

impl FromIterator<PlacedBrick> for Layout {
    fn from_iter<T: IntoIterator<Item = PlacedBrick>>(iter: T) -> Self {
        Self {
            bricks: iter.into_iter().collect(),
        }
    }
}

impl Extend<PlacedBrick> for Layout {
    fn extend<T: IntoIterator<Item = PlacedBrick>>(&mut self, iter: T) {
        self.bricks.extend(iter);
    }
}

impl IntoIterator for Layout {
    type Item = PlacedBrick;
    type IntoIter = std::vec::IntoIter<PlacedBrick>;

    fn into_iter(self) -> Self::IntoIter {
        self.bricks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a PlacedBrick;
    type IntoIter = std::slice::Iter<'a, PlacedBrick>;

    fn into_iter(self) -> Self::IntoIter {
        self.bricks.iter()
    }
}

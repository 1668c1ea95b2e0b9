use bevy::prelude::*;

/// Parent of every spawned brick.
#[derive(Component)]
pub struct LayoutRoot;

/// One placed brick; `index` is its position in the layout.
#[derive(Component, Debug, Clone, Copy)]
pub struct BrickEntity {
    pub index: usize,
}

#[derive(Component)]
pub struct BrickBody;

#[derive(Component)]
pub struct BrickStud;

#[derive(Component)]
pub struct HouseModel;

#[derive(Component)]
pub struct GroundPlane;

#[derive(Component)]
pub struct ShadowCasterLight;

/// Constant per-frame yaw increment, advanced by [`advance_spin`](crate::advance_spin).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    per_frame: f32,
}

impl Spin {
    pub fn new(per_frame: f32) -> Self {
        Self {
            angle: 0.0,
            per_frame,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn per_frame(&self) -> f32 {
        self.per_frame
    }

    /// Never wrapped; the quaternion built from it is periodic anyway.
    pub fn tick(&mut self) -> f32 {
        self.angle += self.per_frame;
        self.angle
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }
}

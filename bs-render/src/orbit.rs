use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::OrbitSettings;
use crate::input::OrbitInput;

/// Keeps the camera off the poles, where `looking_at` loses its up vector.
const POLAR_EPSILON: f32 = 1e-4;
/// Radius multiplier per scroll line.
const ZOOM_BASE: f32 = 0.95;

/// Spherical camera rig circling a target point.
///
/// Rotation input accumulates into a pending delta. With damping, each step
/// applies `pending * factor` and keeps `pending * (1 - factor)` for the next
/// frame, so motion eases out after the pointer stops.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Angle around +Y, zero looking down -Z from +Z.
    pub azimuth: f32,
    /// Angle from +Y.
    pub polar: f32,
    pub settings: OrbitSettings,
    pending: Vec2,
}

impl OrbitCamera {
    pub fn new(position: Vec3, settings: OrbitSettings) -> Self {
        let offset = position - settings.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut camera = Self {
            target: settings.target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            settings,
            pending: Vec2::ZERO,
        };
        camera.clamp();
        camera
    }

    pub fn position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }

    pub fn pending(&self) -> Vec2 {
        self.pending
    }

    /// `rotate` is (azimuth, polar) in radians; `zoom_scale` multiplies the radius.
    pub fn step(&mut self, rotate: Vec2, zoom_scale: f32) {
        self.pending += rotate;
        match self.settings.damping {
            Some(factor) => {
                let applied = self.pending * factor;
                self.azimuth += applied.x;
                self.polar += applied.y;
                self.pending *= 1.0 - factor;
            }
            None => {
                self.azimuth += self.pending.x;
                self.polar += self.pending.y;
                self.pending = Vec2::ZERO;
            }
        }
        self.radius *= zoom_scale;
        self.clamp();
    }

    fn clamp(&mut self) {
        let max_polar = self.settings.max_polar.min(std::f32::consts::PI - POLAR_EPSILON);
        self.polar = self.polar.clamp(POLAR_EPSILON, max_polar.max(POLAR_EPSILON));
        self.radius = self
            .radius
            .clamp(self.settings.min_radius, self.settings.max_radius);
    }
}

/// Radius multiplier for a scroll amount in lines; positive scroll zooms in.
pub fn zoom_scale(scroll_lines: f32) -> f32 {
    ZOOM_BASE.powf(scroll_lines)
}

/// Converts a pointer drag in pixels to (azimuth, polar) radians. A drag the
/// full height of the window turns the camera once around.
pub fn drag_to_rotation(drag: Vec2, window_height: f32) -> Vec2 {
    if window_height <= 0.0 {
        return Vec2::ZERO;
    }
    -drag * TAU / window_height
}

pub fn apply_orbit_camera(
    input: Res<OrbitInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let height = windows
        .iter()
        .next()
        .map(|w| w.resolution.height())
        .unwrap_or(0.0);
    let rotate = drag_to_rotation(input.drag, height);
    let scale = zoom_scale(input.scroll);

    for (mut camera, mut transform) in &mut cameras {
        camera.step(rotate, scale);
        *transform = camera.transform();
    }
}

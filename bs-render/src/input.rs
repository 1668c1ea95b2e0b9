use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Pixels per scroll line for high-resolution wheels and touchpads.
const PIXELS_PER_LINE: f32 = 50.0;

/// Camera input gathered this frame.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct OrbitInput {
    /// Pointer travel in pixels while the rotate button is held.
    pub drag: Vec2,
    /// Scroll amount in lines.
    pub scroll: f32,
}

pub fn collect_orbit_input(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    mut wheel_events: EventReader<MouseWheel>,
    mut input: ResMut<OrbitInput>,
) {
    let mut drag = Vec2::ZERO;
    for ev in motion_events.read() {
        drag += ev.delta;
    }
    if !buttons.pressed(MouseButton::Left) {
        drag = Vec2::ZERO;
    }

    let mut scroll = 0.0;
    for ev in wheel_events.read() {
        scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_LINE,
        };
    }

    input.drag = drag;
    input.scroll = scroll;
}

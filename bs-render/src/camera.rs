use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::orbit::OrbitCamera;

pub fn spawn_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let orbit = OrbitCamera::new(config.camera.position, config.orbit);
    let transform = orbit.transform();

    commands.spawn((
        Name::new("OrbitCamera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            near: config.camera.near,
            ..default()
        }),
        orbit,
        transform,
    ));
}

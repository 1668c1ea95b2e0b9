use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use crate::components::ShadowCasterLight;
use crate::config::SceneConfig;
use crate::debug::RenderDebugSettings;

pub fn spawn_lights(
    mut commands: Commands,
    config: Res<SceneConfig>,
    settings: Res<RenderDebugSettings>,
) {
    commands.insert_resource(config.ambient_light());
    commands.insert_resource(DirectionalLightShadowMap {
        size: config.sun.shadow_map_size,
    });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            shadows_enabled: config.sun.shadows && settings.shadows_enabled,
            illuminance: config.sun_illuminance(),
            ..default()
        },
        ShadowCasterLight,
        Transform::from_translation(config.sun.position).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    if let (Some(hemi), Some(illuminance)) = (config.hemisphere, config.ground_bounce_illuminance())
    {
        commands.spawn((
            Name::new("GroundBounce"),
            DirectionalLight {
                color: hemi.ground,
                shadows_enabled: false,
                illuminance,
                ..default()
            },
            Transform::from_xyz(0.0, -1.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
        ));
    }
}

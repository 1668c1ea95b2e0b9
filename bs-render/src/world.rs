use bevy::prelude::*;

use crate::components::GroundPlane;
use crate::config::SceneConfig;

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    commands.insert_resource(ClearColor(config.background));

    let Some(ground) = config.ground else {
        return;
    };
    let ground_mesh = Mesh::from(Plane3d::default().mesh().size(ground.size, ground.size));
    commands.spawn((
        Name::new("Ground"),
        GroundPlane,
        Mesh3d(meshes.add(ground_mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ground.color,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
    ));
}

use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use tracing::info;

use crate::components::HouseModel;
use crate::config::SceneContent;

pub fn spawn_house_model(
    mut commands: Commands,
    content: Res<SceneContent>,
    asset_server: Res<AssetServer>,
) {
    let Some(path) = content.model.clone() else {
        return;
    };
    info!(path = %path, "loading house model");

    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));
    commands
        .spawn((
            Name::new("HouseModel"),
            HouseModel,
            SceneRoot(scene),
            Transform::default(),
        ))
        .observe(enable_model_shadows);
}

/// Every mesh in the loaded model both casts and receives shadows.
pub(crate) fn enable_model_shadows(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
) {
    let flagged = flag_model_shadows(&mut commands, &children, &meshes, trigger.target());
    info!(meshes = flagged, "house model ready");
}

/// Clears the shadow opt-out markers from every mesh at or below `root`.
/// Returns the number of meshes visited.
pub(crate) fn flag_model_shadows(
    commands: &mut Commands,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
    root: Entity,
) -> usize {
    let mut pending = vec![root];
    let mut flagged = 0;
    while let Some(entity) = pending.pop() {
        if meshes.contains(entity) {
            commands
                .entity(entity)
                .remove::<(NotShadowCaster, NotShadowReceiver)>();
            flagged += 1;
        }
        if let Ok(kids) = children.get(entity) {
            pending.extend_from_slice(&kids[..]);
        }
    }
    flagged
}

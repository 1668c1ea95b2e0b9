use bevy::prelude::*;
use bs_render::RenderDebugSettings;

use crate::scene::AssembledScene;

/// Hands the assembled scene to the render plugin as resources.
pub struct ScenePlugin {
    scene: AssembledScene,
}

impl ScenePlugin {
    pub fn new(scene: AssembledScene) -> Self {
        Self { scene }
    }
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.scene.config.clone())
            .insert_resource(self.scene.content.clone())
            .insert_resource(RenderDebugSettings {
                shadows_enabled: self.scene.shadows,
            });
    }
}

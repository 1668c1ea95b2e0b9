use bevy::prelude::*;

use crate::components::ShadowCasterLight;
use crate::config::SceneConfig;

#[derive(Resource, Debug, Clone)]
pub struct RenderDebugSettings {
    pub shadows_enabled: bool,
}

impl Default for RenderDebugSettings {
    fn default() -> Self {
        Self {
            shadows_enabled: true,
        }
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneStats {
    pub bricks: usize,
    pub studs: usize,
}

pub fn apply_render_debug_settings(
    settings: Res<RenderDebugSettings>,
    config: Res<SceneConfig>,
    mut lights: Query<&mut DirectionalLight, With<ShadowCasterLight>>,
) {
    if !settings.is_changed() {
        return;
    }
    for mut light in &mut lights {
        light.shadows_enabled = config.sun.shadows && settings.shadows_enabled;
    }
}

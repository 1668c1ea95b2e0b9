use bevy::prelude::*;

mod brick;
mod camera;
mod components;
mod config;
pub mod debug;
mod input;
mod lighting;
mod model;
mod orbit;
mod world;

pub use brick::{BrickAssets, BrickFinish, STUD_SEGMENTS, spawn_brick, spawn_layout};
pub use components::{
    BrickBody, BrickEntity, BrickStud, GroundPlane, HouseModel, LayoutRoot, ShadowCasterLight,
    Spin,
};
pub use config::{
    AMBIENT_BRIGHTNESS_PER_UNIT, AmbientSettings, CameraSettings, GroundSettings,
    HemisphereSettings, OrbitSettings, SUN_LUX_PER_UNIT, SceneConfig, SceneContent, SunSettings,
};
pub use debug::{RenderDebugSettings, SceneStats};
pub use input::OrbitInput;
pub use orbit::{OrbitCamera, drag_to_rotation, zoom_scale};

pub struct SceneRenderPlugin;

impl Plugin for SceneRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<SceneContent>()
            .init_resource::<RenderDebugSettings>()
            .init_resource::<SceneStats>()
            .init_resource::<BrickAssets>()
            .init_resource::<OrbitInput>()
            .add_systems(
                Startup,
                (
                    world::setup_world,
                    lighting::spawn_lights,
                    camera::spawn_camera,
                    brick::spawn_layout,
                    model::spawn_house_model,
                ),
            )
            .add_systems(
                Update,
                (
                    input::collect_orbit_input,
                    orbit::apply_orbit_camera.after(input::collect_orbit_input),
                    advance_spin,
                    debug::apply_render_debug_settings,
                ),
            );
    }
}

/// Per-frame tick for every spinning entity.
pub fn advance_spin(mut spinning: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut transform) in &mut spinning {
        spin.tick();
        transform.rotation = spin.rotation();
    }
}

use std::f32::consts::PI;

use bevy::prelude::*;
use bs_layout::{Layout, rgb_hex};

use crate::components::Spin;

/// Directional light lux per unit of configured intensity.
pub const SUN_LUX_PER_UNIT: f32 = 10_000.0;
/// Ambient brightness per unit of configured intensity.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 400.0;
/// Share of the hemisphere intensity bounced up from the ground.
pub const GROUND_BOUNCE_SHARE: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientSettings {
    pub color: Color,
    pub intensity: f32,
}

/// Sky/ground gradient light. Approximated by ambient sky light plus a
/// shadowless directional light shining up in the ground color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereSettings {
    pub sky: Color,
    pub ground: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunSettings {
    pub position: Vec3,
    pub intensity: f32,
    pub shadows: bool,
    pub shadow_map_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub position: Vec3,
    pub near: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub target: Vec3,
    /// `None` disables damping.
    pub damping: Option<f32>,
    pub max_polar: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSettings {
    pub size: f32,
    pub color: Color,
}

/// Static environment of a scene: everything except the geometry itself.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub background: Color,
    pub ambient: Option<AmbientSettings>,
    pub hemisphere: Option<HemisphereSettings>,
    pub sun: SunSettings,
    pub camera: CameraSettings,
    pub orbit: OrbitSettings,
    pub ground: Option<GroundSettings>,
}

impl SceneConfig {
    /// Brick demos: light grey backdrop, hemisphere fill, close-up camera.
    pub fn brick_studio() -> Self {
        Self {
            background: rgb_hex(0xF5F5F7),
            ambient: None,
            hemisphere: Some(HemisphereSettings {
                sky: rgb_hex(0xFFFFFF),
                ground: rgb_hex(0x444444),
                intensity: 1.0,
            }),
            sun: SunSettings {
                position: Vec3::new(1.0, 2.0, 1.0),
                intensity: 0.8,
                shadows: true,
                shadow_map_size: 2048,
            },
            camera: CameraSettings {
                fov_degrees: 50.0,
                position: Vec3::new(0.25, 0.18, 0.35),
                near: 0.005,
            },
            orbit: OrbitSettings {
                target: Vec3::ZERO,
                damping: Some(0.05),
                max_polar: PI,
                min_radius: 0.05,
                max_radius: 5.0,
            },
            ground: None,
        }
    }

    /// House model viewer: sand ground, sunlight with a large shadow map.
    pub fn house_yard() -> Self {
        let sand = rgb_hex(0xE6D8AD);
        Self {
            background: sand,
            ambient: Some(AmbientSettings {
                color: Color::WHITE,
                intensity: 0.45,
            }),
            hemisphere: None,
            sun: SunSettings {
                position: Vec3::new(6.0, 10.0, 6.0),
                intensity: 1.2,
                shadows: true,
                shadow_map_size: 2048,
            },
            camera: CameraSettings {
                fov_degrees: 50.0,
                position: Vec3::new(4.0, 3.0, 6.0),
                near: 0.1,
            },
            orbit: OrbitSettings {
                target: Vec3::new(0.0, 0.5, 0.0),
                damping: Some(0.05),
                max_polar: PI / 2.05,
                min_radius: 1.0,
                max_radius: 50.0,
            },
            ground: Some(GroundSettings {
                size: 100.0,
                color: sand,
            }),
        }
    }

    /// Ambient light resource combining the ambient and hemisphere settings.
    pub fn ambient_light(&self) -> AmbientLight {
        let (color, intensity) = match (self.hemisphere, self.ambient) {
            (Some(hemi), Some(ambient)) => (hemi.sky, hemi.intensity + ambient.intensity),
            (Some(hemi), None) => (hemi.sky, hemi.intensity),
            (None, Some(ambient)) => (ambient.color, ambient.intensity),
            (None, None) => (Color::WHITE, 0.0),
        };
        AmbientLight {
            color,
            brightness: intensity * AMBIENT_BRIGHTNESS_PER_UNIT,
            affects_lightmapped_meshes: true,
        }
    }

    pub fn sun_illuminance(&self) -> f32 {
        self.sun.intensity * SUN_LUX_PER_UNIT
    }

    pub fn ground_bounce_illuminance(&self) -> Option<f32> {
        self.hemisphere
            .map(|hemi| hemi.intensity * GROUND_BOUNCE_SHARE * SUN_LUX_PER_UNIT)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::brick_studio()
    }
}

/// What the scene shows: bricks, an optional spin, an optional model.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneContent {
    pub layout: Layout,
    pub spin: Option<Spin>,
    /// Asset path of a glTF model, relative to the assets root.
    pub model: Option<String>,
}

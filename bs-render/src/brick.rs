use std::collections::HashMap;

use bevy::pbr::NotShadowReceiver;
use bevy::prelude::*;
use bs_layout::{BODY_HEIGHT, BrickSpec, PlacedBrick, STUD_DIAMETER, STUD_HEIGHT};
use tracing::info;

use crate::components::{BrickBody, BrickEntity, BrickStud, LayoutRoot};
use crate::config::SceneContent;
use crate::debug::SceneStats;

pub const STUD_SEGMENTS: u32 = 32;

/// Clearcoat plastic shared by every brick of one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickFinish {
    pub roughness: f32,
    pub metallic: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
}

impl Default for BrickFinish {
    fn default() -> Self {
        Self {
            roughness: 0.4,
            metallic: 0.0,
            clearcoat: 0.6,
            clearcoat_roughness: 0.3,
        }
    }
}

impl BrickFinish {
    pub fn material(&self, color: Color) -> StandardMaterial {
        StandardMaterial {
            base_color: color,
            perceptual_roughness: self.roughness,
            metallic: self.metallic,
            clearcoat: self.clearcoat,
            clearcoat_perceptual_roughness: self.clearcoat_roughness,
            ..default()
        }
    }
}

/// Mesh and material handles reused across bricks.
#[derive(Resource, Default)]
pub struct BrickAssets {
    pub finish: BrickFinish,
    bodies: HashMap<(u32, u32), Handle<Mesh>>,
    stud: Option<Handle<Mesh>>,
    materials: HashMap<[u8; 4], Handle<StandardMaterial>>,
}

impl BrickAssets {
    pub fn body_mesh(&mut self, meshes: &mut Assets<Mesh>, spec: &BrickSpec) -> Handle<Mesh> {
        self.bodies
            .entry((spec.studs_x(), spec.studs_z()))
            .or_insert_with(|| {
                meshes.add(Cuboid::new(
                    spec.body_width(),
                    BODY_HEIGHT,
                    spec.body_length(),
                ))
            })
            .clone()
    }

    pub fn stud_mesh(&mut self, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        self.stud
            .get_or_insert_with(|| {
                meshes.add(
                    Cylinder::new(STUD_DIAMETER / 2.0, STUD_HEIGHT)
                        .mesh()
                        .resolution(STUD_SEGMENTS),
                )
            })
            .clone()
    }

    pub fn material(
        &mut self,
        materials: &mut Assets<StandardMaterial>,
        color: Color,
    ) -> Handle<StandardMaterial> {
        let finish = self.finish;
        self.materials
            .entry(color_key(color))
            .or_insert_with(|| materials.add(finish.material(color)))
            .clone()
    }

    pub fn body_mesh_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

fn color_key(color: Color) -> [u8; 4] {
    let c = color.to_srgba();
    [c.red, c.green, c.blue, c.alpha].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Spawns one brick under `parent`: a group entity carrying the placement,
/// a body box resting on the group origin, and one cylinder per stud.
pub fn spawn_brick(
    commands: &mut Commands,
    assets: &mut BrickAssets,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    parent: Entity,
    index: usize,
    brick: &PlacedBrick,
) -> Entity {
    let spec = brick.spec();
    let material = assets.material(materials, spec.color());
    let body = assets.body_mesh(meshes, spec);
    let stud = assets.stud_mesh(meshes);

    let group = commands
        .spawn((
            Name::new(format!("Brick[{index}]")),
            BrickEntity { index },
            Transform::from_translation(brick.position())
                .with_rotation(Quat::from_rotation_y(brick.yaw())),
            Visibility::Inherited,
        ))
        .with_children(|parent| {
            parent.spawn((
                BrickBody,
                Mesh3d(body),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(0.0, BODY_HEIGHT / 2.0, 0.0),
            ));
            for offset in spec.stud_offsets() {
                parent.spawn((
                    BrickStud,
                    Mesh3d(stud.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(offset),
                    NotShadowReceiver,
                ));
            }
        })
        .id();
    commands.entity(parent).add_child(group);
    group
}

pub fn spawn_layout(
    mut commands: Commands,
    content: Res<SceneContent>,
    mut assets: ResMut<BrickAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut stats: ResMut<SceneStats>,
) {
    let mut root = commands.spawn((
        Name::new("LayoutRoot"),
        LayoutRoot,
        Transform::default(),
        Visibility::Visible,
    ));
    if let Some(spin) = content.spin {
        root.insert(spin);
    }
    let root = root.id();

    for (index, brick) in content.layout.iter().enumerate() {
        spawn_brick(
            &mut commands,
            &mut assets,
            &mut meshes,
            &mut materials,
            root,
            index,
            brick,
        );
    }

    stats.bricks = content.layout.len();
    stats.studs = content.layout.stud_count();
    if stats.bricks > 0 {
        info!(
            bricks = stats.bricks,
            studs = stats.studs,
            materials = assets.material_count(),
            "spawned brick layout"
        );
    }
}

use bs_layout::{Layout, PlacedBrick};
use bs_utils::SceneKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickRecord {
    pub studs: [u32; 2],
    /// Meters.
    pub position: [f32; 3],
    /// Radians.
    pub yaw: f32,
    pub color: String,
}

impl From<&PlacedBrick> for BrickRecord {
    fn from(brick: &PlacedBrick) -> Self {
        let spec = brick.spec();
        Self {
            studs: [spec.studs_x(), spec.studs_z()],
            position: brick.position().to_array(),
            yaw: brick.yaw(),
            color: spec.color().to_srgba().to_hex().to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDump {
    pub scene: String,
    pub bricks: usize,
    pub studs: usize,
    pub placements: Vec<BrickRecord>,
}

impl LayoutDump {
    pub fn new(kind: SceneKind, layout: &Layout) -> Self {
        Self {
            scene: kind.as_options_value().to_string(),
            bricks: layout.len(),
            studs: layout.stud_count(),
            placements: layout.iter().map(BrickRecord::from).collect(),
        }
    }
}

pub fn layout_json(kind: SceneKind, layout: &Layout) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LayoutDump::new(kind, layout))
}

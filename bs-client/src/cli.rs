use std::path::PathBuf;

use bs_utils::{SceneKind, SceneOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "brickscene", version, about = "Brick scene demos with an orbit camera")]
pub struct Cli {
    /// TOML options file; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// house-model, single-brick, stack, perimeter-house, village, brick-art, word, spinning-brick
    #[arg(long, value_parser = parse_scene_kind)]
    pub scene: Option<SceneKind>,

    /// Text for the word scene.
    #[arg(long)]
    pub text: Option<String>,

    /// Empty columns between letters of the word scene.
    #[arg(long)]
    pub spacing: Option<usize>,

    /// Layers of the stack scene.
    #[arg(long)]
    pub layers: Option<u32>,

    /// Courses of the perimeter house.
    #[arg(long)]
    pub courses: Option<u32>,

    /// Houses in the village scene.
    #[arg(long)]
    pub houses: Option<u32>,

    /// Built-in pattern for the brick art scene (seven, a, 25).
    #[arg(long)]
    pub art: Option<String>,

    /// Brick color as hex, e.g. "#d32f2f".
    #[arg(long)]
    pub color: Option<String>,

    /// Column seam in millimeters; negative values leave a gap.
    #[arg(long, allow_negative_numbers = true)]
    pub seam_mm: Option<f32>,

    #[arg(long)]
    pub no_shadows: bool,

    /// Print the layout as JSON and exit without opening a window.
    #[arg(long)]
    pub dump_layout: bool,
}

impl Cli {
    pub fn apply(&self, options: &mut SceneOptions) {
        if let Some(scene) = self.scene {
            options.scene = scene;
        }
        if let Some(text) = &self.text {
            options.text = text.clone();
        }
        if let Some(spacing) = self.spacing {
            options.spacing = spacing;
        }
        if let Some(layers) = self.layers {
            options.layers = layers;
        }
        if let Some(courses) = self.courses {
            options.courses = courses;
        }
        if let Some(houses) = self.houses {
            options.houses = houses;
        }
        if let Some(art) = &self.art {
            options.art = art.clone();
        }
        if let Some(color) = &self.color {
            options.color = Some(color.clone());
        }
        if let Some(seam) = self.seam_mm {
            options.seam_mm = Some(seam);
        }
        if self.no_shadows {
            options.shadows = false;
        }
    }
}

fn parse_scene_kind(value: &str) -> Result<SceneKind, String> {
    SceneKind::from_options_value(value).ok_or_else(|| {
        let known: Vec<&str> = SceneKind::ALL
            .iter()
            .map(|k| k.as_options_value())
            .collect();
        format!("unknown scene {value:?}, expected one of: {}", known.join(", "))
    })
}

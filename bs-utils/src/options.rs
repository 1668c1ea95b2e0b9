use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::HOUSE_MODEL_PATH;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read options file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse options")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color {0:?}, expected a hex value such as \"#d32f2f\"")]
    InvalidColor(String),
    #[error("unknown brick art {0:?}")]
    UnknownArt(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    HouseModel,
    SingleBrick,
    Stack,
    #[default]
    PerimeterHouse,
    Village,
    BrickArt,
    Word,
    SpinningBrick,
}

impl SceneKind {
    pub const ALL: [Self; 8] = [
        Self::HouseModel,
        Self::SingleBrick,
        Self::Stack,
        Self::PerimeterHouse,
        Self::Village,
        Self::BrickArt,
        Self::Word,
        Self::SpinningBrick,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::HouseModel => "House Model",
            Self::SingleBrick => "Single Brick",
            Self::Stack => "Brick Stack",
            Self::PerimeterHouse => "Perimeter House",
            Self::Village => "Brick Village",
            Self::BrickArt => "Brick Art",
            Self::Word => "Brick Word",
            Self::SpinningBrick => "Spinning Brick",
        }
    }

    pub const fn as_options_value(self) -> &'static str {
        match self {
            Self::HouseModel => "house-model",
            Self::SingleBrick => "single-brick",
            Self::Stack => "stack",
            Self::PerimeterHouse => "perimeter-house",
            Self::Village => "village",
            Self::BrickArt => "brick-art",
            Self::Word => "word",
            Self::SpinningBrick => "spinning-brick",
        }
    }

    pub fn from_options_value(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "house-model" | "house" => Some(Self::HouseModel),
            "single-brick" | "single" | "brick" => Some(Self::SingleBrick),
            "stack" => Some(Self::Stack),
            "perimeter-house" | "perimeter" => Some(Self::PerimeterHouse),
            "village" => Some(Self::Village),
            "brick-art" | "art" => Some(Self::BrickArt),
            "word" | "text" => Some(Self::Word),
            "spinning-brick" | "spin" => Some(Self::SpinningBrick),
            _ => None,
        }
    }

    pub const fn uses_bricks(self) -> bool {
        !matches!(self, Self::HouseModel)
    }
}

/// Options file contents. Every field has a default so partial files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneOptions {
    pub scene: SceneKind,
    /// Word scene text.
    pub text: String,
    /// Empty font columns between characters of the word scene.
    pub spacing: usize,
    /// Layer count of the stack scene.
    pub layers: u32,
    /// Course count of the perimeter house.
    pub courses: u32,
    /// House count of the village.
    pub houses: u32,
    /// Built-in pattern name for the brick art scene.
    pub art: String,
    /// Hex brick color; scene default when unset.
    pub color: Option<String>,
    /// Column seam in millimeters; style default when unset.
    pub seam_mm: Option<f32>,
    /// Spinning brick yaw increment per frame, in radians.
    pub spin_per_frame: f32,
    pub shadows: bool,
    /// House model path relative to the assets root.
    pub model_path: String,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            text: "LEGO".to_string(),
            spacing: 1,
            layers: 3,
            courses: 2,
            houses: 3,
            art: "seven".to_string(),
            color: None,
            seam_mm: None,
            spin_per_frame: 0.01,
            shadows: true,
            model_path: HOUSE_MODEL_PATH.to_string(),
        }
    }
}

pub fn parse_options(raw: &str) -> Result<SceneOptions, OptionsError> {
    Ok(toml::from_str(raw)?)
}

pub fn load_options(path: &Path) -> Result<SceneOptions, OptionsError> {
    let raw = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&raw)?;
    debug!(path = %path.display(), scene = options.scene.as_options_value(), "loaded options");
    Ok(options)
}

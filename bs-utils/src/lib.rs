use std::path::{Path, PathBuf};

mod options;

pub use options::{OptionsError, SceneKind, SceneOptions, load_options, parse_options};

pub const BRICKSCENE_ASSETS_ROOT_ENV: &str = "BRICKSCENE_ASSETS_ROOT";
pub const HOUSE_MODEL_PATH: &str = "models/house-4/model.gltf";

/// Assets directory: `BRICKSCENE_ASSETS_ROOT`, then `assets/` beside the
/// executable, then the repository's client assets, then `./assets`.
pub fn brickscene_assets_root() -> PathBuf {
    let explicit = std::env::var_os(BRICKSCENE_ASSETS_ROOT_ENV).map(PathBuf::from);
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")));
    let in_repo = Path::new(env!("CARGO_MANIFEST_DIR")).join("../bs-client/assets");

    first_existing([explicit, beside_exe, Some(in_repo)]).unwrap_or_else(|| PathBuf::from("assets"))
}

/// First candidate path that exists on disk.
pub fn first_existing(candidates: impl IntoIterator<Item = Option<PathBuf>>) -> Option<PathBuf> {
    candidates.into_iter().flatten().find(|path| path.exists())
}

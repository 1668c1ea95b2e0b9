use anyhow::{Context, anyhow};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bs_render::SceneRenderPlugin;
use bs_utils::{SceneOptions, brickscene_assets_root, load_options};
use clap::Parser;
use tracing::{debug, info};

mod cli;
mod dump;
mod plugins;
mod scene;
mod timing;

use cli::Cli;
use plugins::ScenePlugin;
use scene::AssembledScene;
use timing::Stopwatch;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().without_time().compact().init();

    let cli = Cli::parse();
    let mut options = match &cli.config {
        Some(path) => load_options(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => SceneOptions::default(),
    };
    cli.apply(&mut options);

    let watch = Stopwatch::start();
    let scene = scene::assemble(&options).context("assembling scene")?;
    if let Some(ms) = watch.elapsed_ms() {
        debug!(ms, "layout generated");
    }

    if cli.dump_layout {
        println!("{}", dump::layout_json(scene.kind, &scene.content.layout)?);
        return Ok(());
    }

    run(scene)
}

fn run(scene: AssembledScene) -> anyhow::Result<()> {
    let assets_root = brickscene_assets_root();
    info!(
        scene = scene.kind.label(),
        assets = %assets_root.display(),
        "starting brickscene"
    );

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: format!("brickscene - {}", scene.kind.label()),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: assets_root.to_string_lossy().into_owned(),
                    ..default()
                })
                // The fmt subscriber above is already the global one.
                .disable::<LogPlugin>(),
        )
        .add_plugins((ScenePlugin::new(scene), SceneRenderPlugin))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("brickscene exited with code {code}")),
    }
}

#[cfg(test)]
mod tests;

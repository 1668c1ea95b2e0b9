use bevy::prelude::Vec3;
use bs_layout::{BRICK_RED, MM, STUD_PITCH};
use bs_render::SceneConfig;
use bs_utils::{OptionsError, SceneKind, SceneOptions};
use clap::Parser;

use crate::cli::Cli;
use crate::dump::{LayoutDump, layout_json};
use crate::scene::{assemble, build_layout, frame_layout, layout_bounds, parse_color};

fn options(scene: SceneKind) -> SceneOptions {
    SceneOptions {
        scene,
        ..SceneOptions::default()
    }
}

#[test]
fn every_scene_assembles() {
    for kind in SceneKind::ALL {
        let scene = assemble(&options(kind)).expect("scene assembles");
        assert_eq!(scene.kind, kind);
        assert_eq!(scene.content.layout.is_empty(), !kind.uses_bricks());
        assert_eq!(scene.content.model.is_some(), !kind.uses_bricks());
        assert_eq!(scene.content.spin.is_some(), kind == SceneKind::SpinningBrick);
    }
}

#[test]
fn house_model_uses_yard_environment() {
    let scene = assemble(&options(SceneKind::HouseModel)).unwrap();
    assert_eq!(scene.config, SceneConfig::house_yard());
    assert_eq!(scene.content.model.as_deref(), Some(bs_utils::HOUSE_MODEL_PATH));
}

#[test]
fn scene_option_counts_drive_presets() {
    let mut opts = options(SceneKind::Stack);
    opts.layers = 5;
    assert_eq!(build_layout(&opts, None).unwrap().len(), 10);

    let mut opts = options(SceneKind::PerimeterHouse);
    opts.courses = 3;
    assert_eq!(build_layout(&opts, None).unwrap().len(), 36);

    let mut opts = options(SceneKind::Village);
    opts.houses = 2;
    assert_eq!(build_layout(&opts, None).unwrap().len(), 48);
}

#[test]
fn word_scene_renders_text() {
    let mut opts = options(SceneKind::Word);
    opts.text = "b".to_string();
    let layout = build_layout(&opts, Some(BRICK_RED)).unwrap();
    assert_eq!(layout.len(), 20);
    assert!(layout.iter().all(|b| b.spec().color() == BRICK_RED));
}

#[test]
fn seam_override_changes_column_step() {
    let mut opts = options(SceneKind::BrickArt);
    opts.art = "seven".to_string();
    opts.seam_mm = Some(0.0);
    let layout = build_layout(&opts, None).unwrap();

    // Top row of the seven is five bricks wide.
    let top: Vec<f32> = layout.iter().take(5).map(|b| b.position().x).collect();
    let step = top[1] - top[0];
    assert!((step - 2.0 * STUD_PITCH).abs() < 1e-6);

    opts.seam_mm = Some(1.0);
    let layout = build_layout(&opts, None).unwrap();
    let step = layout.bricks()[1].position().x - layout.bricks()[0].position().x;
    assert!((step - (2.0 * STUD_PITCH - MM)).abs() < 1e-6);
}

#[test]
fn unknown_art_is_an_error() {
    let mut opts = options(SceneKind::BrickArt);
    opts.art = "castle".to_string();
    assert!(matches!(assemble(&opts), Err(OptionsError::UnknownArt(name)) if name == "castle"));
}

#[test]
fn colors_parse_from_hex() {
    let red = parse_color("#D32F2F").unwrap().to_srgba();
    assert!((red.red - 0xD3 as f32 / 255.0).abs() < 1e-3);
    assert!(parse_color(" 1976d2 ").is_ok());
    assert!(matches!(parse_color("crimson"), Err(OptionsError::InvalidColor(_))));

    let mut opts = options(SceneKind::SingleBrick);
    opts.color = Some("not a color".to_string());
    assert!(assemble(&opts).is_err());
}

#[test]
fn cli_flags_override_options() {
    let cli = Cli::try_parse_from([
        "brickscene",
        "--scene",
        "Word",
        "--text",
        "hi",
        "--spacing",
        "2",
        "--seam-mm",
        "-0.5",
        "--no-shadows",
    ])
    .unwrap();
    let mut opts = SceneOptions::default();
    cli.apply(&mut opts);

    assert_eq!(opts.scene, SceneKind::Word);
    assert_eq!(opts.text, "hi");
    assert_eq!(opts.spacing, 2);
    assert_eq!(opts.seam_mm, Some(-0.5));
    assert!(!opts.shadows);
    assert_eq!(opts.layers, SceneOptions::default().layers);
}

#[test]
fn cli_rejects_unknown_scene() {
    assert!(Cli::try_parse_from(["brickscene", "--scene", "castle"]).is_err());
}

#[test]
fn framing_keeps_preset_view_when_layout_fits() {
    for kind in [SceneKind::SingleBrick, SceneKind::Stack, SceneKind::PerimeterHouse] {
        let layout = build_layout(&options(kind), None).unwrap();
        let mut config = SceneConfig::brick_studio();
        frame_layout(&mut config, &layout);
        assert_eq!(config, SceneConfig::brick_studio(), "{kind:?}");
    }

    let scene = assemble(&options(SceneKind::PerimeterHouse)).unwrap();
    assert_eq!(scene.config.orbit.target, Vec3::ZERO);
    assert_eq!(scene.config.camera.position, Vec3::new(0.25, 0.18, 0.35));
}

#[test]
fn framing_backs_off_for_wide_layouts() {
    let mut opts = options(SceneKind::Village);
    opts.houses = 5;
    let layout = build_layout(&opts, None).unwrap();
    let (min, max) = layout_bounds(&layout).unwrap();

    let mut config = SceneConfig::brick_studio();
    let before = config.camera.position.length();
    frame_layout(&mut config, &layout);
    let distance = (config.camera.position - config.orbit.target).length();

    assert!(distance > before);
    assert!(distance > (max - min).length() / 2.0);
    assert!(distance <= config.orbit.max_radius);
    assert!((config.orbit.target - (min + max) / 2.0).length() < 1e-5);
}

#[test]
fn dump_lists_every_brick() {
    let layout = build_layout(&options(SceneKind::PerimeterHouse), None).unwrap();
    let json = layout_json(SceneKind::PerimeterHouse, &layout).unwrap();
    let dump: LayoutDump = serde_json::from_str(&json).unwrap();

    assert_eq!(dump.scene, "perimeter-house");
    assert_eq!(dump.bricks, 24);
    assert_eq!(dump.studs, 24 * 8);
    assert_eq!(dump.placements.len(), 24);
    assert_eq!(dump.placements[0].studs, [2, 4]);
    assert_eq!(dump.placements[0].color, "#d32f2f");
    assert_eq!(dump.placements[0].position, layout.bricks()[0].position().to_array());
}

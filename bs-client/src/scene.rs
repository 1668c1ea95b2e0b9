use bevy::color::Srgba;
use bevy::prelude::*;
use bs_layout::{
    GridStyle, Layout, MM, Preset, STUD_HEIGHT, TextStyle, art, layout_grid, layout_text,
};
use bs_render::{SceneConfig, SceneContent, Spin};
use bs_utils::{OptionsError, SceneKind, SceneOptions};
use tracing::{debug, info};

/// Extra room around the layout when pulling the camera back.
const FRAMING_MARGIN: f32 = 1.25;

#[derive(Debug, Clone)]
pub struct AssembledScene {
    pub kind: SceneKind,
    pub config: SceneConfig,
    pub content: SceneContent,
    pub shadows: bool,
}

pub fn parse_color(value: &str) -> Result<Color, OptionsError> {
    Srgba::hex(value.trim())
        .map(Color::Srgba)
        .map_err(|_| OptionsError::InvalidColor(value.to_string()))
}

pub fn assemble(options: &SceneOptions) -> Result<AssembledScene, OptionsError> {
    let color = options.color.as_deref().map(parse_color).transpose()?;
    let layout = build_layout(options, color)?;

    let mut config = if options.scene.uses_bricks() {
        SceneConfig::brick_studio()
    } else {
        SceneConfig::house_yard()
    };
    frame_layout(&mut config, &layout);

    let content = SceneContent {
        layout,
        spin: matches!(options.scene, SceneKind::SpinningBrick)
            .then(|| Spin::new(options.spin_per_frame)),
        model: (!options.scene.uses_bricks()).then(|| options.model_path.clone()),
    };
    info!(
        scene = options.scene.label(),
        bricks = content.layout.len(),
        "assembled scene"
    );

    Ok(AssembledScene {
        kind: options.scene,
        config,
        content,
        shadows: options.shadows,
    })
}

pub fn build_layout(options: &SceneOptions, color: Option<Color>) -> Result<Layout, OptionsError> {
    let layout = match options.scene {
        SceneKind::HouseModel => Layout::new(),
        SceneKind::SingleBrick | SceneKind::SpinningBrick => Preset::SingleBrick.layout(color),
        SceneKind::Stack => Preset::Stack {
            layers: options.layers,
        }
        .layout(color),
        SceneKind::PerimeterHouse => Preset::PerimeterHouse {
            courses: options.courses,
        }
        .layout(color),
        SceneKind::Village => Preset::Village {
            houses: options.houses,
        }
        .layout(color),
        SceneKind::BrickArt => {
            let rows = art::by_name(&options.art)
                .ok_or_else(|| OptionsError::UnknownArt(options.art.clone()))?;
            layout_grid(rows, &grid_style(GridStyle::brick_art(), options, color))
        }
        SceneKind::Word => {
            let style = TextStyle {
                grid: grid_style(GridStyle::pixel_word(), options, color),
                spacing: options.spacing,
            };
            layout_text(&options.text, &style)
        }
    };
    Ok(layout)
}

fn grid_style(base: GridStyle, options: &SceneOptions, color: Option<Color>) -> GridStyle {
    let cell = match color {
        Some(color) => base.cell.with_color(color),
        None => base.cell,
    };
    let seam = options.seam_mm.map_or(base.seam, |mm| mm * MM);
    GridStyle { cell, seam, ..base }
}

/// Leaves the preset view alone when the layout already fits it. Otherwise
/// aims the orbit at the layout's center and backs the camera off along the
/// preset direction until the whole layout fits the field of view.
pub fn frame_layout(config: &mut SceneConfig, layout: &Layout) {
    let Some((min, max)) = layout_bounds(layout) else {
        return;
    };
    let offset = config.camera.position - config.orbit.target;
    let half_fov_sin = (config.camera.fov_degrees.to_radians() / 2.0).sin();
    let fit_distance = |radius: f32| radius * FRAMING_MARGIN / half_fov_sin;

    let reach = corners(min, max)
        .map(|corner| corner.distance(config.orbit.target))
        .fold(0.0, f32::max);
    if fit_distance(reach) <= offset.length() {
        return;
    }

    let center = (min + max) / 2.0;
    let radius = (max - min).length() / 2.0;
    let distance = offset.length().max(fit_distance(radius));

    config.orbit.target = center;
    config.camera.position = center + offset.normalize_or_zero() * distance;
    config.orbit.max_radius = config.orbit.max_radius.max(distance * 4.0);
    debug!(?center, radius, distance, "framed layout");
}

fn corners(min: Vec3, max: Vec3) -> impl Iterator<Item = Vec3> {
    (0..8).map(move |i| {
        Vec3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        )
    })
}

/// Axis-aligned bounds of every brick, studs included.
pub fn layout_bounds(layout: &Layout) -> Option<(Vec3, Vec3)> {
    layout.iter().fold(None, |acc, brick| {
        let spec = brick.spec();
        let half = spec.body_width().max(spec.body_length()) / 2.0;
        let top = spec.body_size().y + STUD_HEIGHT;
        let lo = brick.position() - Vec3::new(half, 0.0, half);
        let hi = brick.position() + Vec3::new(half, top, half);
        Some(match acc {
            Some((min, max)) => (lo.min(min), hi.max(max)),
            None => (lo, hi),
        })
    })
}

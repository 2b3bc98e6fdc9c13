// Marquee selection node - root entity data, edge strips, spawn and teardown
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::animation::{tile_window, TileOffsets};
use crate::error::MarqueeError;
use crate::layout::{edge_layout, edge_rect, outer_bounds, EdgeRect, EdgeSide};
use crate::options::MarqueeOptions;
use crate::texture::create_dash_image;

/// Animated dashed border around a `width × height` rectangle.
///
/// Lives on the root entity; the four strips are its children. Stroke, dash
/// pattern, speed and color are fixed at spawn. Only the size (via
/// [`resize`](Self::resize)) and the animation clock (via
/// [`update`](Self::update)) change afterwards.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct MarqueeSelection {
    thickness: f32,
    dash: f32,
    dash_space: f32,
    speed: f32,
    color: Color,
    period: f32,
    width: f32,
    height: f32,
    current_time: f32,
    offsets: TileOffsets,
    texture: Handle<Image>,
}

/// One of the four tiling strips under a marquee root
#[derive(Component, Debug, Clone, Copy)]
pub struct MarqueeEdge {
    pub side: EdgeSide,
}

/// Registers a marquee with the frame clock. While present, the marquee is
/// advanced once per run of the clock schedule.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MarqueeAutoUpdate;

impl MarqueeSelection {
    /// `period` is the side of the dash tile in texels, so the offsets wrap
    /// exactly where the texture repeats.
    pub(crate) fn new(options: &MarqueeOptions, texture: Handle<Image>, period: f32) -> Self {
        Self {
            thickness: options.thickness,
            dash: options.dash,
            dash_space: options.dash_space,
            speed: options.speed,
            color: options.color,
            period,
            width: options.width,
            height: options.height,
            current_time: 0.0,
            offsets: TileOffsets::default(),
            texture,
        }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn dash(&self) -> f32 {
        self.dash
    }

    pub fn dash_space(&self) -> f32 {
        self.dash_space
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Accumulated animation clock. Never wrapped; only the offsets are.
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn offsets(&self) -> TileOffsets {
        self.offsets
    }

    pub fn texture(&self) -> &Handle<Image> {
        &self.texture
    }

    /// Length of one dash plus one gap, as rasterized into the dash tile
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Set the inner rectangle size. Strips pick up the new layout in the
    /// sync pass; the texture and the animation clock are untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance the clock by `speed` and recompute the tile offsets.
    ///
    /// Does nothing for a hidden marquee. Returns whether anything changed.
    pub fn update(&mut self, visibility: Visibility) -> bool {
        if visibility == Visibility::Hidden {
            return false;
        }

        self.current_time += self.speed;
        self.offsets = TileOffsets::at(self.current_time, self.period());
        true
    }

    pub fn edge_rect(&self, side: EdgeSide) -> EdgeRect {
        edge_rect(side, self.width, self.height, self.thickness)
    }

    pub fn edge_layout(&self) -> [EdgeRect; 4] {
        edge_layout(self.width, self.height, self.thickness)
    }

    /// Outer silhouette in layout space (y-down, origin at the inner top-left)
    pub fn outer_bounds(&self) -> Rect {
        outer_bounds(self.width, self.height, self.thickness)
    }

    /// Sprite source rect for `side` at the current offsets
    pub fn tile_window(&self, side: EdgeSide) -> Rect {
        tile_window(&self.edge_rect(side), side.tiling_axis(), self.offsets.get(side))
    }
}

fn edge_bundle(side: EdgeSide, marquee: &MarqueeSelection) -> impl Bundle {
    let edge = marquee.edge_rect(side);
    (
        Name::new(format!("Marquee {} Edge", side.name())),
        MarqueeEdge { side },
        Sprite {
            image: marquee.texture.clone(),
            custom_size: Some(edge.size),
            rect: Some(marquee.tile_window(side)),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_translation(edge.translation()),
    )
}

/// Spawn a marquee root with its four edge strips.
///
/// The dash texture is built once here and shared by every strip. Nothing is
/// spawned or allocated if the texture cannot be built.
pub fn spawn_marquee(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    options: MarqueeOptions,
) -> Result<Entity, MarqueeError> {
    let image = create_dash_image(options.dash, options.dash_space, options.color)?;
    let period = image.width() as f32;
    let texture = images.add(image);
    let marquee = MarqueeSelection::new(&options, texture, period);
    let edges = EdgeSide::ALL.map(|side| edge_bundle(side, &marquee));

    let mut root = commands.spawn((
        Name::new("Marquee Selection"),
        marquee,
        options.transform,
        options.visibility,
    ));
    root.with_children(|parent| {
        for edge in edges {
            parent.spawn(edge);
        }
    });
    root.set_marquee_auto_update(options.auto_update);

    let entity = root.id();
    debug!(
        "Spawned marquee {:?} ({}x{}, thickness {}, dash {}/{})",
        entity, options.width, options.height, options.thickness, options.dash, options.dash_space
    );
    Ok(entity)
}

/// Tear down a marquee: the strips go with the root, the clock registration
/// goes with the root's components, and the texture is released by
/// [`release_marquee_texture`](crate::systems::release_marquee_texture).
pub fn despawn_marquee(commands: &mut Commands, entity: Entity) {
    debug!("Despawning marquee {:?}", entity);
    commands.entity(entity).despawn();
}

/// Clock registration for marquee roots.
///
/// Always deregisters first, so enabling twice never registers twice and
/// disabling an unregistered marquee is a no-op.
pub trait MarqueeCommandsExt {
    fn set_marquee_auto_update(&mut self, enabled: bool) -> &mut Self;
}

impl MarqueeCommandsExt for EntityCommands<'_> {
    fn set_marquee_auto_update(&mut self, enabled: bool) -> &mut Self {
        self.remove::<MarqueeAutoUpdate>();
        if enabled {
            self.insert(MarqueeAutoUpdate);
        }
        self
    }
}

impl MarqueeCommandsExt for EntityWorldMut<'_> {
    fn set_marquee_auto_update(&mut self, enabled: bool) -> &mut Self {
        self.remove::<MarqueeAutoUpdate>();
        if enabled {
            self.insert(MarqueeAutoUpdate);
        }
        self
    }
}

/// Whether the marquee on `entity` is registered with the frame clock
pub fn is_marquee_auto_updating(entity: EntityRef<'_>) -> bool {
    entity.contains::<MarqueeAutoUpdate>()
}

// Marquee construction options
use bevy::prelude::*;

use crate::constants::*;

/// Everything needed to spawn a marquee.
///
/// `transform` and `visibility` are applied to the root entity unchanged;
/// further root components can be inserted on the entity returned by
/// [`spawn_marquee`](crate::spawn_marquee).
#[derive(Clone, Debug)]
pub struct MarqueeOptions {
    pub thickness: f32,
    pub color: Color,
    pub dash: f32,
    pub dash_space: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub auto_update: bool,
    pub transform: Transform,
    pub visibility: Visibility,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            color: DEFAULT_COLOR,
            dash: DEFAULT_DASH,
            dash_space: DEFAULT_DASH_SPACE,
            speed: DEFAULT_SPEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            auto_update: DEFAULT_AUTO_UPDATE,
            transform: Transform::IDENTITY,
            visibility: Visibility::Inherited,
        }
    }
}

impl MarqueeOptions {
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_dash(mut self, dash: f32, dash_space: f32) -> Self {
        self.dash = dash;
        self.dash_space = dash_space;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_auto_update(mut self, auto_update: bool) -> Self {
        self.auto_update = auto_update;
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

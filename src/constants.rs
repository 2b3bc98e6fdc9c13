// Default marquee settings
use bevy::prelude::*;

// Border stroke
pub const DEFAULT_THICKNESS: f32 = 2.0;
pub const DEFAULT_COLOR: Color = Color::WHITE;

// Dash pattern (pixels)
pub const DEFAULT_DASH: f32 = 2.0;
pub const DEFAULT_DASH_SPACE: f32 = 2.0;
pub const MAX_DASH_TEXTURE_SIDE: u32 = 8192; // wgpu's default max_texture_dimension_2d

// Animation accumulator increment per frame (not per second)
pub const DEFAULT_SPEED: f32 = 0.2;

// Inner rectangle
pub const DEFAULT_WIDTH: f32 = 100.0;
pub const DEFAULT_HEIGHT: f32 = 100.0;

pub const DEFAULT_AUTO_UPDATE: bool = true;

// Demo settings
pub const DEMO_WINDOW_WIDTH: f32 = 960.0;
pub const DEMO_WINDOW_HEIGHT: f32 = 640.0;
pub const DEMO_CLEAR_COLOR: Color = Color::srgb(0.12, 0.13, 0.16);
pub const DEMO_DRAG_THRESHOLD: f32 = 4.0; // Pixels before a press counts as a drag

// Edge strip layout - four strips framing a width × height opening
//
// Layout space is y-down with the origin at the top-left of the inner
// rectangle. Top and bottom strips run `thickness` past each side so the
// corners render as square joins.
use bevy::prelude::*;

/// One side of the marquee border
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis along which a strip repeats its dash tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TilingAxis {
    X,
    Y,
}

impl EdgeSide {
    pub const ALL: [EdgeSide; 4] = [EdgeSide::Top, EdgeSide::Bottom, EdgeSide::Left, EdgeSide::Right];

    pub fn tiling_axis(self) -> TilingAxis {
        match self {
            EdgeSide::Top | EdgeSide::Bottom => TilingAxis::X,
            EdgeSide::Left | EdgeSide::Right => TilingAxis::Y,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EdgeSide::Top => "Top",
            EdgeSide::Bottom => "Bottom",
            EdgeSide::Left => "Left",
            EdgeSide::Right => "Right",
        }
    }
}

/// Strip placement in layout space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl EdgeRect {
    /// Local translation under the marquee root (world y points up)
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.origin.x, -self.origin.y, 0.0)
    }
}

/// Placement of a single strip. Inputs are not validated; negative sizes
/// produce an inverted layout rather than an error.
pub fn edge_rect(side: EdgeSide, width: f32, height: f32, thickness: f32) -> EdgeRect {
    let t = thickness;
    match side {
        EdgeSide::Top => EdgeRect {
            origin: Vec2::new(-t, -t),
            size: Vec2::new(width + 2.0 * t, t),
        },
        EdgeSide::Bottom => EdgeRect {
            origin: Vec2::new(-t, height),
            size: Vec2::new(width + 2.0 * t, t),
        },
        EdgeSide::Left => EdgeRect {
            origin: Vec2::new(-t, 0.0),
            size: Vec2::new(t, height),
        },
        EdgeSide::Right => EdgeRect {
            origin: Vec2::new(width, 0.0),
            size: Vec2::new(t, height),
        },
    }
}

/// All four strips, in `EdgeSide::ALL` order
pub fn edge_layout(width: f32, height: f32, thickness: f32) -> [EdgeRect; 4] {
    EdgeSide::ALL.map(|side| edge_rect(side, width, height, thickness))
}

/// Outer silhouette of the border in layout space
pub fn outer_bounds(width: f32, height: f32, thickness: f32) -> Rect {
    Rect::from_corners(
        Vec2::new(-thickness, -thickness),
        Vec2::new(width + thickness, height + thickness),
    )
}

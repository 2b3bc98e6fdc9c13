// Marching ants animation - maps the accumulated clock to per-edge tile offsets
use bevy::prelude::*;

use crate::layout::{EdgeRect, EdgeSide, TilingAxis};

/// Tile offset of each strip along its tiling axis, always in `[0, period)`.
///
/// Top and right run with the clock, bottom and left against it, so the dashes
/// travel clockwise: right along the top, down the right, left along the
/// bottom, up the left. Flipping any one sign breaks the loop at a corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileOffsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl TileOffsets {
    pub fn at(time: f32, period: f32) -> Self {
        let forward = time.rem_euclid(period);
        let backward = (-time).rem_euclid(period);
        Self {
            top: forward,
            bottom: backward,
            left: backward,
            right: forward,
        }
    }

    pub fn get(&self, side: EdgeSide) -> f32 {
        match side {
            EdgeSide::Top => self.top,
            EdgeSide::Bottom => self.bottom,
            EdgeSide::Left => self.left,
            EdgeSide::Right => self.right,
        }
    }
}

/// Sprite source rect for a strip: a window the size of the strip, shifted
/// back by `offset` along the tiling axis. The repeat sampler wraps it.
pub fn tile_window(edge: &EdgeRect, axis: TilingAxis, offset: f32) -> Rect {
    let shift = match axis {
        TilingAxis::X => Vec2::new(-offset, 0.0),
        TilingAxis::Y => Vec2::new(0.0, -offset),
    };
    Rect::from_corners(shift, shift + edge.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < EPSILON, "expected {expected}, got {actual}");
    }

    #[test]
    fn offsets_after_one_tick() {
        let offsets = TileOffsets::at(0.2, 8.0);
        assert_close(offsets.top, 0.2);
        assert_close(offsets.bottom, 7.8);
        assert_close(offsets.left, 7.8);
        assert_close(offsets.right, 0.2);
    }

    #[test]
    fn offsets_wrap_at_period() {
        let offsets = TileOffsets::at(9.5, 4.0);
        assert_close(offsets.top, 1.5);
        assert_close(offsets.bottom, 2.5);
        assert_close(offsets.get(EdgeSide::Left), 2.5);
        assert_close(offsets.get(EdgeSide::Right), 1.5);
    }

    #[test]
    fn negative_time_runs_backwards() {
        let offsets = TileOffsets::at(-1.0, 4.0);
        assert_close(offsets.top, 3.0);
        assert_close(offsets.bottom, 1.0);
    }

    #[test]
    fn offsets_stay_in_range() {
        for step in 0..200 {
            let time = step as f32 * 0.37 - 20.0;
            let offsets = TileOffsets::at(time, 6.0);
            for side in EdgeSide::ALL {
                let value = offsets.get(side);
                assert!((0.0..6.0).contains(&value), "{side:?} offset {value} out of range at {time}");
            }
        }
    }

    #[test]
    fn horizontal_window_shifts_along_x() {
        let edge = EdgeRect { origin: Vec2::new(-2.0, -2.0), size: Vec2::new(104.0, 2.0) };
        let window = tile_window(&edge, TilingAxis::X, 0.5);
        assert_eq!(window.min, Vec2::new(-0.5, 0.0));
        assert_eq!(window.max, Vec2::new(103.5, 2.0));
    }

    #[test]
    fn vertical_window_shifts_along_y() {
        let edge = EdgeRect { origin: Vec2::new(100.0, 0.0), size: Vec2::new(2.0, 50.0) };
        let window = tile_window(&edge, TilingAxis::Y, 3.0);
        assert_eq!(window.min, Vec2::new(0.0, -3.0));
        assert_eq!(window.max, Vec2::new(2.0, 47.0));
    }
}

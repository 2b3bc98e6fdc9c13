// Dash texture generation - one opaque dash and one transparent gap per tile
use bevy::prelude::*;
use bevy::color::ColorToPacked;
use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::constants::MAX_DASH_TEXTURE_SIDE;
use crate::error::MarqueeError;

const BYTES_PER_TEXEL: usize = 4;
const TRANSPARENT: [u8; BYTES_PER_TEXEL] = [0, 0, 0, 0];

/// Raw RGBA8 texels of a square dash tile
#[derive(Debug, Clone, PartialEq)]
pub struct DashTexels {
    pub side: u32,
    pub data: Vec<u8>,
}

impl DashTexels {
    /// RGBA bytes of the texel at (x, y), or None when out of range
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; BYTES_PER_TEXEL]> {
        if x >= self.side || y >= self.side {
            return None;
        }
        let index = (y as usize * self.side as usize + x as usize) * BYTES_PER_TEXEL;
        let bytes = self.data.get(index..index + BYTES_PER_TEXEL)?;
        bytes.try_into().ok()
    }
}

fn finite_length(name: &'static str, value: f32) -> Result<f32, MarqueeError> {
    if !value.is_finite() {
        return Err(MarqueeError::NonFiniteLength { name, value });
    }
    Ok(value)
}

/// Side of the square dash tile in texels: `dash + dash_space`, rounded once
/// so the tile repeats at the same period the offsets wrap at.
pub fn dash_tile_side(dash: f32, dash_space: f32) -> Result<u32, MarqueeError> {
    let period = finite_length("dash", dash)? + finite_length("dash_space", dash_space)?;
    let side = period.round().max(0.0);
    if side == 0.0 {
        return Err(MarqueeError::EmptyDashTexture { dash, dash_space });
    }
    // Compared as f32 so oversized lengths never reach the integer cast
    if side > MAX_DASH_TEXTURE_SIDE as f32 {
        return Err(MarqueeError::DashTextureTooLarge { side, max: MAX_DASH_TEXTURE_SIDE });
    }
    Ok(side as u32)
}

/// Rasterize a `(dash + dash_space)` square tile.
///
/// The top-left `dash × dash` block is filled with `color`, everything else is
/// transparent. Either length may be zero, but not both.
pub fn dash_texels(dash: f32, dash_space: f32, color: Color) -> Result<DashTexels, MarqueeError> {
    let side = dash_tile_side(dash, dash_space)?;
    let dash_px = (dash.round().max(0.0) as u32).min(side);

    let byte_len = (side as usize)
        .checked_mul(side as usize)
        .and_then(|texels| texels.checked_mul(BYTES_PER_TEXEL))
        .ok_or(MarqueeError::DashTextureTooLarge { side: side as f32, max: MAX_DASH_TEXTURE_SIDE })?;

    let fill = color.to_srgba().to_u8_array();
    let mut data = Vec::with_capacity(byte_len);
    for y in 0..side {
        for x in 0..side {
            if x < dash_px && y < dash_px {
                data.extend_from_slice(&fill);
            } else {
                data.extend_from_slice(&TRANSPARENT);
            }
        }
    }

    Ok(DashTexels { side, data })
}

/// Sampler for the dash tile: crisp edges at any scale, wraps on both axes so
/// sprite rects outside the tile repeat it.
pub fn dash_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        mag_filter: ImageFilterMode::Nearest,
        min_filter: ImageFilterMode::Nearest,
        mipmap_filter: ImageFilterMode::Nearest,
        ..default()
    })
}

/// Build the dash tile as a GPU-ready image
pub fn create_dash_image(dash: f32, dash_space: f32, color: Color) -> Result<Image, MarqueeError> {
    let texels = dash_texels(dash, dash_space, color)?;

    let mut image = Image::new(
        Extent3d {
            width: texels.side,
            height: texels.side,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        texels.data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = dash_sampler();

    Ok(image)
}

// Marquee error types
use thiserror::Error;

/// Failures that can occur while building a marquee.
///
/// Geometry is never validated, so negative sizes are not an error. Only
/// inputs that make the dash texture impossible to allocate are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarqueeError {
    /// The dash period rounds to zero texels, so no image can back the strips.
    #[error("dash texture would be empty (dash = {dash}, dash_space = {dash_space})")]
    EmptyDashTexture { dash: f32, dash_space: f32 },

    /// The dash tile is larger than a texture the device can hold.
    #[error("dash texture side {side} exceeds the {max} texel limit")]
    DashTextureTooLarge { side: f32, max: u32 },

    /// A length used to size the dash texture is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteLength { name: &'static str, value: f32 },
}

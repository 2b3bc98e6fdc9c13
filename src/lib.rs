// Marching ants selection outline for Bevy 2D scenes
//
// Modules:
// - texture: dash tile generation (one dash + one gap, nearest/repeat sampled)
// - layout: placement of the four edge strips around the inner rectangle
// - animation: per-edge tile offsets from the accumulated clock
// - marquee: root component, spawn/despawn, clock registration
// - systems: frame advance, strip sync, texture release
// - options / constants / error: configuration and failures

pub mod animation;
pub mod constants;
pub mod error;
pub mod layout;
pub mod marquee;
pub mod options;
pub mod systems;
pub mod texture;

use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;
use bevy::transform::TransformSystem;

pub use animation::TileOffsets;
pub use error::MarqueeError;
pub use layout::{EdgeRect, EdgeSide, TilingAxis};
pub use marquee::{
    despawn_marquee, is_marquee_auto_updating, spawn_marquee, MarqueeAutoUpdate, MarqueeCommandsExt,
    MarqueeEdge, MarqueeSelection,
};
pub use options::MarqueeOptions;

use systems::{advance_marquee_system, release_marquee_texture, sync_marquee_edges_system};

/// Ordering hooks for code that drives marquees manually
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarqueeSystems {
    /// Runs in the clock schedule; advances auto-updating marquees
    Advance,
    /// Runs in `PostUpdate`; writes strip geometry and tile offsets
    Sync,
}

/// Animates and maintains marquee selections.
///
/// `clock` is the schedule that acts as the frame clock: every run of it
/// advances each marquee carrying [`MarqueeAutoUpdate`] by one step.
pub struct MarqueePlugin {
    pub clock: InternedScheduleLabel,
}

impl Default for MarqueePlugin {
    fn default() -> Self {
        Self { clock: Update.intern() }
    }
}

impl MarqueePlugin {
    pub fn with_clock(clock: impl ScheduleLabel) -> Self {
        Self { clock: clock.intern() }
    }
}

impl Plugin for MarqueePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(self.clock, advance_marquee_system.in_set(MarqueeSystems::Advance))
            .add_systems(
                PostUpdate,
                sync_marquee_edges_system
                    .in_set(MarqueeSystems::Sync)
                    .before(TransformSystem::TransformPropagate),
            )
            .add_observer(release_marquee_texture);
    }
}

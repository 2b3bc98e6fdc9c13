// Marquee systems - per-frame advance, strip sync, texture release
use bevy::prelude::*;

use crate::marquee::{MarqueeAutoUpdate, MarqueeEdge, MarqueeSelection};

/// System: Advance every registered marquee by one frame
pub fn advance_marquee_system(
    mut marquees: Query<(&mut MarqueeSelection, &Visibility), With<MarqueeAutoUpdate>>,
) {
    for (mut marquee, visibility) in marquees.iter_mut() {
        // Hidden marquees must not show up as changed
        if marquee.bypass_change_detection().update(*visibility) {
            marquee.set_changed();
        }
    }
}

/// System: Push layout and tile offsets of changed marquees onto their strips
pub fn sync_marquee_edges_system(
    marquees: Query<Ref<MarqueeSelection>>,
    mut edges: Query<(&MarqueeEdge, &ChildOf, &mut Sprite, &mut Transform)>,
) {
    for (edge, child_of, mut sprite, mut transform) in edges.iter_mut() {
        let Ok(marquee) = marquees.get(child_of.parent()) else { continue };
        if !marquee.is_changed() {
            continue;
        }

        let rect = marquee.edge_rect(edge.side);
        let translation = rect.translation();
        if transform.translation != translation {
            transform.translation = translation;
        }
        sprite.custom_size = Some(rect.size);
        sprite.rect = Some(marquee.tile_window(edge.side));
    }
}

/// Observer: Release the dash texture when a marquee root goes away
pub fn release_marquee_texture(
    trigger: Trigger<OnRemove, MarqueeSelection>,
    marquees: Query<&MarqueeSelection>,
    mut images: ResMut<Assets<Image>>,
) {
    let Ok(marquee) = marquees.get(trigger.target()) else { return };

    if images.remove(marquee.texture()).is_some() {
        debug!("Released dash texture of marquee {:?}", trigger.target());
    }
}

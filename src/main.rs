// Marquee demo - drag with the left mouse button to reshape a marching ants selection
//
// Controls:
// - Left drag: reshape the marquee over the dragged box
// - Space: toggle auto update
// - H: toggle visibility
// - N: advance one frame manually
// - Delete: despawn the marquee, R: respawn it
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use marquee_selection::constants::*;
use marquee_selection::{
    despawn_marquee, spawn_marquee, MarqueeAutoUpdate, MarqueeCommandsExt, MarqueeOptions, MarqueePlugin,
    MarqueeSelection, MarqueeSystems,
};

/// Left-drag state in world space
#[derive(Resource, Default)]
struct DragState {
    start_world: Option<Vec2>,
    is_dragging: bool,
}

/// The marquee the demo is driving, if one is alive
#[derive(Resource, Default)]
struct DemoMarquee(Option<Entity>);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Marquee Selection".into(),
                resolution: (DEMO_WINDOW_WIDTH, DEMO_WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(MarqueePlugin::default())
        .insert_resource(ClearColor(DEMO_CLEAR_COLOR))
        .init_resource::<DragState>()
        .init_resource::<DemoMarquee>()
        .add_systems(Startup, setup_demo)
        .add_systems(
            Update,
            (drag_input_system, demo_keyboard_system).before(MarqueeSystems::Advance),
        )
        .run();
}

fn demo_options() -> MarqueeOptions {
    // Centre the default rectangle on the origin; the root sits at its top-left corner
    MarqueeOptions::default()
        .with_dash(6.0, 4.0)
        .with_speed(0.5)
        .with_transform(Transform::from_xyz(-DEFAULT_WIDTH / 2.0, DEFAULT_HEIGHT / 2.0, 0.0))
}

fn spawn_demo_marquee(commands: &mut Commands, images: &mut Assets<Image>, demo: &mut DemoMarquee) {
    match spawn_marquee(commands, images, demo_options()) {
        Ok(entity) => {
            info!("🐜 Spawned marquee {:?}", entity);
            demo.0 = Some(entity);
        }
        Err(err) => warn!("Could not spawn marquee: {}", err),
    }
}

fn setup_demo(mut commands: Commands, mut images: ResMut<Assets<Image>>, mut demo: ResMut<DemoMarquee>) {
    commands.spawn(Camera2d);
    spawn_demo_marquee(&mut commands, &mut images, &mut demo);
}

/// System: Reshape the marquee over the box dragged with the left mouse button
fn drag_input_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    demo: Res<DemoMarquee>,
    mut drag: ResMut<DragState>,
    mut marquees: Query<(&mut MarqueeSelection, &mut Transform)>,
) {
    let Ok(window) = window_query.single() else { return };
    let Ok((camera, camera_transform)) = camera_query.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else { return };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else { return };

    if mouse_button.just_pressed(MouseButton::Left) {
        drag.start_world = Some(world_pos);
    }

    if mouse_button.just_released(MouseButton::Left) {
        drag.start_world = None;
        drag.is_dragging = false;
        return;
    }

    let Some(start) = drag.start_world else { return };
    if !mouse_button.pressed(MouseButton::Left) {
        return;
    }

    if !drag.is_dragging && start.distance(world_pos) >= DEMO_DRAG_THRESHOLD {
        drag.is_dragging = true;
    }
    if !drag.is_dragging {
        return;
    }

    let Some(entity) = demo.0 else { return };
    let Ok((mut marquee, mut transform)) = marquees.get_mut(entity) else { return };

    // Calculate box corners (world space, y up)
    let min = start.min(world_pos);
    let max = start.max(world_pos);

    transform.translation.x = min.x;
    transform.translation.y = max.y;
    marquee.resize(max.x - min.x, max.y - min.y);
}

/// System: Keyboard controls for the marquee lifecycle
fn demo_keyboard_system(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut images: ResMut<Assets<Image>>,
    mut demo: ResMut<DemoMarquee>,
    mut marquees: Query<(&mut MarqueeSelection, &mut Visibility, Has<MarqueeAutoUpdate>)>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) && demo.0.is_none() {
        spawn_demo_marquee(&mut commands, &mut images, &mut demo);
        return;
    }

    let Some(entity) = demo.0 else { return };
    let Ok((mut marquee, mut visibility, auto_update)) = marquees.get_mut(entity) else { return };

    if keyboard.just_pressed(KeyCode::Space) {
        commands.entity(entity).set_marquee_auto_update(!auto_update);
        info!("Auto update {}", if auto_update { "off" } else { "on" });
    }

    if keyboard.just_pressed(KeyCode::KeyH) {
        *visibility = match *visibility {
            Visibility::Hidden => Visibility::Inherited,
            _ => Visibility::Hidden,
        };
        info!("Visibility: {:?}", *visibility);
    }

    if keyboard.just_pressed(KeyCode::KeyN) && marquee.update(*visibility) {
        info!("Stepped marquee to t = {:.2}", marquee.current_time());
    }

    if keyboard.just_pressed(KeyCode::Delete) {
        despawn_marquee(&mut commands, entity);
        demo.0 = None;
        info!("Marquee despawned (R to respawn)");
    }
}

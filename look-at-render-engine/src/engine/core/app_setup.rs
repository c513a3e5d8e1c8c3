use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_web_asset::WebAssetPlugin;

// Crate engine modules
use crate::engine::camera::orbit_camera::{camera_controller, spawn_orbit_camera};
use crate::engine::core::window_config::create_window_config;
use crate::engine::follower::FollowerPlugin;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::target_marker::{spawn_target_marker, update_target_marker};
use crate::engine::target::TargetState;
// Crate tools modules
use crate::tools::look_control::LookControlPlugin;
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    // Remote http(s) asset sources must exist before the asset plugin builds.
    app.add_plugins(WebAssetPlugin::default())
        .add_plugins(create_default_plugins())
        .insert_resource(ClearColor(Color::srgb(0.2, 0.2, 0.3)))
        .add_plugins(FollowerPlugin)
        .add_plugins(LookControlPlugin)
        .add_plugins(WebRpcPlugin);

    app.add_systems(Startup, setup).add_systems(
        Update,
        (camera_controller, update_target_marker),
    );

    app
}

// Startup system for camera, lighting and the target marker
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    target: Res<TargetState>,
) {
    info!("=== LOOK AT SCENE ===");

    spawn_orbit_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_target_marker(&mut commands, &mut meshes, &mut materials, &target);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: "wgpu=error,naga=warn,look_at_render_engine=debug".to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}

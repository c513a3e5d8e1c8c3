use bevy::asset::LoadState;
use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;

use super::model_bounds::{model_extent, scale_to_dimension};
use crate::engine::config::SceneConfig;
use crate::engine::error::FollowerError;
use crate::engine::follower::binding::ModelReady;
use crate::engine::follower::instance::FollowerInstance;

/// In-flight model load for one follower.
#[derive(Component, Debug, Clone)]
pub struct ModelRequest {
    pub url: String,
    pub handle: Handle<Gltf>,
}

/// Load failure kept on the follower; its placeholder stays in place.
#[derive(Component, Debug, Clone)]
pub struct LoadFailure(pub FollowerError);

/// Start loading a follower's model. Each instance id yields a distinct asset path.
pub fn request_model(
    asset_server: &AssetServer,
    config: &SceneConfig,
    instance_id: &str,
) -> ModelRequest {
    let url = config.model_url(instance_id);
    info!("Requesting model for follower {}: {}", instance_id, url);
    ModelRequest {
        handle: asset_server.load(url.clone()),
        url,
    }
}

// Check pending model loads and hand finished ones to binding
pub fn poll_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    gltfs: Res<Assets<Gltf>>,
    gltf_nodes: Res<Assets<GltfNode>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
    meshes: Res<Assets<Mesh>>,
    requests: Query<(Entity, &FollowerInstance, &ModelRequest)>,
) {
    for (entity, follower, request) in &requests {
        let outcome = match asset_server.get_load_state(&request.handle) {
            Some(LoadState::Loaded) => {
                let Some(gltf) = gltfs.get(&request.handle) else {
                    continue;
                };
                let scene = gltf
                    .default_scene
                    .clone()
                    .or_else(|| gltf.scenes.first().cloned());
                let extent = model_extent(gltf, &gltf_nodes, &gltf_meshes, &meshes);
                prepare_model(scene, extent, config.model_dimension)
                    .ok_or_else(|| load_failure(follower, request, "model has no scene"))
            }
            Some(LoadState::Failed(err)) => Err(load_failure(follower, request, &err.to_string())),
            _ => continue,
        };

        let mut entity_commands = commands.entity(entity);
        entity_commands.remove::<ModelRequest>();

        match outcome {
            Ok(ready) => {
                info!(
                    "Model for follower {} loaded, scale {:.3}",
                    follower.id(),
                    ready.scale
                );
                entity_commands.insert(ready);
            }
            Err(err) => {
                error!("{err}");
                entity_commands.insert(LoadFailure(err));
            }
        }
    }
}

/// Pair the scene to spawn with the scale that fits the model to `dimension`.
fn prepare_model(
    scene: Option<Handle<Scene>>,
    extent: Option<Vec3>,
    dimension: f32,
) -> Option<ModelReady> {
    let scale = extent
        .map(|extent| scale_to_dimension(extent, dimension))
        .unwrap_or(1.0);

    Some(ModelReady { scene: scene?, scale })
}

fn load_failure(
    follower: &FollowerInstance,
    request: &ModelRequest,
    reason: &str,
) -> FollowerError {
    FollowerError::AssetLoadFailure {
        id: follower.id().to_string(),
        url: request.url.clone(),
        reason: reason.to_string(),
    }
}

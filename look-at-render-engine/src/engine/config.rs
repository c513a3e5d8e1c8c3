use bevy::prelude::*;
use constants::model::{MODEL_BASE_URL, MODEL_DIMENSION, MODEL_NAME};
use constants::scene::FOLLOWER_SPAWNS;

/// One follower to spawn at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowerSpec {
    pub id: String,
    pub spawn: Vec3,
}

/// Scene configuration resolved from the shared constants.
#[derive(Resource, Debug, Clone)]
pub struct SceneConfig {
    pub base_url: String,
    pub model_name: String,
    pub model_dimension: f32,
    pub followers: Vec<FollowerSpec>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_url: MODEL_BASE_URL.to_string(),
            model_name: MODEL_NAME.to_string(),
            model_dimension: MODEL_DIMENSION,
            followers: FOLLOWER_SPAWNS
                .iter()
                .map(|(id, spawn)| FollowerSpec {
                    id: id.to_string(),
                    spawn: *spawn,
                })
                .collect(),
        }
    }
}

impl SceneConfig {
    /// Asset URL for one follower's model.
    ///
    /// The `id` query keeps each instance a distinct asset path so the
    /// loader never hands two followers the same cached scene.
    pub fn model_url(&self, instance_id: &str) -> String {
        format!(
            "{base}{name}/glTF/{name}.gltf?id={instance_id}",
            base = self.base_url,
            name = self.model_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_url_carries_instance_id() {
        let config = SceneConfig::default();
        assert_eq!(
            config.model_url("1"),
            "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/Avocado/glTF/Avocado.gltf?id=1"
        );
        assert_ne!(config.model_url("1"), config.model_url("2"));
    }

    #[test]
    fn default_followers_match_scene_layout() {
        let config = SceneConfig::default();
        assert_eq!(
            config.followers,
            vec![
                FollowerSpec { id: "1".into(), spawn: Vec3::new(3.0, 0.0, 3.0) },
                FollowerSpec { id: "2".into(), spawn: Vec3::new(-3.0, 0.0, -3.0) },
            ]
        );
    }
}

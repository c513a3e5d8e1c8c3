use bevy::prelude::*;
use constants::scene::PLACEHOLDER_SIZE;

use crate::engine::config::SceneConfig;
use crate::engine::error::FollowerError;
use crate::engine::loading::model_loader::request_model;

/// Loading state of a follower's model slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowerPhase {
    Loading,
    Bound,
}

/// A follower instance: an id, a fixed spawn point and a write-once model slot.
#[derive(Component, Debug, Clone)]
pub struct FollowerInstance {
    id: String,
    spawn: Vec3,
    model: Option<Entity>,
}

impl FollowerInstance {
    pub fn new(id: impl Into<String>, spawn: Vec3) -> Self {
        Self {
            id: id.into(),
            spawn,
            model: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Bound model root, `None` while still loading.
    pub fn model(&self) -> Option<Entity> {
        self.model
    }

    pub fn phase(&self) -> FollowerPhase {
        if self.model.is_some() {
            FollowerPhase::Bound
        } else {
            FollowerPhase::Loading
        }
    }

    /// Fill the model slot. A bound slot is never replaced.
    pub fn bind(&mut self, model: Entity) -> Result<(), FollowerError> {
        if self.model.is_some() {
            return Err(FollowerError::AlreadyBound {
                id: self.id.clone(),
            });
        }
        self.model = Some(model);
        Ok(())
    }
}

/// Root entity of a bound model, pointing back at its follower.
#[derive(Component, Debug, Clone, Copy)]
pub struct FollowerModel {
    pub follower: Entity,
}

/// Last target a model was turned toward.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Facing {
    pub target: Option<Vec3>,
    pub reorientations: u32,
}

impl Facing {
    pub fn record(&mut self, target: Vec3) {
        self.target = Some(target);
        self.reorientations += 1;
    }
}

/// Box shown at the spawn point until the model binds.
#[derive(Component)]
pub struct Placeholder;

/// Spawn every configured follower with its placeholder and start its model load.
pub fn spawn_followers(
    mut commands: Commands,
    config: Res<SceneConfig>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let placeholder_mesh = meshes.add(Cuboid::from_length(PLACEHOLDER_SIZE));
    let placeholder_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.6, 0.6),
        ..default()
    });

    for entry in &config.followers {
        let request = request_model(&asset_server, &config, &entry.id);

        commands
            .spawn((
                Name::new(format!("Follower {}", entry.id)),
                FollowerInstance::new(entry.id.clone(), entry.spawn),
                request,
                Transform::from_translation(entry.spawn),
                Visibility::default(),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Name::new(format!("Placeholder {}", entry.id)),
                    Placeholder,
                    Mesh3d(placeholder_mesh.clone()),
                    MeshMaterial3d(placeholder_material.clone()),
                ));
            });
    }

    info!("Spawned {} followers", config.followers.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_follower_is_loading() {
        let follower = FollowerInstance::new("1", Vec3::new(3.0, 0.0, 3.0));
        assert_eq!(follower.phase(), FollowerPhase::Loading);
        assert_eq!(follower.model(), None);
        assert_eq!(follower.id(), "1");
    }

    #[test]
    fn bound_slot_is_never_replaced() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut follower = FollowerInstance::new("1", Vec3::ZERO);
        assert!(follower.bind(first).is_ok());
        assert_eq!(follower.phase(), FollowerPhase::Bound);

        assert_eq!(
            follower.bind(second),
            Err(FollowerError::AlreadyBound { id: "1".into() })
        );
        assert_eq!(follower.model(), Some(first));
    }
}

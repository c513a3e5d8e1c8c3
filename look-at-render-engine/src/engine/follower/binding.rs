use bevy::prelude::*;

use super::instance::{Facing, FollowerInstance, FollowerModel, Placeholder};
use super::orientation::face_target;
use crate::engine::target::TargetState;

/// Loaded model waiting to be bound to its follower.
#[derive(Component, Debug, Clone)]
pub struct ModelReady {
    pub scene: Handle<Scene>,
    pub scale: f32,
}

/// Bind freshly loaded models, drop their placeholders and face the current target.
///
/// The target read here is whatever is current when the load completes,
/// not the value at request time.
pub fn bind_ready_followers(
    mut commands: Commands,
    target: Res<TargetState>,
    mut followers: Query<(Entity, &mut FollowerInstance, &ModelReady)>,
    placeholders: Query<(Entity, &ChildOf), With<Placeholder>>,
) {
    for (entity, mut follower, ready) in &mut followers {
        commands.entity(entity).remove::<ModelReady>();

        let mut transform = Transform::from_translation(follower.spawn())
            .with_scale(Vec3::splat(ready.scale));
        let mut facing = Facing::default();
        face_target(&mut transform, &mut facing, target.position());

        let model = commands
            .spawn((
                Name::new(format!("Model {}", follower.id())),
                FollowerModel { follower: entity },
                SceneRoot(ready.scene.clone()),
                transform,
                facing,
            ))
            .id();

        if let Err(err) = follower.bind(model) {
            warn!("{err}");
            commands.entity(model).despawn();
            continue;
        }

        for (placeholder, child_of) in &placeholders {
            if child_of.parent() == entity {
                commands.entity(placeholder).despawn();
            }
        }

        info!(
            "Follower {} bound, facing {}",
            follower.id(),
            target.position()
        );
    }
}

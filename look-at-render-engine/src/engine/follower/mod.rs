//! Follower instances that turn their loaded model toward the shared target.
//!
//! Each follower moves through `Loading → Bound`:
//!
//! ```text
//! FollowerInstance (Component)
//!   └─> id, spawn point, write-once model slot
//!
//! ModelRequest ──poll_model_loads──> ModelReady ──bind_ready_followers──> FollowerModel
//!                                  └─> LoadFailure (placeholder stays)
//! ```
//!
//! A change to `TargetState` triggers a scan of every follower; only bound
//! ones are reoriented.

/// Model binding once a load completes.
pub mod binding;

/// Follower components and startup spawning.
pub mod instance;

/// Facing math and the target-change scan.
pub mod orientation;

use bevy::prelude::*;

use crate::engine::config::SceneConfig;
use crate::engine::loading::model_loader::poll_model_loads;
use crate::engine::target::TargetState;

use binding::bind_ready_followers;
use instance::spawn_followers;
use orientation::reorient_bound_followers;

/// Registers the target, follower spawning and the load/bind/reorient pipeline.
pub struct FollowerPlugin;

impl Plugin for FollowerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<TargetState>()
            .add_systems(Startup, spawn_followers)
            .add_systems(
                Update,
                (
                    poll_model_loads,
                    reorient_bound_followers,
                    bind_ready_followers,
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::binding::ModelReady;
    use super::instance::{Facing, FollowerInstance, FollowerModel, Placeholder};
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<TargetState>()
            .add_systems(
                Update,
                (reorient_bound_followers, bind_ready_followers).chain(),
            );
        app
    }

    fn spawn_follower(app: &mut App, id: &str, spawn: Vec3) -> Entity {
        app.world_mut()
            .spawn((FollowerInstance::new(id, spawn), Transform::from_translation(spawn)))
            .with_children(|parent| {
                parent.spawn(Placeholder);
            })
            .id()
    }

    fn complete_load(app: &mut App, follower: Entity) {
        app.world_mut().entity_mut(follower).insert(ModelReady {
            scene: Handle::default(),
            scale: 1.0,
        });
    }

    fn advance(app: &mut App) {
        app.world_mut().resource_mut::<TargetState>().advance();
    }

    fn model_of(app: &App, follower: Entity) -> Option<Entity> {
        app.world().get::<FollowerInstance>(follower)?.model()
    }

    fn facing_of(app: &App, follower: Entity) -> Facing {
        let model = model_of(app, follower).expect("follower should be bound");
        *app.world().get::<Facing>(model).expect("model should record facing")
    }

    fn assert_model_faces(app: &App, follower: Entity, target: Vec3) {
        let model = model_of(app, follower).expect("follower should be bound");
        let transform = app.world().get::<Transform>(model).expect("model transform");
        let expected = (target - transform.translation).normalize();
        assert!(transform.back().as_vec3().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn bound_followers_face_each_target_change() {
        let mut app = test_app();
        let first = spawn_follower(&mut app, "1", Vec3::new(3.0, 0.0, 3.0));
        let second = spawn_follower(&mut app, "2", Vec3::new(-3.0, 0.0, -3.0));
        app.update();

        // Bind at different frames.
        complete_load(&mut app, second);
        app.update();
        complete_load(&mut app, first);
        app.update();

        advance(&mut app);
        advance(&mut app);
        app.update();

        let target = Vec3::new(0.0, 1.0, 0.0);
        for follower in [first, second] {
            assert_eq!(facing_of(&app, follower).target, Some(target));
            assert_model_faces(&app, follower, target);
        }
    }

    #[test]
    fn late_load_faces_latest_target_once() {
        let mut app = test_app();
        let follower = spawn_follower(&mut app, "1", Vec3::new(3.0, 0.0, 3.0));
        app.update();

        advance(&mut app);
        app.update();
        advance(&mut app);
        app.update();

        complete_load(&mut app, follower);
        app.update();

        let facing = facing_of(&app, follower);
        assert_eq!(facing.target, Some(Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(facing.reorientations, 1);

        // No further reorientation without a target change.
        app.update();
        assert_eq!(facing_of(&app, follower).reorientations, 1);
    }

    #[test]
    fn loading_followers_are_skipped() {
        let mut app = test_app();
        let follower = spawn_follower(&mut app, "1", Vec3::new(3.0, 0.0, 3.0));
        app.update();

        advance(&mut app);
        app.update();

        assert_eq!(model_of(&app, follower), None);
        let mut models = app.world_mut().query::<&FollowerModel>();
        assert_eq!(models.iter(app.world()).count(), 0);
    }

    #[test]
    fn one_reorientation_per_change() {
        let mut app = test_app();
        let follower = spawn_follower(&mut app, "1", Vec3::new(3.0, 0.0, 3.0));
        complete_load(&mut app, follower);
        app.update();
        assert_eq!(facing_of(&app, follower).reorientations, 1);

        for _ in 0..3 {
            advance(&mut app);
            app.update();
        }
        assert_eq!(facing_of(&app, follower).reorientations, 4);
        assert_eq!(facing_of(&app, follower).target, Some(Vec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    fn bind_and_target_change_in_same_frame_reorient_once() {
        let mut app = test_app();
        let follower = spawn_follower(&mut app, "1", Vec3::new(3.0, 0.0, 3.0));
        app.update();

        complete_load(&mut app, follower);
        advance(&mut app);
        app.update();

        let target = Vec3::new(0.0, 0.5, 0.0);
        let facing = facing_of(&app, follower);
        assert_eq!(facing.reorientations, 1);
        assert_eq!(facing.target, Some(target));
        assert_model_faces(&app, follower, target);

        app.update();
        assert_eq!(facing_of(&app, follower).reorientations, 1);
    }

    #[test]
    fn binding_removes_placeholder() {
        let mut app = test_app();
        let follower = spawn_follower(&mut app, "1", Vec3::new(3.0, 0.0, 3.0));
        app.update();

        let mut placeholders = app.world_mut().query_filtered::<Entity, With<Placeholder>>();
        assert_eq!(placeholders.iter(app.world()).count(), 1);

        complete_load(&mut app, follower);
        app.update();

        let mut placeholders = app.world_mut().query_filtered::<Entity, With<Placeholder>>();
        assert_eq!(placeholders.iter(app.world()).count(), 0);
        assert!(model_of(&app, follower).is_some());
    }

    #[test]
    fn second_load_keeps_first_model() {
        let mut app = test_app();
        let follower = spawn_follower(&mut app, "1", Vec3::new(3.0, 0.0, 3.0));
        complete_load(&mut app, follower);
        app.update();
        let bound = model_of(&app, follower);

        complete_load(&mut app, follower);
        app.update();

        assert_eq!(model_of(&app, follower), bound);
        let mut models = app.world_mut().query::<&FollowerModel>();
        assert_eq!(models.iter(app.world()).count(), 1);
    }
}

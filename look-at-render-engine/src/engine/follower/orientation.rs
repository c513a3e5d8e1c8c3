use bevy::prelude::*;

use super::instance::{Facing, FollowerInstance, FollowerModel};
use crate::engine::target::TargetState;

/// Turn `object` in place so its +Z axis (glTF forward) points at `target`.
///
/// `None` is a no-op, as is a target sitting exactly on the object.
/// Returns whether a rotation was applied.
pub fn reorient(object: Option<&mut Transform>, target: Vec3) -> bool {
    let Some(transform) = object else {
        return false;
    };

    // look_to aims -Z, so aim it away from the target.
    let away = transform.translation - target;
    if away.length_squared() <= f32::EPSILON {
        return false;
    }
    transform.look_to(away, Vec3::Y);
    true
}

/// Reorient and record the target on a bound model.
pub fn face_target(transform: &mut Transform, facing: &mut Facing, target: Vec3) {
    reorient(Some(transform), target);
    facing.record(target);
}

/// Scan every follower on a target change and turn the bound ones.
/// Followers still loading have no model and are skipped.
pub fn reorient_bound_followers(
    target: Res<TargetState>,
    followers: Query<&FollowerInstance>,
    mut models: Query<(&mut Transform, &mut Facing), With<FollowerModel>>,
) {
    if !target.is_changed() {
        return;
    }

    let position = target.position();
    for follower in &followers {
        let Some(model) = follower.model() else {
            continue;
        };
        let Ok((mut transform, mut facing)) = models.get_mut(model) else {
            continue;
        };
        face_target(&mut transform, &mut facing, position);
        debug!("Follower {} facing {}", follower.id(), position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_faces(transform: &Transform, target: Vec3) {
        let expected = (target - transform.translation).normalize();
        let forward = transform.back().as_vec3();
        assert!(
            forward.abs_diff_eq(expected, 1e-5),
            "forward {forward} should point at {expected}"
        );
    }

    #[test]
    fn missing_object_is_a_no_op() {
        assert!(!reorient(None, Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn object_points_at_target() {
        let mut transform = Transform::from_xyz(3.0, 0.0, 3.0);
        let target = Vec3::new(0.0, 1.0, 0.0);
        assert!(reorient(Some(&mut transform), target));
        assert_faces(&transform, target);
    }

    #[test]
    fn reorient_is_idempotent() {
        let mut transform = Transform::from_xyz(-3.0, 0.0, -3.0);
        let target = Vec3::new(0.0, -2.0, 0.0);
        reorient(Some(&mut transform), target);
        let first = transform.rotation;
        reorient(Some(&mut transform), target);
        assert!(transform.rotation.abs_diff_eq(first, 1e-6));
    }

    #[test]
    fn reorient_keeps_position_and_scale() {
        let mut transform = Transform::from_xyz(3.0, 0.0, 3.0).with_scale(Vec3::splat(20.0));
        reorient(Some(&mut transform), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(transform.translation, Vec3::new(3.0, 0.0, 3.0));
        assert_eq!(transform.scale, Vec3::splat(20.0));
    }

    #[test]
    fn target_on_object_leaves_rotation() {
        let mut transform = Transform::from_xyz(1.0, 1.0, 1.0);
        let before = transform.rotation;
        assert!(!reorient(Some(&mut transform), Vec3::ONE));
        assert_eq!(transform.rotation, before);
    }
}

use bevy::prelude::*;
use constants::scene::{MARKER_COLOUR, MARKER_RADIUS, MARKER_SUBDIVISIONS};

use crate::engine::target::TargetState;

#[derive(Component)]
pub struct TargetMarker;

pub fn spawn_target_marker(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    target: &TargetState,
) {
    let mesh = match Sphere::new(MARKER_RADIUS).mesh().ico(MARKER_SUBDIVISIONS) {
        Ok(mut mesh) => {
            mesh.duplicate_vertices();
            mesh.compute_flat_normals();
            mesh
        }
        Err(err) => {
            warn!("Falling back to UV sphere for target marker: {err}");
            Sphere::new(MARKER_RADIUS).mesh().uv(16, 8)
        }
    };

    commands.spawn((
        Name::new("Target"),
        TargetMarker,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: MARKER_COLOUR,
            reflectance: 0.0,
            ..default()
        })),
        Transform::from_translation(target.position()),
    ));
}

/// Keep the marker on the current target.
pub fn update_target_marker(
    target: Res<TargetState>,
    mut markers: Query<&mut Transform, With<TargetMarker>>,
) {
    if !target.is_changed() {
        return;
    }
    for mut transform in &mut markers {
        transform.translation = target.position();
    }
}

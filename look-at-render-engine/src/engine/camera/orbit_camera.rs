use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::render::camera::{PerspectiveProjection, Projection};
use constants::scene::{
    CAMERA_ALPHA, CAMERA_BETA, CAMERA_MAX_RADIUS, CAMERA_MIN_RADIUS, CAMERA_NEAR, CAMERA_RADIUS,
    CAMERA_ROTATE_SENSITIVITY, CAMERA_TARGET,
};

/// Keeps beta off the poles so the up vector stays defined.
const BETA_EPSILON: f32 = 0.01;

/// Arc-rotate camera state: longitude `alpha`, latitude `beta` and distance from `target`.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            alpha: CAMERA_ALPHA,
            beta: CAMERA_BETA,
            radius: CAMERA_RADIUS,
            target: CAMERA_TARGET,
        }
    }
}

impl OrbitCamera {
    pub fn position(&self) -> Vec3 {
        orbit_position(self.alpha, self.beta, self.radius, self.target)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }

    /// Orbit by a mouse drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.alpha -= delta.x * CAMERA_ROTATE_SENSITIVITY;
        self.beta = (self.beta - delta.y * CAMERA_ROTATE_SENSITIVITY)
            .clamp(BETA_EPSILON, std::f32::consts::PI - BETA_EPSILON);
    }

    /// Zoom by wheel steps; positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        let zoom_factor = if steps > 0.0 { 0.9 } else { 1.1 };
        self.radius = (self.radius * zoom_factor).clamp(CAMERA_MIN_RADIUS, CAMERA_MAX_RADIUS);
    }
}

/// Point on the sphere of `radius` around `target` at the given angles.
pub fn orbit_position(alpha: f32, beta: f32, radius: f32, target: Vec3) -> Vec3 {
    target
        + radius
            * Vec3::new(
                alpha.cos() * beta.sin(),
                beta.cos(),
                alpha.sin() * beta.sin(),
            )
}

pub fn spawn_orbit_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: CAMERA_NEAR,
            ..default()
        }),
        Msaa::Sample4,
        orbit.transform(),
    ));
    commands.insert_resource(orbit);
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    for scroll in scroll_events.read() {
        if scroll.y != 0.0 {
            orbit.zoom(scroll.y);
        }
    }

    let total_motion: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && total_motion != Vec2::ZERO {
        orbit.rotate(total_motion);
    }

    if orbit.is_changed() {
        *camera_transform = orbit.transform();
    }
}

use bevy::pbr::light_consts::lux;
use bevy::prelude::*;
use constants::scene::LIGHT_INTENSITY;

/// Ambient brightness for a hemispheric light at full intensity
const SKY_BRIGHTNESS: f32 = 1000.0;

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: SKY_BRIGHTNESS * LIGHT_INTENSITY,
        ..default()
    });

    // Light arrives from above, matching a hemisphere pointing up.
    commands.spawn((
        DirectionalLight {
            illuminance: lux::OVERCAST_DAY * LIGHT_INTENSITY,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::NEG_Y, Vec3::Z),
    ));
}

use bevy::prelude::*;
use constants::scene::LOOK_BUTTON_LABEL;

use super::state::*;

// Spawns the button strip across the top of the viewport
pub fn spawn_look_control_ui(mut commands: Commands) {
    commands
        .spawn((
            LookControlRoot,
            Name::new("LookControlPanel"),
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    LookButton,
                    Button,
                    Name::new("LookButton"),
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    BorderRadius::all(Val::Px(4.0)),
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        LookButtonLabel,
                        Text::new(LOOK_BUTTON_LABEL),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });
        });
}

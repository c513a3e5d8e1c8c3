use bevy::prelude::*;

use super::state::*;
use crate::engine::target::{TargetState, advance_target};

// Look button steps the target once per press
pub fn look_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<LookButton>),
    >,
    mut target: ResMut<TargetState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                advance_target(&mut target);
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<TargetState>()
            .add_systems(Update, look_button_interaction);
        let button = app
            .world_mut()
            .spawn((LookButton, Button, Interaction::None, BackgroundColor(BUTTON_IDLE)))
            .id();
        app.update();
        (app, button)
    }

    fn press(app: &mut App, button: Entity) {
        app.world_mut().entity_mut(button).insert(Interaction::Pressed);
        app.update();
        app.world_mut().entity_mut(button).insert(Interaction::Hovered);
        app.update();
    }

    #[test]
    fn each_press_advances_once() {
        let (mut app, button) = test_app();
        let mut visited = Vec::new();
        for _ in 0..5 {
            press(&mut app, button);
            visited.push(app.world().resource::<TargetState>().position().y);
        }
        assert_eq!(visited, vec![0.5, 1.0, 1.5, 2.0, -2.0]);
    }

    #[test]
    fn hover_does_not_advance() {
        let (mut app, button) = test_app();
        app.world_mut().entity_mut(button).insert(Interaction::Hovered);
        app.update();

        assert_eq!(app.world().resource::<TargetState>().position(), Vec3::ZERO);
        let bg = app.world().get::<BackgroundColor>(button).expect("button colour");
        assert_eq!(bg.0, BUTTON_HOVERED);
    }
}

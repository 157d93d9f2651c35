use bevy::prelude::*;
use gravity_sim::{Control, ControlEcho, ParameterChange, SimulationState};

const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
const BUTTON_NORMAL: Color = Color::srgba(0.15, 0.15, 0.2, 0.9);
const BUTTON_HOVERED: Color = Color::srgba(0.25, 0.25, 0.35, 0.9);
const BUTTON_PRESSED: Color = Color::srgba(0.1, 0.5, 0.3, 0.9);
const LABEL_COLOR: Color = Color::srgba(0.9, 0.9, 0.9, 0.9);

/// Text showing the echoed value of one control
#[derive(Component)]
pub struct EchoText(pub Control);

/// Steps a control down or up; the toggle flips on either
#[derive(Component)]
pub struct NudgeButton {
    pub control: Control,
    pub up: bool,
}

/// Marker for the stats line
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the control panel: one row per control with its value echo
pub fn spawn_control_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
        ))
        .with_children(|panel| {
            for control in Control::ALL {
                spawn_control_row(panel, control);
            }

            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(LABEL_COLOR),
                HudText,
            ));
        });
}

fn spawn_control_row(panel: &mut ChildBuilder, control: Control) {
    panel
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(control.label()),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(LABEL_COLOR),
                Node {
                    width: Val::Px(130.0),
                    ..default()
                },
            ));

            if control.range().is_some() {
                spawn_nudge_button(row, control, false, "-");
            }

            row.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    width: Val::Px(70.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                EchoText(control),
            ));

            let label = if control.range().is_some() { "+" } else { "toggle" };
            spawn_nudge_button(row, control, true, label);
        });
}

fn spawn_nudge_button(row: &mut ChildBuilder, control: Control, up: bool, label: &str) {
    row.spawn((
        Button,
        Node {
            min_width: Val::Px(28.0),
            height: Val::Px(24.0),
            padding: UiRect::horizontal(Val::Px(6.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(BUTTON_NORMAL),
        NudgeButton { control, up },
    ))
    .with_children(|button| {
        button.spawn((
            Text::new(label),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
    });
}

/// Turn button presses into parameter changes
pub fn control_button_system(
    mut buttons: Query<(&Interaction, &NudgeButton, &mut BackgroundColor), Changed<Interaction>>,
    state: Res<SimulationState>,
    mut changes: EventWriter<ParameterChange>,
) {
    for (interaction, button, mut background) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                changes.send(button.control.nudge(&state, button.up));
                *background = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => *background = BackgroundColor(BUTTON_NORMAL),
        }
    }
}

/// Copy echoed values into their text nodes
pub fn update_value_echo(echo: Res<ControlEcho>, mut texts: Query<(&mut Text, &EchoText)>) {
    if !echo.is_changed() {
        return;
    }
    for (mut text, tag) in &mut texts {
        if let Some(value) = echo.get(tag.0) {
            **text = value.to_string();
        }
    }
}

/// Update the stats line every 10th frame
pub fn update_hud(
    state: Res<SimulationState>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };
    **text = format!(
        "Particles: {} | Tick: {} | dt: {:.4}\n\
         Cursor: ({:.0}, {:.0}) | Surface: {:.0}x{:.0}\n\
         [R] Reset",
        state.particle_count(),
        state.ticks,
        state.config.time_step(),
        state.cursor[0],
        state.cursor[1],
        state.bounds.width,
        state.bounds.height,
    );
}

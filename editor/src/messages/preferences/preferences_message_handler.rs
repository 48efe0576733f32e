use super::utility_types::Preferences;
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct PreferencesMessageHandler {
	preferences: Preferences,
}

impl MessageHandler<PreferencesMessage, ()> for PreferencesMessageHandler {
	fn process_message(&mut self, message: PreferencesMessage, responses: &mut VecDeque<Message>, _data: ()) {
		match message {
			PreferencesMessage::Load { preferences } => match Preferences::from_json(&preferences) {
				Ok(preferences) => self.preferences = preferences,
				Err(error) => {
					log::warn!("Ignoring unreadable preferences: {error}");
					return;
				}
			},
			PreferencesMessage::ResetToDefaults => self.preferences = Preferences::default(),

			PreferencesMessage::ColorOverride { kind, color } => match color {
				Some(color) => {
					self.preferences.color_overrides.insert(kind, color);
				}
				None => {
					self.preferences.color_overrides.remove(&kind);
				}
			},
			PreferencesMessage::DefaultIntensity { intensity } => self.preferences.default_intensity = intensity.clamp(0., 1.),
			PreferencesMessage::MessageLoggingVerbosity { verbosity } => self.preferences.message_logging_verbosity = verbosity,
			PreferencesMessage::PerspectiveMode { mode } => self.preferences.perspective_mode = mode,
			PreferencesMessage::PositionSpace { space } => self.preferences.position_space = space,
			PreferencesMessage::ShowFormationLines { enabled } => self.preferences.show_formation_lines = enabled,
			PreferencesMessage::ShowHeatmap { enabled } => self.preferences.show_heatmap = enabled,
			PreferencesMessage::ShowPlayerTracking { enabled } => self.preferences.show_player_tracking = enabled,
		}

		responses.add(OverlaysMessage::Draw);
	}
}

impl PreferencesMessageHandler {
	pub fn preferences(&self) -> &Preferences {
		&self.preferences
	}
}

use pitch_geometry::consts::DEFAULT_INTENSITY;
use pitch_geometry::{AnnotationType, Color, ColorTable, PerspectiveMode, PositionSpace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLoggingVerbosity {
	#[default]
	Off,
	Names,
	Contents,
}

/// User settings for the overlay. Every field has a default, so a partial or empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
	pub perspective_mode: PerspectiveMode,
	pub show_heatmap: bool,
	pub show_player_tracking: bool,
	pub show_formation_lines: bool,
	/// Convention used by the tracking feed for player coordinates.
	pub position_space: PositionSpace,
	/// Intensity given to newly committed glow and zone annotations.
	pub default_intensity: f64,
	pub color_overrides: BTreeMap<AnnotationType, Color>,
	pub message_logging_verbosity: MessageLoggingVerbosity,
}

impl Default for Preferences {
	fn default() -> Self {
		Self {
			perspective_mode: PerspectiveMode::Isometric,
			show_heatmap: false,
			show_player_tracking: true,
			show_formation_lines: false,
			position_space: PositionSpace::Normalized,
			default_intensity: DEFAULT_INTENSITY,
			color_overrides: BTreeMap::new(),
			message_logging_verbosity: MessageLoggingVerbosity::Off,
		}
	}
}

impl Preferences {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let mut preferences: Self = serde_json::from_str(json)?;
		preferences.default_intensity = preferences.default_intensity.clamp(0., 1.);
		Ok(preferences)
	}

	/// The default color table with the user's overrides applied.
	pub fn color_table(&self) -> ColorTable {
		self.color_overrides.iter().fold(ColorTable::DEFAULT, |table, (&kind, &color)| table.with_override(kind, color))
	}
}

#[cfg(test)]
mod test_preferences {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn empty_object_gives_defaults() {
		assert_eq!(Preferences::from_json("{}").unwrap(), Preferences::default());
	}

	#[test]
	fn partial_json_keeps_other_defaults() {
		let preferences = Preferences::from_json(r##"{"perspectiveMode":"flat","showHeatmap":true,"defaultIntensity":3,"colorOverrides":{"arrow":"#000000"}}"##).unwrap();

		assert_eq!(preferences.perspective_mode, PerspectiveMode::Flat);
		assert!(preferences.show_heatmap);
		assert!(preferences.show_player_tracking);
		assert_eq!(preferences.default_intensity, 1.);
		assert_eq!(preferences.color_table().get(AnnotationType::Arrow), Color::BLACK);
		assert_eq!(preferences.color_table().get(AnnotationType::Line), ColorTable::DEFAULT.get(AnnotationType::Line));
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(Preferences::from_json(r#"{"perspectiveMode":"fisheye"}"#).is_err());
	}
}

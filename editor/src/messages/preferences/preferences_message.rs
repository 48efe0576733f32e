use super::utility_types::MessageLoggingVerbosity;

use pitch_geometry::{AnnotationType, Color, PerspectiveMode, PositionSpace};
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum PreferencesMessage {
	Load { preferences: String },
	ResetToDefaults,

	ColorOverride { kind: AnnotationType, color: Option<Color> },
	DefaultIntensity { intensity: f64 },
	MessageLoggingVerbosity { verbosity: MessageLoggingVerbosity },
	PerspectiveMode { mode: PerspectiveMode },
	PositionSpace { space: PositionSpace },
	ShowFormationLines { enabled: bool },
	ShowHeatmap { enabled: bool },
	ShowPlayerTracking { enabled: bool },
}

impl PreferencesMessage {
	pub fn local_name(&self) -> &'static str {
		match self {
			PreferencesMessage::Load { .. } => "Load",
			PreferencesMessage::ResetToDefaults => "ResetToDefaults",
			PreferencesMessage::ColorOverride { .. } => "ColorOverride",
			PreferencesMessage::DefaultIntensity { .. } => "DefaultIntensity",
			PreferencesMessage::MessageLoggingVerbosity { .. } => "MessageLoggingVerbosity",
			PreferencesMessage::PerspectiveMode { .. } => "PerspectiveMode",
			PreferencesMessage::PositionSpace { .. } => "PositionSpace",
			PreferencesMessage::ShowFormationLines { .. } => "ShowFormationLines",
			PreferencesMessage::ShowHeatmap { .. } => "ShowHeatmap",
			PreferencesMessage::ShowPlayerTracking { .. } => "ShowPlayerTracking",
		}
	}
}

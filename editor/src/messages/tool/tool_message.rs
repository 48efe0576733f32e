use super::utility_types::ToolType;

use glam::DVec2;
use pitch_geometry::Color;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum ToolMessage {
	// Standard messages
	ActivateTool { tool_type: ToolType },
	SetDrawingMode { enabled: bool },
	UpdateOptions(ToolOptionsUpdate),

	// Pointer input, in video pixel space
	Abort,
	PointerDown { position: DVec2 },
	PointerMove { position: DVec2 },
	PointerUp,
}

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum ToolOptionsUpdate {
	Color(Option<Color>),
	Intensity(Option<f64>),
	Label(Option<String>),
}

impl ToolMessage {
	pub fn local_name(&self) -> &'static str {
		match self {
			ToolMessage::ActivateTool { .. } => "ActivateTool",
			ToolMessage::SetDrawingMode { .. } => "SetDrawingMode",
			ToolMessage::UpdateOptions(_) => "UpdateOptions",
			ToolMessage::Abort => "Abort",
			ToolMessage::PointerDown { .. } => "PointerDown",
			ToolMessage::PointerMove { .. } => "PointerMove",
			ToolMessage::PointerUp => "PointerUp",
		}
	}
}

use pitch_geometry::PlayerPosition;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum OverlaysMessage {
	ClearPlayerPositions,
	Draw,
	/// Replaces the tracking feed snapshot shown under the annotations.
	SetPlayerPositions { positions: Vec<PlayerPosition> },
}

impl OverlaysMessage {
	pub fn local_name(&self) -> &'static str {
		match self {
			OverlaysMessage::ClearPlayerPositions => "ClearPlayerPositions",
			OverlaysMessage::Draw => "Draw",
			OverlaysMessage::SetPlayerPositions { .. } => "SetPlayerPositions",
		}
	}
}

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum VideoMessage {
	MetadataLoaded { width: f64, height: f64, duration: f64 },
	TimeUpdate { current_time: f64 },
	Unload,
}

impl VideoMessage {
	pub fn local_name(&self) -> &'static str {
		match self {
			VideoMessage::MetadataLoaded { .. } => "MetadataLoaded",
			VideoMessage::TimeUpdate { .. } => "TimeUpdate",
			VideoMessage::Unload => "Unload",
		}
	}
}

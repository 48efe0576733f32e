use pitch_geometry::Annotation;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum AnnotationsMessage {
	Add { annotation: Annotation },
	ClearAll,
	/// Offers the current set to the user as a downloadable analysis bundle.
	Export { video_url: String },
	ReplaceAll { annotations: Vec<Annotation> },
}

impl AnnotationsMessage {
	pub fn local_name(&self) -> &'static str {
		match self {
			AnnotationsMessage::Add { .. } => "Add",
			AnnotationsMessage::ClearAll => "ClearAll",
			AnnotationsMessage::Export { .. } => "Export",
			AnnotationsMessage::ReplaceAll { .. } => "ReplaceAll",
		}
	}
}

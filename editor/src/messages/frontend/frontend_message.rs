use super::utility_types::MouseCursorIcon;
use crate::messages::overlays::utility_types::DrawList;
use crate::messages::tool::utility_types::ToolType;

use serde::{Deserialize, Serialize};

/// Messages leaving the editor for the surface hosting the video and its overlay canvas.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum FrontendMessage {
	DisplayDialogError { title: String, description: String },
	RenderOverlays { draw_list: DrawList },
	TriggerFileDownload { document: String, name: String },
	UpdateActiveTool { tool_type: ToolType },
	UpdateAnnotationCount { count: usize },
	UpdateDrawingMode { enabled: bool },
	UpdateMouseCursor { cursor: MouseCursorIcon },
}

impl FrontendMessage {
	pub fn local_name(&self) -> &'static str {
		match self {
			FrontendMessage::DisplayDialogError { .. } => "DisplayDialogError",
			FrontendMessage::RenderOverlays { .. } => "RenderOverlays",
			FrontendMessage::TriggerFileDownload { .. } => "TriggerFileDownload",
			FrontendMessage::UpdateActiveTool { .. } => "UpdateActiveTool",
			FrontendMessage::UpdateAnnotationCount { .. } => "UpdateAnnotationCount",
			FrontendMessage::UpdateDrawingMode { .. } => "UpdateDrawingMode",
			FrontendMessage::UpdateMouseCursor { .. } => "UpdateMouseCursor",
		}
	}
}

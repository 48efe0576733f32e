use super::utility_types::{DrawingSession, Fsm, ToolActionHandlerData, ToolOptions};
use crate::application::generate_uuid;
use crate::messages::prelude::*;

use pitch_geometry::geometry::radius_point;
use pitch_geometry::{AnnotationId, AnnotationType, CommitOptions, ShapeFamily, VideoPosition, build_annotation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawingToolFsmState {
	#[default]
	Idle,
	Capturing,
}

impl Fsm for DrawingToolFsmState {
	type ToolData = DrawingSession;
	type ToolOptions = ToolOptions;

	fn transition(self, event: ToolMessage, tool_data: &mut Self::ToolData, transition_data: &ToolActionHandlerData, tool_options: &Self::ToolOptions, responses: &mut VecDeque<Message>) -> Self {
		use DrawingToolFsmState::*;

		// The select tool never captures, so every pointer event passes through
		let Some(kind) = tool_data.active_tool.annotation_type() else {
			tool_data.cancel();
			return Idle;
		};

		match (self, event) {
			(Idle, ToolMessage::PointerDown { position }) => {
				if !transition_data.drawing_mode {
					return Idle;
				}

				tool_data.captured_points = vec![position];
				tool_data.is_capturing = true;
				responses.add(OverlaysMessage::Draw);

				Capturing
			}
			(Capturing, ToolMessage::PointerMove { position }) => {
				update_capture(tool_data, kind, position);
				responses.add(OverlaysMessage::Draw);

				Capturing
			}
			(Capturing, ToolMessage::PointerUp) => {
				let points = std::mem::take(&mut tool_data.captured_points);
				tool_data.is_capturing = false;

				commit(kind, points, transition_data, tool_options, responses);
				responses.add(OverlaysMessage::Draw);

				Idle
			}
			(Capturing, ToolMessage::Abort) => {
				tool_data.cancel();
				responses.add(OverlaysMessage::Draw);

				Idle
			}
			_ => self,
		}
	}
}

fn update_capture(session: &mut DrawingSession, kind: AnnotationType, cursor: VideoPosition) {
	match kind.family() {
		ShapeFamily::Radius => {
			if let Some(origin) = session.origin() {
				session.set_second(radius_point(origin, cursor));
			}
		}
		ShapeFamily::TwoEndpoint => session.set_second(cursor),
		ShapeFamily::Anchor => {
			if let Some(anchor) = session.captured_points.first_mut() {
				*anchor = cursor;
			}
		}
	}
}

fn commit(kind: AnnotationType, points: Vec<VideoPosition>, data: &ToolActionHandlerData, tool_options: &ToolOptions, responses: &mut VecDeque<Message>) {
	let options = CommitOptions {
		color: tool_options.color,
		label: tool_options.label.clone(),
		intensity: Some(tool_options.intensity.unwrap_or(data.default_intensity)),
		timestamp: Some(data.current_time),
	};

	match build_annotation(kind, points, data.frame_size, data.colors, AnnotationId(generate_uuid()), options) {
		Ok(annotation) => responses.add(AnnotationsMessage::Add { annotation }),
		Err(error) => log::debug!("Discarding {kind} capture: {error}"),
	}
}

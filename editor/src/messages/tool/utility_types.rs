use crate::messages::prelude::*;

use pitch_geometry::{AnnotationType, Color, ColorTable, FrameSize, VideoPosition};
use serde::{Deserialize, Serialize};

/// Values the tool reads from the rest of the editor while handling a pointer event.
pub struct ToolActionHandlerData<'a> {
	pub frame_size: FrameSize,
	/// Playback position in seconds, stamped onto committed annotations.
	pub current_time: f64,
	pub colors: &'a ColorTable,
	pub default_intensity: f64,
	pub drawing_mode: bool,
}

/// The FSM (finite state machine) is a flowchart between the operating states a tool can be in.
/// Every event directed at the tool goes through `transition()`, which may update the tool data, send messages, and returns the new state.
pub trait Fsm {
	/// Internal values the tool keeps between events, such as the points captured so far.
	type ToolData;
	/// Values set by the user that shape what the tool produces.
	type ToolOptions;

	#[must_use]
	fn transition(self, message: ToolMessage, tool_data: &mut Self::ToolData, transition_data: &ToolActionHandlerData, options: &Self::ToolOptions, responses: &mut VecDeque<Message>) -> Self;

	/// Performs a step on the state machine, replacing the current state with the one the transition lands in.
	fn process_event(&mut self, message: ToolMessage, tool_data: &mut Self::ToolData, transition_data: &ToolActionHandlerData, options: &Self::ToolOptions, responses: &mut VecDeque<Message>)
	where
		Self: Sized + Copy,
	{
		*self = self.transition(message, tool_data, transition_data, options, responses);
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
	/// Pointer events pass through to the video without capturing anything.
	#[default]
	Select,
	Annotate(AnnotationType),
}

impl ToolType {
	pub fn annotation_type(&self) -> Option<AnnotationType> {
		match self {
			ToolType::Select => None,
			ToolType::Annotate(kind) => Some(*kind),
		}
	}
}

impl From<AnnotationType> for ToolType {
	fn from(kind: AnnotationType) -> Self {
		ToolType::Annotate(kind)
	}
}

/// The single interaction in progress. Reset to empty on commit or cancel and never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingSession {
	pub active_tool: ToolType,
	pub captured_points: Vec<VideoPosition>,
	pub is_capturing: bool,
}

impl DrawingSession {
	pub fn origin(&self) -> Option<VideoPosition> {
		self.captured_points.first().copied()
	}

	pub fn cancel(&mut self) {
		self.captured_points.clear();
		self.is_capturing = false;
	}

	/// Sets the second captured point, growing the buffer if only the origin exists.
	pub fn set_second(&mut self, point: VideoPosition) {
		match self.captured_points.len() {
			0 => {}
			1 => self.captured_points.push(point),
			_ => self.captured_points[1] = point,
		}
	}
}

/// Overrides applied to every annotation committed until they are changed again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolOptions {
	pub color: Option<Color>,
	pub label: Option<String>,
	pub intensity: Option<f64>,
}

use super::drawing_tool::DrawingToolFsmState;
use super::tool_message::ToolOptionsUpdate;
use super::utility_types::{DrawingSession, Fsm, ToolActionHandlerData, ToolOptions, ToolType};
use crate::messages::preferences::utility_types::Preferences;
use crate::messages::prelude::*;
use crate::messages::video::utility_types::VideoState;

pub struct ToolMessageContext<'a> {
	pub video: &'a VideoState,
	pub preferences: &'a Preferences,
}

#[derive(Debug, Default)]
pub struct ToolMessageHandler {
	fsm_state: DrawingToolFsmState,
	session: DrawingSession,
	options: ToolOptions,
	drawing_mode: bool,
}

impl MessageHandler<ToolMessage, ToolMessageContext<'_>> for ToolMessageHandler {
	fn process_message(&mut self, message: ToolMessage, responses: &mut VecDeque<Message>, context: ToolMessageContext) {
		let ToolMessageContext { video, preferences } = context;

		match message {
			ToolMessage::ActivateTool { tool_type } => {
				// Switching tools mid-gesture drops the gesture rather than committing it under the new tool
				self.cancel_capture(responses);
				self.session.active_tool = tool_type;

				responses.add(FrontendMessage::UpdateActiveTool { tool_type });
				self.update_cursor(responses);
			}
			ToolMessage::SetDrawingMode { enabled } => {
				if !enabled {
					self.cancel_capture(responses);
				}
				self.drawing_mode = enabled;

				responses.add(FrontendMessage::UpdateDrawingMode { enabled });
				self.update_cursor(responses);
			}
			ToolMessage::UpdateOptions(update) => {
				match update {
					ToolOptionsUpdate::Color(color) => self.options.color = color,
					ToolOptionsUpdate::Intensity(intensity) => self.options.intensity = intensity.map(|intensity| intensity.clamp(0., 1.)),
					ToolOptionsUpdate::Label(label) => self.options.label = label,
				}

				// The preview is drawn with the current options
				if self.session.is_capturing {
					responses.add(OverlaysMessage::Draw);
				}
			}
			event => {
				let colors = preferences.color_table();
				let transition_data = ToolActionHandlerData {
					frame_size: video.frame_size,
					current_time: video.current_time,
					colors: &colors,
					default_intensity: preferences.default_intensity,
					drawing_mode: self.drawing_mode,
				};

				self.fsm_state.process_event(event, &mut self.session, &transition_data, &self.options, responses);
			}
		}
	}
}

impl ToolMessageHandler {
	pub fn session(&self) -> &DrawingSession {
		&self.session
	}

	pub fn active_tool(&self) -> ToolType {
		self.session.active_tool
	}

	pub fn drawing_mode(&self) -> bool {
		self.drawing_mode
	}

	pub fn options(&self) -> &ToolOptions {
		&self.options
	}

	fn cancel_capture(&mut self, responses: &mut VecDeque<Message>) {
		if self.fsm_state == DrawingToolFsmState::Capturing {
			log::debug!("Cancelling capture of {} point(s)", self.session.captured_points.len());
			self.fsm_state = DrawingToolFsmState::Idle;
			responses.add(OverlaysMessage::Draw);
		}
		self.session.cancel();
	}

	fn update_cursor(&self, responses: &mut VecDeque<Message>) {
		let cursor = match self.session.active_tool {
			ToolType::Annotate(_) if self.drawing_mode => MouseCursorIcon::Crosshair,
			_ => MouseCursorIcon::Default,
		};
		responses.add(FrontendMessage::UpdateMouseCursor { cursor });
	}
}

#[cfg(test)]
mod test_tool_message_handler {
	use crate::messages::overlays::utility_types::{DrawCommand, OverlayLayer};
	use crate::messages::prelude::*;
	use crate::messages::tool::ToolOptionsUpdate;
	use crate::messages::tool::utility_types::ToolType;
	use crate::test_utils::EditorTestUtils;

	use pitch_geometry::AnnotationType;

	#[test]
	fn activating_a_tool_updates_frontend() {
		let mut editor = EditorTestUtils::create();
		let responses = editor.handle_message(ToolMessage::ActivateTool {
			tool_type: ToolType::Annotate(AnnotationType::Cone),
		});

		assert!(responses.contains(&FrontendMessage::UpdateActiveTool {
			tool_type: ToolType::Annotate(AnnotationType::Cone)
		}));
		assert!(responses.contains(&FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Default }));
		assert!(!editor.session().is_capturing);
	}

	#[test]
	fn drawing_mode_switches_cursor() {
		let mut editor = EditorTestUtils::create();
		editor.activate(ToolType::Annotate(AnnotationType::Line));
		let responses = editor.handle_message(ToolMessage::SetDrawingMode { enabled: true });

		assert!(responses.contains(&FrontendMessage::UpdateDrawingMode { enabled: true }));
		assert!(responses.contains(&FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Crosshair }));
	}

	#[test]
	fn pointer_moves_request_a_redraw() {
		let mut editor = EditorTestUtils::with_video(1000., 500.);
		editor.select_tool(AnnotationType::Line);
		editor.pointer_down(glam::DVec2::new(1., 1.));
		let responses = editor.handle_message(ToolMessage::PointerMove { position: glam::DVec2::new(5., 5.) });

		assert!(responses.iter().any(|response| matches!(response, FrontendMessage::RenderOverlays { .. })));
	}

	#[test]
	fn changing_options_mid_capture_redraws_the_preview() {
		let mut editor = EditorTestUtils::with_video(1000., 500.);
		editor.select_tool(AnnotationType::Circle);
		editor.pointer_down(glam::DVec2::new(100., 100.));
		editor.pointer_move(glam::DVec2::new(140., 100.));

		let responses = editor.handle_message(ToolMessage::UpdateOptions(ToolOptionsUpdate::Color(Some(pitch_geometry::Color::BLACK))));
		let preview_fill = responses.iter().find_map(|response| match response {
			FrontendMessage::RenderOverlays { draw_list } => draw_list.layer(OverlayLayer::Preview).find_map(|item| match &item.command {
				DrawCommand::Ellipse { fill, .. } => *fill,
				_ => None,
			}),
			_ => None,
		});
		assert_eq!(preview_fill.map(|fill| (fill.r(), fill.g(), fill.b())), Some((0, 0, 0)));
	}
}

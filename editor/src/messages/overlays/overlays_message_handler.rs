use super::renderer::{Preview, render};
use super::utility_types::ViewOptions;
use crate::messages::annotations::annotation_store::AnnotationStore;
use crate::messages::preferences::utility_types::Preferences;
use crate::messages::prelude::*;
use crate::messages::tool::utility_types::{DrawingSession, ToolOptions};
use crate::messages::video::utility_types::VideoState;

use pitch_geometry::PlayerPosition;

pub struct OverlaysMessageContext<'a> {
	pub store: &'a AnnotationStore,
	pub session: &'a DrawingSession,
	pub tool_options: &'a ToolOptions,
	pub video: &'a VideoState,
	pub preferences: &'a Preferences,
}

#[derive(Debug, Default)]
pub struct OverlaysMessageHandler {
	player_positions: Vec<PlayerPosition>,
}

impl MessageHandler<OverlaysMessage, OverlaysMessageContext<'_>> for OverlaysMessageHandler {
	fn process_message(&mut self, message: OverlaysMessage, responses: &mut VecDeque<Message>, context: OverlaysMessageContext) {
		let OverlaysMessageContext {
			store,
			session,
			tool_options,
			video,
			preferences,
		} = context;

		match message {
			OverlaysMessage::ClearPlayerPositions => {
				self.player_positions.clear();
				responses.add(OverlaysMessage::Draw);
			}
			OverlaysMessage::Draw => {
				let view = ViewOptions::new(video.frame_size, preferences);
				let preview = Preview { session, options: tool_options };
				let draw_list = render(store, &self.player_positions, &view, Some(preview));

				responses.add(FrontendMessage::RenderOverlays { draw_list });
			}
			OverlaysMessage::SetPlayerPositions { positions } => {
				self.player_positions = positions;
				responses.add(OverlaysMessage::Draw);
			}
		}
	}
}

impl OverlaysMessageHandler {
	pub fn player_positions(&self) -> &[PlayerPosition] {
		&self.player_positions
	}
}

#[cfg(test)]
mod test_overlays_message_handler {
	use crate::messages::overlays::utility_types::OverlayLayer;
	use crate::messages::prelude::*;
	use crate::test_utils::EditorTestUtils;

	use glam::DVec2;
	use pitch_geometry::{PlayerPosition, Team};

	#[test]
	fn player_feed_is_rendered() {
		let mut editor = EditorTestUtils::with_video(1000., 500.);
		let responses = editor.handle_message(OverlaysMessage::SetPlayerPositions {
			positions: vec![PlayerPosition::new("p1", DVec2::new(0.5, 0.5), Team::Home)],
		});

		let draw_list = responses.iter().rev().find_map(|response| match response {
			FrontendMessage::RenderOverlays { draw_list } => Some(draw_list),
			_ => None,
		});
		assert!(draw_list.is_some_and(|draw_list| draw_list.layer(OverlayLayer::Players).count() == 1));
	}

	#[test]
	fn nothing_is_drawn_before_metadata_loads() {
		let mut editor = EditorTestUtils::create();
		let responses = editor.handle_message(OverlaysMessage::SetPlayerPositions {
			positions: vec![PlayerPosition::new("p1", DVec2::new(0.5, 0.5), Team::Away)],
		});

		assert!(responses.contains(&FrontendMessage::RenderOverlays { draw_list: Default::default() }));
	}
}

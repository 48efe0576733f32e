use super::utility_types::VideoState;
use crate::messages::prelude::*;

use pitch_geometry::FrameSize;

#[derive(Debug, Default)]
pub struct VideoMessageHandler {
	state: VideoState,
}

impl MessageHandler<VideoMessage, ()> for VideoMessageHandler {
	fn process_message(&mut self, message: VideoMessage, responses: &mut VecDeque<Message>, _data: ()) {
		match message {
			VideoMessage::MetadataLoaded { width, height, duration } => {
				let frame_size = FrameSize::new(width, height);
				if frame_size.is_degenerate() {
					log::warn!("Video reported an unusable frame size of {width}x{height}, nothing will be drawn");
				}

				self.state = VideoState {
					current_time: 0.,
					duration: if duration.is_finite() { duration.max(0.) } else { 0. },
					frame_size,
				};
				responses.add(OverlaysMessage::Draw);
			}
			VideoMessage::TimeUpdate { current_time } => {
				if current_time.is_finite() {
					self.state.current_time = current_time.max(0.);
				}
			}
			VideoMessage::Unload => {
				self.state = VideoState::default();
				responses.add(OverlaysMessage::Draw);
			}
		}
	}
}

impl VideoMessageHandler {
	pub fn state(&self) -> &VideoState {
		&self.state
	}
}

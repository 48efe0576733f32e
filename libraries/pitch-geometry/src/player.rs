use crate::annotation::VideoPosition;
use crate::frame::FrameSize;

use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
	Home,
	Away,
}

/// Which convention a stream of player positions uses for its coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSpace {
	/// Fractions of the frame width and height in `[0, 1]`.
	#[default]
	Normalized,
	/// Absolute video pixels.
	Pixels,
}

/// A tracked player at one instant, supplied by the tracking feed. The overlay only reads these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPosition {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub team: Team,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub jersey_number: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_correct_position: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub heat_intensity: Option<f64>,
}

impl PlayerPosition {
	pub fn new(id: impl Into<String>, position: DVec2, team: Team) -> Self {
		Self {
			id: id.into(),
			x: position.x,
			y: position.y,
			team,
			jersey_number: None,
			is_correct_position: None,
			heat_intensity: None,
		}
	}

	/// The player's location in video pixels.
	pub fn video_position(&self, space: PositionSpace, frame: FrameSize) -> VideoPosition {
		let position = DVec2::new(self.x, self.y);
		match space {
			PositionSpace::Normalized => position * frame.as_dvec2(),
			PositionSpace::Pixels => position,
		}
	}
}

#[cfg(test)]
mod test_player {
	use super::*;

	#[test]
	fn normalized_positions_scale_with_the_frame() {
		let player = PlayerPosition::new("7", DVec2::new(0.25, 0.5), Team::Home);
		let frame = FrameSize::new(1000., 500.);
		assert_eq!(player.video_position(PositionSpace::Normalized, frame), DVec2::new(250., 250.));
		assert_eq!(player.video_position(PositionSpace::Pixels, frame), DVec2::new(0.25, 0.5));
	}

	#[test]
	fn camel_case_feed_records_parse() {
		let player: PlayerPosition = serde_json::from_str(r#"{"id":"p1","x":0.1,"y":0.2,"team":"away","jerseyNumber":9,"isCorrectPosition":false,"heatIntensity":0.8}"#).unwrap();
		assert_eq!(player.team, Team::Away);
		assert_eq!(player.jersey_number, Some(9));
		assert_eq!(player.is_correct_position, Some(false));
		assert_eq!(player.heat_intensity, Some(0.8));
	}
}
